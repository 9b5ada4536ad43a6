use glam::Vec2;
use ledge_engine::{
    keys, AnimationComponent, AnimationDef, Entity, EntityId, InputQueue, Kinematic, Rect,
    RenderBuffer, SpriteComponent, TextureId,
};
use crate::config::PlayerTuning;

/// Size of one cell in the player sheet.
const CELL: f32 = 128.0;

/// Sheet row per animation: idle on row 0, run on row 1, jump on row 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAnim {
    Idle,
    Running,
    Jumping,
}

/// The player-controlled actor.
pub struct PlatformPlayer {
    pub entity: Entity,
    pub velocity: Vec2,
    grounded: bool,
    anim: AnimationComponent<PlayerAnim>,
    tuning: PlayerTuning,
}

impl PlatformPlayer {
    pub fn new(id: EntityId, texture: TextureId, dst: Rect, tuning: PlayerTuning) -> Self {
        let anim = AnimationComponent::new(PlayerAnim::Idle, AnimationDef::still(0, 0), CELL, CELL)
            .with(PlayerAnim::Running, AnimationDef::horizontal_strip(1, 0, 4, tuning.frame_time))
            .with(PlayerAnim::Jumping, AnimationDef::horizontal_strip(2, 0, 2, tuning.frame_time).once());
        let entity = Entity::new(id)
            .with_tag("player")
            .with_src(Rect::new(0.0, 0.0, CELL, CELL))
            .with_dst(dst)
            .with_sprite(SpriteComponent::new(texture));

        Self {
            entity,
            velocity: Vec2::ZERO,
            grounded: false,
            anim,
            tuning,
        }
    }

    /// One step of movement. Collisions are resolved afterwards by the
    /// owning state, which is the only thing that sets `grounded` again.
    pub fn update(&mut self, input: &InputQueue, dt: f32) {
        let t = &self.tuning;
        let left = input.key_down(keys::LEFT) || input.key_down(keys::A);
        let right = input.key_down(keys::RIGHT) || input.key_down(keys::D);

        match (left, right) {
            (true, false) => self.velocity.x -= t.acceleration * dt,
            (false, true) => self.velocity.x += t.acceleration * dt,
            _ => {
                self.velocity.x *= t.drag;
                if self.velocity.x.abs() < t.stop_threshold {
                    self.velocity.x = 0.0;
                }
            }
        }
        self.velocity.x = self.velocity.x.clamp(-t.max_speed_x, t.max_speed_x);

        let jump = input.key_pressed(keys::SPACE)
            || input.key_pressed(keys::UP)
            || input.key_pressed(keys::W);
        let jumped = jump && self.grounded;
        if jumped {
            self.velocity.y = -t.jump_force;
        }
        self.velocity.y = (self.velocity.y + t.gravity * dt).min(t.max_fall_speed);

        self.entity.dst.translate(self.velocity * dt);

        let airborne = jumped || !self.grounded;
        self.animate(airborne, dt);
        self.grounded = false;
    }

    fn animate(&mut self, airborne: bool, dt: f32) {
        let next = if airborne {
            PlayerAnim::Jumping
        } else if self.velocity.x != 0.0 {
            PlayerAnim::Running
        } else {
            PlayerAnim::Idle
        };
        self.anim.play_if_different(next);
        self.anim.tick(dt);
        if let Some(src) = self.anim.source_rect() {
            self.entity.src = src;
        }
        if let Some(sprite) = self.entity.sprite.as_mut() {
            if self.velocity.x < 0.0 {
                sprite.flip_x = true;
            } else if self.velocity.x > 0.0 {
                sprite.flip_x = false;
            }
        }
    }

    #[cfg(test)]
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    #[cfg(test)]
    pub fn animation(&self) -> PlayerAnim {
        self.anim.current
    }

    pub fn render(&self, buffer: &mut RenderBuffer) {
        ledge_engine::draw_entities([&self.entity], buffer);
    }
}

impl Kinematic for PlatformPlayer {
    fn bounds(&self) -> Rect {
        self.entity.dst
    }

    fn stop_x(&mut self) {
        self.velocity.x = 0.0;
    }

    fn stop_y(&mut self) {
        self.velocity.y = 0.0;
    }

    fn set_x(&mut self, x: f32) {
        self.entity.dst.x = x;
    }

    fn set_y(&mut self, y: f32) {
        self.entity.dst.y = y;
    }

    fn set_grounded(&mut self, grounded: bool) {
        self.grounded = grounded;
    }
}

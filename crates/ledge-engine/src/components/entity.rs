use glam::Vec2;
use crate::api::types::EntityId;
use crate::components::sprite::SpriteComponent;
use crate::core::rect::Rect;

/// What role an entity plays in the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntityKind {
    /// Drawn only; takes no part in collision.
    #[default]
    Prop,
    /// Static solid geometry the player is pushed out of.
    Obstacle,
    /// Non-solid geometry that hurts on contact.
    Hazard,
}

/// Fat Entity: a single struct with optional components.
/// Static entities (obstacles, props, buttons) need nothing more; moving
/// actors wrap one and add their own velocity.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    pub kind: EntityKind,
    /// Whether this entity is active (inactive entities are skipped).
    pub active: bool,
    /// Sprite-sheet region sampled when drawing.
    pub src: Rect,
    /// World-space bounds, used for drawing and collision.
    pub dst: Rect,
    /// Sprite component (entities without one are invisible).
    pub sprite: Option<SpriteComponent>,
}

impl Entity {
    /// Create a new entity with the given ID, zero-sized at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            kind: EntityKind::Prop,
            active: true,
            src: Rect::default(),
            dst: Rect::default(),
            sprite: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_kind(mut self, kind: EntityKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_src(mut self, src: Rect) -> Self {
        self.src = src;
        self
    }

    pub fn with_dst(mut self, dst: Rect) -> Self {
        self.dst = dst;
        self
    }

    pub fn with_sprite(mut self, sprite: SpriteComponent) -> Self {
        self.sprite = Some(sprite);
        self
    }

    pub fn is_obstacle(&self) -> bool {
        self.active && self.kind == EntityKind::Obstacle
    }

    pub fn is_hazard(&self) -> bool {
        self.active && self.kind == EntityKind::Hazard
    }

    pub fn pos(&self) -> Vec2 {
        self.dst.pos()
    }

    pub fn set_pos(&mut self, pos: Vec2) {
        self.dst.x = pos.x;
        self.dst.y = pos.y;
    }
}

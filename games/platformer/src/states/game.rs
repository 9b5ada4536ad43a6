use glam::Vec2;
use ledge_engine::{
    keys, resolve_collisions, Color, EngineContext, InputQueue, Kinematic, Rect, RenderBuffer,
    State, TiledLevel,
};
use crate::config::{paths, PlayerTuning, LEVEL_1, LEVEL_COLS, LEVEL_ROWS, TILE_DATA, TILE_SIZE};
use crate::player::PlatformPlayer;
use super::{PauseState, TitleState};

const MUSIC: &str = "LevelMusic";
const TILES_TEXTURE: &str = "tiles";
const PLAYER_TEXTURE: &str = "player";
const PLAYER_START: Rect = Rect::new(50.0, 500.0, 64.0, 64.0);
const MARKER_SIZE: Vec2 = Vec2::new(60.0, 100.0);
const CLEAR: Color = Color::rgb(0, 0, 255);

/// Active gameplay: the level, the player and a marker rectangle.
pub struct GameState {
    tuning: PlayerTuning,
    level: TiledLevel,
    player: Option<PlatformPlayer>,
    marker: Rect,
}

impl GameState {
    pub fn new(tuning: PlayerTuning) -> Self {
        Self {
            tuning,
            level: TiledLevel::empty(LEVEL_ROWS, LEVEL_COLS, TILE_SIZE, TILE_SIZE),
            player: None,
            marker: Rect::default(),
        }
    }

    #[cfg(test)]
    pub fn player(&self) -> Option<&PlatformPlayer> {
        self.player.as_ref()
    }

    #[cfg(test)]
    pub fn level(&self) -> &TiledLevel {
        &self.level
    }

    fn restart(&self, ctx: &mut EngineContext) {
        ctx.change_state(Box::new(GameState::new(self.tuning.clone())));
    }
}

impl State for GameState {
    fn name(&self) -> &'static str {
        "Game"
    }

    fn enter(&mut self, ctx: &mut EngineContext) {
        let tiles = ctx.assets.load_texture(paths::TILES, TILES_TEXTURE);
        let player_texture = ctx.assets.load_texture(paths::PLAYER, PLAYER_TEXTURE);

        self.level = TiledLevel::parse(
            LEVEL_ROWS, LEVEL_COLS, TILE_SIZE, TILE_SIZE, TILE_DATA, LEVEL_1, tiles,
        )
        .unwrap_or_else(|e| {
            log::error!("level failed to load: {}", e);
            TiledLevel::empty(LEVEL_ROWS, LEVEL_COLS, TILE_SIZE, TILE_SIZE)
        });

        let id = ctx.next_id();
        self.player = Some(PlatformPlayer::new(id, player_texture, PLAYER_START, self.tuning.clone()));
        self.marker = Rect::centered(ctx.world_size() / 2.0, MARKER_SIZE);

        ctx.assets.load_music(paths::LEVEL_MUSIC, MUSIC);
        if let Err(e) = ctx.play_music(MUSIC) {
            log::warn!("{}", e);
        }
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt: f32) {
        if input.key_pressed(keys::X) {
            ctx.change_state(Box::new(TitleState::new(self.tuning.clone())));
            return;
        }
        if input.key_pressed(keys::P) {
            ctx.push_state(Box::new(PauseState::new()));
            return;
        }

        let Some(player) = self.player.as_mut() else {
            return;
        };
        player.update(input, dt);
        if ctx.state_changing() {
            return;
        }

        let contacts = resolve_collisions(player, self.level.obstacles());
        if contacts.landed() {
            log::trace!("player on ground at y={}", player.bounds().y);
        }

        let bounds = player.bounds();
        if self.level.hazards().any(|h| h.intersects(&bounds)) {
            log::info!("player hit a hazard; restarting");
            self.restart(ctx);
        } else if bounds.top() > ctx.world_size().y {
            log::info!("player fell out of the world; restarting");
            self.restart(ctx);
        }
    }

    fn render(&self, buffer: &mut RenderBuffer) {
        buffer.clear(CLEAR);
        self.level.render(buffer);
        if let Some(player) = &self.player {
            player.render(buffer);
        }
        buffer.fill_rect(self.marker, Color::BLACK);
    }

    fn exit(&mut self, ctx: &mut EngineContext) {
        self.level.clear();
        self.player = None;
        for key in [TILES_TEXTURE, PLAYER_TEXTURE] {
            if let Err(e) = ctx.assets.unload_texture(key) {
                log::warn!("{}", e);
            }
        }
        ctx.stop_music();
        if let Err(e) = ctx.unload_music(MUSIC) {
            log::warn!("{}", e);
        }
    }

    fn pause(&mut self, ctx: &mut EngineContext) {
        ctx.pause_music();
    }

    fn resume(&mut self, ctx: &mut EngineContext) {
        ctx.resume_music();
    }
}

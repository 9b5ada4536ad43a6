use ledge_engine::{EngineContext, Game, GameConfig, State};
use crate::config::{PlayerTuning, WORLD_H, WORLD_W};
use crate::states::TitleState;

/// Title screen, one level and a pause overlay.
pub struct Platformer {
    tuning: PlayerTuning,
}

impl Platformer {
    pub fn new() -> Self {
        Self {
            tuning: PlayerTuning::load(),
        }
    }
}

impl Default for Platformer {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for Platformer {
    fn config(&self) -> GameConfig {
        GameConfig {
            fixed_dt: 1.0 / 60.0,
            world_width: WORLD_W,
            world_height: WORLD_H,
            ..GameConfig::default()
        }
    }

    fn initial_state(&mut self, _ctx: &mut EngineContext) -> Box<dyn State> {
        Box::new(TitleState::new(self.tuning.clone()))
    }
}

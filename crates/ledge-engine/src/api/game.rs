use glam::Vec2;
use serde::Deserialize;
use crate::api::types::EntityId;
use crate::assets::audio::AudioQueue;
use crate::assets::registry::{AssetError, AssetRegistry};
use crate::core::time::DEFAULT_MAX_STEPS;
use crate::state::{State, Transition};

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Upper bound on fixed steps per host frame (default: 5).
    pub max_steps_per_frame: u32,
    /// World width in game units.
    pub world_width: f32,
    /// World height in game units.
    pub world_height: f32,
    /// Maximum number of render instances per frame (default: 1024).
    pub max_instances: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_steps_per_frame: DEFAULT_MAX_STEPS,
            world_width: 1024.0,
            world_height: 768.0,
            max_instances: 1024,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// The contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before the first state enters.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// The state the stack starts with.
    fn initial_state(&mut self, ctx: &mut EngineContext) -> Box<dyn State>;
}

/// Engine services handed to every state hook.
///
/// Holds the injected asset registry and audio queue, and collects the
/// transition a state asks for. At most one transition is pending at a time;
/// the state manager applies it between steps.
pub struct EngineContext {
    pub assets: AssetRegistry,
    pub audio: AudioQueue,
    world_size: Vec2,
    pending: Option<Transition>,
    next_id: u32,
}

impl EngineContext {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            assets: AssetRegistry::new(),
            audio: AudioQueue::new(),
            world_size: Vec2::new(config.world_width, config.world_height),
            pending: None,
            next_id: 1,
        }
    }

    pub fn world_size(&self) -> Vec2 {
        self.world_size
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    // -- Transitions --

    /// Replace the whole stack with `state` at the next frame boundary.
    pub fn change_state(&mut self, state: Box<dyn State>) {
        self.request(Transition::Change(state));
    }

    /// Pause the current state and run `state` above it at the next boundary.
    pub fn push_state(&mut self, state: Box<dyn State>) {
        self.request(Transition::Push(state));
    }

    /// Exit the current state and resume the one beneath at the next boundary.
    pub fn pop_state(&mut self) {
        self.request(Transition::Pop);
    }

    /// True once a transition has been requested this frame. Update loops
    /// check this to stop touching entities that are about to be released.
    pub fn state_changing(&self) -> bool {
        self.pending.is_some()
    }

    fn request(&mut self, transition: Transition) {
        if let Some(pending) = &self.pending {
            log::warn!("dropping {:?}: {:?} already pending", transition, pending);
            return;
        }
        log::debug!("transition requested: {:?}", transition);
        self.pending = Some(transition);
    }

    pub(crate) fn take_transition(&mut self) -> Option<Transition> {
        self.pending.take()
    }

    // -- Music --

    /// Play a loaded music track.
    pub fn play_music(&mut self, key: &str) -> Result<(), AssetError> {
        if !self.assets.has_music(key) {
            return Err(AssetError::MusicNotLoaded(key.to_string()));
        }
        self.audio.play(key);
        Ok(())
    }

    pub fn pause_music(&mut self) {
        self.audio.pause();
    }

    pub fn resume_music(&mut self) {
        self.audio.resume();
    }

    pub fn stop_music(&mut self) {
        self.audio.stop();
    }

    /// Drop one reference to a music track, stopping it if this released it
    /// while it was playing.
    pub fn unload_music(&mut self, key: &str) -> Result<(), AssetError> {
        self.assets.unload_music(key)?;
        if !self.assets.has_music(key) && self.audio.current() == Some(key) {
            self.audio.stop();
        }
        Ok(())
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

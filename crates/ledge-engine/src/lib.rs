pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;
pub mod state;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{Color, EntityId};
pub use components::animation::{AnimationComponent, AnimationDef};
pub use components::entity::{Entity, EntityKind};
pub use components::sprite::{SpriteComponent, TextureId};
pub use components::tilemap::{LevelError, TileDef, TiledLevel};
pub use core::rect::Rect;
pub use core::scene::Scene;
pub use core::time::FixedTimestep;
pub use renderer::instance::{RenderInstance, RenderBuffer};
pub use input::keys;
pub use input::queue::{InputEvent, InputQueue};
pub use assets::audio::{AudioCommand, AudioQueue};
pub use assets::registry::{AssetError, AssetEvent, AssetRegistry};
pub use bridge::protocol::ProtocolLayout;
pub use state::{State, StateManager, Transition};
pub use systems::collision::{resolve_collisions, Contacts, Kinematic, Penetration};
pub use systems::render::draw_entities;

//! The three screens: title, gameplay and the pause overlay.

pub mod game;
pub mod pause;
pub mod title;

pub use game::GameState;
pub use pause::PauseState;
pub use title::TitleState;

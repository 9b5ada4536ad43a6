use wasm_bindgen::prelude::*;

mod button;
mod config;
mod game;
mod player;
mod states;

pub use game::Platformer;

ledge_web::export_game!(Platformer, "platformer");

pub mod collision;
pub mod render;

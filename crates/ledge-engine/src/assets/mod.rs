pub mod audio;
pub mod registry;

//! DOM `keyCode` values forwarded by the host.

pub const ENTER: u32 = 13;
pub const ESCAPE: u32 = 27;
pub const SPACE: u32 = 32;
pub const LEFT: u32 = 37;
pub const UP: u32 = 38;
pub const RIGHT: u32 = 39;
pub const DOWN: u32 = 40;
pub const A: u32 = 65;
pub const D: u32 = 68;
pub const P: u32 = 80;
pub const R: u32 = 82;
pub const W: u32 = 87;
pub const X: u32 = 88;

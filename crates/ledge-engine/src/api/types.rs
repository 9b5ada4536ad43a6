use serde::{Deserialize, Serialize};

/// Unique identifier for an entity in a scene or level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

/// 8-bit RGBA color used for clears and filled rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels normalized to 0.0..=1.0 for the wire format.
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    /// Packed as 0xRRGGBBAA for scalar exports to the host.
    pub fn to_u32(self) -> u32 {
        (self.r as u32) << 24 | (self.g as u32) << 16 | (self.b as u32) << 8 | self.a as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_rgba() {
        assert_eq!(Color::rgba(0x12, 0x34, 0x56, 0x78).to_u32(), 0x1234_5678);
        assert_eq!(Color::rgb(255, 0, 255).to_u32(), 0xFF00_FFFF);
    }

    #[test]
    fn normalizes_channels() {
        let c = Color::rgba(255, 0, 0, 128).to_f32();
        assert_eq!(c[0], 1.0);
        assert_eq!(c[1], 0.0);
        assert!((c[3] - 128.0 / 255.0).abs() < 0.0001);
    }
}

/// Identifies a texture loaded through the asset registry.
/// The host maps it to a GPU texture when it sees the matching load event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureId(pub u32);

/// Sprite component: defines how an entity appears visually.
/// The sampled region is the entity's source rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteComponent {
    /// Texture the source rectangle samples from.
    pub texture: TextureId,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
    /// Mirror horizontally (used for facing direction).
    pub flip_x: bool,
}

impl SpriteComponent {
    pub fn new(texture: TextureId) -> Self {
        Self {
            texture,
            ..Default::default()
        }
    }
}

impl Default for SpriteComponent {
    fn default() -> Self {
        Self {
            texture: TextureId(0),
            alpha: 1.0,
            flip_x: false,
        }
    }
}

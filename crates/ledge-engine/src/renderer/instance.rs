use bytemuck::{Pod, Zeroable};
use crate::api::types::Color;
use crate::components::sprite::TextureId;
use crate::core::rect::Rect;

/// Instance kinds understood by the host renderer.
pub const KIND_SPRITE: f32 = 0.0;
pub const KIND_FILL: f32 = 1.0;

/// One draw call, in the layout the host reads out of wasm memory.
/// 16 floats = 64 bytes stride. Instances are drawn in buffer order.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// `KIND_SPRITE` or `KIND_FILL`.
    pub kind: f32,
    /// Texture id for sprites, 0 for fills.
    pub texture: f32,
    /// Destination rectangle in world space.
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Source rectangle in texture pixels (sprites only).
    pub src_x: f32,
    pub src_y: f32,
    pub src_w: f32,
    pub src_h: f32,
    /// Fill color, or tint for sprites (alpha = sprite opacity).
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
    /// 1.0 to mirror the sprite horizontally.
    pub flip: f32,
    pub _pad: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 16;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn sprite(texture: TextureId, src: Rect, dst: Rect, alpha: f32, flip_x: bool) -> Self {
        Self {
            kind: KIND_SPRITE,
            texture: texture.0 as f32,
            x: dst.x,
            y: dst.y,
            w: dst.w,
            h: dst.h,
            src_x: src.x,
            src_y: src.y,
            src_w: src.w,
            src_h: src.h,
            r: 1.0,
            g: 1.0,
            b: 1.0,
            a: alpha,
            flip: if flip_x { 1.0 } else { 0.0 },
            _pad: 0.0,
        }
    }

    pub fn fill(rect: Rect, color: Color) -> Self {
        let [r, g, b, a] = color.to_f32();
        Self {
            kind: KIND_FILL,
            x: rect.x,
            y: rect.y,
            w: rect.w,
            h: rect.h,
            r,
            g,
            b,
            a,
            ..Default::default()
        }
    }
}

/// One frame's render output: a clear color followed by ordered instances.
///
/// `clear` starts a fresh frame, so an overlay state that first renders the
/// state beneath it gets that state's clear and draws, then adds its own.
pub struct RenderBuffer {
    pub clear_color: Color,
    pub instances: Vec<RenderInstance>,
    capacity: usize,
    dropped: usize,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// A buffer that holds at most `capacity` instances per frame.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            clear_color: Color::BLACK,
            instances: Vec::with_capacity(capacity),
            capacity,
            dropped: 0,
        }
    }

    /// Start a new frame cleared to `color`.
    pub fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.instances.clear();
        self.dropped = 0;
    }

    /// Append an instance; instances past capacity are counted and dropped.
    pub fn push(&mut self, instance: RenderInstance) {
        if self.instances.len() >= self.capacity {
            if self.dropped == 0 {
                log::warn!("render buffer full ({} instances); dropping draws", self.capacity);
            }
            self.dropped += 1;
            return;
        }
        self.instances.push(instance);
    }

    pub fn push_sprite(&mut self, texture: TextureId, src: Rect, dst: Rect, alpha: f32, flip_x: bool) {
        self.push(RenderInstance::sprite(texture, src, dst, alpha, flip_x));
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.push(RenderInstance::fill(rect, color));
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Draws dropped this frame because the buffer was full.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Raw pointer to instance data for reads from the host.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    /// Instance data as a flat float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_instance_is_16_floats() {
        assert_eq!(std::mem::size_of::<RenderInstance>(), RenderInstance::STRIDE_BYTES);
        assert_eq!(RenderInstance::FLOATS, 16);
    }

    #[test]
    fn sprite_instance_layout() {
        let inst = RenderInstance::sprite(
            TextureId(2),
            Rect::new(0.0, 0.0, 128.0, 128.0),
            Rect::new(50.0, 500.0, 64.0, 64.0),
            1.0,
            true,
        );
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&inst));
        assert_eq!(&floats[..10], &[0.0, 2.0, 50.0, 500.0, 64.0, 64.0, 0.0, 0.0, 128.0, 128.0]);
        assert_eq!(floats[13], 1.0);
        assert_eq!(floats[14], 1.0);
    }

    #[test]
    fn clear_resets_frame() {
        let mut buf = RenderBuffer::new();
        buf.clear(Color::rgb(0, 0, 255));
        buf.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        assert_eq!(buf.instance_count(), 1);
        buf.clear(Color::rgb(255, 0, 255));
        assert_eq!(buf.instance_count(), 0);
        assert_eq!(buf.clear_color, Color::rgb(255, 0, 255));
    }

    #[test]
    fn pushes_past_capacity_are_dropped() {
        let mut buf = RenderBuffer::with_capacity(2);
        for _ in 0..5 {
            buf.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
        }
        assert_eq!(buf.instance_count(), 2);
        assert_eq!(buf.dropped(), 3);
        assert_eq!(buf.as_floats().len(), 2 * RenderInstance::FLOATS);
    }
}

/// Frame buffer layout shared with the host.
/// Must stay in sync with the host's `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Instances: max_instances × 16 floats]
/// ```
///
/// Capacities are written into the header every frame so the host can
/// compute offsets without a separate query.

use glam::Vec2;
use crate::api::game::GameConfig;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_MAX_INSTANCES: usize = 1;
pub const HEADER_INSTANCE_COUNT: usize = 2;
pub const HEADER_CLEAR_R: usize = 3;
pub const HEADER_CLEAR_G: usize = 4;
pub const HEADER_CLEAR_B: usize = 5;
pub const HEADER_CLEAR_A: usize = 6;
pub const HEADER_WORLD_WIDTH: usize = 7;
pub const HEADER_WORLD_HEIGHT: usize = 8;
pub const HEADER_PROTOCOL_VERSION: usize = 9;
// 10..16 reserved

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 2.0;

/// Floats per render instance (wire format).
pub const INSTANCE_FLOATS: usize = RenderInstance::FLOATS;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_instances: usize,
    /// Size of instance data section in floats.
    pub instance_data_floats: usize,
    /// Offset (in floats) where instance data begins.
    pub instance_data_offset: usize,
    pub buffer_total_floats: usize,
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    pub fn new(max_instances: usize) -> Self {
        let instance_data_floats = max_instances * INSTANCE_FLOATS;
        let instance_data_offset = HEADER_FLOATS;
        let buffer_total_floats = instance_data_offset + instance_data_floats;

        Self {
            max_instances,
            instance_data_floats,
            instance_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_instances)
    }

    /// Pack one frame (header then instances) into `out`, resizing it to the
    /// full layout. Instance slots past the frame's count are zeroed.
    pub fn write_frame(&self, frame: u32, world: Vec2, buffer: &RenderBuffer, out: &mut Vec<f32>) {
        out.clear();
        out.resize(self.buffer_total_floats, 0.0);

        let floats = buffer.as_floats();
        let count = floats.len().min(self.instance_data_floats);
        let [r, g, b, a] = buffer.clear_color.to_f32();

        let header = &mut out[..HEADER_FLOATS];
        header[HEADER_FRAME_COUNTER] = frame as f32;
        header[HEADER_MAX_INSTANCES] = self.max_instances as f32;
        header[HEADER_INSTANCE_COUNT] = (count / INSTANCE_FLOATS) as f32;
        header[HEADER_CLEAR_R] = r;
        header[HEADER_CLEAR_G] = g;
        header[HEADER_CLEAR_B] = b;
        header[HEADER_CLEAR_A] = a;
        header[HEADER_WORLD_WIDTH] = world.x;
        header[HEADER_WORLD_HEIGHT] = world.y;
        header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;

        let start = self.instance_data_offset;
        out[start..start + count].copy_from_slice(&floats[..count]);
    }
}

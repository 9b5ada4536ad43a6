use crate::components::entity::Entity;
use crate::renderer::instance::RenderBuffer;

/// Append a sprite instance for every active, visible entity, in iteration order.
pub fn draw_entities<'a>(entities: impl IntoIterator<Item = &'a Entity>, buffer: &mut RenderBuffer) {
    for entity in entities {
        if !entity.active {
            continue;
        }
        let Some(sprite) = &entity.sprite else {
            continue;
        };
        buffer.push_sprite(sprite.texture, entity.src, entity.dst, sprite.alpha, sprite.flip_x);
    }
}

use ledge_engine::{draw_entities, Entity, EntityId, InputQueue, Rect, RenderBuffer, SpriteComponent, TextureId};

/// Sheet column for each button look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonFrame {
    Up = 0,
    Over = 1,
    Down = 2,
}

/// A clickable sprite. Clicking means releasing the pointer inside the
/// button after pressing it inside.
pub struct PlayButton {
    pub entity: Entity,
    frame: ButtonFrame,
    armed: bool,
}

impl PlayButton {
    /// `dst` is the on-screen rectangle; the sheet holds three frames of the
    /// same size side by side.
    pub fn new(id: EntityId, texture: TextureId, dst: Rect) -> Self {
        let entity = Entity::new(id)
            .with_tag("play")
            .with_src(Rect::new(0.0, 0.0, dst.w, dst.h))
            .with_dst(dst)
            .with_sprite(SpriteComponent::new(texture));
        Self { entity, frame: ButtonFrame::Up, armed: false }
    }

    /// Returns true on the step the button is clicked.
    pub fn update(&mut self, input: &InputQueue) -> bool {
        let inside = self.entity.dst.contains_point(input.pointer());
        if input.pointer_pressed() {
            self.armed = inside;
        }

        let mut clicked = false;
        if input.pointer_released() {
            clicked = self.armed && inside;
            self.armed = false;
        }

        self.set_frame(match (inside, self.armed) {
            (true, true) => ButtonFrame::Down,
            (true, false) => ButtonFrame::Over,
            _ => ButtonFrame::Up,
        });
        clicked
    }

    fn set_frame(&mut self, frame: ButtonFrame) {
        if self.frame == frame {
            return;
        }
        self.frame = frame;
        self.entity.src.x = frame as u8 as f32 * self.entity.src.w;
    }

    #[cfg(test)]
    pub fn frame(&self) -> ButtonFrame {
        self.frame
    }

    pub fn render(&self, buffer: &mut RenderBuffer) {
        draw_entities([&self.entity], buffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledge_engine::InputEvent;

    fn button() -> PlayButton {
        PlayButton::new(EntityId(1), TextureId(1), Rect::new(312.0, 334.0, 400.0, 100.0))
    }

    fn step(button: &mut PlayButton, input: &mut InputQueue, event: InputEvent) -> bool {
        input.push(event);
        let clicked = button.update(input);
        input.end_step();
        clicked
    }

    #[test]
    fn press_and_release_inside_clicks() {
        let mut b = button();
        let mut input = InputQueue::new();
        assert!(!step(&mut b, &mut input, InputEvent::PointerMove { x: 500.0, y: 380.0 }));
        assert_eq!(b.frame(), ButtonFrame::Over);
        assert_eq!(b.entity.src.x, 400.0);

        assert!(!step(&mut b, &mut input, InputEvent::PointerDown { x: 500.0, y: 380.0 }));
        assert_eq!(b.frame(), ButtonFrame::Down);
        assert_eq!(b.entity.src.x, 800.0);

        assert!(step(&mut b, &mut input, InputEvent::PointerUp { x: 500.0, y: 380.0 }));
        assert_eq!(b.frame(), ButtonFrame::Over);
    }

    #[test]
    fn release_outside_does_not_click() {
        let mut b = button();
        let mut input = InputQueue::new();
        step(&mut b, &mut input, InputEvent::PointerDown { x: 500.0, y: 380.0 });
        assert!(!step(&mut b, &mut input, InputEvent::PointerUp { x: 10.0, y: 10.0 }));
        assert_eq!(b.frame(), ButtonFrame::Up);
    }

    #[test]
    fn press_outside_then_release_inside_does_not_click() {
        let mut b = button();
        let mut input = InputQueue::new();
        step(&mut b, &mut input, InputEvent::PointerDown { x: 10.0, y: 10.0 });
        assert!(!step(&mut b, &mut input, InputEvent::PointerUp { x: 500.0, y: 380.0 }));
    }

    #[test]
    fn click_within_one_step() {
        let mut b = button();
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown { x: 500.0, y: 380.0 });
        input.push(InputEvent::PointerUp { x: 500.0, y: 380.0 });
        assert!(b.update(&input));
    }
}

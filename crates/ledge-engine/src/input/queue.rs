use std::collections::HashSet;
use glam::Vec2;

/// Input event types the engine understands.
/// No game-specific semantics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A touch/click began at world coordinates (x, y).
    PointerDown { x: f32, y: f32 },
    /// A touch/click ended at world coordinates (x, y).
    PointerUp { x: f32, y: f32 },
    /// A touch/cursor moved to world coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// A key was pressed (DOM keyCode; see [`keys`](super::keys)).
    KeyDown { key_code: u32 },
    /// A key was released.
    KeyUp { key_code: u32 },
}

/// Host-fed input for one update step.
///
/// The host pushes events as they arrive; states query it during `update`.
/// `key_pressed` is true only in the step in which the key went down, so a
/// held key (or OS key-repeat) triggers a single press. Call
/// [`end_step`](Self::end_step) after each update step.
pub struct InputQueue {
    events: Vec<InputEvent>,
    held: HashSet<u32>,
    pressed: HashSet<u32>,
    released: HashSet<u32>,
    pointer: Vec2,
    pointer_held: bool,
    pointer_pressed: bool,
    pointer_released: bool,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
            held: HashSet::new(),
            pressed: HashSet::new(),
            released: HashSet::new(),
            pointer: Vec2::ZERO,
            pointer_held: false,
            pointer_pressed: false,
            pointer_released: false,
        }
    }

    /// Record a new input event (called by the host bridge).
    pub fn push(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown { key_code } => {
                if self.held.insert(key_code) {
                    self.pressed.insert(key_code);
                }
            }
            InputEvent::KeyUp { key_code } => {
                if self.held.remove(&key_code) {
                    self.released.insert(key_code);
                }
            }
            InputEvent::PointerDown { x, y } => {
                self.pointer = Vec2::new(x, y);
                if !self.pointer_held {
                    self.pointer_pressed = true;
                }
                self.pointer_held = true;
            }
            InputEvent::PointerUp { x, y } => {
                self.pointer = Vec2::new(x, y);
                if self.pointer_held {
                    self.pointer_released = true;
                }
                self.pointer_held = false;
            }
            InputEvent::PointerMove { x, y } => {
                self.pointer = Vec2::new(x, y);
            }
        }
        self.events.push(event);
    }

    /// True in the step in which `key_code` transitioned to pressed.
    pub fn key_pressed(&self, key_code: u32) -> bool {
        self.pressed.contains(&key_code)
    }

    /// True while `key_code` is held down.
    pub fn key_down(&self, key_code: u32) -> bool {
        self.held.contains(&key_code)
    }

    /// True in the step in which `key_code` was let go.
    pub fn key_released(&self, key_code: u32) -> bool {
        self.released.contains(&key_code)
    }

    /// Last known pointer position in world coordinates.
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn pointer_down(&self) -> bool {
        self.pointer_held
    }

    pub fn pointer_pressed(&self) -> bool {
        self.pointer_pressed
    }

    pub fn pointer_released(&self) -> bool {
        self.pointer_released
    }

    /// Iterate over this step's raw events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Clear the per-step edges and raw events. Held state carries over.
    pub fn end_step(&mut self) {
        self.events.clear();
        self.pressed.clear();
        self.released.clear();
        self.pointer_pressed = false;
        self.pointer_released = false;
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

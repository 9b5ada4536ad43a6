//! Frame-strip animation over a sprite sheet.
//!
//! Each animation is a sequence of sheet cells. The component is keyed by a
//! game-defined type (usually a small enum of character states) and yields
//! the source rectangle for the current frame.

use std::collections::HashMap;
use std::hash::Hash;
use crate::core::rect::Rect;

/// Definition of a single animation sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDef {
    /// Frames as (col, row) cells in the sheet.
    pub frames: Vec<(u32, u32)>,
    /// Seconds per frame.
    pub frame_duration: f32,
    /// Whether to loop when reaching the end.
    pub looping: bool,
}

impl AnimationDef {
    /// Consecutive columns on one sheet row.
    pub fn horizontal_strip(row: u32, start_col: u32, frame_count: u32, frame_duration: f32) -> Self {
        Self {
            frames: (0..frame_count).map(|i| (start_col + i, row)).collect(),
            frame_duration,
            looping: true,
        }
    }

    /// A single still frame.
    pub fn still(col: u32, row: u32) -> Self {
        Self {
            frames: vec![(col, row)],
            frame_duration: f32::INFINITY,
            looping: false,
        }
    }

    pub fn once(mut self) -> Self {
        self.looping = false;
        self
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// Animation state for one sprite.
#[derive(Debug, Clone)]
pub struct AnimationComponent<K> {
    animations: HashMap<K, AnimationDef>,
    /// Currently playing animation.
    pub current: K,
    /// Current frame index.
    pub frame_index: usize,
    /// Time accumulated in current frame.
    pub frame_timer: f32,
    /// Size of one sheet cell in texture pixels.
    pub cell: (f32, f32),
}

impl<K: Copy + Eq + Hash> AnimationComponent<K> {
    /// Start with a single animation playing.
    pub fn new(key: K, def: AnimationDef, cell_w: f32, cell_h: f32) -> Self {
        let mut animations = HashMap::new();
        animations.insert(key, def);
        Self {
            animations,
            current: key,
            frame_index: 0,
            frame_timer: 0.0,
            cell: (cell_w, cell_h),
        }
    }

    pub fn with(mut self, key: K, def: AnimationDef) -> Self {
        self.animations.insert(key, def);
        self
    }

    /// Play an animation from the beginning. Unknown keys are ignored.
    pub fn play(&mut self, key: K) {
        if self.animations.contains_key(&key) {
            self.current = key;
            self.frame_index = 0;
            self.frame_timer = 0.0;
        }
    }

    /// Play only if it is not already the current animation.
    pub fn play_if_different(&mut self, key: K) {
        if self.current != key {
            self.play(key);
        }
    }

    pub fn current_def(&self) -> Option<&AnimationDef> {
        self.animations.get(&self.current)
    }

    /// Current (col, row) cell.
    pub fn current_frame(&self) -> Option<(u32, u32)> {
        self.current_def()
            .and_then(|def| def.frames.get(self.frame_index).copied())
    }

    /// Source rectangle of the current frame in the sheet.
    pub fn source_rect(&self) -> Option<Rect> {
        let (col, row) = self.current_frame()?;
        let (w, h) = self.cell;
        Some(Rect::new(col as f32 * w, row as f32 * h, w, h))
    }

    /// Only meaningful for non-looping animations.
    pub fn is_finished(&self) -> bool {
        match self.current_def() {
            Some(def) => !def.looping && self.frame_index + 1 >= def.frames.len(),
            None => true,
        }
    }

    /// Advance by dt seconds. Returns true if the frame changed.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(def) = self.animations.get(&self.current) else {
            return false;
        };
        if def.frames.is_empty() || !(def.frame_duration > 0.0) {
            return false;
        }

        self.frame_timer += dt;
        let mut changed = false;
        while self.frame_timer >= def.frame_duration {
            if self.frame_index + 1 >= def.frames.len() {
                if !def.looping {
                    self.frame_timer = 0.0;
                    break;
                }
                self.frame_index = 0;
            } else {
                self.frame_index += 1;
            }
            self.frame_timer -= def.frame_duration;
            changed = true;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Anim {
        Idle,
        Run,
        Jump,
    }

    fn runner() -> AnimationComponent<Anim> {
        AnimationComponent::new(Anim::Idle, AnimationDef::still(0, 0), 128.0, 128.0)
            .with(Anim::Run, AnimationDef::horizontal_strip(1, 0, 4, 0.25))
            .with(Anim::Jump, AnimationDef::horizontal_strip(2, 0, 2, 0.25).once())
    }

    #[test]
    fn horizontal_strip_frames() {
        let def = AnimationDef::horizontal_strip(1, 2, 3, 0.1);
        assert_eq!(def.frames, vec![(2, 1), (3, 1), (4, 1)]);
        assert_eq!(def.frame_count(), 3);
    }

    #[test]
    fn still_frame_never_advances() {
        let mut anim = runner();
        assert!(!anim.tick(100.0));
        assert_eq!(anim.source_rect(), Some(Rect::new(0.0, 0.0, 128.0, 128.0)));
    }

    #[test]
    fn looping_strip_wraps() {
        let mut anim = runner();
        anim.play(Anim::Run);
        assert!(anim.tick(0.5));
        assert_eq!(anim.current_frame(), Some((2, 1)));
        anim.tick(0.5);
        assert_eq!(anim.current_frame(), Some((0, 1)));
        assert_eq!(anim.source_rect(), Some(Rect::new(0.0, 128.0, 128.0, 128.0)));
    }

    #[test]
    fn one_shot_holds_last_frame() {
        let mut anim = runner();
        anim.play(Anim::Jump);
        anim.tick(2.0);
        assert_eq!(anim.current_frame(), Some((1, 2)));
        assert!(anim.is_finished());
    }

    #[test]
    fn play_if_different_keeps_progress() {
        let mut anim = runner();
        anim.play(Anim::Run);
        anim.tick(0.25);
        anim.play_if_different(Anim::Run);
        assert_eq!(anim.frame_index, 1);

        anim.play_if_different(Anim::Jump);
        assert_eq!(anim.current, Anim::Jump);
        assert_eq!(anim.frame_index, 0);
    }
}

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in world units. `(x, y)` is the top-left corner,
/// y grows downward.
///
/// Used both for sprite-sheet source bounds and world-space destination bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of the given size centered on `center`.
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self::new(center.x - size.x / 2.0, center.y - size.y / 2.0, size.x, size.y)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Move the rectangle by `delta`, keeping its size.
    pub fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// True when the rectangle has no area (zero/negative extent or NaN).
    pub fn is_degenerate(&self) -> bool {
        !(self.w > 0.0 && self.h > 0.0)
    }

    /// Strict horizontal overlap: `self.left < other.right && self.right > other.left`.
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.left() < other.right() && self.right() > other.left()
    }

    /// Strict vertical overlap: `self.top < other.bottom && self.bottom > other.top`.
    pub fn overlaps_y(&self, other: &Rect) -> bool {
        self.top() < other.bottom() && self.bottom() > other.top()
    }

    /// Both axes overlap and neither rectangle is degenerate.
    /// Edge-adjacent rectangles do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return false;
        }
        self.overlaps_x(other) && self.overlaps_y(other)
    }

    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn centered_on_point() {
        let r = Rect::centered(Vec2::new(512.0, 384.0), Vec2::new(400.0, 100.0));
        assert_eq!(r, Rect::new(312.0, 334.0, 400.0, 100.0));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        let c = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&c));
    }

    #[test]
    fn overlapping_rects_intersect() {
        let a = Rect::new(50.0, 500.0, 64.0, 64.0);
        let b = Rect::new(0.0, 550.0, 200.0, 50.0);
        assert!(a.overlaps_x(&b));
        assert!(a.overlaps_y(&b));
        assert!(a.intersects(&b));
    }

    #[test]
    fn zero_area_never_intersects() {
        let player = Rect::new(0.0, 0.0, 64.0, 64.0);
        // A zero-width sliver inside the player's span still satisfies the raw
        // edge comparisons, so the degenerate check has to catch it.
        let sliver = Rect::new(32.0, 0.0, 0.0, 64.0);
        assert!(player.overlaps_x(&sliver));
        assert!(!player.intersects(&sliver));
        assert!(!sliver.intersects(&player));
        assert!(Rect::new(0.0, 0.0, 10.0, f32::NAN).is_degenerate());
    }

    #[test]
    fn contains_point_is_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains_point(Vec2::new(0.0, 0.0)));
        assert!(r.contains_point(Vec2::new(9.9, 9.9)));
        assert!(!r.contains_point(Vec2::new(10.0, 5.0)));
    }
}

//! Axis-separated AABB resolution of one moving actor against static obstacles.
//!
//! Each obstacle is handled on its own, in the order given: find the four
//! penetration depths, pick every direction whose depth is a strict minimum,
//! and snap the actor flush against that edge. There is no contact state
//! carried between frames and no manifold solving. The four direction tests
//! are independent of each other, and a later obstacle may overwrite an
//! earlier obstacle's snap.

use crate::core::rect::Rect;

/// A moving actor the resolver can push around.
pub trait Kinematic {
    /// Current world-space bounds.
    fn bounds(&self) -> Rect;
    /// Zero horizontal velocity.
    fn stop_x(&mut self);
    /// Zero vertical velocity.
    fn stop_y(&mut self);
    /// Move the left edge to `x`.
    fn set_x(&mut self, x: f32);
    /// Move the top edge to `y`.
    fn set_y(&mut self, y: f32);
    fn set_grounded(&mut self, grounded: bool);
}

/// Overlap depths between an actor and one obstacle, named by the obstacle
/// face the actor is pushed back through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    /// Actor bottom below obstacle top (landing on it).
    pub top: f32,
    /// Obstacle bottom below actor top (hitting it from underneath).
    pub bottom: f32,
    /// Actor right past obstacle left (running into its left side).
    pub left: f32,
    /// Obstacle right past actor left (running into its right side).
    pub right: f32,
}

impl Penetration {
    /// Depths for an overlapping pair, or `None` when the rectangles do not
    /// overlap on both axes or either one has no area.
    pub fn between(actor: &Rect, obstacle: &Rect) -> Option<Self> {
        if !actor.intersects(obstacle) {
            return None;
        }
        Some(Self {
            top: actor.bottom() - obstacle.top(),
            bottom: obstacle.bottom() - actor.top(),
            left: actor.right() - obstacle.left(),
            right: obstacle.right() - actor.left(),
        })
    }

    pub fn top_wins(&self) -> bool {
        self.top < self.bottom && self.top < self.left && self.top < self.right
    }

    pub fn bottom_wins(&self) -> bool {
        self.bottom < self.top && self.bottom < self.left && self.bottom < self.right
    }

    pub fn left_wins(&self) -> bool {
        self.left < self.right && self.left < self.top && self.left < self.bottom
    }

    pub fn right_wins(&self) -> bool {
        self.right < self.left && self.right < self.top && self.right < self.bottom
    }
}

/// How many corrections of each kind one resolution pass applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Contacts {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl Contacts {
    pub fn total(&self) -> u32 {
        self.top + self.bottom + self.left + self.right
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Landed on at least one obstacle this pass.
    pub fn landed(&self) -> bool {
        self.top > 0
    }
}

/// Push `actor` out of every obstacle it overlaps, in iteration order.
///
/// The actor's bounds are re-read before each obstacle. The grounded flag is
/// only ever set here, never cleared.
pub fn resolve_collisions<'a, K, I>(actor: &mut K, obstacles: I) -> Contacts
where
    K: Kinematic + ?Sized,
    I: IntoIterator<Item = &'a Rect>,
{
    let mut contacts = Contacts::default();

    for obstacle in obstacles {
        let bounds = actor.bounds();
        let Some(depth) = Penetration::between(&bounds, obstacle) else {
            continue;
        };

        if depth.top_wins() {
            actor.stop_y();
            actor.set_y(obstacle.top() - bounds.h);
            actor.set_grounded(true);
            contacts.top += 1;
        }
        if depth.bottom_wins() {
            actor.stop_y();
            actor.set_y(obstacle.bottom());
            contacts.bottom += 1;
        }
        if depth.left_wins() {
            actor.stop_x();
            actor.set_x(obstacle.left() - bounds.w);
            contacts.left += 1;
        }
        if depth.right_wins() {
            actor.stop_x();
            actor.set_x(obstacle.right());
            contacts.right += 1;
        }
    }

    if !contacts.is_empty() {
        log::trace!("collision pass: {:?}", contacts);
    }
    contacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    /// Minimal actor for exercising the resolver.
    struct Body {
        rect: Rect,
        vel: Vec2,
        grounded: bool,
    }

    impl Body {
        fn at(x: f32, y: f32, w: f32, h: f32) -> Self {
            Self {
                rect: Rect::new(x, y, w, h),
                vel: Vec2::new(120.0, 300.0),
                grounded: false,
            }
        }
    }

    impl Kinematic for Body {
        fn bounds(&self) -> Rect {
            self.rect
        }
        fn stop_x(&mut self) {
            self.vel.x = 0.0;
        }
        fn stop_y(&mut self) {
            self.vel.y = 0.0;
        }
        fn set_x(&mut self, x: f32) {
            self.rect.x = x;
        }
        fn set_y(&mut self, y: f32) {
            self.rect.y = y;
        }
        fn set_grounded(&mut self, grounded: bool) {
            self.grounded = grounded;
        }
    }

    #[test]
    fn landing_on_ground_snaps_to_top() {
        let mut body = Body::at(50.0, 500.0, 64.0, 64.0);
        let ground = Rect::new(0.0, 550.0, 200.0, 50.0);

        let depth = Penetration::between(&body.rect, &ground).unwrap();
        assert_eq!(depth, Penetration { top: 14.0, bottom: 100.0, left: 114.0, right: 150.0 });

        let contacts = resolve_collisions(&mut body, [&ground]);
        assert_eq!(contacts, Contacts { top: 1, ..Default::default() });
        assert_eq!(body.rect.y, 486.0);
        assert_eq!(body.rect.bottom(), ground.top());
        assert_eq!(body.rect.x, 50.0);
        assert_eq!(body.vel, Vec2::new(120.0, 0.0));
        assert!(body.grounded);
    }

    #[test]
    fn separated_pairs_are_untouched() {
        let obstacle = Rect::new(100.0, 100.0, 32.0, 32.0);
        let cases = [
            Rect::new(0.0, 0.0, 32.0, 32.0),     // apart on both axes
            Rect::new(0.0, 100.0, 32.0, 32.0),   // same row, no x overlap
            Rect::new(100.0, 0.0, 32.0, 32.0),   // same column, no y overlap
            Rect::new(68.0, 100.0, 32.0, 32.0),  // touching left face
            Rect::new(100.0, 132.0, 32.0, 32.0), // touching bottom face
        ];
        for rect in cases {
            let mut body = Body { rect, vel: Vec2::new(5.0, 5.0), grounded: false };
            let contacts = resolve_collisions(&mut body, [&obstacle]);
            assert!(contacts.is_empty(), "{rect:?}");
            assert_eq!(body.rect, rect);
            assert_eq!(body.vel, Vec2::new(5.0, 5.0));
            assert!(!body.grounded);
        }
    }

    #[test]
    fn head_bump_snaps_below_obstacle() {
        // Actor top 10 units into the underside of a ceiling block.
        let mut body = Body::at(40.0, 90.0, 32.0, 64.0);
        let ceiling = Rect::new(0.0, 0.0, 128.0, 100.0);

        let contacts = resolve_collisions(&mut body, [&ceiling]);
        assert_eq!(contacts, Contacts { bottom: 1, ..Default::default() });
        assert_eq!(body.rect.top(), ceiling.bottom());
        assert_eq!(body.vel.y, 0.0);
        assert_eq!(body.vel.x, 120.0);
        assert!(!body.grounded);
    }

    #[test]
    fn running_into_left_face_snaps_flush() {
        let mut body = Body::at(70.0, 100.0, 32.0, 64.0);
        let wall = Rect::new(96.0, 0.0, 32.0, 320.0);

        let contacts = resolve_collisions(&mut body, [&wall]);
        assert_eq!(contacts, Contacts { left: 1, ..Default::default() });
        assert_eq!(body.rect.right(), wall.left());
        assert_eq!(body.vel.x, 0.0);
        assert_eq!(body.vel.y, 300.0);
    }

    #[test]
    fn running_into_right_face_snaps_flush() {
        let mut body = Body::at(120.0, 100.0, 32.0, 64.0);
        let wall = Rect::new(96.0, 0.0, 32.0, 320.0);

        let contacts = resolve_collisions(&mut body, [&wall]);
        assert_eq!(contacts, Contacts { right: 1, ..Default::default() });
        assert_eq!(body.rect.left(), wall.right());
        assert_eq!(body.vel.x, 0.0);
    }

    #[test]
    fn tied_minimum_depths_apply_nothing() {
        // Corner overlap of 8 on both axes: top == left == 8.
        let mut body = Body::at(0.0, 0.0, 32.0, 32.0);
        let block = Rect::new(24.0, 24.0, 64.0, 64.0);
        let depth = Penetration::between(&body.rect, &block).unwrap();
        assert_eq!(depth.top, depth.left);
        assert!(!depth.top_wins() && !depth.left_wins());

        let contacts = resolve_collisions(&mut body, [&block]);
        assert!(contacts.is_empty());
        assert_eq!(body.rect, Rect::new(0.0, 0.0, 32.0, 32.0));
        assert_eq!(body.vel, Vec2::new(120.0, 300.0));
        assert!(!body.grounded);
    }

    #[test]
    fn side_hits_leave_grounded_false() {
        let mut body = Body::at(70.0, 100.0, 32.0, 64.0);
        let walls = [Rect::new(96.0, 0.0, 32.0, 320.0), Rect::new(-26.0, 0.0, 32.0, 320.0)];
        let contacts = resolve_collisions(&mut body, walls.iter());
        assert_eq!(contacts.top, 0);
        assert!(contacts.left + contacts.right > 0);
        assert!(!body.grounded);
    }

    #[test]
    fn grounded_is_never_cleared_by_the_pass() {
        let mut body = Body::at(0.0, 0.0, 32.0, 32.0);
        body.grounded = true;
        resolve_collisions(&mut body, std::iter::empty());
        assert!(body.grounded);
    }

    #[test]
    fn degenerate_obstacles_are_ignored() {
        let mut body = Body::at(0.0, 0.0, 64.0, 64.0);
        let sliver = Rect::new(32.0, 0.0, 0.0, 64.0);
        let flat = Rect::new(0.0, 32.0, 64.0, 0.0);
        let contacts = resolve_collisions(&mut body, [&sliver, &flat]);
        assert!(contacts.is_empty());
        assert_eq!(body.rect, Rect::new(0.0, 0.0, 64.0, 64.0));
    }

    #[test]
    fn degenerate_actor_collides_with_nothing() {
        let mut body = Body::at(10.0, 10.0, 0.0, 0.0);
        let block = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(resolve_collisions(&mut body, [&block]).is_empty());
    }

    #[test]
    fn at_most_one_direction_wins_per_obstacle() {
        let block = Rect::new(0.0, 0.0, 64.0, 64.0);
        for ix in -40..40 {
            for iy in -40..40 {
                let actor = Rect::new(ix as f32 * 2.5, iy as f32 * 2.5, 32.0, 48.0);
                if let Some(d) = Penetration::between(&actor, &block) {
                    let winners = [d.top_wins(), d.bottom_wins(), d.left_wins(), d.right_wins()]
                        .iter()
                        .filter(|w| **w)
                        .count();
                    assert!(winners <= 1, "{actor:?} -> {d:?}");
                }
            }
        }
    }

    #[test]
    fn consecutive_obstacles_correct_both_axes() {
        let mut body = Body::at(0.0, 0.0, 32.0, 32.0);
        let floor = Rect::new(-64.0, 28.0, 256.0, 64.0);
        let wall = Rect::new(30.0, -64.0, 64.0, 256.0);

        let contacts = resolve_collisions(&mut body, [&floor, &wall]);
        assert_eq!(contacts, Contacts { top: 1, left: 1, ..Default::default() });
        assert_eq!(body.rect, Rect::new(-2.0, -4.0, 32.0, 32.0));
        assert_eq!(body.vel, Vec2::ZERO);
        assert!(body.grounded);
    }

    #[test]
    fn later_obstacle_overwrites_earlier_snap() {
        // Squeezed between two walls: the second wall's snap wins even though
        // it pushes the body back into the first wall.
        let mut body = Body::at(0.0, 0.0, 32.0, 32.0);
        let right_wall = Rect::new(28.0, -100.0, 50.0, 300.0);
        let left_wall = Rect::new(-50.0, -100.0, 48.0, 300.0);

        let contacts = resolve_collisions(&mut body, [&right_wall, &left_wall]);
        assert_eq!(contacts, Contacts { left: 1, right: 1, ..Default::default() });
        assert_eq!(body.rect.x, -2.0);
        assert!(body.rect.intersects(&right_wall));
    }

    #[test]
    fn obstacles_are_visited_in_given_order() {
        let mut body = Body::at(0.0, 0.0, 32.0, 32.0);
        let right_wall = Rect::new(28.0, -100.0, 50.0, 300.0);
        let left_wall = Rect::new(-50.0, -100.0, 48.0, 300.0);

        // The left wall is not touched yet when it is visited, so only the
        // right wall's snap applies, leaving the body inside the left wall.
        let contacts = resolve_collisions(&mut body, [&left_wall, &right_wall]);
        assert_eq!(contacts, Contacts { left: 1, ..Default::default() });
        assert_eq!(body.rect.right(), right_wall.left());
        assert!(body.rect.intersects(&left_wall));
    }
}

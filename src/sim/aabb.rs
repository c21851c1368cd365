//! Axis-aligned collider boxes
//!
//! Sprites are rarely square, so colliders shrink to a centered square
//! using the smaller sprite dimension. The transparent margin of a wide
//! ship or long laser never registers a hit.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square of side `min(w, h)` centered inside the `w × h` rectangle at `(x, y)`
    pub fn square_within(x: f32, y: f32, w: f32, h: f32) -> Self {
        let side = w.min(h);
        Self {
            x: x + (w - side) / 2.0,
            y: y + (h - side) / 2.0,
            width: side,
            height: side,
        }
    }

    /// Right edge
    #[inline]
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge
    #[inline]
    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Grow the box by `margin` on every side
    pub fn expanded(&self, margin: f32) -> Self {
        Self {
            x: self.x - margin,
            y: self.y - margin,
            width: self.width + 2.0 * margin,
            height: self.height + 2.0 * margin,
        }
    }

    /// Strict overlap test. Boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.x < other.max_x()
            && self.max_x() > other.x
            && self.y < other.max_y()
            && self.max_y() > other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_square_within_wide_sprite() {
        // 99x75 ship: square of 75, shifted 12 right
        let b = Aabb::square_within(100.0, 50.0, 99.0, 75.0);
        assert_eq!(b.width, 75.0);
        assert_eq!(b.height, 75.0);
        assert_eq!(b.x, 112.0);
        assert_eq!(b.y, 50.0);
    }

    #[test]
    fn test_square_within_tall_sprite() {
        // 9x54 laser: square of 9, shifted 22.5 down
        let b = Aabb::square_within(0.0, 0.0, 9.0, 54.0);
        assert_eq!(b.width, 9.0);
        assert_eq!(b.x, 0.0);
        assert_eq!(b.y, 22.5);
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let right = Aabb::new(10.0, 0.0, 10.0, 10.0);
        let below = Aabb::new(0.0, 10.0, 10.0, 10.0);
        let corner = Aabb::new(10.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
        assert!(!a.intersects(&corner));
    }

    #[test]
    fn test_overlap_and_containment() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Aabb::new(9.9, 9.9, 5.0, 5.0)));
        assert!(a.intersects(&Aabb::new(2.0, 2.0, 1.0, 1.0)));
        assert!(!a.intersects(&Aabb::new(20.0, 0.0, 5.0, 5.0)));
    }

    #[test]
    fn test_expanded() {
        let b = Aabb::new(0.0, 0.0, 800.0, 600.0).expanded(50.0);
        assert_eq!(b, Aabb::new(-50.0, -50.0, 900.0, 700.0));
        assert_eq!(b.center(), Vec2::new(400.0, 300.0));
    }

    fn arb_box() -> impl Strategy<Value = Aabb> {
        (-500.0f32..500.0, -500.0f32..500.0, 0.0f32..200.0, 0.0f32..200.0)
            .prop_map(|(x, y, w, h)| Aabb::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_intersects_is_symmetric(a in arb_box(), b in arb_box()) {
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn prop_edge_adjacent_never_intersects(
            a in arb_box(),
            dy in -100.0f32..100.0,
            w in 1.0f32..50.0,
        ) {
            let b = Aabb::new(a.max_x(), a.y + dy, w, w);
            prop_assert!(!a.intersects(&b));
        }

        #[test]
        fn prop_square_within_is_square_and_centered(
            x in -500.0f32..500.0,
            y in -500.0f32..500.0,
            w in 1.0f32..300.0,
            h in 1.0f32..300.0,
        ) {
            let b = Aabb::square_within(x, y, w, h);
            let side = w.min(h);
            prop_assert_eq!(b.width, side);
            prop_assert_eq!(b.height, side);
            let original = Vec2::new(x + w / 2.0, y + h / 2.0);
            prop_assert!((b.center() - original).length() < 1e-3);
        }
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell coordinate on the world grid.
///
/// Positions carry no bounds of their own; a grid decides whether a
/// position is valid through [`Position::is_in_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// Column, growing to the right.
    pub x: i32,
    /// Row, growing downwards.
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True iff `0 <= x < width` and `0 <= y < height`.
    #[inline]
    #[must_use]
    pub fn is_in_bounds(&self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.x < width && self.y >= 0 && self.y < height
    }

    /// Squared Euclidean distance, saturating at `i64::MAX`.
    #[inline]
    #[must_use]
    pub fn distance_squared(&self, other: &Position) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy))
    }

    /// Euclidean disk containment, boundary inclusive.
    ///
    /// A negative radius contains nothing.
    #[inline]
    #[must_use]
    pub fn is_within_radius(&self, other: &Position, radius: i32) -> bool {
        if radius < 0 {
            return false;
        }
        let r = i64::from(radius);
        self.distance_squared(other) <= r * r
    }

    #[inline]
    #[must_use]
    pub fn offset(&self, dx: i32, dy: i32) -> Position {
        Position::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// The eight surrounding cells in row-major order, whether or not they
    /// lie on any particular grid.
    pub fn moore_neighbors(self) -> impl Iterator<Item = Position> {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(move |(dx, dy)| self.offset(dx, dy))
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds_edges() {
        assert!(Position::new(0, 0).is_in_bounds(10, 5));
        assert!(Position::new(9, 4).is_in_bounds(10, 5));
        assert!(!Position::new(10, 4).is_in_bounds(10, 5));
        assert!(!Position::new(9, 5).is_in_bounds(10, 5));
        assert!(!Position::new(-1, 0).is_in_bounds(10, 5));
        assert!(!Position::new(0, -1).is_in_bounds(10, 5));
    }

    #[test]
    fn test_within_radius_is_inclusive_disk() {
        let center = Position::new(10, 10);
        assert!(Position::new(13, 10).is_within_radius(&center, 3));
        assert!(Position::new(10, 7).is_within_radius(&center, 3));
        // (2, 2) has distance sqrt(8) < 3
        assert!(Position::new(12, 12).is_within_radius(&center, 3));
        // Corner of the bounding box is outside the disk
        assert!(!Position::new(13, 13).is_within_radius(&center, 3));
        assert!(!Position::new(14, 10).is_within_radius(&center, 3));
    }

    #[test]
    fn test_negative_radius_contains_nothing() {
        let p = Position::new(1, 1);
        assert!(!p.is_within_radius(&p, -1));
        assert!(p.is_within_radius(&p, 0));
    }

    #[test]
    fn test_distance_does_not_overflow() {
        let a = Position::new(i32::MIN, i32::MIN);
        let b = Position::new(i32::MAX, i32::MAX);
        assert!(a.distance_squared(&b) > 0);
        assert!(!a.is_within_radius(&b, i32::MAX));
    }

    #[test]
    fn test_moore_neighbors() {
        let n: Vec<_> = Position::new(0, 0).moore_neighbors().collect();
        assert_eq!(n.len(), 8);
        assert_eq!(n[0], Position::new(-1, -1));
        assert_eq!(n[7], Position::new(1, 1));
        assert!(!n.contains(&Position::new(0, 0)));
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Position::new(3, -4)).unwrap();
        assert_eq!(json, r#"{"x":3,"y":-4}"#);
    }
}

// Copyright 2025 the Passpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer geometry for keys and cells.

/// Axis-aligned integer rectangle in layout units, stored as origin and size.
///
/// Containment is half-open: the left and top edges are inside, the right and
/// bottom edges are not. Adjacent bounds therefore never both contain a point
/// on their shared edge.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width, not including any gap.
    pub width: i32,
    /// Height, not including any gap.
    pub height: i32,
}

impl Bounds {
    /// Create bounds from origin and size.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create bounds from left/top/right/bottom edges.
    pub const fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        }
    }

    /// Exclusive right edge.
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// True when the bounds cover no area.
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Whether the half-open bounds contain the point.
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Squared distance between the point and the (integer) centre of the bounds.
    ///
    /// The centre is `x + width / 2`, truncated, so odd sizes bias toward the origin.
    /// The result saturates at `i32::MAX`.
    pub const fn squared_distance_from_center(&self, x: i32, y: i32) -> i32 {
        let dx = self.x.saturating_add(self.width / 2).saturating_sub(x);
        let dy = self.y.saturating_add(self.height / 2).saturating_sub(y);
        dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy))
    }

    /// Translate by an offset.
    pub const fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Whether `other` lies inside these bounds grown by `slack` on every side.
    pub const fn encloses(&self, other: &Self, slack: i32) -> bool {
        self.x - slack <= other.x
            && self.y - slack <= other.y
            && self.right() + slack >= other.right()
            && self.bottom() + slack >= other.bottom()
    }

    /// Smallest bounds covering both. Empty inputs are ignored.
    pub fn union(&self, other: &Self) -> Self {
        if other.is_empty() {
            return *self;
        }
        if self.is_empty() {
            return *other;
        }
        Self::from_edges(
            self.x.min(other.x),
            self.y.min(other.y),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }
}

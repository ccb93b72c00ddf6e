use crate::geometry::geo_enums::GeoRelation;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Axis-aligned rectangle on the integer grid.
/// Covers `[x_min, x_max) × [y_min, y_max)`, so two rectangles sharing an edge do not overlap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x_min: u64,
    pub y_min: u64,
    pub x_max: u64,
    pub y_max: u64,
}

impl Rect {
    /// Rectangle with its bottom-left corner at `(x, y)`.
    /// Returns `None` if the rectangle would be degenerate (zero width or height).
    pub fn from_corner(x: u64, y: u64, width: u64, height: u64) -> Option<Self> {
        match width > 0 && height > 0 {
            true => Some(Rect {
                x_min: x,
                y_min: y,
                x_max: x + width,
                y_max: y + height,
            }),
            false => None,
        }
    }

    pub fn width(&self) -> u64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> u64 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> u64 {
        self.width() * self.height()
    }

    /// Bottom-left corner
    pub fn corner(&self) -> (u64, u64) {
        (self.x_min, self.y_min)
    }

    /// Returns the overlapping region of `a` and `b`, if it has a positive area.
    pub fn intersection(a: Rect, b: Rect) -> Option<Rect> {
        let x_min = u64::max(a.x_min, b.x_min);
        let y_min = u64::max(a.y_min, b.y_min);
        let x_max = u64::min(a.x_max, b.x_max);
        let y_max = u64::min(a.y_max, b.y_max);
        if x_min < x_max && y_min < y_max {
            Some(Rect {
                x_min,
                y_min,
                x_max,
                y_max,
            })
        } else {
            None
        }
    }

    /// True if the interiors of `self` and `other` intersect
    #[inline(always)]
    pub fn overlaps(&self, other: &Rect) -> bool {
        u64::max(self.x_min, other.x_min) < u64::min(self.x_max, other.x_max)
            && u64::max(self.y_min, other.y_min) < u64::min(self.y_max, other.y_max)
    }

    /// True if `other` lies entirely within `self` (borders included)
    #[inline(always)]
    pub fn contains(&self, other: &Rect) -> bool {
        self.x_min <= other.x_min
            && self.y_min <= other.y_min
            && self.x_max >= other.x_max
            && self.y_max >= other.y_max
    }

    /// Returns the geometric relation between `self` and another [`Rect`].
    /// Identical rectangles are reported as `Surrounding`.
    #[inline(always)]
    pub fn relation_to(&self, other: &Rect) -> GeoRelation {
        if !self.overlaps(other) {
            return GeoRelation::Disjoint;
        }
        if self.contains(other) {
            return GeoRelation::Surrounding;
        }
        if other.contains(self) {
            return GeoRelation::Enclosed;
        }
        GeoRelation::Intersecting
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[({}, {}) {}x{}]",
            self.x_min,
            self.y_min,
            self.width(),
            self.height()
        )
    }
}

use crate::geometry::Rect;

/// A bin in which [`Item`](crate::entities::Item)s can be placed, at a fixed cost once used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bin {
    pub id: usize,
    pub width: u64,
    pub height: u64,
    /// Cost incurred when at least one item is placed inside the bin
    pub cost: u64,
}

impl Bin {
    pub fn new(id: usize, width: u64, height: u64, cost: u64) -> Self {
        assert!(
            width > 0 && height > 0,
            "bin {id} has a non-positive dimension: {width}x{height}"
        );
        assert!(
            width.checked_mul(height).is_some(),
            "area of bin {id} overflows: {width}x{height}"
        );
        Bin {
            id,
            width,
            height,
            cost,
        }
    }

    pub fn area(&self) -> u64 {
        self.width * self.height
    }

    /// The full extent of the bin, with its bottom-left corner at the origin
    pub fn rect(&self) -> Rect {
        Rect {
            x_min: 0,
            y_min: 0,
            x_max: self.width,
            y_max: self.height,
        }
    }

    pub fn longer_side(&self) -> u64 {
        u64::max(self.width, self.height)
    }

    pub fn shorter_side(&self) -> u64 {
        u64::min(self.width, self.height)
    }
}

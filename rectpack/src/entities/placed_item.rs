use crate::geometry::Rect;

/// Represents an [`Item`](crate::entities::Item) that has been placed in a bin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacedItem {
    pub item_id: usize,
    pub bin_id: usize,
    /// True if the item is placed rotated by 90° relative to its input orientation
    pub rotated: bool,
    /// Footprint of the item inside the bin
    pub rect: Rect,
}

impl PlacedItem {
    /// Bottom-left corner of the item in the bin's coordinate frame
    pub fn corner(&self) -> (u64, u64) {
        self.rect.corner()
    }
}

use crate::free_space::FreeRects;
use crate::geometry::Rect;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Rule that updates the free rectangles of a bin after an item has been placed.
/// The placement itself (ranking, orientation, corner) is shared by all strategies, see [`Layout::insert`](crate::entities::Layout::insert).
pub trait PackingStrategy {
    fn kind(&self) -> StrategyKind;

    /// Updates `free_rects` after an item with footprint `placed` was put in the bottom-left corner of `consumed`.
    /// `consumed` has already been removed from `free_rects`.
    fn split(&self, free_rects: &mut FreeRects, consumed: Rect, placed: Rect);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Single straight cut per placement, merging of adjacent free rectangles
    Guillotine,
    /// Maximal free rectangles with overlap resection and containment pruning
    MaxRects,
}

impl Display for StrategyKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyKind::Guillotine => write!(f, "guillotine"),
            StrategyKind::MaxRects => write!(f, "maximal rectangles"),
        }
    }
}

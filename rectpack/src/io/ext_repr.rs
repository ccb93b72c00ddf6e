use crate::free_space::StrategyKind;
use serde::{Deserialize, Serialize};

/// External representation of an [`Instance`](crate::entities::Instance).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtInstance {
    /// Name of the instance
    pub name: String,
    /// Items to be packed, with ids `1..=N`
    pub items: Vec<ExtItem>,
    /// Bins available, with ids `1..=K`
    pub bins: Vec<ExtBin>,
}

/// External representation of an [`Item`](crate::entities::Item).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtItem {
    /// Unique identifier of the item, 1-based
    pub id: u64,
    pub width: u64,
    pub height: u64,
}

/// External representation of a [`Bin`](crate::entities::Bin).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtBin {
    /// Unique identifier of the bin, 1-based
    pub id: u64,
    pub width: u64,
    pub height: u64,
    /// Cost of using the bin
    pub cost: u64,
}

/// External representation of a [`PlacedItem`](crate::entities::PlacedItem).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacedItem {
    /// The id of the item in the instance
    pub item_id: u64,
    /// The id of the bin holding the item
    pub bin_id: u64,
    /// Bottom-left corner of the item in the bin's coordinate frame
    pub x: u64,
    pub y: u64,
    /// True if the item is rotated relative to its input orientation
    pub rotated: bool,
}

/// External representation of a [`Layout`](crate::entities::Layout).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtLayout {
    /// The bin that was used
    pub bin_id: u64,
    pub cost: u64,
    /// The items placed in the bin, in insertion order
    pub placed_items: Vec<ExtPlacedItem>,
    pub density: f32,
}

/// External representation of a [`Solution`](crate::entities::Solution).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSolution {
    /// The strategy which produced the solution
    pub strategy: StrategyKind,
    /// Sum of the costs of the used bins
    pub cost: u64,
    pub bins_used: usize,
    pub layouts: Vec<ExtLayout>,
    /// All placed items, ordered by item id
    pub placements: Vec<ExtPlacedItem>,
    /// Ids of the items that could not be placed in any bin
    #[serde(default)]
    pub unplaced_items: Vec<u64>,
    pub density: f32,
    /// Time between the start of the program and the creation of the solution
    pub run_time_ms: u64,
}

use crate::entities::{Instance, Layout, PlacedItem};
use crate::free_space::StrategyKind;
use crate::util::assertions::solution_matches_layouts;
use std::time::Instant;

/// Outcome of packing all items of an instance with one strategy.
#[derive(Clone, Debug)]
pub struct Solution {
    /// The strategy which produced this solution
    pub strategy: StrategyKind,
    /// Layouts of the bins holding at least one item, in the order the bins were tried
    pub layouts: Vec<Layout>,
    /// Placement of every item, indexed by item id. `None` if no bin admitted the item
    pub placements: Vec<Option<PlacedItem>>,
    /// Instant at which the solution was created
    pub time_stamp: Instant,
}

impl Solution {
    /// Assembles a solution from the layouts of a finished run. Empty layouts are dropped.
    pub fn from_layouts(strategy: StrategyKind, layouts: Vec<Layout>, n_items: usize) -> Self {
        let layouts: Vec<Layout> = layouts.into_iter().filter(|l| !l.is_empty()).collect();

        let mut placements = vec![None; n_items];
        for pi in layouts.iter().flat_map(|l| l.placed_items.iter()) {
            assert!(
                placements[pi.item_id].is_none(),
                "item {} placed more than once",
                pi.item_id
            );
            placements[pi.item_id] = Some(*pi);
        }

        let solution = Solution {
            strategy,
            layouts,
            placements,
            time_stamp: Instant::now(),
        };

        debug_assert!(solution_matches_layouts(&solution));

        solution
    }

    /// Sum of the costs of all bins holding at least one item.
    /// Every used bin has exactly one layout, so each cost is counted once.
    pub fn cost(&self) -> u64 {
        self.layouts.iter().map(|l| l.bin.cost).sum()
    }

    pub fn bins_used(&self) -> usize {
        self.layouts.len()
    }

    pub fn n_placed_items(&self) -> usize {
        self.placements.iter().flatten().count()
    }

    /// Ids of the items no bin could admit
    pub fn unplaced_items(&self) -> impl Iterator<Item = usize> + '_ {
        self.placements
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_none())
            .map(|(id, _)| id)
    }

    /// Placed items ordered by ascending item id
    pub fn placed_items(&self) -> impl Iterator<Item = &PlacedItem> {
        self.placements.iter().flatten()
    }

    /// Ratio of the total placed item area to the total area of the used bins
    pub fn density(&self, instance: &Instance) -> f32 {
        let bin_area = self
            .layouts
            .iter()
            .map(|l| l.bin.area() as u128)
            .sum::<u128>();
        let item_area = self
            .placed_items()
            .map(|pi| instance.item(pi.item_id).area() as u128)
            .sum::<u128>();
        match bin_area {
            0 => 0.0,
            _ => item_area as f32 / bin_area as f32,
        }
    }
}

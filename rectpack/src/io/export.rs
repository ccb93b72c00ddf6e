use crate::entities::{Instance, Layout, PlacedItem, Solution};
use crate::io::ext_repr::{ExtLayout, ExtPlacedItem, ExtSolution};
use itertools::Itertools;
use std::time::Instant;

/// Exports a solution out of the library
pub fn export(instance: &Instance, solution: &Solution, epoch: Instant) -> ExtSolution {
    ExtSolution {
        strategy: solution.strategy,
        cost: solution.cost(),
        bins_used: solution.bins_used(),
        layouts: solution.layouts.iter().map(export_layout).collect(),
        placements: solution.placed_items().map(export_placed_item).collect(),
        unplaced_items: solution.unplaced_items().map(|id| id as u64 + 1).collect(),
        density: solution.density(instance),
        run_time_ms: solution
            .time_stamp
            .saturating_duration_since(epoch)
            .as_millis() as u64,
    }
}

/// Exports a layout to an external representation.
pub fn export_layout(layout: &Layout) -> ExtLayout {
    ExtLayout {
        bin_id: layout.bin.id as u64 + 1,
        cost: layout.bin.cost,
        placed_items: layout.placed_items.iter().map(export_placed_item).collect_vec(),
        density: layout.density(),
    }
}

pub fn export_placed_item(pi: &PlacedItem) -> ExtPlacedItem {
    let (x, y) = pi.corner();
    ExtPlacedItem {
        item_id: pi.item_id as u64 + 1,
        bin_id: pi.bin_id as u64 + 1,
        x,
        y,
        rotated: pi.rotated,
    }
}

/// One `id bin x y rotated` line per placed item, ordered by item id, with 1-based ids and `rotated` as `0`/`1`.
/// Items that were not placed are omitted.
pub fn placement_lines(solution: &Solution) -> String {
    solution
        .placed_items()
        .map(export_placed_item)
        .map(|pi| {
            format!(
                "{} {} {} {} {}\n",
                pi.item_id, pi.bin_id, pi.x, pi.y, pi.rotated as u8
            )
        })
        .collect()
}

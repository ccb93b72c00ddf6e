use std::time::Instant;

use log::{debug, info, warn};
use rectpack::entities::{Instance, Layout, Solution};
use rectpack::free_space::PackingStrategy;
use thousands::Separable;

/// First-fit-decreasing optimizer driving a single [`PackingStrategy`].
/// Items are visited in `item_order` and each one goes into the first layout (in bin preference order) which admits it.
pub struct HeuristicOptimizer<'a, S: PackingStrategy> {
    pub instance: &'a Instance,
    pub strategy: S,
    pub item_order: &'a [usize],
    /// One fresh layout per bin, in bin preference order
    pub layouts: Vec<Layout>,
}

impl<'a, S: PackingStrategy> HeuristicOptimizer<'a, S> {
    pub fn new(
        instance: &'a Instance,
        strategy: S,
        item_order: &'a [usize],
        bin_order: &[usize],
    ) -> Self {
        assert_eq!(item_order.len(), instance.items.len());
        assert_eq!(bin_order.len(), instance.bins.len());
        let layouts = bin_order
            .iter()
            .map(|&bin_id| Layout::new(instance.bin(bin_id).clone()))
            .collect();
        Self {
            instance,
            strategy,
            item_order,
            layouts,
        }
    }

    pub fn solve(self) -> Solution {
        let start = Instant::now();
        let HeuristicOptimizer {
            instance,
            strategy,
            item_order,
            mut layouts,
        } = self;
        let kind = strategy.kind();
        debug!(
            "[HBP] {kind}: packing {} items (total area {}) over {} bins",
            instance.items.len(),
            instance.total_item_area().separate_with_commas(),
            layouts.len()
        );

        let mut n_placed = 0;
        for &item_id in item_order {
            let item = instance.item(item_id);
            let placement = layouts
                .iter_mut()
                .find_map(|layout| layout.insert(item, &strategy));

            match placement {
                Some(pi) => {
                    n_placed += 1;
                    debug!(
                        "[HBP] {kind}: placing item {}/{} with id {} at {} in bin {} (rotated: {})",
                        n_placed,
                        instance.items.len(),
                        item_id + 1,
                        pi.rect,
                        pi.bin_id + 1,
                        pi.rotated
                    );
                }
                None => warn!(
                    "[HBP] {kind}: item {} ({}x{}) does not fit in any bin, left unplaced",
                    item_id + 1,
                    item.width,
                    item.height
                ),
            }
        }

        let solution = Solution::from_layouts(kind, layouts, instance.items.len());

        info!(
            "[HBP] {kind} finished in {:.3}ms",
            start.elapsed().as_secs_f64() * 1000.0
        );
        info!(
            "[HBP] {kind}: {}/{} items placed in {} bins, cost {}, density {:.3}%",
            solution.n_placed_items(),
            instance.items.len(),
            solution.bins_used(),
            solution.cost().separate_with_commas(),
            solution.density(instance) * 100.0
        );
        solution
    }
}

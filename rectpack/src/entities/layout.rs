use crate::entities::{Bin, Item, PlacedItem};
use crate::free_space::{FreeRects, PackingStrategy, StrategyKind, ranker};
use crate::geometry::Rect;
use crate::util::assertions;
use log::trace;

/// A [`Layout`] is the dynamic state of a single bin during a packing run:
/// the items placed inside it and the free rectangles still available for placement.
/// Every run starts from fresh layouts, so no state carries over between strategies.
#[derive(Clone, Debug)]
pub struct Layout {
    /// The bin used for this layout
    pub bin: Bin,
    /// All items placed in this layout, in insertion order
    pub placed_items: Vec<PlacedItem>,
    /// Free rectangles of the bin, maintained by a [`PackingStrategy`]
    pub free_rects: FreeRects,
    /// Bin area not covered by placed items
    pub free_area: u64,
}

impl Layout {
    pub fn new(bin: Bin) -> Self {
        let free_rects = FreeRects::new(bin.rect());
        let free_area = bin.area();
        Layout {
            bin,
            placed_items: vec![],
            free_rects,
            free_area,
        }
    }

    /// Tries to insert `item` in the layout.
    /// The free rectangle and orientation are chosen by the Best Short Side Fit ranker,
    /// the item is placed in its bottom-left corner and `strategy` updates the free space around it.
    /// Returns `None` (leaving the layout untouched) if the item fits in none of the free rectangles.
    pub fn insert(&mut self, item: &Item, strategy: &impl PackingStrategy) -> Option<PlacedItem> {
        let candidate = ranker::best_short_side_fit(&self.free_rects, item)?;

        let consumed = self.free_rects.remove(candidate.rect_index);
        let (width, height) = item.shape(candidate.rotated);
        let footprint = Rect {
            x_min: consumed.x_min,
            y_min: consumed.y_min,
            x_max: consumed.x_min + width,
            y_max: consumed.y_min + height,
        };
        let placed_item = PlacedItem {
            item_id: item.id,
            bin_id: self.bin.id,
            rotated: candidate.rotated,
            rect: footprint,
        };
        trace!(
            "[LAYOUT] bin {}: item {} consumes {consumed} (score {:?})",
            self.bin.id, item.id, candidate.score
        );

        self.placed_items.push(placed_item);
        self.free_area -= footprint.area();
        strategy.split(&mut self.free_rects, consumed, footprint);

        debug_assert!(assertions::placed_items_within_bin(self));
        debug_assert!(assertions::free_rects_avoid_items(self));
        debug_assert!(match strategy.kind() {
            StrategyKind::Guillotine => assertions::guillotine_free_space_exact(self),
            StrategyKind::MaxRects => assertions::no_contained_free_rects(self),
        });

        Some(placed_item)
    }

    /// True if no items are placed
    pub fn is_empty(&self) -> bool {
        self.placed_items.is_empty()
    }

    /// The sum of the areas of the items placed in the layout
    pub fn placed_item_area(&self) -> u64 {
        self.placed_items.iter().map(|pi| pi.rect.area()).sum()
    }

    /// Ratio of the area of the placed items to the area of the bin
    pub fn density(&self) -> f32 {
        self.placed_item_area() as f32 / self.bin.area() as f32
    }
}

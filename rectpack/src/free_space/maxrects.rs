use crate::free_space::{FreeRects, PackingStrategy, StrategyKind};
use crate::geometry::Rect;
use log::trace;

/// Maximal-rectangles strategy: the free rectangles of a bin may overlap each other, but never a placed item.
/// After every placement, each free rectangle intersecting the item is resected into the slices around it,
/// and free rectangles contained in another one are pruned.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxRects;

impl MaxRects {
    /// Remainders of `consumed` next to `placed` (positioned in its bottom-left corner), without cutting:
    /// the right one spans the full height, the top one the full width, so both can coexist and overlap.
    pub fn remainders(consumed: Rect, placed: Rect) -> [Option<Rect>; 2] {
        let right = Rect::from_corner(
            consumed.x_min + placed.width(),
            consumed.y_min,
            consumed.width() - placed.width(),
            consumed.height(),
        );
        let top = Rect::from_corner(
            consumed.x_min,
            consumed.y_min + placed.height(),
            consumed.width(),
            consumed.height() - placed.height(),
        );
        [right, top]
    }

    /// Slices of `rect` left, right, below and above `overlap`, which must lie within `rect`.
    /// Slices with no area are skipped.
    pub fn resect(rect: Rect, overlap: Rect) -> impl Iterator<Item = Rect> {
        debug_assert!(rect.contains(&overlap));
        let left = (overlap.x_min > rect.x_min).then_some(Rect {
            x_max: overlap.x_min,
            ..rect
        });
        let right = (overlap.x_max < rect.x_max).then_some(Rect {
            x_min: overlap.x_max,
            ..rect
        });
        let below = (overlap.y_min > rect.y_min).then_some(Rect {
            y_max: overlap.y_min,
            ..rect
        });
        let above = (overlap.y_max < rect.y_max).then_some(Rect {
            y_min: overlap.y_max,
            ..rect
        });
        [left, right, below, above].into_iter().flatten()
    }

    /// Replaces every free rectangle intersecting `placed` by its slices around the intersection.
    /// Returns the number of resected rectangles.
    pub fn remove_overlap(free_rects: &mut FreeRects, placed: Rect) -> usize {
        let mut n_resected = 0;
        let mut i = 0;
        while i < free_rects.len() {
            let rect = free_rects.get(i);
            match Rect::intersection(rect, placed) {
                Some(overlap) => {
                    free_rects.remove(i);
                    free_rects.extend(Self::resect(rect, overlap));
                    n_resected += 1;
                }
                None => i += 1,
            }
        }
        n_resected
    }

    /// Removes every free rectangle that is contained in another one (duplicates included, the first is kept).
    /// Returns the number of removed rectangles.
    pub fn prune(free_rects: &mut FreeRects) -> usize {
        let mut n_removed = 0;
        let mut i = 0;
        while i < free_rects.len() {
            let mut i_removed = false;
            let mut j = i + 1;
            while j < free_rects.len() {
                let (first, second) = (free_rects.get(i), free_rects.get(j));
                if first.contains(&second) {
                    free_rects.remove(j);
                    n_removed += 1;
                } else if second.contains(&first) {
                    free_rects.remove(i);
                    n_removed += 1;
                    i_removed = true;
                    break;
                } else {
                    j += 1;
                }
            }
            if !i_removed {
                i += 1;
            }
        }
        n_removed
    }
}

impl PackingStrategy for MaxRects {
    fn kind(&self) -> StrategyKind {
        StrategyKind::MaxRects
    }

    fn split(&self, free_rects: &mut FreeRects, consumed: Rect, placed: Rect) {
        free_rects.extend(Self::remainders(consumed, placed).into_iter().flatten());
        let n_resected = Self::remove_overlap(free_rects, placed);
        let n_pruned = Self::prune(free_rects);
        trace!(
            "[MAXR] {n_resected} resected, {n_pruned} pruned, {} free rectangles left",
            free_rects.len()
        );
    }
}

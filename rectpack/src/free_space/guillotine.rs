use crate::free_space::{FreeRects, PackingStrategy, StrategyKind};
use crate::geometry::Rect;
use log::trace;

/// Guillotine strategy: every placement cuts the consumed free rectangle with a single straight cut,
/// after which adjacent free rectangles sharing a full edge are merged.
/// The free rectangles of a bin stay pairwise disjoint and, together with the placed items, exactly cover the bin.
#[derive(Clone, Copy, Debug, Default)]
pub struct Guillotine;

impl Guillotine {
    /// Splits the remainder of `consumed` around `placed` (positioned in its bottom-left corner) into
    /// a right and a top free rectangle.
    ///
    /// If `consumed` is not wider than tall, the cut is horizontal-first: the right remainder only spans the item's height
    /// and the top remainder the full width. Otherwise it is vertical-first: the right remainder spans the full height and
    /// the top remainder only the item's width. Degenerate remainders are discarded.
    pub fn cut(consumed: Rect, placed: Rect) -> [Option<Rect>; 2] {
        let horizontal = consumed.width() <= consumed.height();
        let (item_w, item_h) = (placed.width(), placed.height());

        let right_height = match horizontal {
            true => item_h,
            false => consumed.height(),
        };
        let top_width = match horizontal {
            true => consumed.width(),
            false => item_w,
        };

        let right = Rect::from_corner(
            consumed.x_min + item_w,
            consumed.y_min,
            consumed.width() - item_w,
            right_height,
        );
        let top = Rect::from_corner(
            consumed.x_min,
            consumed.y_min + item_h,
            top_width,
            consumed.height() - item_h,
        );
        [right, top]
    }

    /// Merges free rectangles sharing a full edge until a complete pass finds nothing left to merge.
    /// Returns the number of merges performed. Running it on an already merged repository is a no-op.
    pub fn merge(free_rects: &mut FreeRects) -> usize {
        let mut n_merges = 0;
        loop {
            match merge_pass(free_rects) {
                0 => break,
                n => n_merges += n,
            }
        }
        n_merges
    }
}

impl PackingStrategy for Guillotine {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Guillotine
    }

    fn split(&self, free_rects: &mut FreeRects, consumed: Rect, placed: Rect) {
        free_rects.extend(Self::cut(consumed, placed).into_iter().flatten());
        let n_merges = Self::merge(free_rects);
        trace!(
            "[GUIL] {n_merges} merges, {} free rectangles left",
            free_rects.len()
        );
    }
}

/// Single scan over the repository. Every rectangle is matched against the first other rectangle stacked directly on top of it
/// with the same width, or directly to its right with the same height. Both are replaced by their union, appended at the back.
fn merge_pass(free_rects: &mut FreeRects) -> usize {
    let mut n_merges = 0;
    let mut i = 0;
    while i < free_rects.len() {
        let first = free_rects.get(i);
        let partner = free_rects
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .find_map(|(j, second)| merged(&first, second).map(|m| (j, m)));

        match partner {
            Some((j, merged_rect)) => {
                free_rects.remove(j);
                if j < i {
                    i -= 1;
                }
                free_rects.remove(i);
                free_rects.push(merged_rect);
                n_merges += 1;
                // the rectangle that moved into position `i` has not been visited yet
            }
            None => i += 1,
        }
    }
    n_merges
}

/// Union of `first` and `second` if `second` lies directly on top of or to the right of `first`, sharing a full edge.
fn merged(first: &Rect, second: &Rect) -> Option<Rect> {
    let on_top = first.x_min == second.x_min
        && first.width() == second.width()
        && second.y_min == first.y_max;
    let to_the_right = first.y_min == second.y_min
        && first.height() == second.height()
        && second.x_min == first.x_max;

    if on_top {
        Some(Rect {
            y_max: second.y_max,
            ..*first
        })
    } else if to_the_right {
        Some(Rect {
            x_max: second.x_max,
            ..*first
        })
    } else {
        None
    }
}

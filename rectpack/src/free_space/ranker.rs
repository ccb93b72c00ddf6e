//! Best Short Side Fit (BSSF) ranking of the free rectangles of a bin.

use crate::entities::Item;
use crate::free_space::FreeRects;
use crate::geometry::Rect;

/// Leftover space after notionally placing an item in the bottom-left corner of a free rectangle.
/// Ordered lexicographically: the tighter dimension first, the looser one as tie-breaker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct BSSFScore {
    pub short_side: u64,
    pub long_side: u64,
}

/// A feasible free rectangle and orientation for an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// Position of the free rectangle in the [`FreeRects`] it was ranked from
    pub rect_index: usize,
    pub rect: Rect,
    /// Orientation relative to the item's input orientation
    pub rotated: bool,
    pub score: BSSFScore,
}

/// Scores a `width` x `height` item inside `rect`, `None` if it does not fit.
pub fn score(rect: &Rect, width: u64, height: u64) -> Option<BSSFScore> {
    if width > rect.width() || height > rect.height() {
        return None;
    }
    let dw = rect.width() - width;
    let dh = rect.height() - height;
    Some(BSSFScore {
        short_side: u64::min(dw, dh),
        long_side: u64::max(dw, dh),
    })
}

/// Finds the free rectangle and orientation leaving the smallest leftover for `item`.
///
/// Free rectangles are visited in repository order. For each of them the item's upright orientation
/// is tried before the opposite one. A candidate only replaces the current best if its score is strictly
/// lower, so ties are won by the first candidate encountered.
/// Returns `None` if the item fits in no free rectangle in either orientation.
pub fn best_short_side_fit(free_rects: &FreeRects, item: &Item) -> Option<Candidate> {
    let orientations = [item.upright_rotation(), !item.upright_rotation()];
    let mut best: Option<Candidate> = None;

    for (rect_index, rect) in free_rects.iter().enumerate() {
        for rotated in orientations {
            let (width, height) = item.shape(rotated);
            let Some(score) = score(rect, width, height) else {
                continue;
            };
            if best.is_none_or(|b| score < b.score) {
                best = Some(Candidate {
                    rect_index,
                    rect: *rect,
                    rotated,
                    score,
                });
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: u64, y: u64, w: u64, h: u64) -> Rect {
        Rect::from_corner(x, y, w, h).unwrap()
    }

    #[test]
    fn picks_tightest_rectangle() {
        let free_rects: FreeRects = [rect(0, 0, 5, 5), rect(5, 0, 4, 7), rect(0, 5, 9, 9)]
            .into_iter()
            .collect();
        let item = Item::new(0, 4, 6);

        let best = best_short_side_fit(&free_rects, &item).unwrap();
        assert_eq!(best.rect_index, 1);
        assert!(!best.rotated);
        assert_eq!(
            best.score,
            BSSFScore {
                short_side: 0,
                long_side: 1
            }
        );
    }

    #[test]
    fn ties_go_to_first_candidate() {
        let free_rects: FreeRects = [rect(0, 0, 6, 6), rect(6, 0, 6, 6)].into_iter().collect();
        let item = Item::new(0, 3, 3);

        let best = best_short_side_fit(&free_rects, &item).unwrap();
        assert_eq!(best.rect_index, 0);
        assert!(!best.rotated);
    }

    #[test]
    fn upright_orientation_is_tried_first() {
        // both orientations leave the same leftover, the upright one wins
        let free_rects = FreeRects::new(rect(0, 0, 10, 10));
        let item = Item::new(0, 6, 4);

        let best = best_short_side_fit(&free_rects, &item).unwrap();
        assert!(best.rotated);
        assert_eq!(item.shape(best.rotated), (4, 6));
    }

    #[test]
    fn rotation_when_only_rotated_fits() {
        let free_rects = FreeRects::new(rect(0, 0, 5, 3));
        let item = Item::new(0, 2, 5);

        let best = best_short_side_fit(&free_rects, &item).unwrap();
        assert!(best.rotated);
        assert_eq!(
            best.score,
            BSSFScore {
                short_side: 0,
                long_side: 1
            }
        );
    }

    #[test]
    fn infeasible_item() {
        let free_rects: FreeRects = [rect(0, 0, 5, 5), rect(5, 0, 2, 9)].into_iter().collect();
        let item = Item::new(0, 6, 6);
        assert_eq!(best_short_side_fit(&free_rects, &item), None);
        assert_eq!(best_short_side_fit(&FreeRects::default(), &item), None);
    }

    #[test]
    fn exact_fit_scores_zero() {
        assert_eq!(
            score(&rect(3, 3, 4, 6), 4, 6),
            Some(BSSFScore {
                short_side: 0,
                long_side: 0
            })
        );
        assert_eq!(score(&rect(3, 3, 4, 6), 6, 4), None);
    }
}

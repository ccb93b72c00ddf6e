use crate::entities::{Bin, Item, Layout, Solution};
use crate::geometry::geo_enums::GeoRelation;
use itertools::Itertools;
use log::error;

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

pub fn instance_item_bin_ids_correct(items: &[Item], bins: &[Bin]) -> bool {
    items.iter().enumerate().all(|(i, item)| item.id == i)
        && bins.iter().enumerate().all(|(i, bin)| bin.id == i)
}

pub fn placed_items_within_bin(layout: &Layout) -> bool {
    let bin_rect = layout.bin.rect();
    for pi in layout.placed_items.iter() {
        if !bin_rect.contains(&pi.rect) || pi.bin_id != layout.bin.id {
            error!(
                "item {} at {} is not within bin {} {bin_rect}",
                pi.item_id, pi.rect, layout.bin.id
            );
            return false;
        }
    }
    true
}

pub fn placed_items_disjoint(layout: &Layout) -> bool {
    for (a, b) in layout.placed_items.iter().tuple_combinations() {
        if a.rect.overlaps(&b.rect) {
            error!(
                "items {} {} and {} {} overlap in bin {}",
                a.item_id, a.rect, b.item_id, b.rect, layout.bin.id
            );
            return false;
        }
    }
    true
}

/// Every free rectangle lies within the bin and is disjoint from every placed item
pub fn free_rects_avoid_items(layout: &Layout) -> bool {
    let bin_rect = layout.bin.rect();
    for fr in layout.free_rects.iter() {
        if !bin_rect.contains(fr) {
            error!("free rect {fr} exceeds bin {} {bin_rect}", layout.bin.id);
            return false;
        }
        if let Some(pi) = layout.placed_items.iter().find(|pi| pi.rect.overlaps(fr)) {
            error!(
                "free rect {fr} overlaps item {} {} in bin {}",
                pi.item_id, pi.rect, layout.bin.id
            );
            return false;
        }
    }
    true
}

/// Guillotine free rectangles are pairwise disjoint and, together with the placed items, tile the bin exactly
pub fn guillotine_free_space_exact(layout: &Layout) -> bool {
    for (a, b) in layout.free_rects.iter().tuple_combinations() {
        if a.overlaps(b) {
            error!("free rects {a} and {b} overlap in bin {}", layout.bin.id);
            return false;
        }
    }
    let free_area = layout.free_rects.total_area();
    let item_area = layout.placed_item_area();
    if free_area + item_area as u128 != layout.bin.area() as u128
        || free_area != layout.free_area as u128
    {
        error!(
            "free space of bin {} is not exact: free {free_area} (tracked {}) + items {item_area} != bin {}",
            layout.bin.id,
            layout.free_area,
            layout.bin.area()
        );
        return false;
    }
    true
}

/// No free rectangle is contained in (or identical to) another one
pub fn no_contained_free_rects(layout: &Layout) -> bool {
    for (i, j) in (0..layout.free_rects.len()).tuple_combinations() {
        let (a, b) = (layout.free_rects.get(i), layout.free_rects.get(j));
        match a.relation_to(&b) {
            GeoRelation::Surrounding | GeoRelation::Enclosed => {
                error!(
                    "free rects {a} and {b} of bin {} contain one another",
                    layout.bin.id
                );
                return false;
            }
            GeoRelation::Intersecting | GeoRelation::Disjoint => {}
        }
    }
    true
}

pub fn solution_matches_layouts(solution: &Solution) -> bool {
    let bin_ids = solution.layouts.iter().map(|l| l.bin.id).collect_vec();
    if !bin_ids.iter().all_unique() {
        error!("bins used more than once: {bin_ids:?}");
        return false;
    }
    for layout in solution.layouts.iter() {
        if layout.is_empty() {
            error!("solution contains an empty layout of bin {}", layout.bin.id);
            return false;
        }
        if !placed_items_within_bin(layout) || !placed_items_disjoint(layout) {
            return false;
        }
        for pi in layout.placed_items.iter() {
            if solution.placements[pi.item_id] != Some(*pi) {
                error!("placement of item {} does not match its layout", pi.item_id);
                return false;
            }
        }
    }
    let n_in_layouts = solution
        .layouts
        .iter()
        .map(|l| l.placed_items.len())
        .sum::<usize>();
    if n_in_layouts != solution.n_placed_items() {
        error!(
            "{} items in layouts, {} placements",
            n_in_layouts,
            solution.n_placed_items()
        );
        return false;
    }
    true
}

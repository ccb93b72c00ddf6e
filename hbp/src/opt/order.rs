use itertools::Itertools;
use rectpack::entities::{Bin, Instance};
use std::cmp::{Ordering, Reverse};

/// Item ids sorted by descending height, then descending width, measured in the upright orientation.
/// The sort is stable: equal items keep their input order.
pub fn item_placement_order(instance: &Instance) -> Vec<usize> {
    (0..instance.items.len())
        .sorted_by_key(|&id| {
            let (width, height) = instance.item(id).upright_shape();
            Reverse((height, width))
        })
        .collect_vec()
}

/// Bin ids sorted by ascending density (cost per unit of area), then descending longer side, then descending shorter side.
/// The sort is stable: equal bins keep their input order.
pub fn bin_preference_order(instance: &Instance) -> Vec<usize> {
    (0..instance.bins.len())
        .sorted_by(|&a, &b| {
            let (a, b) = (instance.bin(a), instance.bin(b));
            cmp_density(a, b)
                .then_with(|| b.longer_side().cmp(&a.longer_side()))
                .then_with(|| b.shorter_side().cmp(&a.shorter_side()))
        })
        .collect_vec()
}

/// Compares `cost / area` of both bins without rounding, by cross-multiplication.
fn cmp_density(a: &Bin, b: &Bin) -> Ordering {
    let lhs = a.cost as u128 * b.area() as u128;
    let rhs = b.cost as u128 * a.area() as u128;
    lhs.cmp(&rhs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rectpack::entities::Item;

    fn instance(items: &[(u64, u64)], bins: &[(u64, u64, u64)]) -> Instance {
        Instance::new(
            items
                .iter()
                .enumerate()
                .map(|(id, &(w, h))| Item::new(id, w, h))
                .collect(),
            bins.iter()
                .enumerate()
                .map(|(id, &(w, h, c))| Bin::new(id, w, h, c))
                .collect(),
        )
    }

    #[test]
    fn items_tallest_first_in_upright_orientation() {
        // upright shapes: 3x7, 4x6, 2x7, 5x5
        let instance = instance(&[(3, 7), (6, 4), (7, 2), (5, 5)], &[(10, 10, 1)]);
        assert_eq!(item_placement_order(&instance), vec![0, 2, 1, 3]);
    }

    #[test]
    fn equal_items_keep_input_order() {
        let instance = instance(&[(2, 4), (4, 2), (2, 4)], &[(10, 10, 1)]);
        assert_eq!(item_placement_order(&instance), vec![0, 1, 2]);
    }

    #[test]
    fn cheapest_density_first() {
        // densities: 0.4, 0.03, 0.05
        let instance = instance(&[(1, 1)], &[(5, 5, 10), (10, 10, 3), (4, 5, 1)]);
        assert_eq!(bin_preference_order(&instance), vec![1, 2, 0]);
    }

    #[test]
    fn density_ties_prefer_larger_bins() {
        // all have density 0.5
        let instance = instance(&[(1, 1)], &[(2, 4, 4), (4, 4, 8), (8, 1, 4), (2, 2, 2)]);
        assert_eq!(bin_preference_order(&instance), vec![2, 1, 0, 3]);
    }
}

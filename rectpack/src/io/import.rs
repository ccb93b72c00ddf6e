use crate::entities::{Bin, Instance, Item};
use crate::io::ext_repr::ExtInstance;
use anyhow::{Result, ensure};
use itertools::Itertools;

/// Imports an instance into the library.
/// External ids are 1-based and consecutive, internal ids are 0-based.
pub fn import(ext_instance: &ExtInstance) -> Result<Instance> {
    let items = {
        let ext_items = ext_instance.items.iter().sorted_by_key(|i| i.id).collect_vec();
        ensure!(
            ext_items.iter().enumerate().all(|(i, item)| item.id == i as u64 + 1),
            "All items should have consecutive IDs starting from 1. IDs: {:?}",
            ext_items.iter().map(|item| item.id).collect_vec()
        );
        ext_items
            .into_iter()
            .map(|ext_item| {
                ensure!(
                    ext_item.width > 0 && ext_item.height > 0,
                    "item {} has a non-positive dimension: {}x{}",
                    ext_item.id,
                    ext_item.width,
                    ext_item.height
                );
                ensure!(
                    ext_item.width.checked_mul(ext_item.height).is_some(),
                    "area of item {} does not fit in 64 bits: {}x{}",
                    ext_item.id,
                    ext_item.width,
                    ext_item.height
                );
                Ok(Item::new(
                    ext_item.id as usize - 1,
                    ext_item.width,
                    ext_item.height,
                ))
            })
            .collect::<Result<Vec<Item>>>()?
    };

    let bins = {
        let ext_bins = ext_instance.bins.iter().sorted_by_key(|b| b.id).collect_vec();
        ensure!(
            ext_bins.iter().enumerate().all(|(i, bin)| bin.id == i as u64 + 1),
            "All bins should have consecutive IDs starting from 1. IDs: {:?}",
            ext_bins.iter().map(|bin| bin.id).collect_vec()
        );
        ext_bins
            .into_iter()
            .map(|ext_bin| {
                ensure!(
                    ext_bin.width > 0 && ext_bin.height > 0,
                    "bin {} has a non-positive dimension: {}x{}",
                    ext_bin.id,
                    ext_bin.width,
                    ext_bin.height
                );
                ensure!(
                    ext_bin.width.checked_mul(ext_bin.height).is_some(),
                    "area of bin {} does not fit in 64 bits: {}x{}",
                    ext_bin.id,
                    ext_bin.width,
                    ext_bin.height
                );
                Ok(Bin::new(
                    ext_bin.id as usize - 1,
                    ext_bin.width,
                    ext_bin.height,
                    ext_bin.cost,
                ))
            })
            .collect::<Result<Vec<Bin>>>()?
    };

    ensure!(
        bins.iter()
            .try_fold(0u64, |total, bin| total.checked_add(bin.cost))
            .is_some(),
        "total cost of all bins does not fit in 64 bits"
    );

    Ok(Instance::new(items, bins))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ext_repr::{ExtBin, ExtItem};

    fn ext_instance(item_ids: &[u64], bin_ids: &[u64]) -> ExtInstance {
        ExtInstance {
            name: "test".to_string(),
            items: item_ids
                .iter()
                .map(|&id| ExtItem {
                    id,
                    width: id,
                    height: 2,
                })
                .collect(),
            bins: bin_ids
                .iter()
                .map(|&id| ExtBin {
                    id,
                    width: 10,
                    height: 10,
                    cost: id,
                })
                .collect(),
        }
    }

    #[test]
    fn converts_to_zero_based_ids() {
        let instance = import(&ext_instance(&[2, 1, 3], &[1, 2])).unwrap();
        assert_eq!(instance.items.len(), 3);
        assert_eq!(instance.item(1).width, 2);
        assert_eq!(instance.bin(1).cost, 2);
    }

    #[test]
    fn rejects_overflowing_areas_and_costs() {
        let mut huge_bin = ext_instance(&[1], &[1, 2]);
        huge_bin.bins[0].width = 5_000_000_000;
        huge_bin.bins[0].height = 5_000_000_000;
        assert!(import(&huge_bin).is_err());

        let mut huge_item = ext_instance(&[1], &[1]);
        huge_item.items[0].width = 1 << 32;
        huge_item.items[0].height = 1 << 32;
        assert!(import(&huge_item).is_err());

        let mut costly = ext_instance(&[1], &[1, 2]);
        costly.bins[0].cost = u64::MAX;
        assert!(import(&costly).is_err());
    }

    #[test]
    fn rejects_gaps_in_ids() {
        assert!(import(&ext_instance(&[1, 3], &[1])).is_err());
        assert!(import(&ext_instance(&[1], &[0, 1])).is_err());
    }
}

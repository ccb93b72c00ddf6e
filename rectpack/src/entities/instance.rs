use crate::entities::{Bin, Item};
use crate::util::assertions::instance_item_bin_ids_correct;

#[derive(Debug, Clone)]
/// Instance of the problem: a set of items to be packed into a set of bins with a usage cost.
pub struct Instance {
    /// The items to be packed, indexed by their id
    pub items: Vec<Item>,
    /// The bins available to pack the items in, indexed by their id
    pub bins: Vec<Bin>,
}

impl Instance {
    pub fn new(items: Vec<Item>, bins: Vec<Bin>) -> Self {
        assert!(instance_item_bin_ids_correct(&items, &bins));

        Self { items, bins }
    }

    pub fn item(&self, id: usize) -> &Item {
        &self.items[id]
    }

    pub fn bin(&self, id: usize) -> &Bin {
        &self.bins[id]
    }

    pub fn total_item_area(&self) -> u128 {
        self.items.iter().map(|item| item.area() as u128).sum()
    }
}

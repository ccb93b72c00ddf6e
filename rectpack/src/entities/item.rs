/// Rectangular item to be packed.
/// `width` and `height` are stored as defined in the input, orientation is only tracked by [`PlacedItem`](crate::entities::PlacedItem).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub id: usize,
    pub width: u64,
    pub height: u64,
}

impl Item {
    pub fn new(id: usize, width: u64, height: u64) -> Self {
        assert!(
            width > 0 && height > 0,
            "item {id} has a non-positive dimension: {width}x{height}"
        );
        assert!(
            width.checked_mul(height).is_some(),
            "area of item {id} overflows: {width}x{height}"
        );
        Item { id, width, height }
    }

    pub fn area(&self) -> u64 {
        self.width * self.height
    }

    /// Dimensions `(width, height)` of the item, rotated by 90° relative to the input if `rotated`.
    pub fn shape(&self, rotated: bool) -> (u64, u64) {
        match rotated {
            false => (self.width, self.height),
            true => (self.height, self.width),
        }
    }

    /// The rotation which brings the item in its canonical upright orientation (never wider than tall).
    pub fn upright_rotation(&self) -> bool {
        self.width > self.height
    }

    /// Dimensions of the item in its canonical upright orientation.
    pub fn upright_shape(&self) -> (u64, u64) {
        self.shape(self.upright_rotation())
    }

    /// True if the item fits inside a `width` x `height` rectangle in at least one orientation.
    pub fn fits_in(&self, width: u64, height: u64) -> bool {
        [false, true].into_iter().any(|rotated| {
            let (w, h) = self.shape(rotated);
            w <= width && h <= height
        })
    }
}

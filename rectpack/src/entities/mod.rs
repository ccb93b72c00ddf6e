mod bin;
mod instance;
mod item;
mod layout;
mod placed_item;
mod solution;

#[doc(inline)]
pub use bin::Bin;
#[doc(inline)]
pub use instance::Instance;
#[doc(inline)]
pub use item::Item;
#[doc(inline)]
pub use layout::Layout;
#[doc(inline)]
pub use placed_item::PlacedItem;
#[doc(inline)]
pub use solution::Solution;

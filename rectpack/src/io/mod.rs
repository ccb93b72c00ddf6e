/// External (serializable) representations of the entities within the library.
pub mod ext_repr;

/// Parser for the plain-text instance format
pub mod parser;

/// All logic for converting external representations into internal ones
mod import;

/// All logic for exporting internal representations into external ones
mod export;

/// All logic for creating SVG from [`Layout`](crate::entities::Layout)s
pub mod svg;

#[doc(inline)]
pub use export::{export, export_layout, export_placed_item, placement_lines};
#[doc(inline)]
pub use import::import;

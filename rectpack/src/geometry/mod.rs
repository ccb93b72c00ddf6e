pub mod geo_enums;
mod rect;

#[doc(inline)]
pub use rect::Rect;

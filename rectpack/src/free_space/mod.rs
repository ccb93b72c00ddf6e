mod free_rects;
mod guillotine;
mod maxrects;
pub mod ranker;
mod strategy;

#[doc(inline)]
pub use free_rects::FreeRects;
#[doc(inline)]
pub use guillotine::Guillotine;
#[doc(inline)]
pub use maxrects::MaxRects;
#[doc(inline)]
pub use strategy::PackingStrategy;
#[doc(inline)]
pub use strategy::StrategyKind;

/// Orders in which items are placed and bins are tried
pub mod order;

/// First-fit-decreasing driver for a single packing strategy
pub mod hbp_optimizer;

/// Runs both strategies and keeps the cheaper solution
pub mod selector;

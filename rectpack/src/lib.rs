//! Engine for packing axis-aligned rectangular items into a set of heterogeneous,
//! cost-carrying rectangular bins.

/// Geometric primitives and base algorithms
pub mod geometry;

/// Entities to model the rectangular bin packing problem
pub mod entities;

/// Bookkeeping of the free space inside a bin: free rectangles, placement ranking and the space-splitting strategies
pub mod free_space;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

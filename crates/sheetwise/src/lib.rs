//! # sheetwise
//!
//! Core imposition math: how many identical rectangular cards fit on a
//! rectangular sheet under fixed margins and inter-card gaps, evaluated
//! both unrotated and rotated 90°, with the higher count winning.
//!
//! The library is pure arithmetic - no I/O, no shared state, no caching.
//! Callers (the CLI, a renderer) feed in normalized parameters and consume
//! the decision record. Degenerate geometry is data, not an error: a card
//! that cannot fit simply counts zero.

pub mod formats;
pub mod geometry;
pub mod layout;
pub mod placement;

// Re-export common types at crate root for convenience.
pub use formats::SheetFormat;
pub use geometry::{Dimensions, Margins, Rect};
pub use layout::{
    compute_layouts, evaluate_orientation, LayoutDecision, LayoutParams, Orientation,
    OrientationLayout,
};
pub use placement::{Clearance, Placement};

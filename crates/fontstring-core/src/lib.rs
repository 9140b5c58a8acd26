//! # fontstring-core
//!
//! Geometry and value primitives for the fontstring layout library.
//!
//! This crate provides the small `Copy` value types shared by the parser and
//! the render engine:
//! - [`Transform`] - a 2×3 affine transform (scale/shear plus translation)
//! - [`Rect`] and [`Bounds`] - axis-aligned rectangles and an empty-aware
//!   bounds accumulator
//! - [`TextMetrics`] - the six-value string metric (bounding box plus
//!   cursor advance) reported by a font host, in millipoints
//! - [`Spacing`] - extra per-word and per-character cursor offsets injected
//!   during layout
//!
//! Nothing here performs I/O or holds references; everything is a flat value
//! so render-state snapshots stay cheap.

pub mod bounds;
pub mod metrics;
pub mod spacing;
pub mod transform;

// Re-exports for convenience
pub use bounds::Bounds;
pub use metrics::TextMetrics;
pub use spacing::Spacing;
pub use transform::{Rect, Transform};

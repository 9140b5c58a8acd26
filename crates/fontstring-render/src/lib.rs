//! # fontstring-render
//!
//! The stateful half of fontstring: a render context that walks a parsed
//! [`ControlSequence`](fontstring_parser::ControlSequence), applying each
//! record to mutable font/colour/underline/transform/cursor state, and
//! either measures extents (with wrap limits and split-point backtracking)
//! or emits paint calls through a host-supplied sink.
//!
//! The host implements [`FontHost`] to provide font lookup, string
//! metrics, glyph painting, underline drawing and the palette↔RGB colour
//! converters. The core itself never rasterises anything.

pub mod context;
pub mod engine;
pub mod error;
pub mod host;

// Re-exports for convenience
pub use context::{saturate, ColourSelection, FontContext, UNLIMITED};
pub use engine::{SizeOptions, SizeOutcome};
pub use error::{RenderError, RenderResult};
pub use host::FontHost;

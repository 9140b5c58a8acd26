//! Convenient glob import for the common types.
//!
//! ```rust
//! use fontstring::prelude::*;
//! ```

pub use crate::{
    Bounds, ColourSelection, Control, ControlKind, ControlParser, ControlSequence, FontContext,
    FontHost, Rect, RenderError, RenderResult, SizeOptions, SizeOutcome, Spacing, Span, Split,
    TextMetrics, Transform,
};

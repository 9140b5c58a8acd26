//! # fontstring
//!
//! A parser and layout engine for byte-encoded font control strings, the
//! in-band format used by the RISC OS Font Manager: printable text
//! interleaved with single-byte codes that switch fonts, change palette or
//! RGB colours, move the cursor, set underline metrics, replace the render
//! transform or embed hidden comments.
//!
//! The pipeline has three stages:
//!
//! - [`ControlParser`] decodes a byte buffer into a [`ControlSequence`] of
//!   typed [`Control`] records, each carrying its source byte span.
//! - [`ControlSequence::apply_spacing`] optionally expands the sequence
//!   with word/character spacing moves and split points.
//! - [`FontContext`] walks the records to measure extents
//!   ([`FontContext::size`], with wrap limits and split-point backtracking)
//!   or paint ([`FontContext::paint`]) through the [`FontHost`] hooks.
//!
//! Glyph rasterisation, font metrics and colour mapping stay on the host
//! side: implement [`FontHost`] for your font system and the engine drives
//! it.
//!
//! ## Example
//!
//! ```rust
//! use fontstring::prelude::*;
//!
//! // A host with a single fixed-cell 8x16 font.
//! struct CellHost;
//!
//! impl FontHost for CellHost {
//!     type Font = u8;
//!
//!     fn font_lookup(&self, handle: u8) -> RenderResult<u8> {
//!         Ok(handle)
//!     }
//!
//!     fn font_bounds(&self, _ctx: &FontContext<u8>, s: Option<&[u8]>) -> TextMetrics {
//!         let chars = s.map_or(1, <[u8]>::len) as f64;
//!         TextMetrics::new(0.0, 0.0, chars * 8.0, 16.0, chars * 8.0, 0.0)
//!     }
//!
//!     fn font_paint(&mut self, _ctx: &FontContext<u8>, _s: &[u8]) {}
//!     fn draw_underline(&mut self, _ctx: &FontContext<u8>, _r: Rect) {}
//! }
//!
//! let mut parser = ControlParser::new();
//! parser.parse(b"\x1a\x01hello world", None);
//!
//! let host = CellHost;
//! let mut context = FontContext::new();
//! let outcome = context
//!     .size(
//!         &host,
//!         parser.sequence(),
//!         &SizeOptions::default()
//!             .with_limits(64.0, 0.0)
//!             .with_split(Split::At(b' ')),
//!     )
//!     .unwrap();
//!
//! // "hello " fits in 64 millipoints; the wrap point is after the space.
//! assert_eq!(outcome, SizeOutcome { index: 8, splits: 1 });
//! ```

pub mod prelude;

// Re-export geometry and value types
pub use fontstring_core::{Bounds, Rect, Spacing, TextMetrics, Transform};

// Re-export the wire format
pub use fontstring_parser::{
    opcodes, Control, ControlKind, ControlParser, ControlSequence, Span, Split, MAX_PARSE_LENGTH,
};

// Re-export the render engine
pub use fontstring_render::{
    saturate, ColourSelection, FontContext, FontHost, RenderError, RenderResult, SizeOptions,
    SizeOutcome, UNLIMITED,
};

//! # fontstring-parser
//!
//! The byte-encoded font control-sequence wire format.
//!
//! A font string mixes printable characters with single-byte control codes
//! that switch font, change colour, move the cursor, set underline metrics,
//! replace the render transform or embed hidden comments. This is the
//! in-band format accepted by the RISC OS Font Manager's paint call;
//! [`opcodes`] enumerates the codes.
//!
//! [`ControlParser`] decodes a byte buffer into a [`ControlSequence`] of
//! typed [`Control`] records, each carrying the byte span it was decoded
//! from. The sequence can then be expanded with word/character spacing and
//! split points ([`ControlSequence::apply_spacing`]) before being measured
//! or painted by `fontstring-render`.

pub mod control;
pub mod opcodes;
pub mod parser;
pub mod sequence;

// Re-exports for convenience
pub use control::{Control, ControlKind, Span};
pub use parser::{ControlParser, MAX_PARSE_LENGTH};
pub use sequence::{ControlSequence, Split};

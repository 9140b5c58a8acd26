//! Control-code constants for the font string format.
//!
//! Codes below 32 are controls; byte values of 32 and above are printable
//! characters. Multi-byte operands are little-endian.

// ── Terminators ─────────────────────────────────────────────────────────
pub const NUL: u8 = 0;
pub const LF: u8 = 10;
pub const CR: u8 = 13;

// ── Cursor movement ─────────────────────────────────────────────────────
pub const MOVE_X: u8 = 9; // 3-byte unsigned x delta
pub const MOVE_Y: u8 = 11; // 3-byte unsigned y delta

// ── Colour ──────────────────────────────────────────────────────────────
pub const GCOL_SINGLE: u8 = 17; // one byte; bit 7 selects background
pub const GCOL_PAIR: u8 = 18; // bg, fg, offset bytes
pub const RGB_PAIR: u8 = 19; // bg r,g,b then fg r,g,b then offset

// ── Metadata and metrics ────────────────────────────────────────────────
pub const COMMENT: u8 = 21; // bytes until any value < 32
pub const UNDERLINE: u8 = 25; // signed position byte, thickness byte
pub const FONT: u8 = 26; // one byte font handle

// ── Transform ───────────────────────────────────────────────────────────
pub const MATRIX: u8 = 27; // word-aligned; four 16.16 words
pub const MATRIX_TRANSLATED: u8 = 28; // as MATRIX plus two raw signed words

/// First printable byte value.
pub const FIRST_PRINTABLE: u8 = 32;

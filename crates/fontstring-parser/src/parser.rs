//! The font control-sequence parser.
//!
//! Decodes a byte buffer into typed [`Control`] records via a movable
//! cursor. End of input is handled in-band: reading past the buffer (or the
//! enforced length cap) yields a zero byte, which the dispatch loop treats
//! like an explicit terminator. Tests rely on the cursor still advancing on
//! those overshoot reads.

use fontstring_core::Transform;

use crate::control::{Control, ControlKind, Span};
use crate::opcodes;
use crate::sequence::ControlSequence;

/// Hard cap on how many bytes a single `parse` call will consume.
pub const MAX_PARSE_LENGTH: usize = 1 << 20;

/// Parser for font control strings.
///
/// The parser accumulates records across [`parse`](ControlParser::parse)
/// calls; [`clear`](ControlParser::clear) drops the sequence,
/// [`reset`](ControlParser::reset) keeps it while discarding the cursor and
/// buffer.
#[derive(Debug, Default)]
pub struct ControlParser {
    sequence: ControlSequence,
    data: Vec<u8>,
    index: usize,
    max_length: usize,
}

impl ControlParser {
    pub fn new() -> Self {
        ControlParser::default()
    }

    /// The accumulated record sequence.
    pub fn sequence(&self) -> &ControlSequence {
        &self.sequence
    }

    /// Move the accumulated sequence out, leaving the parser cleared.
    pub fn take_sequence(&mut self) -> ControlSequence {
        std::mem::take(&mut self.sequence)
    }

    /// Cursor position: byte offset of the terminator (or enforced cap)
    /// after a parse.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Drop the sequence and reset the parser.
    pub fn clear(&mut self) {
        self.sequence = ControlSequence::new();
        self.reset();
    }

    /// Reset cursor and buffer, keeping the current sequence.
    pub fn reset(&mut self) {
        self.data.clear();
        self.index = 0;
        self.max_length = 0;
    }

    /// Move the cursor back one byte.
    fn step_back(&mut self) {
        if self.index > 0 {
            self.index -= 1;
        }
    }

    /// Read one byte, advancing the cursor.
    ///
    /// At or past the end of the buffer (or the length cap) this returns 0
    /// and still advances, so the dispatch loop sees an in-band terminator.
    fn read_byte(&mut self) -> u8 {
        if self.index >= self.data.len() || self.index >= self.max_length {
            self.index += 1;
            return 0;
        }
        let b = self.data[self.index];
        self.index += 1;
        b
    }

    /// Read an unsigned little-endian word, or `None` (without advancing)
    /// when fewer than 4 bytes remain inside the buffer and the cap.
    #[inline]
    fn read_word(&mut self) -> Option<u32> {
        let limit = self.data.len().min(self.max_length);
        if self.index + 4 > limit {
            return None;
        }
        let bytes = [
            self.data[self.index],
            self.data[self.index + 1],
            self.data[self.index + 2],
            self.data[self.index + 3],
        ];
        self.index += 4;
        Some(u32::from_le_bytes(bytes))
    }

    /// Read a signed little-endian word; see [`read_word`](Self::read_word).
    #[inline]
    fn read_signedword(&mut self) -> Option<i32> {
        self.read_word().map(|v| v as i32)
    }

    /// Read a 3-byte little-endian unsigned move delta.
    fn read_delta(&mut self) -> i32 {
        let raw = u32::from(self.read_byte())
            | u32::from(self.read_byte()) << 8
            | u32::from(self.read_byte()) << 16;
        raw as i32
    }

    /// Read a transform: four 16.16 fixed-point words, then two raw signed
    /// words of translation when `with_translation` is set.
    fn read_matrix(&mut self, with_translation: bool) -> Option<Transform> {
        let a = self.read_signedword()? as f64 / 65536.0;
        let b = self.read_signedword()? as f64 / 65536.0;
        let c = self.read_signedword()? as f64 / 65536.0;
        let d = self.read_signedword()? as f64 / 65536.0;
        let (e, f) = if with_translation {
            (
                self.read_signedword()? as f64,
                self.read_signedword()? as f64,
            )
        } else {
            (0.0, 0.0)
        };
        Some(Transform::new(a, b, c, d, e, f))
    }

    /// Advance the cursor to the next word boundary.
    fn align(&mut self) {
        self.index = (self.index + 3) & !3;
    }

    /// Parse a font control string, appending records to the sequence.
    ///
    /// The cursor is left on the terminator byte, or at the enforced
    /// `max_length` when the input was cut short. `max_length` of `None`
    /// (or anything at or above [`MAX_PARSE_LENGTH`]) clamps to the cap.
    pub fn parse(&mut self, data: &[u8], max_length: Option<usize>) {
        self.data = data.to_vec();
        self.max_length = match max_length {
            Some(n) if n < MAX_PARSE_LENGTH => n,
            _ => MAX_PARSE_LENGTH,
        };
        self.index = 0;

        loop {
            let start = self.index;
            let b = self.read_byte();
            match b {
                opcodes::NUL | opcodes::LF | opcodes::CR => {
                    // Leave the cursor pointing at the terminator.
                    self.step_back();
                    break;
                }

                opcodes::MOVE_X | opcodes::MOVE_Y => {
                    let delta = self.read_delta();
                    let (dx, dy) = if b == opcodes::MOVE_X {
                        (delta, 0)
                    } else {
                        (0, delta)
                    };
                    log::trace!("move dx={dx} dy={dy}");
                    self.emit(start, ControlKind::Move { dx, dy });
                }

                opcodes::GCOL_SINGLE => {
                    let value = self.read_byte();
                    let gcol = value & 0x7f;
                    let (fg, bg) = if value & 0x80 != 0 {
                        (None, Some(gcol))
                    } else {
                        (Some(gcol), None)
                    };
                    log::trace!("gcol fg={fg:?} bg={bg:?}");
                    self.emit(
                        start,
                        ControlKind::Gcol {
                            fg,
                            bg,
                            offset: None,
                        },
                    );
                }

                opcodes::GCOL_PAIR => {
                    let bg = self.read_byte();
                    let fg = self.read_byte();
                    let offset = self.read_byte();
                    log::trace!("gcol bg={bg} fg={fg} offset={offset}");
                    self.emit(
                        start,
                        ControlKind::Gcol {
                            fg: Some(fg),
                            bg: Some(bg),
                            offset: Some(offset),
                        },
                    );
                }

                opcodes::RGB_PAIR => {
                    let bg = self.read_rgb();
                    let fg = self.read_rgb();
                    let offset = self.read_byte();
                    log::trace!("rgb bg=&{bg:08x} fg=&{fg:08x} offset={offset}");
                    self.emit(
                        start,
                        ControlKind::Rgb {
                            fg: Some(fg),
                            bg: Some(bg),
                            offset: Some(offset),
                        },
                    );
                }

                opcodes::COMMENT => {
                    let mut comment = Vec::new();
                    loop {
                        let b = self.read_byte();
                        if b < opcodes::FIRST_PRINTABLE {
                            // The terminator byte is part of the record's
                            // span but not its payload.
                            break;
                        }
                        comment.push(b);
                    }
                    log::trace!("comment \"{}\"", comment.escape_ascii());
                    self.emit(start, ControlKind::Comment(comment));
                }

                opcodes::UNDERLINE => {
                    let pos = self.read_byte() as i8;
                    let thickness = self.read_byte();
                    log::trace!("underline pos={pos} thickness={thickness}");
                    self.emit(start, ControlKind::Underline { pos, thickness });
                }

                opcodes::FONT => {
                    let handle = self.read_byte();
                    log::trace!("font handle={handle}");
                    self.emit(start, ControlKind::Font { handle });
                }

                opcodes::MATRIX | opcodes::MATRIX_TRANSLATED => {
                    self.align();
                    match self.read_matrix(b == opcodes::MATRIX_TRANSLATED) {
                        Some(matrix) => {
                            log::trace!("matrix {matrix}");
                            self.emit(start, ControlKind::Matrix(matrix));
                        }
                        // Truncated operand words: drop the record and stop.
                        None => break,
                    }
                }

                b if b < opcodes::FIRST_PRINTABLE => {
                    // Unknown control; stop with the byte consumed.
                    break;
                }

                b => self.push_printable(start, b),
            }
        }
    }

    /// Read one packed RGB operand: three channel bytes into bits 8..31,
    /// constant 0x10 low byte.
    fn read_rgb(&mut self) -> u32 {
        u32::from(self.read_byte()) << 8
            | u32::from(self.read_byte()) << 16
            | u32::from(self.read_byte()) << 24
            | 0x10
    }

    fn emit(&mut self, start: usize, kind: ControlKind) {
        self.sequence
            .push(Control::new(Span::new(start, self.index), kind));
    }

    /// Append a printable byte, coalescing with a preceding text record.
    fn push_printable(&mut self, start: usize, byte: u8) {
        if let Some(Control {
            span,
            kind: ControlKind::Text(text),
        }) = self.sequence.last_mut()
        {
            text.push(byte);
            span.end = self.index;
            return;
        }
        self.sequence
            .push(Control::text(Span::new(start, self.index), vec![byte]));
    }

    /// The concatenated printable content of the sequence.
    pub fn simple_string(&self) -> Vec<u8> {
        let mut acc = Vec::new();
        for control in &self.sequence {
            if let ControlKind::Text(text) = &control.kind {
                acc.extend_from_slice(text);
            }
        }
        acc
    }

    /// How many bytes of the input were consumed by control codes rather
    /// than printable content.
    ///
    /// Saturates at zero when the cursor was reset while the sequence was
    /// kept.
    pub fn nskipped_controls(&self) -> usize {
        self.index.saturating_sub(self.simple_string().len())
    }
}

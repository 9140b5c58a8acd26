//! Typed control records with source provenance.

use std::fmt;

use fontstring_core::Transform;

/// A half-open byte range in the parsed buffer.
///
/// `start` is the offset of the record's first byte, `end` the cursor
/// position immediately after decoding it. The synthetic move records
/// injected by spacing expansion carry zero-width spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// The payload of a control record.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlKind {
    /// A run of printable bytes.
    Text(Vec<u8>),
    /// Advance the cursor without painting.
    Move { dx: i32, dy: i32 },
    /// Change palette-indexed colours. Absent fields leave the context
    /// untouched.
    Gcol {
        fg: Option<u8>,
        bg: Option<u8>,
        offset: Option<u8>,
    },
    /// Change RGB colours (packed `0x00BBGGRR << 8 | 0x10`).
    Rgb {
        fg: Option<u32>,
        bg: Option<u32>,
        offset: Option<u8>,
    },
    /// Set underline position and thickness in 1/256ths of the font cell
    /// height. Both zero disables underlining.
    Underline { pos: i8, thickness: u8 },
    /// Switch the active font.
    Font { handle: u8 },
    /// Replace the render transform.
    Matrix(Transform),
    /// Hidden inline metadata; ignored when painting.
    Comment(Vec<u8>),
    /// Synthetic per-character spacing move, generated by spacing
    /// expansion. Draws underline across the gap when painting.
    MoveChar { dx: i32, dy: i32 },
    /// Synthetic per-word spacing move, generated by spacing expansion.
    MoveSpace { dx: i32, dy: i32 },
}

/// A decoded control record: payload plus the byte span it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    pub span: Span,
    pub kind: ControlKind,
}

impl Control {
    pub fn new(span: Span, kind: ControlKind) -> Self {
        Control { span, kind }
    }

    /// A printable-run record.
    pub fn text(span: Span, bytes: Vec<u8>) -> Self {
        Control::new(span, ControlKind::Text(bytes))
    }

    /// The printable payload, if this is a text record.
    pub fn as_text(&self) -> Option<&[u8]> {
        match &self.kind {
            ControlKind::Text(bytes) => Some(bytes),
            _ => None,
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ControlKind::Text(bytes) => {
                write!(f, "Text({}, \"{}\")", self.span, bytes.escape_ascii())
            }
            ControlKind::Move { dx, dy } => write!(f, "Move({}, dx={dx}, dy={dy})", self.span),
            ControlKind::Gcol { fg, bg, offset } => {
                write!(f, "Gcol({}", self.span)?;
                if let Some(bg) = bg {
                    write!(f, ", bg={bg}")?;
                }
                if let Some(fg) = fg {
                    write!(f, ", fg={fg}")?;
                }
                if let Some(offset) = offset {
                    write!(f, ", offset={offset}")?;
                }
                write!(f, ")")
            }
            ControlKind::Rgb { fg, bg, offset } => {
                write!(f, "Rgb({}", self.span)?;
                if let Some(bg) = bg {
                    write!(f, ", bg=&{bg:08x}")?;
                }
                if let Some(fg) = fg {
                    write!(f, ", fg=&{fg:08x}")?;
                }
                if let Some(offset) = offset {
                    write!(f, ", offset={offset}")?;
                }
                write!(f, ")")
            }
            ControlKind::Underline { pos, thickness } => {
                if *thickness == 0 {
                    write!(f, "Underline({}, off)", self.span)
                } else {
                    write!(
                        f,
                        "Underline({}, pos={pos}, thickness={thickness})",
                        self.span
                    )
                }
            }
            ControlKind::Font { handle } => write!(f, "Font({}, handle={handle})", self.span),
            ControlKind::Matrix(m) => write!(f, "Matrix({}, {m})", self.span),
            ControlKind::Comment(bytes) => {
                write!(f, "Comment({}, \"{}\")", self.span, bytes.escape_ascii())
            }
            ControlKind::MoveChar { dx, dy } => {
                write!(f, "MoveChar({}, dx={dx}, dy={dy})", self.span)
            }
            ControlKind::MoveSpace { dx, dy } => {
                write!(f, "MoveSpace({}, dx={dx}, dy={dy})", self.span)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len() {
        let s = Span::new(3, 9);
        assert_eq!(s.len(), 6);
        assert!(!s.is_empty());
        assert!(Span::new(4, 4).is_empty());
    }

    #[test]
    fn test_display() {
        let c = Control::text(Span::new(0, 5), b"hello".to_vec());
        assert_eq!(c.to_string(), "Text(0..5, \"hello\")");

        let c = Control::new(
            Span::new(0, 2),
            ControlKind::Gcol {
                fg: Some(7),
                bg: None,
                offset: None,
            },
        );
        assert_eq!(c.to_string(), "Gcol(0..2, fg=7)");

        let c = Control::new(
            Span::new(0, 3),
            ControlKind::Underline {
                pos: 0,
                thickness: 0,
            },
        );
        assert_eq!(c.to_string(), "Underline(0..3, off)");
    }
}

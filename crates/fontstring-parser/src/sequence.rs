//! Record sequences and the split/spacing expansion passes.

use std::fmt;
use std::slice;

use fontstring_core::Spacing;

use crate::control::{Control, ControlKind, Span};

/// Where text records may be broken during layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    /// Break at every occurrence of this byte; the byte itself becomes its
    /// own single-byte text record between the pieces.
    At(u8),
    /// Break between every byte (exact character-wise truncation).
    Every,
}

impl Split {
    /// Whether a text payload counts as one split event for this mode.
    pub fn matches(&self, text: &[u8]) -> bool {
        match *self {
            Split::At(byte) => text == [byte],
            Split::Every => true,
        }
    }
}

/// An ordered, append-only collection of control records.
///
/// Produced by [`ControlParser`](crate::ControlParser); consumed one or
/// more times by the render engine. [`apply_spacing`] derives the expanded
/// sequences used for wrapped or letter-spaced layout.
///
/// [`apply_spacing`]: ControlSequence::apply_spacing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlSequence {
    controls: Vec<Control>,
}

impl ControlSequence {
    pub fn new() -> Self {
        ControlSequence::default()
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn push(&mut self, control: Control) {
        self.controls.push(control);
    }

    pub fn get(&self, index: usize) -> Option<&Control> {
        self.controls.get(index)
    }

    pub fn last_mut(&mut self) -> Option<&mut Control> {
        self.controls.last_mut()
    }

    pub fn iter(&self) -> slice::Iter<'_, Control> {
        self.controls.iter()
    }

    /// Expand the sequence for layout.
    ///
    /// Two passes over the records:
    ///
    /// 1. If `split` is set, text records are broken at the split points
    ///    (delimiters become their own single-byte text records, except in
    ///    [`Split::Every`] mode). Spans stay contiguous within the original
    ///    record's span.
    /// 2. If `spacing` has any non-zero offset, each text record is further
    ///    broken (per byte when a character offset is set, per
    ///    space-terminated word otherwise) and synthetic
    ///    [`MoveChar`](ControlKind::MoveChar) /
    ///    [`MoveSpace`](ControlKind::MoveSpace) records with zero-width
    ///    spans are injected after the pieces.
    ///
    /// With no split and zero spacing this yields the records unchanged.
    pub fn apply_spacing(&self, spacing: Option<Spacing>, split: Option<Split>) -> Vec<Control> {
        let controls = self.split_pass(split);
        match spacing {
            Some(spacing) if !spacing.is_zero() => spacing_pass(controls, spacing),
            _ => controls,
        }
    }

    /// First expansion pass: break text records at the split points.
    fn split_pass(&self, split: Option<Split>) -> Vec<Control> {
        let mut out = Vec::with_capacity(self.controls.len());
        for control in &self.controls {
            match (&control.kind, split) {
                (ControlKind::Text(text), Some(Split::Every)) if text.len() > 1 => {
                    for (i, &byte) in text.iter().enumerate() {
                        let start = control.span.start + i;
                        out.push(Control::text(Span::new(start, start + 1), vec![byte]));
                    }
                }
                (ControlKind::Text(text), Some(Split::At(delim))) => {
                    let parts: Vec<&[u8]> = text.split(|&b| b == delim).collect();
                    if parts.len() == 1 {
                        out.push(control.clone());
                        continue;
                    }
                    let mut offset = control.span.start;
                    let last = parts.len() - 1;
                    for (i, part) in parts.iter().enumerate() {
                        if !part.is_empty() {
                            out.push(Control::text(
                                Span::new(offset, offset + part.len()),
                                part.to_vec(),
                            ));
                        }
                        offset += part.len();
                        if i != last {
                            out.push(Control::text(Span::new(offset, offset + 1), vec![delim]));
                            offset += 1;
                        }
                    }
                }
                _ => out.push(control.clone()),
            }
        }
        out
    }
}

impl<'a> IntoIterator for &'a ControlSequence {
    type Item = &'a Control;
    type IntoIter = slice::Iter<'a, Control>;

    fn into_iter(self) -> Self::IntoIter {
        self.controls.iter()
    }
}

impl fmt::Display for ControlSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ControlSequence({} records)", self.controls.len())
    }
}

/// Second expansion pass: break text records per word or per character and
/// inject the spacing moves.
fn spacing_pass(controls: Vec<Control>, spacing: Spacing) -> Vec<Control> {
    let mut out = Vec::with_capacity(controls.len());
    for control in controls {
        let text = match &control.kind {
            ControlKind::Text(text) => text.clone(),
            _ => {
                out.push(control);
                continue;
            }
        };

        if spacing.has_char_offset() {
            expand_chars(&mut out, control.span, &text, spacing);
        } else {
            expand_words(&mut out, control.span, &text, spacing);
        }
    }
    out
}

/// Per-character expansion: one text record per byte, each followed by a
/// `MoveChar`; single spaces additionally get a `MoveSpace` when word
/// offsets are set.
fn expand_chars(out: &mut Vec<Control>, span: Span, text: &[u8], spacing: Spacing) {
    for (i, &byte) in text.iter().enumerate() {
        let start = span.start + i;
        let end = start + 1;
        out.push(Control::text(Span::new(start, end), vec![byte]));
        out.push(Control::new(
            Span::new(end, end),
            ControlKind::MoveChar {
                dx: spacing.char_dx,
                dy: spacing.char_dy,
            },
        ));
        if byte == b' ' && spacing.has_word_offset() {
            out.push(Control::new(
                Span::new(end, end),
                ControlKind::MoveSpace {
                    dx: spacing.word_dx,
                    dy: spacing.word_dy,
                },
            ));
        }
    }
}

/// Per-word expansion: split at spaces, keeping the trailing space on each
/// non-final word; every piece ending in a space is followed by a
/// `MoveSpace`.
fn expand_words(out: &mut Vec<Control>, span: Span, text: &[u8], spacing: Spacing) {
    let parts: Vec<&[u8]> = text.split(|&b| b == b' ').collect();
    let last = parts.len() - 1;
    let mut offset = span.start;
    for (i, part) in parts.iter().enumerate() {
        let mut piece = part.to_vec();
        if i != last {
            piece.push(b' ');
        }
        if piece.is_empty() {
            continue;
        }
        let end = offset + piece.len();
        let ends_with_space = piece.last() == Some(&b' ');
        out.push(Control::text(Span::new(offset, end), piece));
        if ends_with_space {
            out.push(Control::new(
                Span::new(end, end),
                ControlKind::MoveSpace {
                    dx: spacing.word_dx,
                    dy: spacing.word_dy,
                },
            ));
        }
        offset = end;
    }
}

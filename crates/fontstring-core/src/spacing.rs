//! Word and character spacing offsets.

/// Extra cursor offsets injected between the pieces of a string during
/// layout.
///
/// Word offsets apply at space characters, character offsets between every
/// character. All four default to zero, which disables the spacing
/// expansion entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spacing {
    /// Offset added after each word, x component.
    pub word_dx: i32,
    /// Offset added after each word, y component.
    pub word_dy: i32,
    /// Offset added after each character, x component.
    pub char_dx: i32,
    /// Offset added after each character, y component.
    pub char_dy: i32,
}

impl Spacing {
    /// No spacing at all.
    pub const fn none() -> Self {
        Spacing {
            word_dx: 0,
            word_dy: 0,
            char_dx: 0,
            char_dy: 0,
        }
    }

    /// Spacing applied at word boundaries only.
    pub const fn words(dx: i32, dy: i32) -> Self {
        Spacing {
            word_dx: dx,
            word_dy: dy,
            char_dx: 0,
            char_dy: 0,
        }
    }

    /// Spacing applied between every character.
    pub const fn chars(dx: i32, dy: i32) -> Self {
        Spacing {
            word_dx: 0,
            word_dy: 0,
            char_dx: dx,
            char_dy: dy,
        }
    }

    /// Set the word offsets.
    pub fn with_words(mut self, dx: i32, dy: i32) -> Self {
        self.word_dx = dx;
        self.word_dy = dy;
        self
    }

    /// Set the character offsets.
    pub fn with_chars(mut self, dx: i32, dy: i32) -> Self {
        self.char_dx = dx;
        self.char_dy = dy;
        self
    }

    /// Whether every offset is zero.
    pub fn is_zero(&self) -> bool {
        *self == Spacing::none()
    }

    /// Whether any per-character offset is set.
    pub fn has_char_offset(&self) -> bool {
        self.char_dx != 0 || self.char_dy != 0
    }

    /// Whether any per-word offset is set.
    pub fn has_word_offset(&self) -> bool {
        self.word_dx != 0 || self.word_dy != 0
    }
}

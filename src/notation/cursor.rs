//! Read-only scanning over notation text.
//!
//! A [`Cursor`] never moves. Callers pass a byte position in and get a new
//! position back, so each parser function can report exactly how much it
//! consumed.

/// Whitespace allowed around and between components.
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

/// Skippable inside a compound body: whitespace or `/`.
pub fn is_separator(c: char) -> bool {
    is_space(c) || c == '/'
}

/// Letters, digits, and underscore (ASCII only).
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    text: &'a str,
}

impl<'a> Cursor<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Character starting at byte `pos`, or `None` past the end.
    #[must_use]
    pub fn char_at(&self, pos: usize) -> Option<char> {
        self.text.get(pos..).and_then(|rest| rest.chars().next())
    }

    /// First position at or after `pos` whose character fails `pred`.
    #[must_use]
    pub fn skip_while(&self, pos: usize, pred: impl Fn(char) -> bool) -> usize {
        let mut end = pos;
        while let Some(c) = self.char_at(end) {
            if !pred(c) {
                break;
            }
            end += c.len_utf8();
        }
        end
    }

    /// End of the longest run of word characters starting at `pos`.
    #[must_use]
    pub fn word_end(&self, pos: usize) -> usize {
        self.skip_while(pos, is_word_char)
    }

    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        self.text.get(start..end).unwrap_or_default()
    }
}

use crate::error::{TextLoc, TextcombError};

/// Cursor over borrowed text input
///
/// A cursor is a position in the input string. It only ever moves forward,
/// one character at a time or by the byte length of a known match, and it
/// never mutates the underlying text. Cursors are `Copy`: combinators save
/// them freely and retry alternatives from the saved position.
#[derive(Debug, Copy, Clone)]
pub enum TextCursor<'text> {
    Valid { text: &'text str, position: usize },
    EndOfText { text: &'text str },
}

impl<'text> TextCursor<'text> {
    pub fn new(text: &'text str) -> Self {
        if text.is_empty() {
            return TextCursor::EndOfText { text };
        }
        TextCursor::Valid { text, position: 0 }
    }

    fn at(text: &'text str, position: usize) -> Self {
        if position >= text.len() {
            TextCursor::EndOfText { text }
        } else {
            TextCursor::Valid { text, position }
        }
    }

    /// Get the character at the current cursor position
    ///
    /// Returns an error if the cursor is positioned at the end of the text.
    pub fn value(&self) -> Result<char, TextcombError<'text>> {
        match self {
            TextCursor::Valid { text, position } => match text[*position..].chars().next() {
                Some(ch) => Ok(ch),
                None => Err(TextcombError::EndOfInput(TextLoc::new(text, *position))),
            },
            TextCursor::EndOfText { text } => {
                Err(TextcombError::EndOfInput(TextLoc::new(text, text.len())))
            }
        }
    }

    /// Advance past the character at the current position
    ///
    /// A cursor at the end of the text stays at the end. Multi-byte
    /// characters are skipped as a whole, never split.
    pub fn advance(self) -> Self {
        match self {
            TextCursor::Valid { text, position } => {
                let width = text[position..].chars().next().map_or(0, char::len_utf8);
                Self::at(text, position + width)
            }
            TextCursor::EndOfText { text } => TextCursor::EndOfText { text },
        }
    }

    /// Advance by `bytes` bytes
    ///
    /// `position + bytes` must lie on a character boundary; callers pass the
    /// byte length of a prefix they have already matched.
    pub fn advance_bytes(self, bytes: usize) -> Self {
        match self {
            TextCursor::Valid { text, position } => Self::at(text, position + bytes),
            TextCursor::EndOfText { text } => TextCursor::EndOfText { text },
        }
    }

    /// The unconsumed suffix of the input
    pub fn rest(&self) -> &'text str {
        match self {
            TextCursor::Valid { text, position } => &text[*position..],
            TextCursor::EndOfText { text } => &text[text.len()..],
        }
    }

    /// Check if the cursor is at the end of the text
    pub fn eos(&self) -> bool {
        matches!(self, TextCursor::EndOfText { .. })
    }

    /// Get the current byte position in the input
    pub fn position(&self) -> usize {
        match self {
            TextCursor::Valid { position, .. } => *position,
            TextCursor::EndOfText { text } => text.len(),
        }
    }

    /// Get the full input text without consuming the cursor
    pub fn source(&self) -> &'text str {
        match self {
            TextCursor::Valid { text, .. } => text,
            TextCursor::EndOfText { text } => text,
        }
    }

    /// The location of the cursor, for error reporting
    pub fn loc(&self) -> TextLoc<'text> {
        TextLoc::new(self.source(), self.position())
    }
}

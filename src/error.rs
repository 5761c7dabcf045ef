use std::borrow::Cow;
use thiserror::Error;

/// Location of a failure in the input text
///
/// Carries the full input plus the byte position where the failing parser
/// stood, so a failure can report both a readable position and the input
/// slice it was given.
#[derive(Debug, Copy, Clone)]
pub struct TextLoc<'text> {
    text: &'text str,
    /// Byte position in `text` where the parser encountered the failure
    position: usize,
}

#[derive(Debug)]
struct ReadablePosition {
    line: usize,
    offset: usize,
}

impl<'text> TextLoc<'text> {
    pub fn new(text: &'text str, position: usize) -> Self {
        Self { text, position }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// The input slice the failing parser was given
    pub fn remaining(&self) -> &'text str {
        &self.text[self.position..]
    }

    /// Calculate line number and character offset within that line
    ///
    /// Note: we report character offset rather than a column number because
    /// column calculation depends on rendering context (tab width, wrapping,
    /// zero-width characters). Character offset within the line is
    /// unambiguous and useful for debugging.
    fn readable_position(&self) -> ReadablePosition {
        let before = &self.text[..self.position];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let offset = self.text[line_start..self.position].chars().count();
        ReadablePosition { line, offset }
    }

    /// Get lines of context around the failure position
    ///
    /// Returns up to 2 lines before and after the failing line, with a
    /// pointer under the failure position.
    fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let mut lines = Vec::new();

        for (index, content) in self.text.lines().enumerate() {
            let number = index + 1;
            if number + 2 < pos.line || number > pos.line + 2 {
                continue;
            }
            let prefix = if number == pos.line {
                format!("  > {} | ", number)
            } else {
                format!("    {} | ", number)
            };
            lines.push(format!("{}{}", prefix, content));

            if number == pos.line {
                let pointer_offset = prefix.chars().count() + pos.offset;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }

    fn render(&self, message: &str) -> String {
        let pos = self.readable_position();
        let mut out = format!(
            "{} at line {}, offset {}\n",
            message, pos.line, pos.offset
        );
        for line in self.context_lines() {
            out.push('\n');
            out.push_str(&line);
        }
        out
    }
}

fn render(loc: &TextLoc<'_>, message: impl AsRef<str>) -> String {
    loc.render(message.as_ref())
}

/// Failure value for all parsers
///
/// Every failure carries the input slice at the failure point and a
/// human-readable message. The taxonomy is deliberately flat: diagnostics are
/// for people reading them, not for programmatic branching.
#[derive(Debug, Error)]
pub enum TextcombError<'text> {
    /// A read past the end of the remaining input
    #[error("{}", render(.0, "input was empty"))]
    EndOfInput(TextLoc<'text>),
    /// A parser rejected the input at `loc`
    #[error("{}", render(.loc, .message))]
    Syntax {
        message: Cow<'static, str>,
        loc: TextLoc<'text>,
    },
}

impl<'text> TextcombError<'text> {
    pub fn syntax(message: impl Into<Cow<'static, str>>, loc: TextLoc<'text>) -> Self {
        TextcombError::Syntax {
            message: message.into(),
            loc,
        }
    }

    /// Returns the location where this failure occurred
    pub fn loc(&self) -> TextLoc<'text> {
        match self {
            TextcombError::EndOfInput(loc) => *loc,
            TextcombError::Syntax { loc, .. } => *loc,
        }
    }

    /// Returns the byte position where this failure occurred
    pub fn position(&self) -> usize {
        self.loc().position()
    }

    /// The input slice the failing parser was given
    pub fn remaining(&self) -> &'text str {
        self.loc().remaining()
    }
}

//! Token-stream iterator over a source string.
//!
//! [`Tokenizer`] drives [`next_token`] until EOF and yields each token with
//! its byte span. Whitespace between tokens is skipped, so spans never cover
//! leading whitespace.

use std::ops::Range;

use tracing::trace;

use crate::cursor::Cursor;
use crate::scanner::next_token;
use crate::Category;

/// One classified token: a category and a half-open byte range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub category: Category,
    /// Byte offset of the first char.
    pub start: usize,
    /// Byte offset one past the last char.
    pub end: usize,
}

impl Token {
    /// Length in bytes. Always non-zero for tokens produced by [`Tokenizer`].
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The token's text within `source`.
    ///
    /// `source` must be the string the token was produced from.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range()]
    }
}

/// Iterator over the tokens of a source string.
///
/// Never yields a token for trailing whitespace, and stops at EOF.
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::from_cursor(Cursor::new(source))
    }

    /// Resume tokenizing from an existing cursor position.
    ///
    /// Token offsets stay relative to the start of the cursor's source.
    pub fn from_cursor(cursor: Cursor<'a>) -> Self {
        Tokenizer { cursor }
    }

    /// The cursor as it stands after the last yielded token.
    pub fn cursor(&self) -> Cursor<'a> {
        self.cursor
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.cursor.eat_whitespace();
        if self.cursor.is_eof() {
            return None;
        }
        let start = self.cursor.pos();
        let category = next_token(&mut self.cursor);
        let end = self.cursor.pos();
        debug_assert!(end > start, "scanner made no progress at {start}");
        trace!(category = %category, start, end, "token");
        Some(Token {
            category,
            start,
            end,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every token is at least one byte.
        let remaining = self.cursor.source_len() - self.cursor.pos();
        (0, Some(remaining))
    }
}

impl std::iter::FusedIterator for Tokenizer<'_> {}

/// Tokenize a whole source string.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize(source: &str) -> Vec<Token> {
    Tokenizer::new(source).collect()
}

#[cfg(test)]
#[allow(clippy::expect_used, reason = "test assertions use expect for clarity")]
mod tests;

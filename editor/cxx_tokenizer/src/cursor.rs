//! Copyable cursor over an immutable source string.
//!
//! The cursor advances through the text one `char` at a time. Reading past
//! the end yields the `'\0'` sentinel instead of panicking, so scanners can
//! treat end-of-input as one more non-matching character.
//!
//! # Interior Null Characters
//!
//! Source text may contain U+0000. The cursor distinguishes it from EOF by
//! comparing `pos` against the source length: a `'\0'` at `pos < len` is an
//! interior null, a `'\0'` at `pos == len` is the sentinel.
//!
//! # Snapshots
//!
//! [`Cursor`] is [`Copy`]. Backtracking is a plain copy and assignment:
//!
//! ```
//! use cxx_tokenizer::Cursor;
//!
//! let mut cursor = Cursor::new("0x1F");
//! let saved = cursor;
//! cursor.advance();
//! cursor = saved;
//! assert_eq!(cursor.pos(), 0);
//! ```

/// Sentinel returned by [`Cursor::current`] once the source is exhausted.
pub const EOF_CHAR: char = '\0';

/// Position in a source string.
///
/// # Invariant
///
/// `pos <= source.len()` and `pos` always lies on a UTF-8 char boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Current read position (byte index into `source`).
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Create a cursor at byte offset `pos`.
    ///
    /// Returns `None` if `pos` is past the end or not on a char boundary.
    /// Editors use this to start tokenizing at the beginning of a line.
    pub fn at(source: &'a str, pos: usize) -> Option<Self> {
        source
            .is_char_boundary(pos)
            .then_some(Self { source, pos })
    }

    /// Returns the char at the current position without consuming it.
    ///
    /// Returns [`EOF_CHAR`] at EOF. Interior nulls also return `'\0'`;
    /// use [`is_eof()`](Self::is_eof) to distinguish.
    #[inline]
    pub fn current(&self) -> char {
        match self.source.as_bytes().get(self.pos) {
            Some(&b) if b.is_ascii() => char::from(b),
            Some(_) => self.source[self.pos..].chars().next().unwrap_or(EOF_CHAR),
            None => EOF_CHAR,
        }
    }

    /// Advance past one full char. Does nothing at EOF.
    #[inline]
    pub fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += self.current().len_utf8();
        }
    }

    /// Consume the current char and return it.
    ///
    /// Returns [`EOF_CHAR`] (and stays put) at EOF.
    #[inline]
    pub fn next_char(&mut self) -> char {
        let c = self.current();
        self.advance();
        c
    }

    /// Returns `true` once every char of the source has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// The full source text this cursor walks over.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The unconsumed remainder of the source.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Extract the source text between two byte offsets.
    ///
    /// # Contract
    ///
    /// `start..end` must fall within the source and on char boundaries. This
    /// holds for any pair of offsets taken from [`pos()`](Self::pos).
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(
            end <= self.source.len(),
            "slice end {end} exceeds source length {}",
            self.source.len()
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.source[start..end]
    }

    /// Extract the source text from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current char.
    ///
    /// Always stops at EOF, whatever `pred('\0')` returns.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += self.current().len_utf8();
        }
    }

    /// Advance past contiguous whitespace, newlines included.
    ///
    /// ASCII whitespace stays on the byte path; non-ASCII falls back to
    /// [`char::is_whitespace`].
    #[inline]
    pub fn eat_whitespace(&mut self) {
        loop {
            match self.source.as_bytes().get(self.pos) {
                Some(b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C) => self.pos += 1,
                Some(b) if b.is_ascii() => break,
                Some(_) => {
                    let c = self.current();
                    if !c.is_whitespace() {
                        break;
                    }
                    self.pos += c.len_utf8();
                }
                None => break,
            }
        }
    }

    /// Advance to the next `\n` or EOF using SIMD-accelerated search.
    ///
    /// The newline itself is not consumed, so a line comment or preprocessor
    /// token ends where the visible line ends.
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.source.as_bytes()[self.pos..];
        match memchr::memchr(b'\n', remaining) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.source.len(),
        }
    }

    /// Advance past the body of a block comment whose `/*` has already been
    /// consumed.
    ///
    /// Stops just after the first `*/`, or at EOF if the comment is
    /// unterminated. The search starts at the current position, so the `*`
    /// of the opening `/*` never pairs with a following `/`.
    pub fn eat_block_comment_body(&mut self) {
        let remaining = &self.source.as_bytes()[self.pos..];
        match memchr::memmem::find(remaining, b"*/") {
            Some(offset) => self.pos += offset + 2,
            None => self.pos = self.source.len(),
        }
    }

    /// Advance past the body of a quoted literal whose opening `quote` has
    /// already been consumed.
    ///
    /// A backslash always swallows the char after it, whatever that char is.
    /// Stops just after the closing quote, or at EOF if there is none.
    /// Newlines do not terminate the literal.
    pub fn eat_quoted_body(&mut self, quote: u8) {
        debug_assert!(quote.is_ascii(), "quote byte must be ASCII");
        loop {
            let remaining = &self.source.as_bytes()[self.pos..];
            let Some(offset) = memchr::memchr2(quote, b'\\', remaining) else {
                self.pos = self.source.len();
                return;
            };
            let found = remaining[offset];
            self.pos += offset + 1;
            if found == quote {
                return;
            }
            // Escaped char: may be multi-byte, may be the quote itself.
            self.advance();
        }
    }
}

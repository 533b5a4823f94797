//! Token categories and their display metadata.
//!
//! # Ordinal Contract
//!
//! [`Category`] is `#[repr(u8)]` and its discriminants are stable: editors
//! store them as plain integers and index the name and colour tables with
//! them. The order is:
//!
//! | ordinal | category | name | default colour |
//! |---|---|---|---|
//! | 0 | `Error` | Error | `#ffcc0000` |
//! | 1 | `Comment` | Comment | `#ff00aa00` |
//! | 2 | `Keyword` | C++ keyword | `#ff0000cc` |
//! | 3 | `Identifier` | Identifier | `#ff000000` |
//! | 4 | `IntegerLiteral` | Integer literal | `#ff880000` |
//! | 5 | `FloatLiteral` | Float literal | `#ff885500` |
//! | 6 | `StringLiteral` | String literal | `#ff990099` |
//! | 7 | `Operator` | Operator | `#ff225500` |
//! | 8 | `Bracket` | Bracket | `#ff000055` |
//! | 9 | `Punctuation` | Punctuation | `#ff004400` |
//! | 10 | `Preprocessor` | Preprocessor line | `#ff660000` |
//!
//! Adding a category means appending a variant, a name and a colour in the
//! same position; the tests pin every ordinal.

use std::fmt;

use crate::Colour;

/// Highlighting category of a single token.
///
/// Carries no payload: the token's extent is implied by how far the cursor
/// moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Category {
    /// Malformed input, or the end-of-input result.
    Error = 0,
    /// `// ...` or `/* ... */`.
    Comment = 1,
    /// Reserved word from the keyword table.
    Keyword = 2,
    Identifier = 3,
    /// Decimal, octal or hex integer, optionally suffixed.
    IntegerLiteral = 4,
    FloatLiteral = 5,
    /// `"..."` or `'...'`, terminated or not.
    StringLiteral = 6,
    Operator = 7,
    /// `(`, `)`, `{`, `}`, `[`, `]`.
    Bracket = 8,
    /// `,`, `;`, `:` and a lone `.`.
    Punctuation = 9,
    /// `#` through end of line.
    Preprocessor = 10,
}

/// Error returned when converting an integer that is not a category ordinal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown token category ordinal {0} (expected 0..={max})", max = Category::COUNT - 1)]
pub struct UnknownCategory(pub i64);

/// Display names, indexed by ordinal.
const NAMES: [&str; Category::COUNT] = [
    "Error",
    "Comment",
    "C++ keyword",
    "Identifier",
    "Integer literal",
    "Float literal",
    "String literal",
    "Operator",
    "Bracket",
    "Punctuation",
    "Preprocessor line",
];

/// Default colours, indexed by ordinal.
const COLOURS: [Colour; Category::COUNT] = [
    Colour::from_argb(0xffcc_0000), // error
    Colour::from_argb(0xff00_aa00), // comment
    Colour::from_argb(0xff00_00cc), // keyword
    Colour::from_argb(0xff00_0000), // identifier
    Colour::from_argb(0xff88_0000), // int literal
    Colour::from_argb(0xff88_5500), // float literal
    Colour::from_argb(0xff99_0099), // string literal
    Colour::from_argb(0xff22_5500), // operator
    Colour::from_argb(0xff00_0055), // bracket
    Colour::from_argb(0xff00_4400), // punctuation
    Colour::from_argb(0xff66_0000), // preprocessor
];

impl Category {
    /// Number of categories.
    pub const COUNT: usize = 11;

    /// Every category in ordinal order.
    pub const ALL: [Category; Category::COUNT] = [
        Category::Error,
        Category::Comment,
        Category::Keyword,
        Category::Identifier,
        Category::IntegerLiteral,
        Category::FloatLiteral,
        Category::StringLiteral,
        Category::Operator,
        Category::Bracket,
        Category::Punctuation,
        Category::Preprocessor,
    ];

    /// Stable ordinal of this category.
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Human-readable name for legends and settings screens.
    #[inline]
    pub const fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    /// Colour used when the editor has no theme override.
    #[inline]
    pub const fn default_colour(self) -> Colour {
        COLOURS[self as usize]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i64> for Category {
    type Error = UnknownCategory;

    fn try_from(ordinal: i64) -> Result<Self, UnknownCategory> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|i| Category::ALL.get(i).copied())
            .ok_or(UnknownCategory(ordinal))
    }
}

impl TryFrom<i32> for Category {
    type Error = UnknownCategory;

    fn try_from(ordinal: i32) -> Result<Self, UnknownCategory> {
        Category::try_from(i64::from(ordinal))
    }
}

impl TryFrom<u8> for Category {
    type Error = UnknownCategory;

    fn try_from(ordinal: u8) -> Result<Self, UnknownCategory> {
        Category::try_from(i64::from(ordinal))
    }
}

/// Every category paired with its display name, in ordinal order.
pub fn category_names() -> impl ExactSizeIterator<Item = (Category, &'static str)> {
    Category::ALL.into_iter().map(|c| (c, c.name()))
}

/// Default colour for a raw token-type ordinal.
///
/// Ordinals outside the category range yield [`Colour::BLACK`].
pub fn default_colour(token_type: i32) -> Colour {
    Category::try_from(token_type).map_or(Colour::BLACK, Category::default_colour)
}

#[cfg(test)]
mod tests;

//! Syntax-highlighting tokenizer for C, C++ and Objective-C.
//!
//! A single forward pass classifies source text into coarse [`Category`]
//! values for editor colouring. Nothing is parsed or validated beyond what
//! highlighting needs: unterminated strings and comments still colour, and
//! malformed numbers degrade to one-char [`Category::Error`] tokens.
//!
//! # Layers
//!
//! - [`Cursor`]: copyable position over a `&str`, with memchr-backed skips
//! - [`next_token`]: classify one token and advance the cursor past it
//! - [`Tokenizer`] / [`tokenize`]: iterate tokens with byte spans
//! - [`category_names`] / [`default_colour`]: the category table
//!
//! ```
//! use cxx_tokenizer::{tokenize, Category};
//!
//! let source = "int x = 0x1F; // hex";
//! let categories: Vec<Category> = tokenize(source).iter().map(|t| t.category).collect();
//! assert_eq!(
//!     categories,
//!     [
//!         Category::Keyword,
//!         Category::Identifier,
//!         Category::Operator,
//!         Category::IntegerLiteral,
//!         Category::Punctuation,
//!         Category::Comment,
//!     ]
//! );
//! ```

mod category;
mod colour;
mod cursor;
mod keywords;
mod scanner;
mod tokenizer;

pub use category::{category_names, default_colour, Category, UnknownCategory};
pub use colour::Colour;
pub use cursor::{Cursor, EOF_CHAR};
pub use keywords::is_reserved_word;
pub use scanner::next_token;
pub use tokenizer::{tokenize, Token, Tokenizer};

//! Hand-written scanner classifying one token per call.
//!
//! [`next_token`] skips whitespace, looks at one char, and dispatches to a
//! focused helper that advances the cursor past the token and returns its
//! [`Category`]. The helpers share nothing but the cursor.
//!
//! # Forward Progress
//!
//! Every arm consumes at least one char unless the cursor is already at EOF.
//! Malformed input becomes an [`Category::Error`] token one char wide, so a
//! caller looping until EOF always terminates.
//!
//! # Leniency
//!
//! Unterminated strings and block comments run to EOF and keep their normal
//! category. Only malformed numeric literals and unknown chars produce
//! [`Category::Error`].

use crate::cursor::Cursor;
use crate::keywords::is_reserved_word;
use crate::Category;

/// Classify the next token and advance `cursor` past it.
///
/// Leading whitespace is skipped and never reported. At EOF the cursor does
/// not move and the result is [`Category::Error`]; callers should stop on
/// [`Cursor::is_eof`] rather than on the returned category.
pub fn next_token(cursor: &mut Cursor<'_>) -> Category {
    cursor.eat_whitespace();
    match cursor.current() {
        _ if cursor.is_eof() => Category::Error,
        '0'..='9' => number(cursor),
        '.' => dot(cursor),
        ',' | ';' | ':' => single(cursor, Category::Punctuation),
        '(' | ')' | '{' | '}' | '[' | ']' => single(cursor, Category::Bracket),
        '"' => quoted(cursor, b'"'),
        '\'' => quoted(cursor, b'\''),
        '+' => plus(cursor),
        '-' => minus(cursor),
        '*' | '%' | '=' | '!' => operator_or_assign(cursor),
        '/' => slash_or_comment(cursor),
        '?' | '~' => single(cursor, Category::Operator),
        c @ ('<' | '>' | '|' | '&' | '^') => doubling_operator(cursor, c),
        '#' => preprocessor(cursor),
        c if is_identifier_start(c) => identifier(cursor),
        // Interior nulls, stray backslashes, `$`, `` ` ``, control chars, ...
        _ => single(cursor, Category::Error),
    }
}

/// Single-char token: advance one char and report `category`.
fn single(cursor: &mut Cursor<'_>, category: Category) -> Category {
    cursor.advance();
    category
}

// ─── Operators ──────────────────────────────────────────────────

fn plus(cursor: &mut Cursor<'_>) -> Category {
    cursor.advance(); // consume '+'
    if matches!(cursor.current(), '+' | '=') {
        cursor.advance();
    }
    Category::Operator
}

/// `-` starts a negative literal when a number follows, else an operator.
fn minus(cursor: &mut Cursor<'_>) -> Category {
    cursor.advance(); // consume '-'
    if let Some(category) = try_number(cursor) {
        return category;
    }
    if matches!(cursor.current(), '-' | '=') {
        cursor.advance();
    }
    Category::Operator
}

/// `*`, `%`, `=`, `!`, each with an optional trailing `=`.
fn operator_or_assign(cursor: &mut Cursor<'_>) -> Category {
    cursor.advance();
    if cursor.current() == '=' {
        cursor.advance();
    }
    Category::Operator
}

/// `<`, `>`, `|`, `&`, `^`: `x=`, or `xx` with an optional trailing `=`.
fn doubling_operator(cursor: &mut Cursor<'_>, first: char) -> Category {
    cursor.advance();
    match cursor.current() {
        '=' => cursor.advance(),
        c if c == first => {
            cursor.advance();
            if cursor.current() == '=' {
                cursor.advance();
            }
        }
        _ => {}
    }
    Category::Operator
}

// ─── Comments & Preprocessor ────────────────────────────────────

fn slash_or_comment(cursor: &mut Cursor<'_>) -> Category {
    cursor.advance(); // consume '/'
    match cursor.current() {
        '=' => {
            cursor.advance();
            Category::Operator
        }
        '/' => {
            cursor.eat_until_newline_or_eof();
            Category::Comment
        }
        '*' => {
            cursor.advance(); // consume '*'
            cursor.eat_block_comment_body();
            Category::Comment
        }
        _ => Category::Operator,
    }
}

fn preprocessor(cursor: &mut Cursor<'_>) -> Category {
    cursor.eat_until_newline_or_eof();
    Category::Preprocessor
}

// ─── String & Char Literals ─────────────────────────────────────

fn quoted(cursor: &mut Cursor<'_>, quote: u8) -> Category {
    cursor.advance(); // consume opening quote
    cursor.eat_quoted_body(quote);
    Category::StringLiteral
}

// ─── Identifiers ────────────────────────────────────────────────

#[inline]
fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '@'
}

#[inline]
fn is_identifier_body(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '@'
}

/// Consume an identifier and resolve it against the keyword table.
///
/// The whole run is consumed regardless of length; only runs of 2 to 16
/// chars can come back as [`Category::Keyword`].
fn identifier(cursor: &mut Cursor<'_>) -> Category {
    let start = cursor.pos();
    cursor.eat_while(is_identifier_body);
    if is_reserved_word(cursor.slice_from(start)) {
        Category::Keyword
    } else {
        Category::Identifier
    }
}

// ─── Numeric Literals ───────────────────────────────────────────

/// A number at the cursor, or a one-char [`Category::Error`].
fn number(cursor: &mut Cursor<'_>) -> Category {
    try_number(cursor).unwrap_or_else(|| {
        cursor.advance();
        Category::Error
    })
}

/// A lone `.` is punctuation; `.5` is a float.
fn dot(cursor: &mut Cursor<'_>) -> Category {
    try_number(cursor).unwrap_or_else(|| {
        cursor.advance();
        Category::Punctuation
    })
}

/// Try the float, hex, octal and decimal grammars in that order.
///
/// Each attempt starts from the same snapshot. On success the cursor is left
/// past the literal; on failure it is left exactly where it was.
pub(crate) fn try_number(cursor: &mut Cursor<'_>) -> Option<Category> {
    let original = *cursor;

    if float_literal(cursor) {
        return Some(Category::FloatLiteral);
    }
    *cursor = original;

    if hex_literal(cursor) {
        return Some(Category::IntegerLiteral);
    }
    *cursor = original;

    if octal_literal(cursor) {
        return Some(Category::IntegerLiteral);
    }
    *cursor = original;

    if decimal_literal(cursor) {
        return Some(Category::IntegerLiteral);
    }
    *cursor = original;

    None
}

/// Advance over chars matching `is_digit`, returning how many were eaten.
fn eat_digits(cursor: &mut Cursor<'_>, is_digit: fn(char) -> bool) -> usize {
    let mut count = 0;
    while is_digit(cursor.current()) {
        cursor.advance();
        count += 1;
    }
    count
}

fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

fn is_octal_digit(c: char) -> bool {
    matches!(c, '0'..='7')
}

/// `digits? ('.' digits?)? exponent? [fF]?`
///
/// Needs at least one digit, plus a point, an exponent or an `f` suffix; a
/// bare digit run is left to the integer grammars.
fn float_literal(cursor: &mut Cursor<'_>) -> bool {
    let mut num_digits = eat_digits(cursor, is_decimal_digit);

    let has_point = cursor.current() == '.';
    if has_point {
        cursor.advance();
        num_digits += eat_digits(cursor, is_decimal_digit);
    }

    if num_digits == 0 {
        return false;
    }

    let has_exponent = matches!(cursor.current(), 'e' | 'E');
    if has_exponent {
        cursor.advance();
        if matches!(cursor.current(), '+' | '-') {
            cursor.advance();
        }
        if eat_digits(cursor, is_decimal_digit) == 0 {
            return false;
        }
    }

    if matches!(cursor.current(), 'f' | 'F') {
        cursor.advance();
        return true;
    }
    has_point || has_exponent
}

/// `0[xX] hexdigits suffix`
fn hex_literal(cursor: &mut Cursor<'_>) -> bool {
    cursor.next_char() == '0'
        && matches!(cursor.next_char(), 'x' | 'X')
        && eat_digits(cursor, is_hex_digit) > 0
        && integer_suffix(cursor)
}

/// `0 octdigits suffix`
fn octal_literal(cursor: &mut Cursor<'_>) -> bool {
    cursor.next_char() == '0' && is_octal_digit(cursor.next_char()) && {
        eat_digits(cursor, is_octal_digit);
        integer_suffix(cursor)
    }
}

/// `digits suffix`
fn decimal_literal(cursor: &mut Cursor<'_>) -> bool {
    eat_digits(cursor, is_decimal_digit) > 0 && integer_suffix(cursor)
}

/// Eat at most one of `l L u U`, then require that no letter or digit
/// follows. `123abc` fails here rather than splitting into `123` and `abc`.
fn integer_suffix(cursor: &mut Cursor<'_>) -> bool {
    if matches!(cursor.current(), 'l' | 'L' | 'u' | 'U') {
        cursor.advance();
    }
    !cursor.current().is_alphanumeric()
}

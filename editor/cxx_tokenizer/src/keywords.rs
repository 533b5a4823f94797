//! Reserved-word table for C, C++ and the Objective-C `@` directives.
//!
//! The table is one case-sensitive set. Lookup uses the word's length as a
//! first-pass filter and then matches against the words of that length.
//! Words shorter than 2 or longer than 16 bytes are never keywords; the
//! longest entry, `reinterpret_cast`, is exactly 16.

/// Longest spelling the keyword table can match.
pub(crate) const MAX_KEYWORD_LEN: usize = 16;

/// Returns `true` if `text` is a reserved word.
///
/// Exact and case-sensitive: `int` is reserved, `Int` and `integer` are not.
#[inline]
pub fn is_reserved_word(text: &str) -> bool {
    let bytes = text.as_bytes();
    let len = bytes.len();

    // Guard: all keywords are 2-16 bytes and start with ASCII alpha or '@'
    if !(2..=MAX_KEYWORD_LEN).contains(&len) {
        return false;
    }
    let first = bytes[0];
    if !first.is_ascii_lowercase() && first != b'@' {
        return false;
    }

    match len {
        2 => matches!(text, "do" | "id" | "if" | "or"),
        3 => matches!(
            text,
            "and" | "asm" | "for" | "int" | "new" | "not" | "try" | "xor"
        ),
        4 => matches!(
            text,
            "@end"
                | "auto"
                | "bool"
                | "case"
                | "char"
                | "else"
                | "enum"
                | "goto"
                | "long"
                | "this"
                | "true"
                | "void"
        ),
        5 => matches!(
            text,
            "bitor"
                | "break"
                | "catch"
                | "class"
                | "compl"
                | "const"
                | "false"
                | "float"
                | "or_eq"
                | "short"
                | "throw"
                | "union"
                | "using"
                | "while"
        ),
        6 => matches!(
            text,
            "@class"
                | "and_eq"
                | "bitand"
                | "delete"
                | "double"
                | "extern"
                | "friend"
                | "inline"
                | "not_eq"
                | "public"
                | "return"
                | "signed"
                | "sizeof"
                | "static"
                | "struct"
                | "switch"
                | "typeid"
                | "xor_eq"
        ),
        7 => matches!(
            text,
            "@public" | "default" | "mutable" | "private" | "typedef" | "virtual" | "wchar_t"
        ),
        8 => matches!(
            text,
            "@dynamic"
                | "@private"
                | "continue"
                | "explicit"
                | "operator"
                | "register"
                | "template"
                | "typename"
                | "unsigned"
                | "volatile"
        ),
        9 => matches!(text, "@property" | "namespace" | "protected"),
        10 => matches!(text, "@interface" | "@protected" | "const_cast"),
        11 => matches!(text, "@synthesize" | "static_cast"),
        15 => text == "@implementation",
        16 => text == "reinterpret_cast",
        _ => false,
    }
}

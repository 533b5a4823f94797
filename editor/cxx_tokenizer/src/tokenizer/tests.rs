use super::*;
use pretty_assertions::assert_eq;

fn texts(source: &str) -> Vec<(Category, &str)> {
    tokenize(source)
        .into_iter()
        .map(|t| (t.category, t.text(source)))
        .collect()
}

#[test]
fn empty_source_has_no_tokens() {
    assert_eq!(tokenize(""), vec![]);
    assert_eq!(tokenize(" \n\t "), vec![]);
}

#[test]
fn spans_exclude_whitespace() {
    let tokens = tokenize("  int  x ;");
    assert_eq!(
        tokens,
        vec![
            Token {
                category: Category::Keyword,
                start: 2,
                end: 5,
            },
            Token {
                category: Category::Identifier,
                start: 7,
                end: 8,
            },
            Token {
                category: Category::Punctuation,
                start: 9,
                end: 10,
            },
        ]
    );
}

#[test]
fn token_accessors() {
    let source = "return 0x1F;";
    let token = tokenize(source)[1];
    assert_eq!(token.category, Category::IntegerLiteral);
    assert_eq!(token.len(), 4);
    assert!(!token.is_empty());
    assert_eq!(token.range(), 7..11);
    assert_eq!(token.text(source), "0x1F");
}

#[test]
fn multibyte_spans_are_byte_offsets() {
    let source = "caf\u{e9} = \"\u{1F600}\";";
    assert_eq!(
        texts(source),
        vec![
            (Category::Identifier, "caf\u{e9}"),
            (Category::Operator, "="),
            (Category::StringLiteral, "\"\u{1F600}\""),
            (Category::Punctuation, ";"),
        ]
    );
    assert_eq!(tokenize(source)[0].len(), 5);
}

#[test]
fn tokenizer_is_fused() {
    let mut tokenizer = Tokenizer::new("x  ");
    assert!(tokenizer.next().is_some());
    assert_eq!(tokenizer.next(), None);
    assert_eq!(tokenizer.next(), None);
    assert!(tokenizer.cursor().is_eof());
}

#[test]
fn from_cursor_resumes_mid_source() {
    let source = "int a = 1;";
    let mut cursor = Cursor::new(source);
    cursor.eat_while(|c| c != '=');
    let tokens: Vec<_> = Tokenizer::from_cursor(cursor).collect();
    assert_eq!(tokens[0].start, 6);
    assert_eq!(tokens[0].text(source), "=");
    assert_eq!(tokens.len(), 3);
}

#[test]
fn size_hint_bounds_remaining_tokens() {
    let source = "a+b";
    let tokenizer = Tokenizer::new(source);
    assert_eq!(tokenizer.size_hint(), (0, Some(3)));
    assert_eq!(tokenizer.count(), 3);
}

#[test]
fn objective_c_class() {
    let source = "@interface Foo : NSObject\n@property int x;\n@end";
    assert_eq!(
        texts(source),
        vec![
            (Category::Keyword, "@interface"),
            (Category::Identifier, "Foo"),
            (Category::Punctuation, ":"),
            (Category::Identifier, "NSObject"),
            (Category::Keyword, "@property"),
            (Category::Keyword, "int"),
            (Category::Identifier, "x"),
            (Category::Punctuation, ";"),
            (Category::Keyword, "@end"),
        ]
    );
}

#[test]
fn header_with_comments_and_directives() {
    let source = "#pragma once\n/* header */\nnamespace ns { // open\nconst float k = -2.5e3f;\n}";
    assert_eq!(
        texts(source),
        vec![
            (Category::Preprocessor, "#pragma once"),
            (Category::Comment, "/* header */"),
            (Category::Keyword, "namespace"),
            (Category::Identifier, "ns"),
            (Category::Bracket, "{"),
            (Category::Comment, "// open"),
            (Category::Keyword, "const"),
            (Category::Keyword, "float"),
            (Category::Identifier, "k"),
            (Category::Operator, "="),
            (Category::FloatLiteral, "-2.5e3f"),
            (Category::Punctuation, ";"),
            (Category::Bracket, "}"),
        ]
    );
}

#[test]
fn emits_trace_events_under_a_subscriber() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let subscriber = tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::new("cxx_tokenizer=trace"));
    let tokens = tracing::subscriber::with_default(subscriber, || tokenize("a << 1"));
    assert_eq!(tokens.len(), 3);
}

#[test]
fn public_types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Token>();
    assert_send_sync::<Tokenizer<'static>>();
    assert_send_sync::<Cursor<'static>>();
    assert_send_sync::<Category>();
    assert_send_sync::<crate::Colour>();
}

#[cfg(feature = "serde")]
#[test]
fn serde_derives_are_available() {
    fn assert_serde<T: serde::Serialize + for<'de> serde::Deserialize<'de>>() {}
    assert_serde::<Token>();
    assert_serde::<Category>();
    assert_serde::<crate::Colour>();
}

use super::*;
use pretty_assertions::assert_eq;

// === Category discriminants ===

#[test]
fn repr_u8_ordinals_are_stable() {
    assert_eq!(Category::Error as u8, 0);
    assert_eq!(Category::Comment as u8, 1);
    assert_eq!(Category::Keyword as u8, 2);
    assert_eq!(Category::Identifier as u8, 3);
    assert_eq!(Category::IntegerLiteral as u8, 4);
    assert_eq!(Category::FloatLiteral as u8, 5);
    assert_eq!(Category::StringLiteral as u8, 6);
    assert_eq!(Category::Operator as u8, 7);
    assert_eq!(Category::Bracket as u8, 8);
    assert_eq!(Category::Punctuation as u8, 9);
    assert_eq!(Category::Preprocessor as u8, 10);
}

#[test]
fn category_is_one_byte() {
    assert_eq!(std::mem::size_of::<Category>(), 1);
}

#[test]
fn all_is_in_ordinal_order() {
    for (i, category) in Category::ALL.iter().enumerate() {
        assert_eq!(usize::from(category.ordinal()), i);
    }
    assert_eq!(Category::ALL.len(), Category::COUNT);
}

// === Names ===

#[test]
fn name_returns_display_name() {
    assert_eq!(Category::Error.name(), "Error");
    assert_eq!(Category::Keyword.name(), "C++ keyword");
    assert_eq!(Category::IntegerLiteral.name(), "Integer literal");
    assert_eq!(Category::Preprocessor.name(), "Preprocessor line");
}

#[test]
fn display_uses_name() {
    assert_eq!(Category::StringLiteral.to_string(), "String literal");
}

#[test]
fn category_names_lists_every_category_in_order() {
    let names: Vec<_> = category_names().collect();
    assert_eq!(
        names,
        vec![
            (Category::Error, "Error"),
            (Category::Comment, "Comment"),
            (Category::Keyword, "C++ keyword"),
            (Category::Identifier, "Identifier"),
            (Category::IntegerLiteral, "Integer literal"),
            (Category::FloatLiteral, "Float literal"),
            (Category::StringLiteral, "String literal"),
            (Category::Operator, "Operator"),
            (Category::Bracket, "Bracket"),
            (Category::Punctuation, "Punctuation"),
            (Category::Preprocessor, "Preprocessor line"),
        ]
    );
    assert_eq!(category_names().len(), Category::COUNT);
}

// === Colours ===

#[test]
fn default_colours_match_table() {
    assert_eq!(Category::Error.default_colour().argb(), 0xffcc_0000);
    assert_eq!(Category::Comment.default_colour().argb(), 0xff00_aa00);
    assert_eq!(Category::Keyword.default_colour().argb(), 0xff00_00cc);
    assert_eq!(Category::Identifier.default_colour().argb(), 0xff00_0000);
    assert_eq!(Category::IntegerLiteral.default_colour().argb(), 0xff88_0000);
    assert_eq!(Category::FloatLiteral.default_colour().argb(), 0xff88_5500);
    assert_eq!(Category::StringLiteral.default_colour().argb(), 0xff99_0099);
    assert_eq!(Category::Operator.default_colour().argb(), 0xff22_5500);
    assert_eq!(Category::Bracket.default_colour().argb(), 0xff00_0055);
    assert_eq!(Category::Punctuation.default_colour().argb(), 0xff00_4400);
    assert_eq!(Category::Preprocessor.default_colour().argb(), 0xff66_0000);
}

#[test]
fn default_colour_by_ordinal_matches_category() {
    for category in Category::ALL {
        assert_eq!(
            default_colour(i32::from(category.ordinal())),
            category.default_colour()
        );
    }
}

#[test]
fn default_colour_out_of_range_falls_back_to_black() {
    assert_eq!(default_colour(-1), Colour::BLACK);
    assert_eq!(default_colour(11), Colour::BLACK);
    assert_eq!(default_colour(999), Colour::BLACK);
    assert_eq!(default_colour(i32::MIN), Colour::BLACK);
}

// === Ordinal conversion ===

#[test]
fn try_from_round_trips_every_ordinal() {
    for category in Category::ALL {
        assert_eq!(Category::try_from(category.ordinal()), Ok(category));
    }
}

#[test]
fn try_from_rejects_unknown_ordinals() {
    assert_eq!(Category::try_from(-1_i32), Err(UnknownCategory(-1)));
    assert_eq!(Category::try_from(11_u8), Err(UnknownCategory(11)));
    assert_eq!(Category::try_from(i64::MAX), Err(UnknownCategory(i64::MAX)));
}

#[test]
fn unknown_category_message_names_the_range() {
    assert_eq!(
        UnknownCategory(42).to_string(),
        "unknown token category ordinal 42 (expected 0..=10)"
    );
}

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use std::collections::HashSet;

// === Validation ===

#[test]
fn single_letter_is_valid() {
    assert_eq!(FunctionExpressionName::with("a").unwrap().as_str(), "a");
}

#[test]
fn letters_digits_and_punctuation_after_first() {
    let name = FunctionExpressionName::with("abc-1.2_z").unwrap();
    assert_eq!(name.as_str(), "abc-1.2_z");
    assert_eq!(name.len(), 9);
}

#[test]
fn long_names_are_accepted() {
    let text = format!("f{}", "x".repeat(10_000));
    assert!(FunctionExpressionName::with(&text).is_ok());
}

#[test]
fn empty_is_rejected() {
    assert_eq!(FunctionExpressionName::with(""), Err(NameError::Empty));
}

#[test]
fn leading_digit_is_rejected() {
    assert_eq!(
        FunctionExpressionName::with("1abc"),
        Err(NameError::InvalidCharacter {
            text: "1abc".to_string(),
            position: 0,
            ch: '1',
        })
    );
}

#[test]
fn leading_punctuation_is_rejected() {
    assert!(FunctionExpressionName::with("-abc").is_err());
    assert!(FunctionExpressionName::with(".abc").is_err());
    assert!(FunctionExpressionName::with("_abc").is_err());
}

#[test]
fn invalid_later_character_reports_position() {
    let err = FunctionExpressionName::with("ab!c").unwrap_err();
    assert_eq!(
        err,
        NameError::InvalidCharacter {
            text: "ab!c".to_string(),
            position: 2,
            ch: '!',
        }
    );
    assert_eq!(
        err.to_string(),
        "invalid character '!' at 2 in function name \"ab!c\""
    );
}

#[test]
fn whitespace_is_rejected() {
    assert!(FunctionExpressionName::with("a b").is_err());
}

// === Equality ===

#[test]
fn equality_ignores_case() {
    let upper = FunctionExpressionName::with("SUM").unwrap();
    let lower = FunctionExpressionName::with("sum").unwrap();
    assert_eq!(upper, lower);
    assert_eq!(upper.folded(), "sum");
}

#[test]
fn hashing_agrees_with_equality() {
    let mut set = HashSet::new();
    set.insert(FunctionExpressionName::with("Sum").unwrap());
    set.insert(FunctionExpressionName::with("SUM").unwrap());
    set.insert(FunctionExpressionName::with("avg").unwrap());
    assert_eq!(set.len(), 2);
}

#[test]
fn display_keeps_original_text() {
    let name = FunctionExpressionName::with("MixedCase").unwrap();
    assert_eq!(name.to_string(), "MixedCase");
    assert_eq!(format!("{name:?}"), "FunctionExpressionName(\"MixedCase\")");
}

// === Diagnostics ===

#[test]
fn not_found_text_quotes_name() {
    let name = FunctionExpressionName::with("lookup").unwrap();
    assert_eq!(name.not_found_text(), "Function \"lookup\" not found");
}

#[test]
fn comparator_factory_returns_shared_instance() {
    let a = FunctionExpressionName::comparator(CaseSensitivity::Insensitive);
    let b = FunctionExpressionName::comparator(CaseSensitivity::Insensitive);
    assert!(std::ptr::eq(a, b));
}

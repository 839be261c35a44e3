use chrono::{NaiveDate, NaiveTime};
use fx_expr::OpaqueValue;
use fx_number::{DecimalNumberSymbols, ExpressionNumberKind, RawNumber};
use pretty_assertions::assert_eq;

use super::convert;
use crate::{EvalErrorKind, Value, ValueShape};

const DECIMAL: ExpressionNumberKind = ExpressionNumberKind::Decimal;
const BINARY: ExpressionNumberKind = ExpressionNumberKind::Binary;

fn symbols() -> DecimalNumberSymbols {
    DecimalNumberSymbols::default()
}

fn ok(value: Value, target: ValueShape, kind: ExpressionNumberKind) -> Value {
    convert(value, target, kind, &symbols()).unwrap_or_else(|e| panic!("{e}"))
}

fn failure(value: Value, target: ValueShape) -> EvalErrorKind {
    match convert(value, target, DECIMAL, &symbols()) {
        Ok(v) => panic!("expected a conversion error, got {v:?}"),
        Err(e) => e.kind,
    }
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 29).unwrap_or_else(|| panic!("valid date"))
}

fn time() -> NaiveTime {
    NaiveTime::from_hms_opt(13, 45, 30).unwrap_or_else(|| panic!("valid time"))
}

#[test]
fn value_target_passes_anything_through() {
    let list = Value::List(vec![Value::Null, Value::from(true)]);
    assert_eq!(ok(list.clone(), ValueShape::Value, DECIMAL), list);
}

#[test]
fn boolean_from_bool_number_and_text() {
    assert_eq!(ok(Value::from(true), ValueShape::Boolean, DECIMAL), Value::from(true));
    assert_eq!(
        ok(Value::Number(DECIMAL.zero()), ValueShape::Boolean, DECIMAL),
        Value::from(false)
    );
    assert_eq!(ok(Value::raw(7_i32), ValueShape::Boolean, BINARY), Value::from(true));
    assert_eq!(ok(Value::text(" TRUE "), ValueShape::Boolean, DECIMAL), Value::from(true));
    assert_eq!(ok(Value::text("False"), ValueShape::Boolean, DECIMAL), Value::from(false));
}

#[test]
fn boolean_rejects_other_text() {
    assert_eq!(
        failure(Value::text("yes"), ValueShape::Boolean),
        EvalErrorKind::Conversion {
            from: "Text".into(),
            to: ValueShape::Boolean,
        }
    );
}

#[test]
fn number_is_created_as_the_requested_kind() {
    let binary = ok(Value::Number(BINARY.from_i64(3)), ValueShape::Number, DECIMAL);
    assert_eq!(binary, Value::Number(DECIMAL.from_i64(3)));

    let raw = ok(Value::raw(2.5_f64), ValueShape::Number, BINARY);
    let expected = BINARY
        .create(RawNumber::F64(2.5))
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(raw, Value::Number(expected));

    assert_eq!(ok(Value::from(true), ValueShape::Number, DECIMAL), Value::Number(DECIMAL.one()));
    assert_eq!(ok(Value::from(false), ValueShape::Number, BINARY), Value::Number(BINARY.zero()));
}

#[test]
fn number_from_text_uses_locale_symbols() {
    let german = DecimalNumberSymbols::with_separators(',', '.');
    let parsed = convert(Value::text("1.234,5"), ValueShape::Number, DECIMAL, &german)
        .unwrap_or_else(|e| panic!("{e}"));
    let Value::Number(n) = parsed else {
        panic!("expected a number, got {parsed:?}");
    };
    assert_eq!(n.to_string(), "1234.5");
}

#[test]
fn number_from_bad_text_names_the_text() {
    let kind = failure(Value::text("abc"), ValueShape::Number);
    assert_eq!(
        kind,
        EvalErrorKind::Conversion {
            from: "Text \"abc\"".into(),
            to: ValueShape::Number,
        }
    );
}

#[test]
fn number_rejects_dates() {
    assert!(matches!(
        failure(Value::Date(date()), ValueShape::Number),
        EvalErrorKind::Conversion { ref from, to: ValueShape::Number } if from == "LocalDate"
    ));
}

#[test]
fn text_from_scalars() {
    assert_eq!(ok(Value::from(false), ValueShape::Text, DECIMAL), Value::text("false"));
    let negative = BINARY.from_f64(-1.5).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(
        ok(Value::Number(negative), ValueShape::Text, BINARY),
        Value::text("-1.5")
    );
    assert_eq!(ok(Value::raw(42_i64), ValueShape::Text, DECIMAL), Value::text("42"));
}

#[test]
fn text_from_number_uses_locale_separator() {
    let german = DecimalNumberSymbols::with_separators(',', '.');
    let number = BINARY.from_f64(0.25).unwrap_or_else(|e| panic!("{e}"));
    let text = convert(Value::Number(number), ValueShape::Text, BINARY, &german)
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(text, Value::text("0,25"));
}

#[test]
fn text_from_temporal_values_is_iso() {
    assert_eq!(ok(Value::Date(date()), ValueShape::Text, DECIMAL), Value::text("2024-02-29"));
    assert_eq!(
        ok(Value::DateTime(date().and_time(time())), ValueShape::Text, DECIMAL),
        Value::text("2024-02-29T13:45:30")
    );
    assert_eq!(ok(Value::Time(time()), ValueShape::Text, DECIMAL), Value::text("13:45:30"));
}

#[test]
fn text_rejects_lists_and_opaque_values() {
    assert!(matches!(
        failure(Value::List(Vec::new()), ValueShape::Text),
        EvalErrorKind::Conversion { to: ValueShape::Text, .. }
    ));
    let opaque = OpaqueValue::named("Cell", 3_u8);
    assert_eq!(
        failure(Value::Opaque(opaque), ValueShape::Text),
        EvalErrorKind::Conversion {
            from: "Cell".into(),
            to: ValueShape::Text,
        }
    );
}

#[test]
fn temporal_conversions() {
    let date_time = date().and_time(time());
    assert_eq!(ok(Value::DateTime(date_time), ValueShape::Date, DECIMAL), Value::Date(date()));
    assert_eq!(ok(Value::DateTime(date_time), ValueShape::Time, DECIMAL), Value::Time(time()));

    let midnight = date().and_hms_opt(0, 0, 0).unwrap_or_else(|| panic!("valid time"));
    assert_eq!(ok(Value::Date(date()), ValueShape::DateTime, DECIMAL), Value::DateTime(midnight));
}

#[test]
fn temporal_targets_reject_text() {
    assert!(matches!(
        failure(Value::text("2024-02-29"), ValueShape::Date),
        EvalErrorKind::Conversion { to: ValueShape::Date, .. }
    ));
    assert!(matches!(
        failure(Value::Time(time()), ValueShape::DateTime),
        EvalErrorKind::Conversion { to: ValueShape::DateTime, .. }
    ));
    assert!(matches!(
        failure(Value::Null, ValueShape::Time),
        EvalErrorKind::Conversion { to: ValueShape::Time, .. }
    ));
}

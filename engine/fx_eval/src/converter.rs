//! Built-in value conversions.
//!
//! | target   | accepted sources                                            |
//! |----------|-------------------------------------------------------------|
//! | Boolean  | boolean, number (non-zero), text `true`/`false` (any case) |
//! | Number   | number (re-kinded), raw number, boolean (1/0), text        |
//! | Text     | text, boolean, number (locale symbols), dates and times    |
//! | Date     | date, date-time (date part)                                 |
//! | DateTime | date-time, date (midnight)                                  |
//! | Time     | time, date-time (time part)                                 |
//! | Value    | anything, unchanged                                         |
//!
//! Anything else fails with a `Conversion` error. Temporal text is
//! ISO 8601.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use fx_expr::DATE_TIME_FORMAT;
use fx_number::{DecimalNumberSymbols, ExpressionNumber, ExpressionNumberKind};

use crate::errors::conversion_failed;
use crate::{EvalError, Value, ValueShape};

/// Convert `value` to `target`, creating numbers as `kind` and reading or
/// writing number text with `symbols`.
pub fn convert(
    value: Value,
    target: ValueShape,
    kind: ExpressionNumberKind,
    symbols: &DecimalNumberSymbols,
) -> Result<Value, EvalError> {
    match target {
        ValueShape::Value => Ok(value),
        ValueShape::Boolean => to_boolean(&value, kind).map(Value::Boolean),
        ValueShape::Number => to_number(value, kind, symbols).map(Value::Number),
        ValueShape::Text => to_text(value, kind, symbols).map(Value::Text),
        ValueShape::Date => to_date(&value).map(Value::Date),
        ValueShape::DateTime => to_date_time(&value).map(Value::DateTime),
        ValueShape::Time => to_time(&value).map(Value::Time),
    }
}

fn to_boolean(value: &Value, kind: ExpressionNumberKind) -> Result<bool, EvalError> {
    match value {
        Value::Boolean(b) => Ok(*b),
        Value::Number(n) => Ok(n.to_bool()),
        Value::Raw(raw) => Ok(kind.create(raw.clone())?.to_bool()),
        Value::Text(text) if text.trim().eq_ignore_ascii_case("true") => Ok(true),
        Value::Text(text) if text.trim().eq_ignore_ascii_case("false") => Ok(false),
        other => Err(conversion_failed(other.type_name(), ValueShape::Boolean)),
    }
}

fn to_number(
    value: Value,
    kind: ExpressionNumberKind,
    symbols: &DecimalNumberSymbols,
) -> Result<ExpressionNumber, EvalError> {
    match value {
        Value::Number(n) => Ok(n.to_kind(kind)?),
        Value::Raw(raw) => Ok(kind.create(raw)?),
        Value::Boolean(b) => Ok(if b { kind.one() } else { kind.zero() }),
        Value::Text(text) => kind
            .parse(&text, symbols)
            .map_err(|_| conversion_failed(&format!("Text {text:?}"), ValueShape::Number)),
        other => Err(conversion_failed(other.type_name(), ValueShape::Number)),
    }
}

fn to_text(
    value: Value,
    kind: ExpressionNumberKind,
    symbols: &DecimalNumberSymbols,
) -> Result<String, EvalError> {
    match value {
        Value::Text(text) => Ok(text),
        Value::Boolean(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.format(symbols)),
        Value::Raw(raw) => Ok(kind.create(raw)?.format(symbols)),
        Value::Date(date) => Ok(date.format("%Y-%m-%d").to_string()),
        Value::DateTime(date_time) => Ok(date_time.format(DATE_TIME_FORMAT).to_string()),
        Value::Time(time) => Ok(time.format("%H:%M:%S%.f").to_string()),
        other => Err(conversion_failed(other.type_name(), ValueShape::Text)),
    }
}

fn to_date(value: &Value) -> Result<NaiveDate, EvalError> {
    match value {
        Value::Date(date) => Ok(*date),
        Value::DateTime(date_time) => Ok(date_time.date()),
        other => Err(conversion_failed(other.type_name(), ValueShape::Date)),
    }
}

fn to_date_time(value: &Value) -> Result<NaiveDateTime, EvalError> {
    match value {
        Value::DateTime(date_time) => Ok(*date_time),
        Value::Date(date) => date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| conversion_failed("LocalDate", ValueShape::DateTime)),
        other => Err(conversion_failed(other.type_name(), ValueShape::DateTime)),
    }
}

fn to_time(value: &Value) -> Result<NaiveTime, EvalError> {
    match value {
        Value::Time(time) => Ok(*time),
        Value::DateTime(date_time) => Ok(date_time.time()),
        other => Err(conversion_failed(other.type_name(), ValueShape::Time)),
    }
}

#[cfg(test)]
mod tests;

//! Assignment of config-file values into option fields.
//!
//! Values whose decoded type already matches the field are stored directly.
//! Anything else goes through [`assign_with_conversion`], which only knows how
//! to turn text into numbers and booleans.

use super::loader::FileValue;
use super::schema::ValueKind;
use crate::error::CoercionError;

/// Writable view of one scalar option field.
#[derive(Debug)]
pub enum Slot<'a> {
    Text(&'a mut String),
    /// Text option with no default.
    OptionalText(&'a mut Option<String>),
    Integer(&'a mut i64),
    Float(&'a mut f64),
    Bool(&'a mut bool),
}

impl Slot<'_> {
    /// Declared kind of the field behind this slot.
    pub fn kind(&self) -> ValueKind {
        match self {
            Slot::Text(_) | Slot::OptionalText(_) => ValueKind::Text,
            Slot::Integer(_) => ValueKind::Integer,
            Slot::Float(_) => ValueKind::Float,
            Slot::Bool(_) => ValueKind::Bool,
        }
    }
}

/// Store `value` into `slot`, converting when the types differ.
///
/// On error the slot is left unchanged.
pub fn assign(key: &'static str, slot: Slot<'_>, value: &FileValue) -> Result<(), CoercionError> {
    match (slot, value) {
        (Slot::Text(dst), FileValue::Text(src)) => dst.clone_from(src),
        (Slot::OptionalText(dst), FileValue::Text(src)) => *dst = Some(src.clone()),
        (Slot::Integer(dst), FileValue::Integer(src)) => *dst = *src,
        (Slot::Float(dst), FileValue::Float(src)) => *dst = *src,
        (Slot::Bool(dst), FileValue::Bool(src)) => *dst = *src,
        (slot, value) => return assign_with_conversion(key, slot, value),
    }
    Ok(())
}

/// Best-effort conversion of a text value into a differently typed field.
///
/// Integer text is parsed exactly. Other real-number text truncates toward
/// zero (`"42.9"` is 42) and must fall inside the `i64` range. Only text
/// sources are convertible.
pub fn assign_with_conversion(
    key: &'static str,
    slot: Slot<'_>,
    value: &FileValue,
) -> Result<(), CoercionError> {
    let expected = slot.kind();
    let FileValue::Text(text) = value else {
        return Err(CoercionError::Unsupported {
            key,
            found: value.kind(),
            expected,
        });
    };

    let unparsable = || CoercionError::Unparsable {
        key,
        text: text.clone(),
        expected,
    };

    match slot {
        Slot::Integer(dst) => *dst = parse_integer_text(text).ok_or_else(unparsable)?,
        Slot::Float(dst) => *dst = text.parse::<f64>().map_err(|_| unparsable())?,
        Slot::Bool(dst) => *dst = parse_bool_token(text).ok_or_else(unparsable)?,
        Slot::Text(dst) => dst.clone_from(text),
        Slot::OptionalText(dst) => *dst = Some(text.clone()),
    }
    Ok(())
}

fn parse_integer_text(text: &str) -> Option<i64> {
    if let Ok(exact) = text.parse::<i64>() {
        return Some(exact);
    }
    let real = text.parse::<f64>().ok()?.trunc();
    // 2^63 itself is out of range; every finite value below it converts.
    (real.is_finite() && real >= i64::MIN as f64 && real < i64::MAX as f64)
        .then_some(real as i64)
}

/// Standard boolean tokens: `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool_token(text: &str) -> Option<bool> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

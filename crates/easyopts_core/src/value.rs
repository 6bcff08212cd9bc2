//! Declared value kinds and the typed values produced by coercion.

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The type an option's value is coerced to before validation.
///
/// Widths follow the LP64 model: `long` and `long long` are both 64 bits.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    SignedChar,
    UnsignedChar,
    SignedShort,
    UnsignedShort,
    SignedInt,
    UnsignedInt,
    SignedLong,
    UnsignedLong,
    SignedLongLong,
    UnsignedLongLong,
    Float,
    Double,
    String,
}

impl ValueKind {
    /// Human-readable label used in help output.
    pub fn label(&self) -> &'static str {
        match self {
            ValueKind::SignedChar => "Signed Char",
            ValueKind::UnsignedChar => "Unsigned Char",
            ValueKind::SignedShort => "Signed Short",
            ValueKind::UnsignedShort => "Unsigned Short",
            ValueKind::SignedInt => "Signed Integer",
            ValueKind::UnsignedInt => "Unsigned Integer",
            ValueKind::SignedLong => "Signed Long",
            ValueKind::UnsignedLong => "Unsigned Long",
            ValueKind::SignedLongLong => "Signed Long Long",
            ValueKind::UnsignedLongLong => "Unsigned Long Long",
            ValueKind::Float => "Float",
            ValueKind::Double => "Double",
            ValueKind::String => "String",
        }
    }

    /// Whether this kind is one of the integer kinds.
    pub fn is_integer(&self) -> bool {
        !matches!(self, ValueKind::Float | ValueKind::Double | ValueKind::String)
    }

    /// Parse `raw` into a typed value of this kind.
    ///
    /// On failure the returned string describes why, without naming the option.
    pub fn coerce(&self, raw: &str) -> Result<Value, String> {
        match self {
            ValueKind::SignedChar => parse_int(raw, *self).map(Value::I8),
            ValueKind::UnsignedChar => parse_int(raw, *self).map(Value::U8),
            ValueKind::SignedShort => parse_int(raw, *self).map(Value::I16),
            ValueKind::UnsignedShort => parse_int(raw, *self).map(Value::U16),
            ValueKind::SignedInt => parse_int(raw, *self).map(Value::I32),
            ValueKind::UnsignedInt => parse_int(raw, *self).map(Value::U32),
            ValueKind::SignedLong | ValueKind::SignedLongLong => {
                parse_int(raw, *self).map(Value::I64)
            }
            ValueKind::UnsignedLong | ValueKind::UnsignedLongLong => {
                parse_int(raw, *self).map(Value::U64)
            }
            ValueKind::Float => parse_float::<f32>(raw, *self).map(Value::F32),
            ValueKind::Double => parse_float::<f64>(raw, *self).map(Value::F64),
            ValueKind::String => Ok(Value::Str(raw.to_string())),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn parse_int<N>(raw: &str, kind: ValueKind) -> Result<N, String>
where
    N: FromStr<Err = std::num::ParseIntError>,
{
    raw.parse::<N>().map_err(|e| match e.kind() {
        IntErrorKind::Empty => "empty value".to_string(),
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            format!("out of range for {}", kind.label())
        }
        _ => "not a valid decimal integer".to_string(),
    })
}

trait Finite {
    fn is_infinite_value(&self) -> bool;
}

impl Finite for f32 {
    fn is_infinite_value(&self) -> bool {
        self.is_infinite()
    }
}

impl Finite for f64 {
    fn is_infinite_value(&self) -> bool {
        self.is_infinite()
    }
}

fn parse_float<F>(raw: &str, kind: ValueKind) -> Result<F, String>
where
    F: FromStr + Finite,
{
    let value = raw
        .parse::<F>()
        .map_err(|_| "not a valid floating point number".to_string())?;
    // Only an explicit "inf"/"infinity" may produce an infinite value.
    let unsigned = raw.trim_start_matches(['+', '-']).to_ascii_lowercase();
    if value.is_infinite_value() && !unsigned.starts_with("inf") {
        return Err(format!("out of range for {}", kind.label()));
    }
    Ok(value)
}

/// A coerced option value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    Str(String),
    /// Presence marker for switch options, which carry no value.
    Flag,
}

impl Value {
    /// Signed integer values widened to `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::I8(v) => Some(i64::from(*v)),
            Value::I16(v) => Some(i64::from(*v)),
            Value::I32(v) => Some(i64::from(*v)),
            Value::I64(v) => Some(*v),
            _ => None,
        }
    }

    /// Unsigned integer values widened to `u64`.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::U8(v) => Some(u64::from(*v)),
            Value::U16(v) => Some(u64::from(*v)),
            Value::U32(v) => Some(u64::from(*v)),
            Value::U64(v) => Some(*v),
            _ => None,
        }
    }

    /// Floating point values widened to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::F32(v) => Some(f64::from(*v)),
            Value::F64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, Value::Flag)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::I8(v) => write!(f, "{v}"),
            Value::U8(v) => write!(f, "{v}"),
            Value::I16(v) => write!(f, "{v}"),
            Value::U16(v) => write!(f, "{v}"),
            Value::I32(v) => write!(f, "{v}"),
            Value::U32(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
            Value::U64(v) => write!(f, "{v}"),
            Value::F32(v) => write!(f, "{v}"),
            Value::F64(v) => write!(f, "{v}"),
            Value::Str(s) => f.write_str(s),
            Value::Flag => f.write_str("<set>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_signed_int() {
        assert_eq!(ValueKind::SignedInt.coerce("12"), Ok(Value::I32(12)));
        assert_eq!(ValueKind::SignedInt.coerce("-7"), Ok(Value::I32(-7)));
        assert_eq!(ValueKind::SignedInt.coerce("+3"), Ok(Value::I32(3)));
    }

    #[test]
    fn test_coerce_rejects_trailing_garbage() {
        let err = ValueKind::SignedInt.coerce("12x").unwrap_err();
        assert!(err.contains("not a valid decimal integer"));
        assert!(ValueKind::SignedInt.coerce(" 12").is_err());
        assert!(ValueKind::SignedInt.coerce("").is_err());
    }

    #[test]
    fn test_coerce_range_per_width() {
        let err = ValueKind::SignedInt.coerce("99999999999999").unwrap_err();
        assert!(err.contains("out of range for Signed Integer"));
        assert_eq!(
            ValueKind::SignedLong.coerce("99999999999999"),
            Ok(Value::I64(99_999_999_999_999))
        );
        assert!(ValueKind::SignedChar.coerce("128").is_err());
        assert_eq!(ValueKind::SignedChar.coerce("-128"), Ok(Value::I8(-128)));
        assert!(ValueKind::UnsignedChar.coerce("256").is_err());
        assert!(ValueKind::UnsignedShort.coerce("65536").is_err());
        assert_eq!(
            ValueKind::UnsignedLongLong.coerce("18446744073709551615"),
            Ok(Value::U64(u64::MAX))
        );
    }

    #[test]
    fn test_coerce_unsigned_rejects_negative() {
        assert!(ValueKind::UnsignedInt.coerce("-1").is_err());
    }

    #[test]
    fn test_coerce_floats() {
        assert_eq!(ValueKind::Double.coerce("1.5"), Ok(Value::F64(1.5)));
        assert_eq!(ValueKind::Float.coerce("-0.25"), Ok(Value::F32(-0.25)));
        assert!(ValueKind::Double.coerce("1.5.2").is_err());
        assert!(ValueKind::Float.coerce("abc").is_err());
    }

    #[test]
    fn test_coerce_float_overflow_is_range_error() {
        let err = ValueKind::Float.coerce("1e40").unwrap_err();
        assert!(err.contains("out of range for Float"));
        assert!(ValueKind::Double.coerce("1e40").is_ok());
        assert!(matches!(ValueKind::Float.coerce("inf"), Ok(Value::F32(v)) if v.is_infinite()));
    }

    #[test]
    fn test_coerce_string_passthrough() {
        assert_eq!(
            ValueKind::String.coerce("hello world"),
            Ok(Value::Str("hello world".to_string()))
        );
        assert_eq!(ValueKind::String.coerce(""), Ok(Value::Str(String::new())));
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::I16(-4).as_i64(), Some(-4));
        assert_eq!(Value::U32(9).as_u64(), Some(9));
        assert_eq!(Value::U32(9).as_i64(), None);
        assert_eq!(Value::F32(0.5).as_f64(), Some(0.5));
        assert_eq!(Value::Str("x".to_string()).as_str(), Some("x"));
        assert!(Value::Flag.is_flag());
        assert_eq!(Value::I32(42).to_string(), "42");
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(ValueKind::SignedInt.label(), "Signed Integer");
        assert_eq!(ValueKind::UnsignedLongLong.to_string(), "Unsigned Long Long");
        assert!(ValueKind::UnsignedChar.is_integer());
        assert!(!ValueKind::Double.is_integer());
    }
}

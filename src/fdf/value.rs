//! Field values and their canonical text form.

use std::borrow::Cow;
use std::fmt;

/// Value of a single form field.
///
/// Every variant coerces to text before encoding. Absent values become the
/// empty string, so a field with no value still produces a record.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FieldValue {
    /// Text string value
    Text(String),
    /// Integral number
    Integer(i64),
    /// Floating point number
    Float(f64),
    /// Boolean value, written as `true` or `false`
    Boolean(bool),
    /// No value
    #[default]
    Absent,
}

impl FieldValue {
    /// Canonical text of this value.
    ///
    /// Borrows for text values and allocates for everything else.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(s) => Cow::Borrowed(s.as_str()),
            FieldValue::Integer(i) => Cow::Owned(i.to_string()),
            FieldValue::Float(f) => Cow::Owned(format_float(*f)),
            FieldValue::Boolean(true) => Cow::Borrowed("true"),
            FieldValue::Boolean(false) => Cow::Borrowed("false"),
            FieldValue::Absent => Cow::Borrowed(""),
        }
    }

    /// Check whether this value is absent.
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }
}

/// Shortest decimal text for a float.
///
/// Integral values drop the fractional part (`42.0` prints as `42`) and
/// non-finite values use the `NaN`/`Infinity` spelling form readers expect.
/// Magnitudes of at least 1e21 or below 1e-6 switch to exponent form with an
/// explicit exponent sign (`1e+21`, `1.5e-7`).
fn format_float(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() {
        if f > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if f == 0.0 {
        // -0.0 prints as 0
        "0".to_string()
    } else if f.abs() >= 1e21 || f.abs() < 1e-6 {
        let exp = format!("{:e}", f);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            },
            _ => exp,
        }
    } else {
        format!("{}", f)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        FieldValue::Text(s.clone())
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Boolean(b)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<f32> for FieldValue {
    fn from(f: f32) -> Self {
        FieldValue::Float(f64::from(f))
    }
}

macro_rules! impl_from_small_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for FieldValue {
                fn from(i: $t) -> Self {
                    FieldValue::Integer(i64::from(i))
                }
            }
        )*
    };
}

impl_from_small_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_from_wide_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for FieldValue {
                fn from(i: $t) -> Self {
                    match i64::try_from(i) {
                        Ok(v) => FieldValue::Integer(v),
                        Err(_) => FieldValue::Text(i.to_string()),
                    }
                }
            }
        )*
    };
}

impl_from_wide_int!(isize, usize, u64, i128, u128);

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(FieldValue::Absent, Into::into)
    }
}

impl From<&serde_json::Value> for FieldValue {
    fn from(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => FieldValue::Absent,
            Value::Bool(b) => FieldValue::Boolean(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FieldValue::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    FieldValue::Text(u.to_string())
                } else {
                    n.as_f64()
                        .map_or_else(|| FieldValue::Text(n.to_string()), FieldValue::Float)
                }
            },
            Value::String(s) => FieldValue::Text(s.clone()),
            // Arrays join their elements' text with commas, absent elements as ""
            Value::Array(items) => FieldValue::Text(
                items
                    .iter()
                    .map(|item| FieldValue::from(item).to_text().into_owned())
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            Value::Object(_) => FieldValue::Text("[object Object]".to_string()),
        }
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => FieldValue::Text(s),
            other => FieldValue::from(&other),
        }
    }
}

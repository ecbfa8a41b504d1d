// Copyright (C) 2025 Kashin Vladislav
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// A raw field value as it arrives from the caller.
///
/// Form and request payloads are not always typed: a field expected to hold
/// an email may be missing, `null`, a number or a boolean. Every validator
/// accepts anything convertible into a `FieldValue` and rejects every
/// variant except [`FieldValue::Text`] without failing.
///
/// ```
/// use ruservalidation::{validate_username, FieldValue};
///
/// assert!(validate_username("ramy_gomaa"));
/// assert!(!validate_username(None::<&str>));
/// assert!(!validate_username(42));
/// assert!(!validate_username(FieldValue::Null));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// A string value, the only variant any validator can accept.
    Text(&'a str),
    /// Absent value.
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    /// A composite json value (array or object).
    #[cfg(feature = "json")]
    Json(&'a serde_json::Value),
}

impl<'a> FieldValue<'a> {
    /// Returns the text if this value is a string.
    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, FieldValue::Text(_))
    }

    /// Short name of the variant, used in log records instead of the value.
    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Null => "null",
            FieldValue::Bool(_) => "bool",
            FieldValue::Int(_) | FieldValue::UInt(_) => "integer",
            FieldValue::Float(_) => "float",
            #[cfg(feature = "json")]
            FieldValue::Json(_) => "json",
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Text(value)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> Self {
        FieldValue::Text(value.as_str())
    }
}

impl<'a, T: Into<FieldValue<'a>>> From<Option<T>> for FieldValue<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

impl From<()> for FieldValue<'_> {
    fn from(_: ()) -> Self {
        FieldValue::Null
    }
}

impl From<bool> for FieldValue<'_> {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

macro_rules! field_value_from_int {
    ($variant:ident => $($t:ty),+) => {
        $(
            impl From<$t> for FieldValue<'_> {
                fn from(value: $t) -> Self {
                    FieldValue::$variant(value.into())
                }
            }
        )+
    };
}

field_value_from_int!(Int => i8, i16, i32, i64);
field_value_from_int!(UInt => u8, u16, u32, u64);
field_value_from_int!(Float => f32, f64);

#[cfg(feature = "json")]
impl<'a> From<&'a serde_json::Value> for FieldValue<'a> {
    fn from(value: &'a serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(*b),
            Value::String(s) => FieldValue::Text(s.as_str()),
            Value::Number(n) => n
                .as_i64()
                .map(FieldValue::Int)
                .or_else(|| n.as_u64().map(FieldValue::UInt))
                .unwrap_or_else(|| FieldValue::Float(n.as_f64().unwrap_or(f64::NAN))),
            Value::Array(_) | Value::Object(_) => FieldValue::Json(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FieldValue;

    #[test]
    fn conversions() {
        let owned = String::from("ramy");
        assert_eq!(FieldValue::from("ramy"), FieldValue::Text("ramy"));
        assert_eq!(FieldValue::from(&owned), FieldValue::Text("ramy"));
        assert_eq!(FieldValue::from(Some("ramy")), FieldValue::Text("ramy"));
        assert_eq!(FieldValue::from(None::<&str>), FieldValue::Null);
        assert_eq!(FieldValue::from(()), FieldValue::Null);
        assert_eq!(FieldValue::from(true), FieldValue::Bool(true));
        assert_eq!(FieldValue::from(-3i32), FieldValue::Int(-3));
        assert_eq!(FieldValue::from(7u8), FieldValue::UInt(7));
        assert_eq!(FieldValue::from(1.5f64), FieldValue::Float(1.5));
    }

    #[test]
    fn only_text_has_text() {
        assert_eq!(FieldValue::Text("").as_text(), Some(""));
        assert!(FieldValue::Text("x").is_text());
        assert_eq!(FieldValue::Null.as_text(), None);
        assert_eq!(FieldValue::Int(29812251201234).as_text(), None);
        assert!(!FieldValue::Bool(false).is_text());
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_values() {
        let value = serde_json::json!({
            "email": "user@example.com",
            "age": 30,
            "missing": null,
            "tags": ["a"]
        });
        assert_eq!(FieldValue::from(&value["email"]), FieldValue::Text("user@example.com"));
        assert_eq!(FieldValue::from(&value["age"]), FieldValue::Int(30));
        assert_eq!(FieldValue::from(&value["missing"]), FieldValue::Null);
        assert_eq!(FieldValue::from(&value["absent"]), FieldValue::Null);
        assert!(!FieldValue::from(&value["tags"]).is_text());
    }
}

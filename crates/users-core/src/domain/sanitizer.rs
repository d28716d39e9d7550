//! Request-body normalization.
//!
//! Each field arrives as an arbitrary JSON value. Strings are trimmed,
//! anything else (absent, null, numbers, booleans, arrays, objects) becomes
//! the empty string. Nothing is escaped or truncated here.

use serde::de::{self, Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Untrusted user fields exactly as they appear in a request body.
/// Unknown keys, including any client-supplied `id`, are ignored.
///
/// Only a JSON object carries fields. An array body has no named fields and
/// reads as the empty field set; a scalar body is rejected.
#[derive(Debug, Clone, Default)]
pub struct RawUserInput {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub phone: Option<Value>,
    pub street: Option<Value>,
    pub city: Option<Value>,
    pub zipcode: Option<Value>,
    pub geo_lat: Option<Value>,
    pub geo_lng: Option<Value>,
}

/// The eight fields as plain trimmed text, ready for validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SanitizedUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub zipcode: String,
    pub geo_lat: String,
    pub geo_lng: String,
}

/// Trims string values; every other value yields `""`.
pub fn sanitize_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        _ => String::new(),
    }
}

impl<'de> Deserialize<'de> for RawUserInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Object(map) => Ok(Self::from_object(map)),
            Value::Array(_) => Ok(Self::default()),
            Value::Null => Err(de::Error::custom("expected a JSON object, found null")),
            Value::Bool(_) => Err(de::Error::custom("expected a JSON object, found a boolean")),
            Value::Number(_) => Err(de::Error::custom("expected a JSON object, found a number")),
            Value::String(_) => Err(de::Error::custom("expected a JSON object, found a string")),
        }
    }
}

impl RawUserInput {
    fn from_object(mut map: Map<String, Value>) -> Self {
        Self {
            name: map.remove("name"),
            email: map.remove("email"),
            phone: map.remove("phone"),
            street: map.remove("street"),
            city: map.remove("city"),
            zipcode: map.remove("zipcode"),
            geo_lat: map.remove("geo_lat"),
            geo_lng: map.remove("geo_lng"),
        }
    }

    pub fn sanitize(&self) -> SanitizedUser {
        SanitizedUser {
            name: sanitize_value(self.name.as_ref()),
            email: sanitize_value(self.email.as_ref()),
            phone: sanitize_value(self.phone.as_ref()),
            street: sanitize_value(self.street.as_ref()),
            city: sanitize_value(self.city.as_ref()),
            zipcode: sanitize_value(self.zipcode.as_ref()),
            geo_lat: sanitize_value(self.geo_lat.as_ref()),
            geo_lng: sanitize_value(self.geo_lng.as_ref()),
        }
    }
}

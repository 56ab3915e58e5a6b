//! serde codecs for the JSON wire formats of Google REST APIs.
//!
//! Use them through `#[serde(with = "...")]`:
//!
//! ```ignore
//! #[derive(serde::Serialize, serde::Deserialize)]
//! #[serde(rename_all = "camelCase")]
//! struct Attachment {
//!     #[serde(default, with = "google_cloud_gax::conversion::string::option")]
//!     size_bytes: Option<i64>,
//!     #[serde(default, with = "google_cloud_gax::conversion::base64::option")]
//!     data: Option<Vec<u8>>,
//!     #[serde(default, with = "time::serde::rfc3339::option")]
//!     create_time: Option<time::OffsetDateTime>,
//! }
//! ```
//!
//! Timestamps need no codec of their own, `time::serde::rfc3339` already produces and accepts
//! the RFC 3339 strings Google uses.

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConversionError {
    #[error("invalid duration: {0}")]
    InvalidDuration(String),
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

/// 64-bit integers are carried as decimal strings since JSON numbers lose precision above 2^53.
///
/// Serialization always produces a string. Deserialization accepts a string or a number.
pub mod string {
    use std::fmt::Display;
    use std::str::FromStr;

    use serde::{de, Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        from_value(Value::deserialize(deserializer)?)
    }

    pub(super) fn from_value<T, E>(value: Value) -> Result<T, E>
    where
        T: FromStr,
        T::Err: Display,
        E: de::Error,
    {
        match value {
            Value::String(s) => T::from_str(&s).map_err(de::Error::custom),
            Value::Number(num) => T::from_str(&num.to_string()).map_err(de::Error::custom),
            _ => Err(de::Error::custom("expected a string or a number")),
        }
    }

    pub mod option {
        use std::fmt::Display;
        use std::str::FromStr;

        use serde::{Deserialize, Deserializer, Serializer};
        use serde_json::Value;

        pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
        where
            T: Display,
            S: Serializer,
        {
            match value {
                Some(v) => serializer.collect_str(v),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
        where
            T: FromStr,
            T::Err: Display,
            D: Deserializer<'de>,
        {
            match Option::<Value>::deserialize(deserializer)? {
                None | Some(Value::Null) => Ok(None),
                Some(v) => super::from_value(v).map(Some),
            }
        }
    }

    pub mod vec {
        use std::fmt::Display;
        use std::str::FromStr;

        use serde::{Deserialize, Deserializer, Serializer};
        use serde_json::Value;

        pub fn serialize<T, S>(value: &[T], serializer: S) -> Result<S::Ok, S::Error>
        where
            T: Display,
            S: Serializer,
        {
            serializer.collect_seq(value.iter().map(|v| v.to_string()))
        }

        pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Vec<T>, D::Error>
        where
            T: FromStr,
            T::Err: Display,
            D: Deserializer<'de>,
        {
            Option::<Vec<Value>>::deserialize(deserializer)?
                .unwrap_or_default()
                .into_iter()
                .map(super::from_value)
                .collect()
        }
    }
}

/// Provides serialization and deserialization for base64 encoded fields.
///
/// Values are written with the standard alphabet and padding. Both the standard and the URL-safe
/// alphabet are accepted when reading, with or without padding.
pub mod base64 {
    use ::base64::prelude::*;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn encode(value: &[u8]) -> String {
        BASE64_STANDARD.encode(value)
    }

    pub fn decode(value: &str) -> Result<Vec<u8>, ::base64::DecodeError> {
        let normalized: String = value
            .trim_end_matches('=')
            .chars()
            .map(|c| match c {
                '-' => '+',
                '_' => '/',
                c => c,
            })
            .collect();
        BASE64_STANDARD_NO_PAD.decode(normalized)
    }

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: AsRef<[u8]>,
        S: Serializer,
    {
        serializer.serialize_str(&encode(value.as_ref()))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        decode(&String::deserialize(deserializer)?).map_err(de::Error::custom)
    }

    pub mod option {
        use serde::{de, Deserialize, Deserializer, Serializer};

        pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
        where
            T: AsRef<[u8]>,
            S: Serializer,
        {
            match value {
                Some(v) => serializer.serialize_str(&super::encode(v.as_ref())),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
        where
            D: Deserializer<'de>,
        {
            match Option::<String>::deserialize(deserializer)? {
                Some(v) => super::decode(&v).map(Some).map_err(de::Error::custom),
                None => Ok(None),
            }
        }
    }
}

/// `google-duration` values: seconds with up to nine fractional digits and an `s` suffix, e.g. `"3.5s"`.
pub mod duration {
    use std::time::Duration;

    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::ConversionError;

    pub fn format(value: &Duration) -> String {
        let secs = value.as_secs();
        let nanos = value.subsec_nanos();
        if nanos == 0 {
            format!("{secs}s")
        } else if nanos % 1_000_000 == 0 {
            format!("{secs}.{:03}s", nanos / 1_000_000)
        } else if nanos % 1_000 == 0 {
            format!("{secs}.{:06}s", nanos / 1_000)
        } else {
            format!("{secs}.{nanos:09}s")
        }
    }

    pub fn parse(value: &str) -> Result<Duration, ConversionError> {
        let invalid = || ConversionError::InvalidDuration(value.to_string());
        let body = value.strip_suffix('s').ok_or_else(invalid)?;
        let (secs, fraction) = match body.split_once('.') {
            Some((_, "")) => return Err(invalid()),
            Some(parts) => parts,
            None => (body, ""),
        };
        if secs.is_empty()
            || fraction.len() > 9
            || !secs.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        let secs: u64 = secs.parse().map_err(|_| invalid())?;
        let nanos: u32 = if fraction.is_empty() {
            0
        } else {
            format!("{fraction:0<9}").parse().map_err(|_| invalid())?
        };
        Ok(Duration::new(secs, nanos))
    }

    pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        parse(&String::deserialize(deserializer)?).map_err(de::Error::custom)
    }

    pub mod option {
        use std::time::Duration;

        use serde::{de, Deserialize, Deserializer, Serializer};

        pub fn serialize<S>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(v) => serializer.serialize_str(&super::format(v)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
        where
            D: Deserializer<'de>,
        {
            match Option::<String>::deserialize(deserializer)? {
                Some(v) => super::parse(&v).map(Some).map_err(de::Error::custom),
                None => Ok(None),
            }
        }
    }
}

/// `google-fieldmask` values: field paths joined by commas, e.g. `"displayName,labels"`.
pub mod field_mask {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &[String], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.join(","))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(value
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect())
    }
}

//! Generic JSON helpers over `serde`.
//!
//! Encoding follows standard JSON: struct fields come out in declaration
//! order and `serde_json::Value` objects keep insertion order. Errors are
//! `serde_json::Error`, returned to the caller as-is.
//!
//! ```
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let text = kata_json::serialize(&Point { x: 1, y: 2 }).unwrap();
//! assert_eq!(text, r#"{"x":1,"y":2}"#);
//! assert_eq!(kata_json::deserialize::<Point>(&text).unwrap(), Point { x: 1, y: 2 });
//! ```

use serde::Serialize;
use serde::de::DeserializeOwned;

pub use serde_json::{Error, Result};

/// Encode `value` as compact JSON.
///
/// # Errors
///
/// Fails when the value cannot be represented in JSON, e.g. a map with
/// non-string keys.
pub fn serialize<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    serde_json::to_string(value)
}

/// Encode `value` as indented JSON.
///
/// # Errors
///
/// Same as [`serialize`].
pub fn serialize_pretty<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    serde_json::to_string_pretty(value)
}

/// Parse `text` directly into `T`.
///
/// # Errors
///
/// Fails when `text` is not valid JSON or does not fit `T`.
pub fn deserialize<T>(text: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(text)
}

/// Parse `text` into the plain data shape `S`, then build `T` from it.
///
/// Use this when `T` carries behaviour or invariants and should be
/// constructed from fields rather than parsed directly.
///
/// # Errors
///
/// Fails when `text` is not valid JSON or does not fit `S`.
pub fn deserialize_as<S, T>(text: &str) -> Result<T>
where
    S: DeserializeOwned,
    T: From<S>,
{
    deserialize::<S>(text).map(T::from)
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Infrastructure trait and related functions for deserializing data from Twitter.

use std::convert::TryFrom;

use serde_json::Value;

use crate::error::{self, Error::InvalidResponse};

///Helper macro to return MissingValue for null/absent fields that aren't optional.
macro_rules! field_present {
    ($input:ident, $field:ident) => {
        match $input.get(stringify!($field)) {
            None => {
                return Err($crate::error::Error::MissingValue(stringify!($field)));
            }
            Some(val) if val.is_null() => {
                return Err($crate::error::Error::MissingValue(stringify!($field)));
            }
            _ => (),
        }
    };
}

///Helper trait to provide a general interface for deserializing Twitter API data structures.
///
///This is the gateway between "receiving a response from Twitter" and "giving a completed
///structure to the user". Twitter's v1 payloads are too inconsistent for a derived
///`Deserialize` to handle directly - large integers are sometimes quoted, booleans sometimes
///arrive as strings, dates come in several textual shapes depending on the endpoint - so every
///entity implements this trait with a hand-written conversion from a `serde_json::Value`. Use
///the provided implementations in this module for standard-library types to assemble your final
///structure, or defer to an implementation in some contained structure (this is what the `field`
///function is for).
pub trait FromJson: Sized {
    ///Parse the given Json value into a data structure.
    fn from_json(input: &Value) -> Result<Self, error::Error>;

    ///Parse the given string into a Json value, then into a data structure.
    fn from_str(input: &str) -> Result<Self, error::Error> {
        let json = serde_json::from_str(input)?;

        Self::from_json(&json)
    }
}

///Turn JSON arrays into Vecs. An empty array is an empty Vec, never an error; a single
///malformed element fails the whole conversion.
impl<T> FromJson for Vec<T>
where
    T: FromJson,
{
    fn from_json(input: &Value) -> Result<Self, error::Error> {
        let arr = input
            .as_array()
            .ok_or_else(|| InvalidResponse("expected an array", Some(input.to_string())))?;

        arr.iter().map(|x| T::from_json(x)).collect()
    }
}

///Turn a value that can be null or absent into an optional value.
impl<T> FromJson for Option<T>
where
    T: FromJson,
{
    fn from_json(input: &Value) -> Result<Self, error::Error> {
        if input.is_null() {
            return Ok(None);
        }

        T::from_json(input).map(Some)
    }
}

///Box transparently defers to the inner type's impl.
impl<T> FromJson for Box<T>
where
    T: FromJson,
{
    fn from_json(input: &Value) -> Result<Self, error::Error> {
        Ok(Box::new(T::from_json(input)?))
    }
}

///Twitter inconsistently quotes large integers, so the integer impls accept either a native
///number or a numeric string.
macro_rules! from_json_int {
    ($target:ty, $as_fn:ident, $msg:expr) => {
        impl FromJson for $target {
            fn from_json(input: &Value) -> Result<Self, error::Error> {
                match input {
                    Value::Number(num) => num
                        .$as_fn()
                        .and_then(|n| <$target>::try_from(n).ok())
                        .ok_or_else(|| InvalidResponse($msg, Some(input.to_string()))),
                    Value::String(text) => text
                        .trim()
                        .parse()
                        .map_err(|_| InvalidResponse($msg, Some(input.to_string()))),
                    _ => Err(InvalidResponse($msg, Some(input.to_string()))),
                }
            }
        }
    };
}

from_json_int!(i32, as_i64, "expected an i32");
from_json_int!(i64, as_i64, "expected an i64");
from_json_int!(u32, as_u64, "expected a u32");
from_json_int!(u64, as_u64, "expected a u64");
from_json_int!(usize, as_u64, "expected a usize");

impl FromJson for f64 {
    fn from_json(input: &Value) -> Result<Self, error::Error> {
        match input {
            Value::Number(num) => num
                .as_f64()
                .ok_or_else(|| InvalidResponse("expected an f64", Some(input.to_string()))),
            Value::String(text) => text
                .trim()
                .parse()
                .map_err(|_| InvalidResponse("expected an f64", Some(input.to_string()))),
            _ => Err(InvalidResponse("expected an f64", Some(input.to_string()))),
        }
    }
}

impl FromJson for String {
    fn from_json(input: &Value) -> Result<Self, error::Error> {
        input
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| InvalidResponse("expected a string", Some(input.to_string())))
    }
}

///Some endpoints quote their booleans (the profile tile flag, notably), so strings that spell
///out a boolean are accepted too.
impl FromJson for bool {
    fn from_json(input: &Value) -> Result<Self, error::Error> {
        match input {
            Value::Bool(b) => Ok(*b),
            Value::String(text) => text
                .parse()
                .map_err(|_| InvalidResponse("expected a boolean", Some(input.to_string()))),
            _ => Err(InvalidResponse("expected a boolean", Some(input.to_string()))),
        }
    }
}

///For instances where i want to load the raw JSON, here's a pass-through impl. Also overrides
///`from_str` to just parse it directly rather than deferring to the `from_json` function, which
///would wind up cloning the `Value`.
impl FromJson for Value {
    fn from_json(input: &Value) -> Result<Self, error::Error> {
        Ok(input.clone())
    }

    fn from_str(input: &str) -> Result<Self, error::Error> {
        Ok(serde_json::from_str(input)?)
    }
}

///Load the given field from the given JSON structure as the desired type.
///
///An absent field is treated as JSON null, so extracting an `Option<T>` from a missing field
///yields `Ok(None)` rather than an error. Extracting a non-optional type from a missing field
///reports the type mismatch against null.
pub fn field<T: FromJson>(input: &Value, field: &'static str) -> Result<T, error::Error> {
    T::from_json(input.get(field).unwrap_or(&Value::Null))
}

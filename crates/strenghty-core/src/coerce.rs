// ABOUTME: Lenient numeric coercion for untrusted client payloads
// ABOUTME: serde deserializer helpers mapping garbage input to None or zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Strenghty

//! Lenient numeric coercion
//!
//! Mobile and web clients send metrics as numbers, numeric strings, nulls, or
//! outright garbage. The record engine treats all of those as data, never as
//! errors: a value that cannot be read degrades to `None` (optional metrics)
//! or zero (required counters), which the evaluators read as "not eligible
//! for this record". Modeled as an explicit parse-then-default step so the
//! evaluators stay total functions.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Read a JSON value as a finite `f64`, or `None`.
///
/// Accepts numbers and numeric strings; everything else (null, booleans,
/// arrays, unparseable strings, NaN/inf) yields `None`.
#[must_use]
pub fn f64_from_value(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

/// Read a JSON value as a `u32`, or `None`.
///
/// Fractional and negative values are rejected rather than truncated.
#[must_use]
pub fn u32_from_value(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    }
}

/// Deserialize an optional float leniently: garbage becomes `None`
///
/// # Errors
///
/// Only if the underlying transport fails to produce any JSON value at all.
pub fn lenient_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(f64_from_value(&value))
}

/// Deserialize a required counter leniently: garbage becomes zero
///
/// # Errors
///
/// Only if the underlying transport fails to produce any JSON value at all.
pub fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(u32_from_value(&value).unwrap_or(0))
}

/// Deserialize an optional counter leniently: garbage becomes `None`
///
/// # Errors
///
/// Only if the underlying transport fails to produce any JSON value at all.
pub fn lenient_opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(u32_from_value(&value))
}

// ABOUTME: Weight normalization to the canonical kilogram unit
// ABOUTME: Total conversion helpers; absent or non-finite input yields None
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Strenghty

//! Weight normalization
//!
//! All record comparisons run in kilograms so that kg and lbs history mixes
//! correctly. Conversion is total: missing or non-finite input degrades to
//! `None`, which downstream logic reads as "no weight to compare".

use crate::constants::units::LBS_PER_KG;
use crate::models::WeightUnit;

/// Convert a logged weight to kilograms.
///
/// Returns `None` when no weight was logged or the value is not a finite
/// number. Never errors.
#[must_use]
pub fn to_kg(weight: Option<f64>, unit: WeightUnit) -> Option<f64> {
    let value = weight?;
    if !value.is_finite() {
        return None;
    }
    match unit {
        WeightUnit::Kg => Some(value),
        WeightUnit::Lbs => Some(value / LBS_PER_KG),
    }
}

// ABOUTME: Tests for lenient numeric coercion, unit normalization, and wire aliases
// ABOUTME: Garbage client input degrades to null/zero, never to an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Strenghty

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serde_json::{json, Value};

use strenghty_records::cardio::CardioCandidate;
use strenghty_records::coerce::{f64_from_value, u32_from_value};
use strenghty_records::models::{CardioMode, SetType, WeightUnit};
use strenghty_records::strength::StrengthCandidate;
use strenghty_records::units::to_kg;

// === Value-level coercion ===

#[test]
fn numbers_and_numeric_strings_parse() {
    assert_eq!(f64_from_value(&json!(185.5)), Some(185.5));
    assert_eq!(f64_from_value(&json!("185.5")), Some(185.5));
    assert_eq!(f64_from_value(&json!(" 42 ")), Some(42.0));
    assert_eq!(u32_from_value(&json!(12)), Some(12));
    assert_eq!(u32_from_value(&json!("12")), Some(12));
}

#[test]
fn garbage_degrades_to_none() {
    assert_eq!(f64_from_value(&json!("heavy")), None);
    assert_eq!(f64_from_value(&json!("")), None);
    assert_eq!(f64_from_value(&Value::Null), None);
    assert_eq!(f64_from_value(&json!(true)), None);
    assert_eq!(f64_from_value(&json!([1, 2])), None);
    // A string that parses to a non-finite float is still unusable.
    assert_eq!(f64_from_value(&json!("NaN")), None);
    assert_eq!(f64_from_value(&json!("inf")), None);
}

#[test]
fn counters_reject_fractions_and_negatives() {
    assert_eq!(u32_from_value(&json!(2.5)), None);
    assert_eq!(u32_from_value(&json!(-3)), None);
    assert_eq!(u32_from_value(&json!("-3")), None);
}

// === Candidate payload deserialization ===

#[test]
fn strength_candidate_accepts_string_metrics_and_legacy_codes() {
    let payload = json!({
        "exercise_id": "5f0c23aa-2f43-4c29-a2f8-7a2f9f3f1b11",
        "reps": "5",
        "weight": "185.5",
        "unit": "lbs",
        "set_type": "F"
    });

    let candidate: StrengthCandidate = serde_json::from_value(payload).unwrap();
    assert_eq!(candidate.reps, 5);
    assert_eq!(candidate.weight, Some(185.5));
    assert_eq!(candidate.unit, WeightUnit::Lbs);
    assert_eq!(candidate.set_type, SetType::Failure);
}

#[test]
fn strength_candidate_garbage_metrics_degrade_without_error() {
    let payload = json!({
        "exercise_id": "5f0c23aa-2f43-4c29-a2f8-7a2f9f3f1b11",
        "reps": "a few",
        "weight": "heavy",
    });

    let candidate: StrengthCandidate = serde_json::from_value(payload).unwrap();
    assert_eq!(candidate.reps, 0, "unreadable counter becomes zero");
    assert_eq!(candidate.weight, None, "unreadable weight becomes null");
    assert_eq!(candidate.unit, WeightUnit::Lbs, "unit defaults to lbs");
    assert_eq!(candidate.set_type, SetType::Standard);
}

#[test]
fn cardio_candidate_accepts_legacy_uppercase_modes() {
    let payload = json!({
        "exercise_id": "5f0c23aa-2f43-4c29-a2f8-7a2f9f3f1b11",
        "mode": "TREADMILL",
        "duration_seconds": 1200,
        "distance_meters": "3000"
    });

    let candidate: CardioCandidate = serde_json::from_value(payload).unwrap();
    assert_eq!(candidate.mode, CardioMode::Treadmill);
    assert_eq!(candidate.duration_seconds, 1200);
    assert_eq!(candidate.distance_meters, Some(3000.0));
    assert_eq!(candidate.floors, None);
}

#[test]
fn snake_case_modes_parse_too() {
    let payload = json!({
        "exercise_id": "5f0c23aa-2f43-4c29-a2f8-7a2f9f3f1b11",
        "mode": "row",
        "duration_seconds": 480,
        "distance_meters": 2000,
        "split_seconds": "110.5"
    });

    let candidate: CardioCandidate = serde_json::from_value(payload).unwrap();
    assert_eq!(candidate.mode, CardioMode::Row);
    assert_eq!(candidate.split_seconds, Some(110.5));
}

// === Unit normalization ===

#[test]
fn kilograms_pass_through_unchanged() {
    assert_eq!(to_kg(Some(45.0), WeightUnit::Kg), Some(45.0));
}

#[test]
fn pounds_divide_by_the_conversion_factor() {
    let kg = to_kg(Some(2.204_62), WeightUnit::Lbs).unwrap();
    assert!((kg - 1.0).abs() < 1e-9);

    let plate = to_kg(Some(225.0), WeightUnit::Lbs).unwrap();
    assert!((plate - 102.058).abs() < 1e-3);
}

#[test]
fn missing_or_non_finite_weight_is_none() {
    assert_eq!(to_kg(None, WeightUnit::Kg), None);
    assert_eq!(to_kg(Some(f64::NAN), WeightUnit::Lbs), None);
    assert_eq!(to_kg(Some(f64::INFINITY), WeightUnit::Kg), None);
}

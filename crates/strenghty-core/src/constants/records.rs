// ABOUTME: Record-evaluation formula constants
// ABOUTME: Brzycki estimated-1RM bounds and per-weight rep-record quantization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Strenghty

//! Record-evaluation formula constants
//!
//! Brzycki, M. (1993). "Strength testing: predicting a one-rep max from
//! reps-to-fatigue." *JOPERD*, 64(1), 88-90.

/// Numerator coefficient of the Brzycki estimated one-rep-max formula:
/// `e1rm = weight_kg x 36 / (37 - reps)`
pub const BRZYCKI_COEFFICIENT: f64 = 36.0;

/// Rep offset of the Brzycki denominator. The estimate is undefined at or
/// above this rep count (the denominator reaches zero and the model diverges
/// well before that).
pub const BRZYCKI_REP_LIMIT: u32 = 37;

/// Scale used to quantize kilogram weights into integer keys for the
/// per-weight rep-record map (two decimal places).
pub const WEIGHT_KEY_SCALE: f64 = 100.0;

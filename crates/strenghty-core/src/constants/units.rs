// ABOUTME: Unit conversion constants for weight normalization
// ABOUTME: Fixed factors shared by the strength evaluator and the model layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Strenghty

//! Unit conversion constants

/// Pounds per kilogram. Weights logged in lbs divide by this to reach the
/// canonical kilogram unit.
pub const LBS_PER_KG: f64 = 2.204_62;

/// Seconds per minute, used by the stair-climber intensity rate
pub const SECONDS_PER_MINUTE: f64 = 60.0;

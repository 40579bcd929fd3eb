// ABOUTME: Strength set model with weight unit, set classification, and PR flags
// ABOUTME: Only standard and failure sets participate in record comparisons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Strenghty

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::coerce;
use crate::units;

/// Unit a weight was logged in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Pounds (client default)
    #[default]
    Lbs,
    /// Kilograms, the canonical comparison unit
    Kg,
}

/// Classification of a strength set
///
/// Accepts the legacy single-letter wire codes (`"W"`, `"S"`, `"F"`, `"D"`)
/// as aliases for compatibility with older clients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetType {
    /// Warm-up set, never counts toward records
    #[serde(alias = "W")]
    Warmup,
    /// Standard working set
    #[default]
    #[serde(alias = "S")]
    Standard,
    /// Working set taken to failure
    #[serde(alias = "F")]
    Failure,
    /// Drop set, never counts toward records
    #[serde(alias = "D")]
    Dropset,
}

impl SetType {
    /// True for the classifications that participate in record comparisons
    #[must_use]
    pub const fn is_working(self) -> bool {
        matches!(self, Self::Standard | Self::Failure)
    }
}

/// Independent personal-record flags for a strength set
///
/// Each flag compares one metric against the user's full prior history for
/// the same exercise. A set with no prior qualifying history establishes a
/// baseline and earns no flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthPrFlags {
    /// Heaviest weight ever lifted for this exercise
    pub absolute_weight: bool,
    /// Highest Brzycki estimated one-rep max
    pub estimated_one_rep_max: bool,
    /// Highest single-set volume (weight x reps)
    pub volume: bool,
    /// Most reps ever logged at this exact weight
    pub rep_count: bool,
}

impl StrengthPrFlags {
    /// True iff any individual flag is set
    #[must_use]
    pub const fn is_record(self) -> bool {
        self.absolute_weight || self.estimated_one_rep_max || self.volume || self.rep_count
    }
}

/// One logged weight-training set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrengthSet {
    /// Unique identifier
    pub id: Uuid,
    /// Workout this set belongs to
    pub workout_id: Uuid,
    /// Exercise performed
    pub exercise_id: Uuid,
    /// Ordinal position within the (workout, exercise) group, starting at 1.
    /// Assigned at creation, immutable after.
    pub set_number: u32,
    /// Full repetitions completed
    #[serde(deserialize_with = "coerce::lenient_u32", default)]
    pub reps: u32,
    /// Partial repetitions, tracked for the user but outside record math
    #[serde(deserialize_with = "coerce::lenient_u32", default)]
    pub half_reps: u32,
    /// Weight lifted, in `unit`
    #[serde(deserialize_with = "coerce::lenient_opt_f64", default)]
    pub weight: Option<f64>,
    /// Unit the weight was logged in
    #[serde(default)]
    pub unit: WeightUnit,
    /// Set classification; only standard and failure sets qualify as history
    #[serde(default)]
    pub set_type: SetType,
    /// Rate of perceived exertion, tracked but outside record math
    #[serde(deserialize_with = "coerce::lenient_opt_f64", default)]
    pub rpe: Option<f64>,
    /// Per-category record flags computed at save time
    #[serde(default)]
    pub flags: StrengthPrFlags,
    /// Aggregate: true iff any flag in `flags` is true
    #[serde(default)]
    pub is_pr: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl StrengthSet {
    /// Logged weight normalized to kilograms, if present and finite
    #[must_use]
    pub fn weight_kg(&self) -> Option<f64> {
        units::to_kg(self.weight, self.unit)
    }

    /// True when this set may participate in record comparisons: a working
    /// set with positive reps and a positive weight
    #[must_use]
    pub fn is_qualifying(&self) -> bool {
        self.set_type.is_working()
            && self.reps > 0
            && self.weight_kg().is_some_and(|kg| kg > 0.0)
    }

    /// Stamp computed record flags onto the set, deriving the aggregate
    pub fn apply_flags(&mut self, flags: StrengthPrFlags) {
        self.flags = flags;
        self.is_pr = flags.is_record();
    }
}

// ABOUTME: Cardio personal-record evaluator gated by machine modality
// ABOUTME: Distance/pace, ascent/intensity, and distance/split record rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Strenghty

//! Cardio record evaluation
//!
//! Each modality carries its own record criteria and is never evaluated
//! against another modality's history:
//!
//! - **treadmill / bike / elliptical**: longest distance, fastest pace
//!   (distance units per second)
//! - **stairs**: most floors, highest climb rate (floors per minute)
//! - **row**: longest distance, lowest split (seconds per 500 m — lower is
//!   better)
//!
//! As with strength, comparisons are strict and an empty history earns
//! nothing.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use strenghty_core::coerce;
use strenghty_core::constants::units::SECONDS_PER_MINUTE;
use strenghty_core::models::{CardioMode, CardioPrFlags, CardioSet};

/// A cardio set under evaluation, as logged by the client
///
/// Metric fields deserialize leniently; which of them matter depends on
/// `mode`. A missing required metric (for example zero duration on a
/// treadmill set) makes every record category unreachable for this set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardioCandidate {
    /// Exercise the set belongs to; history is scoped to this id and `mode`
    pub exercise_id: Uuid,
    /// Machine modality
    pub mode: CardioMode,
    /// Total duration in seconds
    #[serde(deserialize_with = "coerce::lenient_u32", default)]
    pub duration_seconds: u32,
    /// Distance covered in meters
    #[serde(deserialize_with = "coerce::lenient_opt_f64", default)]
    pub distance_meters: Option<f64>,
    /// Floors climbed (stairs)
    #[serde(deserialize_with = "coerce::lenient_opt_u32", default)]
    pub floors: Option<u32>,
    /// Machine level or incline setting; tracked, no record category
    #[serde(deserialize_with = "coerce::lenient_opt_f64", default)]
    pub level: Option<f64>,
    /// Split time in seconds per 500 m (row)
    #[serde(deserialize_with = "coerce::lenient_opt_f64", default)]
    pub split_seconds: Option<f64>,
    /// Strokes per minute (row); tracked, no record category
    #[serde(deserialize_with = "coerce::lenient_opt_f64", default)]
    pub stroke_rate: Option<f64>,
}

impl CardioCandidate {
    fn distance(&self) -> f64 {
        self.distance_meters.filter(|d| d.is_finite()).unwrap_or(0.0)
    }

    fn floor_count(&self) -> u32 {
        self.floors.unwrap_or(0)
    }

    fn split(&self) -> Option<f64> {
        self.split_seconds.filter(|s| s.is_finite() && *s > 0.0)
    }
}

impl From<&CardioSet> for CardioCandidate {
    fn from(set: &CardioSet) -> Self {
        Self {
            exercise_id: set.exercise_id,
            mode: set.mode,
            duration_seconds: set.duration_seconds,
            distance_meters: set.distance_meters,
            floors: set.floors,
            level: set.level,
            split_seconds: set.split_seconds,
            stroke_rate: set.stroke_rate,
        }
    }
}

/// Evaluate a candidate cardio set against the user's history for the same
/// exercise and modality.
///
/// `history` is a snapshot of the user's cardio sets for this exercise;
/// entries of other modalities or exercises are ignored, so suppliers may
/// pass everything they have. `exclude` names the candidate's own stored id
/// during an update.
#[must_use]
pub fn evaluate(
    candidate: &CardioCandidate,
    history: &[CardioSet],
    exclude: Option<Uuid>,
) -> CardioPrFlags {
    let mut flags = CardioPrFlags::default();

    let prior: Vec<&CardioSet> = history
        .iter()
        .filter(|set| {
            Some(set.id) != exclude
                && set.exercise_id == candidate.exercise_id
                && set.mode == candidate.mode
        })
        .collect();

    if prior.is_empty() {
        debug!(
            exercise_id = %candidate.exercise_id,
            mode = ?candidate.mode,
            "no cardio history for this modality, set establishes a baseline"
        );
        return flags;
    }

    match candidate.mode {
        CardioMode::Treadmill | CardioMode::Bike | CardioMode::Elliptical => {
            let distance = candidate.distance();
            if distance > 0.0 && candidate.duration_seconds > 0 {
                let mut max_distance = 0.0_f64;
                let mut max_pace = 0.0_f64;
                for set in &prior {
                    if set.distance() > max_distance {
                        max_distance = set.distance();
                    }
                    if let Some(pace) = set.pace() {
                        if pace > max_pace {
                            max_pace = pace;
                        }
                    }
                }

                flags.distance = distance > max_distance;
                flags.pace = distance / f64::from(candidate.duration_seconds) > max_pace;
            }
        }
        CardioMode::Stairs => {
            let floors = candidate.floor_count();
            if floors > 0 && candidate.duration_seconds > 0 {
                let mut max_floors = 0_u32;
                let mut max_rate = 0.0_f64;
                for set in &prior {
                    if set.floor_count() > max_floors {
                        max_floors = set.floor_count();
                    }
                    if let Some(rate) = set.climb_rate() {
                        if rate > max_rate {
                            max_rate = rate;
                        }
                    }
                }

                flags.ascent = floors > max_floors;
                let rate =
                    f64::from(floors) / (f64::from(candidate.duration_seconds) / SECONDS_PER_MINUTE);
                flags.intensity = rate > max_rate;
            }
        }
        CardioMode::Row => {
            let distance = candidate.distance();
            if distance > 0.0 {
                let mut max_distance = 0.0_f64;
                let mut best_split: Option<f64> = None;
                for set in &prior {
                    if set.distance() > max_distance {
                        max_distance = set.distance();
                    }
                    if let Some(split) = set.split() {
                        if best_split.map_or(true, |best| split < best) {
                            best_split = Some(split);
                        }
                    }
                }

                flags.distance = distance > max_distance;
                // Split is pace-inverse: lower is better.
                if let Some(split) = candidate.split() {
                    flags.split = best_split.map_or(true, |best| split < best);
                }
            }
        }
    }

    flags
}

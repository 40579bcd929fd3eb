// ABOUTME: Cardio set model with machine modality and mode-gated PR flags
// ABOUTME: Modality determines which metrics and record categories apply
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Strenghty

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::coerce;
use crate::constants::units::SECONDS_PER_MINUTE;

/// Cardio machine modality
///
/// The modality determines which metrics are meaningful and which record
/// categories are even computable. Accepts the legacy uppercase wire codes
/// as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardioMode {
    /// Treadmill: distance and pace records
    #[serde(alias = "TREADMILL")]
    Treadmill,
    /// Stationary bike: distance and pace records
    #[serde(alias = "BIKE")]
    Bike,
    /// Elliptical trainer: distance and pace records
    #[serde(alias = "ELLIPTICAL")]
    Elliptical,
    /// Stair climber: ascent and intensity records
    #[serde(alias = "STAIRS")]
    Stairs,
    /// Rowing machine: distance and split records
    #[serde(alias = "ROW")]
    Row,
}

/// Independent personal-record flags for a cardio set
///
/// Only the subset applicable to the set's modality can ever be true;
/// flags for other modalities stay false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardioPrFlags {
    /// Longest distance covered (treadmill, bike, elliptical, row)
    pub distance: bool,
    /// Fastest pace in distance units per second (treadmill, bike, elliptical)
    pub pace: bool,
    /// Most floors climbed (stairs)
    pub ascent: bool,
    /// Highest climb rate in floors per minute (stairs)
    pub intensity: bool,
    /// Lowest split time per 500 m (row); lower is better
    pub split: bool,
}

impl CardioPrFlags {
    /// True iff any individual flag is set
    #[must_use]
    pub const fn is_record(self) -> bool {
        self.distance || self.pace || self.ascent || self.intensity || self.split
    }
}

/// One logged cardio-machine set
///
/// `level` and `stroke_rate` are tracked for the user but feed no record
/// category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardioSet {
    /// Unique identifier
    pub id: Uuid,
    /// Workout this set belongs to
    pub workout_id: Uuid,
    /// Exercise performed
    pub exercise_id: Uuid,
    /// Ordinal position within the (workout, exercise) group, starting at 1
    pub set_number: u32,
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
    /// Machine level or incline setting
    #[serde(deserialize_with = "coerce::lenient_opt_f64", default)]
    pub level: Option<f64>,
    /// Split time in seconds per 500 m (row)
    #[serde(deserialize_with = "coerce::lenient_opt_f64", default)]
    pub split_seconds: Option<f64>,
    /// Strokes per minute (row)
    #[serde(deserialize_with = "coerce::lenient_opt_f64", default)]
    pub stroke_rate: Option<f64>,
    /// Per-category record flags computed at save time
    #[serde(default)]
    pub flags: CardioPrFlags,
    /// Aggregate: true iff any flag in `flags` is true
    #[serde(default)]
    pub is_pr: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl CardioSet {
    /// Distance in meters, zero when absent
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance_meters.filter(|d| d.is_finite()).unwrap_or(0.0)
    }

    /// Floors climbed, zero when absent
    #[must_use]
    pub fn floor_count(&self) -> u32 {
        self.floors.unwrap_or(0)
    }

    /// Pace in distance units per second, defined only for positive distance
    /// and duration
    #[must_use]
    pub fn pace(&self) -> Option<f64> {
        let dist = self.distance();
        if dist > 0.0 && self.duration_seconds > 0 {
            Some(dist / f64::from(self.duration_seconds))
        } else {
            None
        }
    }

    /// Climb rate in floors per minute, defined only for positive floors and
    /// duration
    #[must_use]
    pub fn climb_rate(&self) -> Option<f64> {
        let floors = self.floor_count();
        if floors > 0 && self.duration_seconds > 0 {
            Some(f64::from(floors) / (f64::from(self.duration_seconds) / SECONDS_PER_MINUTE))
        } else {
            None
        }
    }

    /// Split time, only when logged as a positive finite value
    #[must_use]
    pub fn split(&self) -> Option<f64> {
        self.split_seconds.filter(|s| s.is_finite() && *s > 0.0)
    }

    /// Stamp computed record flags onto the set, deriving the aggregate
    pub fn apply_flags(&mut self, flags: CardioPrFlags) {
        self.flags = flags;
        self.is_pr = flags.is_record();
    }
}

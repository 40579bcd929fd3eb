// ABOUTME: Strength personal-record evaluator over a user's exercise history
// ABOUTME: Absolute weight, Brzycki estimated 1RM, volume, and per-weight rep records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Strenghty

//! Strength record evaluation
//!
//! Compares a candidate set against every prior qualifying set for the same
//! user and exercise, in kilograms, and reports four independent record
//! flags. All comparisons are strict: a tie is never a record, and a set
//! with no prior qualifying history establishes a baseline and earns
//! nothing.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use strenghty_core::coerce;
use strenghty_core::constants::records::{
    BRZYCKI_COEFFICIENT, BRZYCKI_REP_LIMIT, WEIGHT_KEY_SCALE,
};
use strenghty_core::models::{SetType, StrengthPrFlags, StrengthSet, WeightUnit};
use strenghty_core::units;

/// A strength set under evaluation, as logged by the client
///
/// Metric fields deserialize leniently: numeric strings parse, garbage
/// degrades to `None`/zero rather than erroring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrengthCandidate {
    /// Exercise the set belongs to; history is scoped to this id
    pub exercise_id: Uuid,
    /// Full repetitions completed
    #[serde(deserialize_with = "coerce::lenient_u32", default)]
    pub reps: u32,
    /// Weight lifted, in `unit`
    #[serde(deserialize_with = "coerce::lenient_opt_f64", default)]
    pub weight: Option<f64>,
    /// Unit the weight was logged in
    #[serde(default)]
    pub unit: WeightUnit,
    /// Set classification; warm-ups and drop sets never earn records
    #[serde(default)]
    pub set_type: SetType,
}

impl From<&StrengthSet> for StrengthCandidate {
    fn from(set: &StrengthSet) -> Self {
        Self {
            exercise_id: set.exercise_id,
            reps: set.reps,
            weight: set.weight,
            unit: set.unit,
            set_type: set.set_type,
        }
    }
}

/// Brzycki estimated one-rep max: `weight_kg x 36 / (37 - reps)`
///
/// Undefined at or above 37 reps, where the denominator reaches zero and the
/// model diverges. Undefined values never compete for the estimated-1RM
/// record, in either direction.
#[must_use]
pub fn estimated_one_rep_max(weight_kg: f64, reps: u32) -> Option<f64> {
    if reps >= BRZYCKI_REP_LIMIT {
        return None;
    }
    Some(weight_kg * BRZYCKI_COEFFICIENT / f64::from(BRZYCKI_REP_LIMIT - reps))
}

/// Quantize a kilogram weight to an integer key (two decimal places) for the
/// per-weight rep-record map
fn weight_key(weight_kg: f64) -> i64 {
    (weight_kg * WEIGHT_KEY_SCALE).round() as i64
}

/// Historical bests collected in a single pass over qualifying history
#[derive(Debug)]
struct HistoricalBests {
    max_weight_kg: f64,
    max_volume: f64,
    max_one_rep_max: Option<f64>,
    best_reps_at_weight: HashMap<i64, u32>,
}

impl HistoricalBests {
    /// Scan history once, skipping the excluded id and anything that does
    /// not qualify. Returns `None` when no qualifying entry exists, which
    /// is the baseline case.
    fn scan(history: &[StrengthSet], exercise_id: Uuid, exclude: Option<Uuid>) -> Option<Self> {
        let mut bests: Option<Self> = None;

        for set in history {
            if Some(set.id) == exclude || set.exercise_id != exercise_id || !set.is_qualifying() {
                continue;
            }
            let Some(kg) = set.weight_kg() else {
                continue;
            };

            let entry = bests.get_or_insert_with(|| Self {
                max_weight_kg: 0.0,
                max_volume: 0.0,
                max_one_rep_max: None,
                best_reps_at_weight: HashMap::new(),
            });

            if kg > entry.max_weight_kg {
                entry.max_weight_kg = kg;
            }

            let volume = kg * f64::from(set.reps);
            if volume > entry.max_volume {
                entry.max_volume = volume;
            }

            if let Some(e1rm) = estimated_one_rep_max(kg, set.reps) {
                if entry.max_one_rep_max.map_or(true, |best| e1rm > best) {
                    entry.max_one_rep_max = Some(e1rm);
                }
            }

            let best_reps = entry.best_reps_at_weight.entry(weight_key(kg)).or_insert(0);
            if set.reps > *best_reps {
                *best_reps = set.reps;
            }
        }

        bests
    }

    fn best_reps_at(&self, weight_kg: f64) -> Option<u32> {
        self.best_reps_at_weight.get(&weight_key(weight_kg)).copied()
    }
}

/// Evaluate a candidate strength set against the user's history for the same
/// exercise.
///
/// `history` is the full snapshot of the user's sets for this exercise;
/// non-qualifying entries (warm-ups, drop sets, missing weight or reps) are
/// ignored here, so suppliers may pass everything they have. `exclude`
/// names the candidate's own stored id during an update so a set is never
/// compared against itself.
#[must_use]
pub fn evaluate(
    candidate: &StrengthCandidate,
    history: &[StrengthSet],
    exclude: Option<Uuid>,
) -> StrengthPrFlags {
    let flags = StrengthPrFlags::default();

    if !candidate.set_type.is_working() {
        debug!(set_type = ?candidate.set_type, "set classification does not qualify for records");
        return flags;
    }
    if candidate.reps == 0 {
        return flags;
    }
    let Some(weight_kg) = units::to_kg(candidate.weight, candidate.unit) else {
        return flags;
    };
    if weight_kg <= 0.0 {
        return flags;
    }

    let Some(bests) = HistoricalBests::scan(history, candidate.exercise_id, exclude) else {
        debug!(exercise_id = %candidate.exercise_id, "no qualifying history, set establishes a baseline");
        return flags;
    };

    let volume = weight_kg * f64::from(candidate.reps);
    let one_rep_max = estimated_one_rep_max(weight_kg, candidate.reps);

    StrengthPrFlags {
        absolute_weight: weight_kg > bests.max_weight_kg,
        estimated_one_rep_max: one_rep_max
            .is_some_and(|e1rm| bests.max_one_rep_max.map_or(true, |best| e1rm > best)),
        volume: volume > bests.max_volume,
        rep_count: bests
            .best_reps_at(weight_kg)
            .map_or(true, |best| candidate.reps > best),
    }
}

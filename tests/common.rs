// ABOUTME: Shared test utilities for the record-engine integration tests
// ABOUTME: In-memory history source plus workout and set fixture builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Strenghty

#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

//! Shared test utilities for `strenghty_records`
//!
//! Provides an in-memory [`HistorySource`] that joins sets to workouts the
//! way the platform's storage layer does, plus fixture builders for sets.

use chrono::Utc;
use uuid::Uuid;

use strenghty_records::errors::AppResult;
use strenghty_records::history::HistorySource;
use strenghty_records::models::{
    CardioMode, CardioPrFlags, CardioSet, SetType, StrengthPrFlags, StrengthSet, WeightUnit,
    Workout,
};

/// In-memory history source backed by plain vectors.
///
/// User scoping works like the real storage layer: sets join to their
/// workout, and the workout carries the owner.
#[derive(Default)]
pub struct InMemoryHistory {
    pub workouts: Vec<Workout>,
    pub strength: Vec<StrengthSet>,
    pub cardio: Vec<CardioSet>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a workout owned by `owner_id` and return its id
    pub fn add_workout(&mut self, owner_id: Uuid) -> Uuid {
        let workout = workout(owner_id);
        let id = workout.id;
        self.workouts.push(workout);
        id
    }

    fn owner_of(&self, workout_id: Uuid) -> Option<Uuid> {
        self.workouts
            .iter()
            .find(|w| w.id == workout_id)
            .map(|w| w.owner_id)
    }
}

impl HistorySource for InMemoryHistory {
    fn strength_history(&self, user_id: Uuid, exercise_id: Uuid) -> AppResult<Vec<StrengthSet>> {
        Ok(self
            .strength
            .iter()
            .filter(|s| {
                s.exercise_id == exercise_id && self.owner_of(s.workout_id) == Some(user_id)
            })
            .cloned()
            .collect())
    }

    fn cardio_history(
        &self,
        user_id: Uuid,
        exercise_id: Uuid,
        mode: CardioMode,
    ) -> AppResult<Vec<CardioSet>> {
        Ok(self
            .cardio
            .iter()
            .filter(|s| {
                s.exercise_id == exercise_id
                    && s.mode == mode
                    && self.owner_of(s.workout_id) == Some(user_id)
            })
            .cloned()
            .collect())
    }

    fn strength_set_numbers(&self, workout_id: Uuid, exercise_id: Uuid) -> AppResult<Vec<u32>> {
        Ok(self
            .strength
            .iter()
            .filter(|s| s.workout_id == workout_id && s.exercise_id == exercise_id)
            .map(|s| s.set_number)
            .collect())
    }

    fn cardio_set_numbers(&self, workout_id: Uuid, exercise_id: Uuid) -> AppResult<Vec<u32>> {
        Ok(self
            .cardio
            .iter()
            .filter(|s| s.workout_id == workout_id && s.exercise_id == exercise_id)
            .map(|s| s.set_number)
            .collect())
    }
}

/// Build a workout owned by `owner_id`
pub fn workout(owner_id: Uuid) -> Workout {
    let now = Utc::now();
    Workout {
        id: Uuid::new_v4(),
        owner_id,
        name: "Test Session".to_owned(),
        date: now.date_naive(),
        notes: String::new(),
        created_at: now,
        updated_at: now,
        ended_at: None,
    }
}

/// Build a stored strength set with the given classification
pub fn strength_set(
    workout_id: Uuid,
    exercise_id: Uuid,
    reps: u32,
    weight: f64,
    unit: WeightUnit,
    set_type: SetType,
) -> StrengthSet {
    StrengthSet {
        id: Uuid::new_v4(),
        workout_id,
        exercise_id,
        set_number: 1,
        reps,
        half_reps: 0,
        weight: Some(weight),
        unit,
        set_type,
        rpe: None,
        flags: StrengthPrFlags::default(),
        is_pr: false,
        created_at: Utc::now(),
    }
}

/// Build a stored working set logged in kilograms
pub fn working_set_kg(workout_id: Uuid, exercise_id: Uuid, reps: u32, weight_kg: f64) -> StrengthSet {
    strength_set(
        workout_id,
        exercise_id,
        reps,
        weight_kg,
        WeightUnit::Kg,
        SetType::Standard,
    )
}

/// Build a stored cardio set; metric fields default to absent
pub fn cardio_set(workout_id: Uuid, exercise_id: Uuid, mode: CardioMode) -> CardioSet {
    CardioSet {
        id: Uuid::new_v4(),
        workout_id,
        exercise_id,
        set_number: 1,
        mode,
        duration_seconds: 0,
        distance_meters: None,
        floors: None,
        level: None,
        split_seconds: None,
        stroke_rate: None,
        flags: CardioPrFlags::default(),
        is_pr: false,
        created_at: Utc::now(),
    }
}

/// Stored treadmill-style set with distance and duration
pub fn distance_set(
    workout_id: Uuid,
    exercise_id: Uuid,
    mode: CardioMode,
    distance_meters: f64,
    duration_seconds: u32,
) -> CardioSet {
    let mut set = cardio_set(workout_id, exercise_id, mode);
    set.distance_meters = Some(distance_meters);
    set.duration_seconds = duration_seconds;
    set
}

/// Stored stair-climber set with floors and duration
pub fn stairs_set(
    workout_id: Uuid,
    exercise_id: Uuid,
    floors: u32,
    duration_seconds: u32,
) -> CardioSet {
    let mut set = cardio_set(workout_id, exercise_id, CardioMode::Stairs);
    set.floors = Some(floors);
    set.duration_seconds = duration_seconds;
    set
}

/// Stored rowing set with distance and optional split
pub fn row_set(
    workout_id: Uuid,
    exercise_id: Uuid,
    distance_meters: f64,
    duration_seconds: u32,
    split_seconds: Option<f64>,
) -> CardioSet {
    let mut set = distance_set(
        workout_id,
        exercise_id,
        CardioMode::Row,
        distance_meters,
        duration_seconds,
    );
    set.split_seconds = split_seconds;
    set
}

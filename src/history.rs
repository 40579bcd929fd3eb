// ABOUTME: History-supplier capability trait for the record engine
// ABOUTME: Yields prior sets scoped to user and exercise, plus taken set numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Strenghty

//! History supply
//!
//! The engine does not decide how history is stored or fetched, only what to
//! do with it once supplied. Implementations wrap whatever storage the
//! platform uses and must return a snapshot that is consistent at call time;
//! the collaborator serializes evaluate-then-persist operations per
//! (user, exercise) so two concurrent submissions cannot both claim the same
//! record.

use uuid::Uuid;

use strenghty_core::errors::AppResult;
use strenghty_core::models::{CardioMode, CardioSet, StrengthSet};

/// Capability supplying a user's prior sets and the set numbers already
/// taken inside a (workout, exercise) group.
///
/// Methods are synchronous: evaluation is a bounded in-memory scan and the
/// platform collaborator owns I/O scheduling around it.
pub trait HistorySource {
    /// All stored strength sets for this user and exercise.
    ///
    /// May include non-qualifying entries (warm-ups, drop sets, missing
    /// weight); the evaluator filters them itself.
    ///
    /// # Errors
    ///
    /// [`strenghty_core::errors::AppError::HistoryUnavailable`] when no
    /// consistent snapshot can be produced.
    fn strength_history(&self, user_id: Uuid, exercise_id: Uuid) -> AppResult<Vec<StrengthSet>>;

    /// All stored cardio sets for this user, exercise, and modality.
    ///
    /// # Errors
    ///
    /// [`strenghty_core::errors::AppError::HistoryUnavailable`] when no
    /// consistent snapshot can be produced.
    fn cardio_history(
        &self,
        user_id: Uuid,
        exercise_id: Uuid,
        mode: CardioMode,
    ) -> AppResult<Vec<CardioSet>>;

    /// Set numbers already taken by strength sets in this (workout,
    /// exercise) group.
    ///
    /// # Errors
    ///
    /// [`strenghty_core::errors::AppError::HistoryUnavailable`] when no
    /// consistent snapshot can be produced.
    fn strength_set_numbers(&self, workout_id: Uuid, exercise_id: Uuid) -> AppResult<Vec<u32>>;

    /// Set numbers already taken by cardio sets in this (workout, exercise)
    /// group.
    ///
    /// # Errors
    ///
    /// [`strenghty_core::errors::AppError::HistoryUnavailable`] when no
    /// consistent snapshot can be produced.
    fn cardio_set_numbers(&self, workout_id: Uuid, exercise_id: Uuid) -> AppResult<Vec<u32>>;
}

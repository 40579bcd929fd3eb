// ABOUTME: Records engine facade wiring a history source to the pure evaluators
// ABOUTME: Fetches snapshots, delegates evaluation, and assigns set ordinals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Strenghty

//! Engine facade
//!
//! [`RecordsEngine`] is what the surrounding CRUD layer talks to: it pulls
//! the relevant history snapshot from a [`HistorySource`], runs the pure
//! evaluators over it, and hands back the flag set to persist with the
//! candidate. It holds no locks and retries nothing; the caller provides
//! exclusive access to the affected history for the duration of one
//! evaluate-then-persist operation.

use tracing::debug;
use uuid::Uuid;

use strenghty_core::errors::AppResult;
use strenghty_core::models::{CardioPrFlags, StrengthPrFlags};

use crate::cardio::{self, CardioCandidate};
use crate::history::HistorySource;
use crate::sequence;
use crate::strength::{self, StrengthCandidate};

/// Record-evaluation engine over a history source
pub struct RecordsEngine<S> {
    source: S,
}

impl<S: HistorySource> RecordsEngine<S> {
    /// Create an engine over the given history source
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Evaluate a candidate strength set for `user_id`.
    ///
    /// `exclude` names the candidate's own stored id during an update so the
    /// set is compared against everyone else but not its own prior value.
    ///
    /// # Errors
    ///
    /// Propagates the history source's failure to produce a snapshot.
    pub fn evaluate_strength_set(
        &self,
        user_id: Uuid,
        candidate: &StrengthCandidate,
        exclude: Option<Uuid>,
    ) -> AppResult<StrengthPrFlags> {
        let history = self
            .source
            .strength_history(user_id, candidate.exercise_id)?;
        let flags = strength::evaluate(candidate, &history, exclude);
        debug!(
            %user_id,
            exercise_id = %candidate.exercise_id,
            history_len = history.len(),
            is_record = flags.is_record(),
            "strength set evaluated"
        );
        Ok(flags)
    }

    /// Evaluate a candidate cardio set for `user_id`.
    ///
    /// # Errors
    ///
    /// Propagates the history source's failure to produce a snapshot.
    pub fn evaluate_cardio_set(
        &self,
        user_id: Uuid,
        candidate: &CardioCandidate,
        exclude: Option<Uuid>,
    ) -> AppResult<CardioPrFlags> {
        let history =
            self.source
                .cardio_history(user_id, candidate.exercise_id, candidate.mode)?;
        let flags = cardio::evaluate(candidate, &history, exclude);
        debug!(
            %user_id,
            exercise_id = %candidate.exercise_id,
            mode = ?candidate.mode,
            history_len = history.len(),
            is_record = flags.is_record(),
            "cardio set evaluated"
        );
        Ok(flags)
    }

    /// Next ordinal number for a strength set in this (workout, exercise)
    /// group.
    ///
    /// # Errors
    ///
    /// Propagates the history source's failure to produce a snapshot.
    pub fn next_strength_set_number(
        &self,
        workout_id: Uuid,
        exercise_id: Uuid,
    ) -> AppResult<u32> {
        let taken = self.source.strength_set_numbers(workout_id, exercise_id)?;
        Ok(sequence::next_set_number(taken))
    }

    /// Next ordinal number for a cardio set in this (workout, exercise)
    /// group.
    ///
    /// # Errors
    ///
    /// Propagates the history source's failure to produce a snapshot.
    pub fn next_cardio_set_number(&self, workout_id: Uuid, exercise_id: Uuid) -> AppResult<u32> {
        let taken = self.source.cardio_set_numbers(workout_id, exercise_id)?;
        Ok(sequence::next_set_number(taken))
    }
}

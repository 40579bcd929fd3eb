// ABOUTME: Workout model, a dated training session grouping sets
// ABOUTME: Carries the owning user id that scopes record history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Strenghty

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A dated training session grouping strength and cardio sets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    /// Unique identifier
    pub id: Uuid,
    /// Owning user; record history for a set is scoped to this user
    pub owner_id: Uuid,
    /// Display name
    pub name: String,
    /// Calendar date of the session
    pub date: NaiveDate,
    /// Free-form notes
    #[serde(default)]
    pub notes: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
    /// When the session was ended, if it has been
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
}

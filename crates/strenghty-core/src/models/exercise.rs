// ABOUTME: Exercise model and muscle-group taxonomy
// ABOUTME: A named movement owned by one user, unique by (owner, name)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Strenghty

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Broad muscle-group classification for an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    /// Chest movements (press, fly)
    #[serde(alias = "CHEST")]
    Chest,
    /// Back movements (row, pulldown)
    #[serde(alias = "BACK")]
    Back,
    /// Lower-body movements
    #[serde(alias = "LEGS")]
    Legs,
    /// Shoulder movements
    #[serde(alias = "SHOULDERS")]
    Shoulders,
    /// Arm isolation movements
    #[serde(alias = "ARMS")]
    Arms,
    /// Core and trunk movements
    #[serde(alias = "CORE")]
    Core,
    /// Anything that does not fit the taxonomy
    #[serde(alias = "OTHER")]
    Other,
}

/// A named movement owned by one user
///
/// Exercises are the axis record history is keyed on: strength history is
/// scoped to (user, exercise), cardio history to (user, exercise, mode).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique identifier
    pub id: Uuid,
    /// Owning user
    pub owner_id: Uuid,
    /// Display name, unique per owner (case-insensitive in the CRUD layer)
    pub name: String,
    /// Muscle-group classification
    pub muscle_group: MuscleGroup,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// True when the user created this exercise explicitly, false when it was
    /// created implicitly during logging
    #[serde(default)]
    pub custom: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

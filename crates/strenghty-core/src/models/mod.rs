// ABOUTME: Core data models for the Strenghty personal-record engine
// ABOUTME: Domain-module split with re-exports for exercises, workouts, and sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Strenghty

//! Core data models
//!
//! Unified representation of the logging domain the record engine evaluates.
//!
//! ## Design Principles
//!
//! - **Storage Agnostic**: models carry ids, not persistence handles
//! - **Serializable**: all models support JSON for the surrounding CRUD layer
//! - **Lenient at the edge**: metric fields deserialize through [`crate::coerce`]
//!   so malformed client input degrades instead of erroring
//!
//! ## Core Models
//!
//! - [`Exercise`]: a named movement owned by a user
//! - [`Workout`]: a dated training session grouping sets
//! - [`StrengthSet`]: one weight-training set with its record flags
//! - [`CardioSet`]: one cardio-machine set with its record flags

// Domain modules
mod cardio;
mod exercise;
mod strength;
mod workout;

// Exercise domain
pub use exercise::{Exercise, MuscleGroup};

// Workout domain
pub use workout::Workout;

// Strength domain
pub use strength::{SetType, StrengthPrFlags, StrengthSet, WeightUnit};

// Cardio domain
pub use cardio::{CardioMode, CardioPrFlags, CardioSet};

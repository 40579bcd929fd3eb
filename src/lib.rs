// ABOUTME: Main library entry point for the Strenghty personal-record engine
// ABOUTME: Evaluates strength and cardio sets against history and assigns set ordinals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Strenghty

#![deny(unsafe_code)]

//! # Strenghty Records
//!
//! Personal-record (PR) evaluation engine for the Strenghty fitness platform.
//! Given a newly logged strength or cardio set and the user's historical
//! performance for the same exercise, the engine decides which record
//! categories the new set breaks. The surrounding CRUD layer supplies
//! history through the [`history::HistorySource`] capability, persists the
//! returned flags, and owns everything else (auth, routing, storage).
//!
//! ## Architecture
//!
//! - **strength**: four-category evaluator for weight-training sets
//! - **cardio**: five-category, modality-gated evaluator for cardio sets
//! - **sequence**: next ordinal set number within a (workout, exercise) group
//! - **history**: the capability trait supplying prior sets
//! - **engine**: facade wiring a history source to the pure evaluators
//!
//! The evaluators are pure, synchronous, single-pass scans over an
//! already-fetched snapshot. They never raise for malformed numeric input;
//! unusable values degrade to "not eligible for this record".
//!
//! ## Example
//!
//! ```rust
//! use strenghty_records::models::{SetType, WeightUnit};
//! use strenghty_records::strength::{self, StrengthCandidate};
//! use uuid::Uuid;
//!
//! let candidate = StrengthCandidate {
//!     exercise_id: Uuid::new_v4(),
//!     reps: 5,
//!     weight: Some(100.0),
//!     unit: WeightUnit::Lbs,
//!     set_type: SetType::Standard,
//! };
//!
//! // No prior history: the set establishes a baseline, never a record.
//! let flags = strength::evaluate(&candidate, &[], None);
//! assert!(!flags.is_record());
//! ```

/// Modality-gated cardio record evaluation
pub mod cardio;

/// Engine facade wiring a history source to the pure evaluators
pub mod engine;

/// History-supplier capability trait
pub mod history;

/// Next ordinal set number within a (workout, exercise) group
pub mod sequence;

/// Strength record evaluation (absolute weight, estimated 1RM, volume, reps)
pub mod strength;

// Foundation crate re-exports so callers need only one dependency
pub use strenghty_core::coerce;
pub use strenghty_core::constants;
pub use strenghty_core::errors;
pub use strenghty_core::models;
pub use strenghty_core::units;

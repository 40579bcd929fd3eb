// ABOUTME: Core types and constants for the Strenghty personal-record engine
// ABOUTME: Foundation crate with domain models, error handling, units, and coercion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Strenghty

#![deny(unsafe_code)]

//! # Strenghty Core
//!
//! Foundation crate providing shared types for the Strenghty personal-record
//! evaluation engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Domain constants (unit conversion, record formulas)
//! - **models**: Core data models (`Exercise`, `Workout`, `StrengthSet`, `CardioSet`)
//! - **units**: Weight normalization to kilograms
//! - **coerce**: Lenient numeric coercion for untrusted client payloads

/// Unified error handling system with standard error codes
pub mod errors;

/// Domain constants organized by concern
pub mod constants;

/// Core data models (exercises, workouts, strength and cardio sets, PR flags)
pub mod models;

/// Weight normalization to the canonical kilogram unit
pub mod units;

/// Lenient numeric coercion: garbage in, `None`/zero out, never an error
pub mod coerce;

// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for the Strenghty personal-record engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Strenghty

//! Constants module
//!
//! Pure data constants grouped by domain. The record-evaluation algorithm has
//! no runtime tunables; its factors are fixed by contract and live here.

/// Unit conversion and measurement constants
pub mod units;

/// Record-evaluation formula constants
pub mod records;

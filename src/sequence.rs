// ABOUTME: Next ordinal set number within a (workout, exercise) group
// ABOUTME: max(existing) + 1, defaulting to 1 when the group is empty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Strenghty

//! Set-number assignment
//!
//! Set numbers within a (workout, exercise) group are strictly increasing
//! integers starting at 1, assigned at creation and immutable after.
//! Always taking `max + 1` avoids unique-collisions when a client has added
//! and removed sets locally before syncing.

/// Compute the next ordinal set number given the numbers already taken in
/// the (workout, exercise) group.
///
/// Unrelated to record comparison; persisted alongside the flags.
#[must_use]
pub fn next_set_number<I>(existing: I) -> u32
where
    I: IntoIterator<Item = u32>,
{
    existing
        .into_iter()
        .max()
        .map_or(1, |max| max.saturating_add(1))
}

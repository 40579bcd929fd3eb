// ABOUTME: Unified error handling for the Strenghty personal-record engine
// ABOUTME: AppError enum, ErrorCode taxonomy, and the AppResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Strenghty

//! # Unified Error Handling
//!
//! The evaluators themselves are total functions and never fail on malformed
//! numeric input. `AppError` exists for the seams around them: a history
//! source that cannot produce its snapshot, or invalid input reaching the
//! engine facade.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias used throughout the engine
pub type AppResult<T> = Result<T, AppError>;

/// Standard error codes grouped by concern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Input failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// The referenced resource does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound,
    /// The history source could not produce a snapshot
    #[serde(rename = "RESOURCE_UNAVAILABLE")]
    ResourceUnavailable,
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// HTTP status the surrounding CRUD layer should map this code to
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::ResourceNotFound => 404,
            Self::ResourceUnavailable => 503,
            Self::InternalError => 500,
        }
    }
}

/// Application error type for the record-evaluation engine
#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// Input failed validation at the engine boundary
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Why the input was rejected
        message: String,
    },

    /// A referenced entity (user, exercise, workout) does not exist
    #[error("not found: {message}")]
    NotFound {
        /// What was missing
        message: String,
    },

    /// The history source failed to deliver a consistent snapshot
    #[error("history unavailable: {message}")]
    HistoryUnavailable {
        /// Underlying cause as reported by the source
        message: String,
    },

    /// Unexpected internal failure
    #[error("internal error: {message}")]
    Internal {
        /// Failure details
        message: String,
    },
}

impl AppError {
    /// Create an invalid-input error
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a not-found error
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a history-unavailable error
    #[must_use]
    pub fn history_unavailable(message: impl Into<String>) -> Self {
        Self::HistoryUnavailable {
            message: message.into(),
        }
    }

    /// Create an internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Standard code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidInput { .. } => ErrorCode::InvalidInput,
            Self::NotFound { .. } => ErrorCode::ResourceNotFound,
            Self::HistoryUnavailable { .. } => ErrorCode::ResourceUnavailable,
            Self::Internal { .. } => ErrorCode::InternalError,
        }
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Warkat.

use thiserror::Error;

/// Top-level error type for all Warkat operations.
///
/// Layout itself never fails on bad field content (missing values render as
/// `-`), so these variants cover setup and I/O boundaries only.
#[derive(Debug, Error)]
pub enum WarkatError {
    // -- Setup --
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("invalid phrase pattern `{pattern}`: {detail}")]
    Pattern { pattern: String, detail: String },

    #[error("invalid record: {0}")]
    InvalidRecord(String),

    // -- Output --
    #[error("PDF operation failed: {0}")]
    Pdf(String),

    #[error("image processing failed: {0}")]
    Image(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, WarkatError>;

// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Dampfwerk.

use thiserror::Error;

/// Top-level error type for all Dampfwerk operations.
#[derive(Debug, Error)]
pub enum DampfwerkError {
    // -- Platform runtime --
    #[error("platform runtime initialisation failed: {0}")]
    Init(String),

    #[error("platform runtime not linked into this build")]
    RuntimeUnavailable,

    // -- Configuration --
    #[error("invalid app id: {0}")]
    InvalidAppId(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, DampfwerkError>;

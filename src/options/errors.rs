// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Defines error types for option policies and override documents.

use thiserror::Error;

/// Result type for option operations.
pub type OptionsResult<T> = std::result::Result<T, OptionsError>;

/// Errors that can occur while checking or loading options.
///
/// Merging itself never fails; these only come from the opt-in key policy and
/// from parsing override documents.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("Unknown option key(s): {}", keys.join(", "))]
    UnknownKeys { keys: Vec<String> },
    #[error("Invalid options document")]
    InvalidDocument {
        #[source]
        source: serde_json::Error,
    },
}

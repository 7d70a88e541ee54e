// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Loads override option sets from JSON documents.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

use super::errors::{OptionsError, OptionsResult};
use super::value::OptionSet;

impl OptionSet {
    /// Parse an option set from a JSON object.
    ///
    /// Values must be strings, arrays of strings or `null`.
    ///
    /// # Errors
    /// Returns an error if the document is not a JSON object of valid option values.
    pub fn from_json_str(document: &str) -> OptionsResult<Self> {
        serde_json::from_str(document).map_err(|e| OptionsError::InvalidDocument { source: e })
    }

    /// Read an option set from a JSON file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read options file: {}", path.display()))?;
        let options = Self::from_json_str(&content)
            .with_context(|| format!("Failed to parse options file: {}", path.display()))?;
        debug!(file = %path.display(), options = options.len(), "Loaded options file");
        Ok(options)
    }
}

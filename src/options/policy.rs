// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Optional allow-list check for override keys.

use std::collections::HashSet;
use std::sync::LazyLock;

use super::defaults::DEFAULT_ENTRIES;
use super::errors::{OptionsError, OptionsResult};
use super::value::OptionSet;

static KNOWN_KEYS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| DEFAULT_ENTRIES.iter().map(|(key, _)| *key).collect());

/// Policy applied to override keys before merging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyPolicy {
    /// Accept any key.
    #[default]
    PassThrough,
    /// Accept only keys that have a default.
    Known,
}

impl KeyPolicy {
    /// Validate the keys of an option set.
    ///
    /// # Errors
    /// Returns `OptionsError::UnknownKeys` listing every rejected key in order.
    pub fn validate(self, options: &OptionSet) -> OptionsResult<()> {
        match self {
            Self::PassThrough => Ok(()),
            Self::Known => {
                let keys: Vec<String> = options
                    .keys()
                    .filter(|key| !KNOWN_KEYS.contains(key))
                    .map(str::to_string)
                    .collect();
                if keys.is_empty() {
                    Ok(())
                } else {
                    Err(OptionsError::UnknownKeys { keys })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_through_accepts_anything() {
        let options = OptionSet::new().with("anything", "goes");
        assert!(KeyPolicy::default().validate(&options).is_ok());
    }

    #[test]
    fn test_known_accepts_default_keys() {
        let options: OptionSet = DEFAULT_ENTRIES.into_iter().collect();
        assert!(KeyPolicy::Known.validate(&options).is_ok());
        assert!(KeyPolicy::Known.validate(&OptionSet::new()).is_ok());
    }

    #[test]
    fn test_known_lists_unknown_keys_sorted() {
        let options = OptionSet::new()
            .with("version", "1.0")
            .with("name", "dfmt")
            .with("arch", "amd64");
        let Err(OptionsError::UnknownKeys { keys }) = KeyPolicy::Known.validate(&options) else {
            panic!("Expected unknown keys error");
        };
        assert_eq!(keys, vec!["arch", "version"]);
    }
}

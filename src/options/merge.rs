// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Overlays caller overrides onto the default option set.

use tracing::debug;

use super::defaults::defaults;
use super::errors::OptionsResult;
use super::policy::KeyPolicy;
use super::value::OptionSet;

/// Merge overrides onto the defaults.
///
/// Every non-absent value in `overrides` wins, including keys that are not
/// defaults. An absent value never replaces an existing default. Default keys
/// missing from `overrides` are kept unchanged. The defaults themselves are
/// never modified.
#[must_use]
pub fn merge(overrides: &OptionSet) -> OptionSet {
    merge_with(defaults(), overrides)
}

/// Merge overrides onto an arbitrary base set.
#[must_use]
pub fn merge_with(base: &OptionSet, overrides: &OptionSet) -> OptionSet {
    let mut merged = base.clone();
    for (key, value) in overrides.iter() {
        if value.is_absent() && merged.contains_key(key) {
            debug!(key, "Keeping default for absent override");
            continue;
        }
        if let Some(previous) = merged.insert(key, value.clone()) {
            debug!(key, ?previous, ?value, "Overriding option");
        }
    }
    merged
}

/// Check the overrides against `policy`, then merge them onto the defaults.
///
/// # Errors
/// Returns an error if the policy rejects any override key.
pub fn merge_checked(overrides: &OptionSet, policy: KeyPolicy) -> OptionsResult<OptionSet> {
    policy.validate(overrides)?;
    Ok(merge(overrides))
}

impl OptionSet {
    /// Return a copy of this set with `overrides` applied on top.
    #[must_use]
    pub fn merged_with(&self, overrides: &OptionSet) -> OptionSet {
        merge_with(self, overrides)
    }
}

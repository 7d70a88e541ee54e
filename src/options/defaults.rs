// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Package metadata shared by every dfmt package.

use std::sync::LazyLock;

use super::value::OptionSet;

/// Default option entries as `(key, value)` pairs.
pub const DEFAULT_ENTRIES: [(&str, &str); 5] = [
    ("name", "dfmt"),
    ("url", "https://github.com/dlamg-community/dfmt"),
    ("maintainer", "Stefan Koch <stefan.koch@sociomantic.com>"),
    ("vendor", "Sociomantic Labs GmbH"),
    ("provides", "dfmt"),
];

static DEFAULTS: LazyLock<OptionSet> = LazyLock::new(|| DEFAULT_ENTRIES.into_iter().collect());

/// Get the default option set.
///
/// Built on first access and never mutated afterwards.
#[must_use]
pub fn defaults() -> &'static OptionSet {
    &DEFAULTS
}

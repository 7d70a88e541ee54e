// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Option sets, the shared defaults and the merge of caller overrides onto them.

mod defaults;
mod errors;
mod merge;
mod policy;
mod source;
mod value;

pub use defaults::{defaults, DEFAULT_ENTRIES};
pub use errors::{OptionsError, OptionsResult};
pub use merge::{merge, merge_checked, merge_with};
pub use policy::KeyPolicy;
pub use value::{OptionSet, OptionValue};

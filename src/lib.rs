// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Package metadata shared by all dfmt packages, handed to the fpm packaging tool.
//!
//! This crate provides functionality to:
//! - Hold the default package options (name, url, maintainer, vendor, provides)
//! - Merge caller overrides onto those defaults
//! - Optionally reject override keys that have no default
//! - Render merged options and positional arguments as packaging tool arguments

pub mod invocation;
pub mod options;

// Re-export key types for convenience
pub use invocation::{ArgumentList, Invocation, ARGS};
pub use options::{defaults, merge, KeyPolicy, OptionSet, OptionValue, OptionsError};

// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Builds the data handed to the external packaging tool: merged options plus positional arguments.

mod arguments;
mod console;

pub use arguments::{ArgumentList, ARGS};
pub use console::{options_table, summarize_options};

use serde::Serialize;
use tracing::debug;

use crate::options::{merge, OptionSet, OptionValue};

/// Options and positional arguments for a single packaging tool run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    options: OptionSet,
    arguments: ArgumentList,
}

impl Invocation {
    /// Create an invocation from overrides merged onto the defaults, with the
    /// common positional arguments.
    #[must_use]
    pub fn new(overrides: &OptionSet) -> Self {
        Self {
            options: merge(overrides),
            arguments: ARGS,
        }
    }

    /// Replace the positional arguments.
    #[must_use]
    pub fn with_arguments(mut self, arguments: ArgumentList) -> Self {
        self.arguments = arguments;
        self
    }

    #[must_use]
    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    #[must_use]
    pub fn arguments(&self) -> &ArgumentList {
        &self.arguments
    }

    /// Render the command line arguments for the packaging tool.
    ///
    /// Options come first in key order as `--key value`. List values repeat
    /// the flag once per element and absent values are skipped. Positional
    /// arguments follow the flags.
    #[must_use]
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        for (key, value) in self.options.iter() {
            let flag = format!("--{key}");
            match value {
                OptionValue::Text(text) => {
                    args.push(flag);
                    args.push(text.clone());
                }
                OptionValue::List(items) => {
                    for item in items {
                        args.push(flag.clone());
                        args.push(item.clone());
                    }
                }
                OptionValue::Absent => {
                    debug!(key, "Skipping absent option");
                }
            }
        }
        args.extend(self.arguments.as_slice().iter().cloned());
        debug!(args = args.len(), "Rendered packaging arguments");
        args
    }
}

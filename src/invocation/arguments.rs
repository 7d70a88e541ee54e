// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Positional arguments passed to the packaging tool after the option flags.

use serde::{Deserialize, Serialize};

/// Positional arguments common to all packages. Currently none.
pub const ARGS: ArgumentList = ArgumentList::new();

/// Ordered list of positional arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArgumentList {
    arguments: Vec<String>,
}

impl ArgumentList {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            arguments: Vec::new(),
        }
    }

    /// Builder-style push.
    #[must_use]
    pub fn with(mut self, argument: impl Into<String>) -> Self {
        self.push(argument);
        self
    }

    pub fn push(&mut self, argument: impl Into<String>) {
        self.arguments.push(argument.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.arguments
    }
}

impl<S: Into<String>> Extend<S> for ArgumentList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.arguments.extend(iter.into_iter().map(Into::into));
    }
}

impl<S: Into<String>> FromIterator<S> for ArgumentList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            arguments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

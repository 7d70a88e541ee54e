// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Formats and prints option summaries to the console.

use comfy_table::{Cell, Table};

use super::{ArgumentList, Invocation};
use crate::options::{OptionSet, OptionValue};

/// Summarize the invocation to the console.
///
/// Prints the option table followed by the positional arguments, if any.
pub fn summarize_options(invocation: &Invocation) {
    println!("{}\n", options_table(invocation.options()));
    println!("{}", arguments_line(invocation.arguments()));
}

/// Format the positional arguments as a single summary line.
fn arguments_line(arguments: &ArgumentList) -> String {
    if arguments.is_empty() {
        "Positional arguments: none".to_string()
    } else {
        format!("Positional arguments: {}", arguments.as_slice().join(" "))
    }
}

/// Create a table with the default preset styling.
fn default_table_preset() -> Table {
    let mut table = Table::new();
    table
        .load_preset(comfy_table::presets::UTF8_FULL_CONDENSED)
        .apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS)
        .set_content_arrangement(comfy_table::ContentArrangement::Dynamic);
    table
}

fn display_value(value: &OptionValue) -> String {
    match value {
        OptionValue::Text(text) => text.clone(),
        OptionValue::List(items) => items.join(", "),
        OptionValue::Absent => "(absent)".to_string(),
    }
}

/// Create a table showing each option and its value.
#[must_use]
pub fn options_table(options: &OptionSet) -> Table {
    let mut table = default_table_preset();
    table.set_header(vec![
        Cell::new("Option").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Value").add_attribute(comfy_table::Attribute::Bold),
    ]);
    for (key, value) in options.iter() {
        table.add_row(vec![Cell::new(key), Cell::new(display_value(value))]);
    }
    table
}

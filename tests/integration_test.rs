// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.
use std::io::Write;

use package_options::options::{merge_checked, DEFAULT_ENTRIES};
use package_options::{defaults, merge, Invocation, KeyPolicy, OptionSet, OptionValue, ARGS};
use tempfile::NamedTempFile;

fn sample_overrides() -> Vec<OptionSet> {
    vec![
        OptionSet::new(),
        OptionSet::new().with("name", "other"),
        OptionSet::new()
            .with("version", "0.5.0")
            .with("depends", vec!["libc6", "libphobos2"]),
        OptionSet::new()
            .with("provides", OptionValue::Absent)
            .with("vendor", "Example Ltd"),
        DEFAULT_ENTRIES
            .iter()
            .map(|(key, _)| (*key, "replaced"))
            .collect(),
    ]
}

#[test]
fn test_merge_properties() {
    for overrides in sample_overrides() {
        let merged = merge(&overrides);

        // Non-absent overrides always win; absent ones only land on keys without a default.
        for (key, value) in overrides.iter() {
            if value.is_absent() && defaults().contains_key(key) {
                assert_eq!(merged.get(key), defaults().get(key), "absent {key}");
            } else {
                assert_eq!(merged.get(key), Some(value), "override {key}");
            }
        }

        // Default keys without a non-absent override keep their default value.
        for (key, value) in DEFAULT_ENTRIES {
            if overrides.get(key).is_none_or(OptionValue::is_absent) {
                assert_eq!(merged.get(key), Some(&OptionValue::from(value)), "default {key}");
            }
        }

        // Nothing beyond the union of both key sets.
        assert!(merged
            .keys()
            .all(|key| overrides.contains_key(key) || defaults().contains_key(key)));

        assert_eq!(merge(&merged), merged, "merge should be idempotent");
    }
    assert!(ARGS.is_empty());
}

#[test]
fn test_merge_empty_matches_documented_defaults() {
    let json = serde_json::to_value(merge(&OptionSet::new())).expect("Should serialize options");
    assert_eq!(
        json,
        serde_json::json!({
            "name": "dfmt",
            "url": "https://github.com/dlamg-community/dfmt",
            "maintainer": "Stefan Koch <stefan.koch@sociomantic.com>",
            "vendor": "Sociomantic Labs GmbH",
            "provides": "dfmt",
        })
    );
}

#[test]
fn test_overrides_file_to_invocation() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{"name": "dfmt-static", "conflicts": ["dfmt"], "provides": null}}"#
    )
    .unwrap();
    file.flush().unwrap();

    let overrides = OptionSet::from_file(file.path()).expect("Should load overrides");
    assert!(merge_checked(&overrides, KeyPolicy::Known).is_err());

    let invocation = Invocation::new(&overrides);
    let args = invocation.to_args();
    assert_eq!(
        args,
        vec![
            "--conflicts",
            "dfmt",
            "--maintainer",
            "Stefan Koch <stefan.koch@sociomantic.com>",
            "--name",
            "dfmt-static",
            "--provides",
            "dfmt",
            "--url",
            "https://github.com/dlamg-community/dfmt",
            "--vendor",
            "Sociomantic Labs GmbH",
        ]
    );

    let json = serde_json::to_value(&invocation).expect("Should serialize invocation");
    assert_eq!(json["options"]["provides"], "dfmt");
    assert_eq!(json["arguments"].as_array().map(Vec::len), Some(0));
}

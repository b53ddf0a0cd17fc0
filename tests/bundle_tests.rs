// SPDX-License-Identifier: PMPL-1.0-or-later

//! Runtime message bundle loading and override behavior.

use periodicity::{humanize_iso_duration, CatalogFormatter, Lang, MessageBundle};
use std::fs;
use tempfile::TempDir;

#[test]
fn bundle_overrides_embedded_catalog() {
    let bundle = MessageBundle::from_json(
        r#"{
            "yearPeriod.one": "Annually",
            "yearPeriod.other": "Once per {count} years"
        }"#,
    )
    .expect("bundle should parse");
    let formatter = CatalogFormatter::with_bundle(Lang::En, bundle);

    assert_eq!(humanize_iso_duration("P1Y", &formatter), "Annually");
    assert_eq!(humanize_iso_duration("P4Y", &formatter), "Once per 4 years");
    // Untouched keys still come from the embedded catalog.
    assert_eq!(humanize_iso_duration("P1M", &formatter), "Monthly");
}

#[test]
fn bundle_can_supply_an_unsupported_locale() {
    // A downstream app shipping Portuguese without recompiling: bundle
    // entries win, missing ones fall back to the base language catalog.
    let pt = MessageBundle::from_json(
        r#"{
            "yearPeriod.one": "Anualmente",
            "monthPeriod.other": "A cada {count} meses"
        }"#,
    )
    .expect("bundle should parse");
    let formatter = CatalogFormatter::with_bundle(Lang::En, pt);

    assert_eq!(humanize_iso_duration("P1Y", &formatter), "Anualmente");
    assert_eq!(humanize_iso_duration("P2M", &formatter), "A cada 2 meses");
    assert_eq!(humanize_iso_duration("P1D", &formatter), "Daily");
}

#[test]
fn bundle_loads_from_file() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("en.json");
    fs::write(&path, r#"{"dayPeriod.one": "Each day"}"#).expect("write bundle");

    let bundle = MessageBundle::from_path(&path).expect("bundle should load");
    let formatter = CatalogFormatter::with_bundle(Lang::En, bundle);
    assert_eq!(humanize_iso_duration("P1D", &formatter), "Each day");
}

#[test]
fn missing_file_and_bad_json_are_errors() {
    let dir = TempDir::new().expect("tempdir");
    assert!(MessageBundle::from_path(&dir.path().join("absent.json")).is_err());

    let path = dir.path().join("broken.json");
    fs::write(&path, "{not json").expect("write file");
    assert!(MessageBundle::from_path(&path).is_err());
}

#[test]
fn merged_bundles_apply_in_load_order() {
    let mut base = MessageBundle::from_json(r#"{"yearPeriod.one": "Annually"}"#).unwrap();
    let patch = MessageBundle::from_json(r#"{"yearPeriod.one": "Per year"}"#).unwrap();
    base.merge(patch);

    let formatter = CatalogFormatter::with_bundle(Lang::En, base);
    assert_eq!(humanize_iso_duration("P1Y", &formatter), "Per year");
}

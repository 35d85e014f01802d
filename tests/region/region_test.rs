//! Tests for loading districts from GeoJSON

use cohort_synth::{RegionLoader, SynthError};
use serde_json::json;

use crate::utils::{UTTARAKHAND, feature, uttarakhand_fixture, write_geojson};

#[test]
fn loads_every_district_in_file_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = uttarakhand_fixture(dir.path());

    let regions = RegionLoader::new(path).with_required_names(true).load().unwrap();

    assert_eq!(regions.len(), 13);
    let expected: Vec<i64> = UTTARAKHAND.iter().map(|(code, _)| *code).collect();
    assert_eq!(regions.codes(), expected);
    assert!(regions.has_names());
}

#[test]
fn names_are_trimmed() {
    let dir = tempfile::tempdir().unwrap();
    let path = uttarakhand_fixture(dir.path());

    let regions = RegionLoader::new(path).load().unwrap();
    let dehradun = regions.iter().find(|r| r.code == 60).unwrap();
    assert_eq!(dehradun.name.as_deref(), Some("Dehradun"));
}

#[test]
fn numeric_codes_and_missing_names_are_accepted_when_names_optional() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_geojson(
        dir.path(),
        "codes.geojson",
        vec![
            feature(json!({ "dtcode11": 5 })),
            feature(json!({ "dtcode11": 6.0 })),
        ],
    );

    let regions = RegionLoader::new(path).load().unwrap();
    assert_eq!(regions.codes(), vec![5, 6]);
    assert!(!regions.has_names());
}

#[test]
fn missing_file_is_a_region_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.geojson");

    let err = RegionLoader::new(&path).load().unwrap_err();
    match err {
        SynthError::RegionLoad { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn invalid_json_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.geojson");
    std::fs::write(&path, "{ not json").unwrap();

    let err = RegionLoader::new(path).load().unwrap_err();
    assert!(err.to_string().contains("invalid GeoJSON"));
}

#[test]
fn missing_code_column_names_the_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_geojson(
        dir.path(),
        "no_codes.geojson",
        vec![feature(json!({ "dtname": "Almora" }))],
    );

    let err = RegionLoader::new(path).load().unwrap_err();
    assert!(matches!(err, SynthError::RegionLoad { .. }));
    assert!(err.to_string().contains("dtcode11"));
}

#[test]
fn required_names_must_be_present() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_geojson(
        dir.path(),
        "no_names.geojson",
        vec![feature(json!({ "dtcode11": 64 }))],
    );

    assert!(RegionLoader::new(&path).load().is_ok());
    let err = RegionLoader::new(&path)
        .with_required_names(true)
        .load()
        .unwrap_err();
    assert!(err.to_string().contains("dtname"));
}

#[test]
fn empty_collection_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_geojson(dir.path(), "empty.geojson", Vec::new());

    let err = RegionLoader::new(path).load().unwrap_err();
    assert!(err.to_string().contains("no features"));
}

#[test]
fn null_name_on_one_feature_is_kept_as_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_geojson(
        dir.path(),
        "partial_names.geojson",
        vec![
            feature(json!({ "dtcode11": 64, "dtname": "Almora" })),
            feature(json!({ "dtcode11": 65, "dtname": null })),
            feature(json!({ "dtcode11": 66, "dtname": 7 })),
        ],
    );

    let regions = RegionLoader::new(path)
        .with_required_names(true)
        .load()
        .unwrap();
    let names: Vec<Option<&str>> = regions.iter().map(|r| r.name.as_deref()).collect();
    assert_eq!(names, vec![Some("Almora"), None, None]);
    assert!(!regions.has_names());
}

//! End-to-end generation runs

use cohort_synth::{OutputFormat, RunConfig, SynthError, Variant, run};

use crate::utils::{read_csv, uttarakhand_fixture};

#[test]
fn full_run_writes_every_variant() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let config = RunConfig {
        districts_path: uttarakhand_fixture(dir.path()),
        output_dir: out.clone(),
        format: OutputFormat::Csv,
        num_patients: Some(200),
        variants: Variant::ALL.to_vec(),
    };

    let outputs = run(&config).unwrap();
    assert_eq!(outputs.len(), 3);

    let expected = [
        (Variant::Clinical, "synthetic_clinical_dataset.csv", 200),
        (Variant::Dengue, "synthetic_clinical_dataset_dengue.csv", 200),
        (Variant::Sdoh, "synthetic_sdoh_dataset.csv", 13),
    ];
    for (output, (variant, file, rows)) in outputs.iter().zip(expected) {
        assert_eq!(output.variant, variant);
        assert_eq!(output.path, out.join(file));
        assert_eq!(output.rows, rows);
        assert!(!output.summary.is_empty());

        let (_, data) = read_csv(&output.path);
        assert_eq!(data.len(), rows);
    }

    let leftovers: Vec<_> = std::fs::read_dir(&out)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".partial"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn parquet_run_uses_parquet_extension() {
    let dir = tempfile::tempdir().unwrap();
    let config = RunConfig::default()
        .with_districts_path(uttarakhand_fixture(dir.path()))
        .with_output_dir(dir.path().join("pq"))
        .with_format(OutputFormat::Parquet)
        .with_num_patients(50)
        .with_variants([Variant::Dengue]);

    let outputs = run(&config).unwrap();
    assert_eq!(outputs.len(), 1);
    assert!(outputs[0].path.ends_with("synthetic_clinical_dataset_dengue.parquet"));
    assert!(outputs[0].path.is_file());
}

#[test]
fn bad_districts_path_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let config = RunConfig {
        districts_path: dir.path().join("missing.geojson"),
        output_dir: out.clone(),
        num_patients: Some(10),
        ..RunConfig::default()
    };

    let err = run(&config).unwrap_err();
    assert!(matches!(err, SynthError::RegionLoad { .. }));
    assert!(!out.exists());
}

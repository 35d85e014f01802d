//! Tests for clinical cohort generation

use std::collections::HashSet;

use cohort_synth::cohort::CohortGenerator;
use cohort_synth::risk::PROBABILITY_FLOOR;
use cohort_synth::sampling::Season;
use cohort_synth::{ClinicalParams, RegionSet, generate_cohort};

use crate::utils::UTTARAKHAND;

fn small_regions() -> RegionSet {
    RegionSet::from_codes([1, 2, 3]).unwrap()
}

#[test]
fn five_patient_scenario() {
    for params in [ClinicalParams::general(), ClinicalParams::dengue()] {
        let params = params.with_seed(101).with_num_patients(5);
        let cohort = generate_cohort(params, &small_regions()).unwrap();

        assert_eq!(cohort.len(), 5);
        for record in cohort.records() {
            assert!([1, 2, 3].contains(&record.features.region));
            assert!((18..85).contains(&record.features.age));
            assert!(record.outcome <= 1);
        }
    }
}

#[test]
fn patient_ids_are_sequential_from_1001() {
    let cohort =
        generate_cohort(ClinicalParams::general().with_num_patients(4), &small_regions()).unwrap();
    let ids: Vec<u64> = cohort.records().iter().map(|r| r.patient_id).collect();
    assert_eq!(ids, vec![1001, 1002, 1003, 1004]);
}

#[test]
fn sampled_fields_respect_their_bounds() {
    for params in [ClinicalParams::general(), ClinicalParams::dengue()] {
        let (bmi_lo, bmi_hi) = params.bmi_bounds;
        let (age_lo, age_hi) = params.age_range;
        let cohort = generate_cohort(params.with_num_patients(10_000), &small_regions()).unwrap();

        for record in cohort.records() {
            let f = &record.features;
            assert!(f.bmi >= bmi_lo && f.bmi <= bmi_hi, "BMI {}", f.bmi);
            assert!(f.age >= age_lo && f.age < age_hi, "age {}", f.age);
            assert!(f.has_hypertension <= 1);
            assert!(f.has_high_cholesterol <= 1);
            assert!(f.family_history_diabetes <= 1);
            assert!(record.probability >= PROBABILITY_FLOOR);
            assert!(record.probability <= 1.0 - PROBABILITY_FLOOR);
        }
    }
}

#[test]
fn same_seed_same_cohort() {
    let regions = RegionSet::from_codes(UTTARAKHAND.iter().map(|(c, _)| *c)).unwrap();
    let generator =
        CohortGenerator::new(ClinicalParams::dengue().with_num_patients(2_000), &regions).unwrap();

    let first = generator.generate();
    let second = generator.generate();
    assert_eq!(first.records(), second.records());
}

#[test]
fn different_seeds_give_different_cohorts() {
    let regions = small_regions();
    let a = generate_cohort(ClinicalParams::general().with_num_patients(100), &regions).unwrap();
    let b = generate_cohort(
        ClinicalParams::general().with_num_patients(100).with_seed(102),
        &regions,
    )
    .unwrap();
    assert_ne!(a.records(), b.records());
}

#[test]
fn every_district_is_drawn() {
    let codes: Vec<i64> = UTTARAKHAND.iter().map(|(c, _)| *c).collect();
    let regions = RegionSet::from_codes(codes.clone()).unwrap();
    let n = codes.len() * 100;

    let cohort = generate_cohort(ClinicalParams::general().with_num_patients(n), &regions).unwrap();
    let seen: HashSet<i64> = cohort.records().iter().map(|r| r.features.region).collect();
    assert_eq!(seen, codes.into_iter().collect());
}

#[test]
fn seasons_follow_day_of_year_shares() {
    let cohort =
        generate_cohort(ClinicalParams::dengue().with_num_patients(20_000), &small_regions())
            .unwrap();

    let monsoon = cohort
        .records()
        .iter()
        .filter(|r| r.features.season == Some(Season::Monsoon))
        .count() as f64
        / 20_000.0;
    // 93 of the 365 possible days
    assert!((monsoon - 93.0 / 365.0).abs() < 0.02, "monsoon share {monsoon}");
    assert!(cohort.records().iter().all(|r| r.features.season.is_some()));
}

#[test]
fn prevalence_is_plausible_for_general_cohort() {
    let cohort =
        generate_cohort(ClinicalParams::general().with_num_patients(10_000), &small_regions())
            .unwrap();
    let prevalence = cohort.prevalence();
    assert!(prevalence > 0.05 && prevalence < 0.95, "prevalence {prevalence}");
}

#[test]
fn invalid_parameters_are_rejected() {
    let mut params = ClinicalParams::general();
    params.hypertension_rate = 1.2;
    assert!(generate_cohort(params, &small_regions()).is_err());

    let mut params = ClinicalParams::general();
    params.bmi_bounds = (50.0, 15.0);
    assert!(generate_cohort(params, &small_regions()).is_err());
}

//! Tests for district SDOH profile derivation

use cohort_synth::config::SDOH_INDICATORS;
use cohort_synth::{Region, RegionSet, SdohParams, generate_profiles};

use crate::utils::UTTARAKHAND;

fn many_regions(n: i64) -> RegionSet {
    RegionSet::from_codes(0..n).unwrap()
}

fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len() as f64;
    let mx = xs.iter().sum::<f64>() / n;
    let my = ys.iter().sum::<f64>() / n;
    let cov: f64 = xs.iter().zip(ys).map(|(x, y)| (x - mx) * (y - my)).sum();
    let vx: f64 = xs.iter().map(|x| (x - mx).powi(2)).sum();
    let vy: f64 = ys.iter().map(|y| (y - my).powi(2)).sum();
    cov / (vx.sqrt() * vy.sqrt())
}

#[test]
fn indicators_stay_within_bounds() {
    let table = generate_profiles(SdohParams::default(), &many_regions(10_000)).unwrap();
    assert_eq!(table.len(), 10_000);

    for profile in table.profiles() {
        for (value, spec) in profile.indicators.iter().zip(SDOH_INDICATORS.iter()) {
            assert!(
                *value >= spec.lower && *value <= spec.upper,
                "{} = {value} outside [{}, {}]",
                spec.column,
                spec.lower,
                spec.upper
            );
        }
    }
}

#[test]
fn same_seed_same_profiles() {
    let regions = RegionSet::new(
        UTTARAKHAND
            .iter()
            .map(|(code, name)| Region::new(*code, Some((*name).to_string())))
            .collect(),
    )
    .unwrap();

    let a = generate_profiles(SdohParams::default(), &regions).unwrap();
    let b = generate_profiles(SdohParams::default(), &regions).unwrap();
    assert_eq!(a.profiles(), b.profiles());

    let c = generate_profiles(
        SdohParams {
            seed: 7,
            ..SdohParams::default()
        },
        &regions,
    )
    .unwrap();
    assert_ne!(a.profiles(), c.profiles());
}

#[test]
fn shared_score_correlates_indicators() {
    let table = generate_profiles(SdohParams::default(), &many_regions(2_000)).unwrap();
    let poverty = table.indicator_values(0);
    let income = table.indicator_values(2);
    let no_toilet = table.indicator_values(5);

    assert!(pearson(&poverty, &income) < -0.5);
    assert!(pearson(&poverty, &no_toilet) > 0.5);
}

#[test]
fn names_are_carried_through() {
    let regions = RegionSet::new(vec![
        Region::new(64, Some("Almora".to_string())),
        Region::new(68, Some("Hardwar".to_string())),
    ])
    .unwrap();

    let table = generate_profiles(SdohParams::default(), &regions).unwrap();
    let names: Vec<&str> = table
        .profiles()
        .iter()
        .filter_map(|p| p.region.name.as_deref())
        .collect();
    assert_eq!(names, vec!["Almora", "Hardwar"]);
}

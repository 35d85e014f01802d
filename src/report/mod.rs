//! Human-readable summaries of generated tables
//!
//! These are printed to the console after a run and are not part of the
//! data contract.

use itertools::{Itertools, MinMaxResult};
use rustc_hash::FxHashMap;

use crate::cohort::{ClinicalCohort, ClinicalRecord};
use crate::sampling::Season;
use crate::sdoh::SdohTable;

/// Number of leading rows shown in summaries
pub const PREVIEW_ROWS: usize = 5;

/// Outcome counts within one season
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeasonOutcomes {
    pub negative: usize,
    pub positive: usize,
}

impl SeasonOutcomes {
    #[must_use]
    pub fn total(&self) -> usize {
        self.negative + self.positive
    }

    /// Share of positive outcomes within the season
    #[must_use]
    pub fn positive_share(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            self.positive as f64 / self.total() as f64
        }
    }
}

/// Outcome counts per season; seasons without records are absent
#[must_use]
pub fn outcomes_by_season(cohort: &ClinicalCohort) -> FxHashMap<Season, SeasonOutcomes> {
    let mut by_season: FxHashMap<Season, SeasonOutcomes> = FxHashMap::default();
    for record in cohort.records() {
        let Some(season) = record.features.season else {
            continue;
        };
        let entry = by_season.entry(season).or_default();
        if record.outcome == 1 {
            entry.positive += 1;
        } else {
            entry.negative += 1;
        }
    }
    by_season
}

/// Summary of a clinical cohort
#[must_use]
pub fn clinical_summary(cohort: &ClinicalCohort) -> String {
    let params = cohort.params();
    let districts = cohort
        .records()
        .iter()
        .map(|r| r.features.region)
        .unique()
        .count();

    let mut summary = String::new();
    summary.push_str(&format!("Synthetic {} Cohort Summary:\n", params.name));
    summary.push_str(&format!("  Patients: {}\n", cohort.len()));
    summary.push_str(&format!("  Districts Represented: {districts}\n"));
    summary.push_str(&format!(
        "  {} Prevalence: {:.2}%\n",
        params.outcome_column,
        cohort.prevalence() * 100.0
    ));

    summary.push_str(&format!("\nFirst {PREVIEW_ROWS} rows:\n"));
    let header: Vec<String> = cohort
        .column_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    let rows: Vec<Vec<String>> = cohort
        .records()
        .iter()
        .take(PREVIEW_ROWS)
        .map(clinical_row)
        .collect();
    summary.push_str(&format_table(&header, &rows));

    if params.tracks_season() {
        let by_season = outcomes_by_season(cohort);
        summary.push_str(&format!(
            "\nDistribution of {} by season:\n",
            params.outcome_column
        ));
        for season in Season::ALL {
            let Some(counts) = by_season.get(&season) else {
                continue;
            };
            let span = season
                .calendar_span()
                .map(|s| format!(" ({s})"))
                .unwrap_or_default();
            summary.push_str(&format!(
                "  {season}{span}: 0 -> {:.3}, 1 -> {:.3} (n = {})\n",
                1.0 - counts.positive_share(),
                counts.positive_share(),
                counts.total()
            ));
        }
    }

    summary
}

fn clinical_row(record: &ClinicalRecord) -> Vec<String> {
    let f = &record.features;
    let mut row = vec![
        record.patient_id.to_string(),
        f.region.to_string(),
        f.age.to_string(),
        f.sex.to_string(),
        format!("{:.6}", f.bmi),
        f.has_hypertension.to_string(),
        f.has_high_cholesterol.to_string(),
        f.family_history_diabetes.to_string(),
    ];
    if let Some(season) = f.season {
        row.push(season.to_string());
    }
    row.push(record.outcome.to_string());
    row
}

/// Summary of the SDOH table
#[must_use]
pub fn sdoh_summary(table: &SdohTable) -> String {
    let mut summary = String::new();
    summary.push_str("Synthetic SDOH Summary:\n");
    summary.push_str(&format!("  Districts: {}\n", table.len()));

    summary.push_str(&format!("\nFirst {PREVIEW_ROWS} rows:\n"));
    let header: Vec<String> = table
        .column_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    let rows: Vec<Vec<String>> = table
        .profiles()
        .iter()
        .take(PREVIEW_ROWS)
        .map(|p| {
            [
                p.region.code.to_string(),
                p.region.name.clone().unwrap_or_default(),
            ]
            .into_iter()
            .chain(p.indicators.iter().map(|v| format!("{v:.2}")))
            .collect()
        })
        .collect();
    summary.push_str(&format_table(&header, &rows));

    summary.push_str("\nIndicator ranges (min / mean / max):\n");
    for (index, spec) in table.params().indicators.iter().enumerate() {
        let values = table.indicator_values(index);
        let mean = values.iter().sum::<f64>() / values.len().max(1) as f64;
        let (min, max) = match values.iter().copied().minmax_by(f64::total_cmp) {
            MinMaxResult::NoElements => continue,
            MinMaxResult::OneElement(v) => (v, v),
            MinMaxResult::MinMax(lo, hi) => (lo, hi),
        };
        summary.push_str(&format!(
            "  {}: {min:.2} / {mean:.2} / {max:.2}\n",
            spec.column
        ));
    }

    summary
}

/// Render rows as right-aligned, space-separated columns
#[must_use]
pub fn format_table(header: &[String], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(String::len)
                .chain(std::iter::once(header[col].len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let render = |cells: &[String]| -> String {
        let line = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:>width$}"))
            .join("  ");
        format!("{line}\n")
    };

    std::iter::once(render(header))
        .chain(rows.iter().map(|row| render(row)))
        .collect()
}

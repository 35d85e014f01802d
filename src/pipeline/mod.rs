//! End-to-end generation runs
//!
//! A run loads the districts once, then generates, writes and summarizes each
//! requested variant in turn. Districts are loaded before anything is
//! generated, so a bad input file aborts the run without writing output.

use std::path::PathBuf;
use std::time::Instant;

use itertools::Itertools;

use crate::cohort::generate_cohort;
use crate::config::{ClinicalParams, RunConfig, SdohParams, Variant};
use crate::error::Result;
use crate::export::{TabularDataset, export};
use crate::region::{RegionLoader, RegionSet};
use crate::report::{clinical_summary, sdoh_summary};
use crate::sdoh::generate_profiles;
use crate::utils::logging::{create_spinner, finish_progress_bar, log_warning};

/// Result of generating one variant
#[derive(Debug, Clone)]
pub struct VariantOutput {
    pub variant: Variant,
    /// Where the table was written
    pub path: PathBuf,
    pub rows: usize,
    /// Console summary of the generated table
    pub summary: String,
}

/// Load the districts needed by the configured variants
pub fn load_regions(config: &RunConfig) -> Result<RegionSet> {
    let needs_names = config.variants.contains(&Variant::Sdoh);
    let regions = RegionLoader::new(config.districts_path.clone())
        .with_required_names(needs_names)
        .load()?;
    log::info!(
        "Loaded {} district codes from {}",
        regions.len(),
        config.districts_path.display()
    );

    let duplicates: Vec<i64> = regions.iter().map(|r| r.code).duplicates().collect();
    if !duplicates.is_empty() {
        log_warning(
            &format!("Duplicate district codes {duplicates:?} in"),
            Some(&config.districts_path),
        );
    }
    Ok(regions)
}

/// Generate, write and summarize one variant
pub fn run_variant(
    variant: Variant,
    config: &RunConfig,
    regions: &RegionSet,
) -> Result<VariantOutput> {
    let spinner = create_spinner(Some(format!("Generating {variant} data").as_str()));
    let start = Instant::now();

    let (path, rows, summary) = match variant {
        Variant::Clinical | Variant::Dengue => {
            let base = if variant == Variant::Dengue {
                ClinicalParams::dengue()
            } else {
                ClinicalParams::general()
            };
            let cohort = generate_cohort(config.clinical_params(base), regions)?;
            spinner.set_message(format!("Writing {}", cohort.file_stem()));
            let path = export(&cohort, &config.output_dir, config.format)?;
            (path, cohort.len(), clinical_summary(&cohort))
        }
        Variant::Sdoh => {
            let table = generate_profiles(SdohParams::default(), regions)?;
            spinner.set_message(format!("Writing {}", table.file_stem()));
            let path = export(&table, &config.output_dir, config.format)?;
            (path, table.len(), sdoh_summary(&table))
        }
    };

    finish_progress_bar(
        &spinner,
        Some(format!("{variant}: {rows} rows in {:?}", start.elapsed()).as_str()),
    );

    Ok(VariantOutput {
        variant,
        path,
        rows,
        summary,
    })
}

/// Run every configured variant
pub fn run(config: &RunConfig) -> Result<Vec<VariantOutput>> {
    log::debug!("{config}");
    let regions = load_regions(config)?;
    config
        .variants
        .iter()
        .map(|&variant| run_variant(variant, config, &regions))
        .collect()
}

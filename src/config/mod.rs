//! Configuration for generation runs.
//!
//! Every generation constant is fixed at source. A run reads no flags or
//! environment; the builder methods below exist for library callers and tests.

pub mod params;

use std::fmt;
use std::path::PathBuf;

use itertools::Itertools;

use crate::export::OutputFormat;

pub use params::{ClinicalParams, IndicatorSpec, RiskParams, SDOH_INDICATORS, SdohParams};

/// Default boundary dataset read by the district loader
pub const DEFAULT_DISTRICTS_PATH: &str = "UTTARAKHAND_DISTRICTS.geojson";

/// Dataset variants the generator can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// General chronic-disease clinical cohort
    Clinical,
    /// Dengue clinical cohort with seasonality
    Dengue,
    /// District-level social determinants of health
    Sdoh,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Clinical, Variant::Dengue, Variant::Sdoh];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Variant::Clinical => "clinical",
            Variant::Dengue => "dengue",
            Variant::Sdoh => "sdoh",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration of one generator run
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// GeoJSON file with district codes and names
    pub districts_path: PathBuf,
    /// Directory the tables are written to
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    /// Overrides the clinical population size when set
    pub num_patients: Option<usize>,
    /// Variants to generate, in order
    pub variants: Vec<Variant>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            districts_path: PathBuf::from(DEFAULT_DISTRICTS_PATH),
            output_dir: PathBuf::from("."),
            format: OutputFormat::Csv,
            num_patients: None,
            variants: Variant::ALL.to_vec(),
        }
    }
}

impl RunConfig {
    /// Read districts from `path` instead of the default boundary file
    #[must_use]
    pub fn with_districts_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.districts_path = path.into();
        self
    }

    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Override the population size of both clinical variants
    #[must_use]
    pub fn with_num_patients(mut self, num_patients: usize) -> Self {
        self.num_patients = Some(num_patients);
        self
    }

    /// Restrict the run to `variants`, in the given order
    #[must_use]
    pub fn with_variants(mut self, variants: impl IntoIterator<Item = Variant>) -> Self {
        self.variants = variants.into_iter().unique().collect();
        self
    }

    /// Clinical parameters for a variant with the run's overrides applied
    #[must_use]
    pub fn clinical_params(&self, base: ClinicalParams) -> ClinicalParams {
        match self.num_patients {
            Some(n) => base.with_num_patients(n),
            None => base,
        }
    }
}

impl fmt::Display for RunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Run Configuration:")?;
        writeln!(f, "  Districts: {}", self.districts_path.display())?;
        writeln!(f, "  Output Directory: {}", self.output_dir.display())?;
        writeln!(f, "  Format: {}", self.format)?;
        if let Some(n) = self.num_patients {
            writeln!(f, "  Patients: {n}")?;
        }
        let names: Vec<&str> = self.variants.iter().map(|v| v.name()).collect();
        writeln!(f, "  Variants: {}", names.join(", "))
    }
}

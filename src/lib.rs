//! A Rust library for generating seeded synthetic epidemiological datasets:
//! patient-level clinical cohorts and district-level social determinants of
//! health, written as flat tables.

pub mod cohort;
pub mod config;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod region;
pub mod report;
pub mod risk;
pub mod sampling;
pub mod sdoh;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{ClinicalParams, RunConfig, SdohParams, Variant};
pub use error::{Result, SynthError};
pub use region::{Region, RegionLoader, RegionSet};

// Generators
pub use cohort::{ClinicalCohort, ClinicalRecord, CohortGenerator, generate_cohort};
pub use risk::{LinearRiskModel, sigmoid};
pub use sdoh::{ProfileGenerator, RegionProfile, SdohTable, generate_profiles};

// Output
pub use export::{OutputFormat, TabularDataset, export};
pub use pipeline::{VariantOutput, run};

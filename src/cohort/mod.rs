//! Synthetic clinical cohorts
//!
//! A cohort is generated in one pass: for each patient the feature sampler
//! draws the attributes, the risk model turns them into a probability, and a
//! separate uniform draw decides the binary outcome. Each step reads from its
//! own stream of the run's [`SeedStreams`], so a seed fully determines the
//! table.

pub mod record;
pub mod sampler;
pub mod table;

use rand::distr::Distribution;

use crate::config::ClinicalParams;
use crate::error::Result;
use crate::region::RegionSet;
use crate::risk::LinearRiskModel;
use crate::sampling::SeedStreams;

pub use record::{ClinicalRecord, PatientFeatures, Sex};
pub use sampler::{FeatureSampler, draw_outcome};

/// Generator for one clinical cohort variant
#[derive(Debug, Clone)]
pub struct CohortGenerator {
    params: ClinicalParams,
    sampler: FeatureSampler,
    model: LinearRiskModel,
}

impl CohortGenerator {
    /// Validate the parameters against the region set and build the generator
    pub fn new(params: ClinicalParams, regions: &RegionSet) -> Result<Self> {
        let sampler = FeatureSampler::new(&params, regions)?;
        let model = LinearRiskModel::new(params.risk.clone())?;
        Ok(Self {
            params,
            sampler,
            model,
        })
    }

    #[must_use]
    pub fn params(&self) -> &ClinicalParams {
        &self.params
    }

    /// Generate the cohort from the configured seed
    #[must_use]
    pub fn generate(&self) -> ClinicalCohort {
        let mut streams = SeedStreams::from_seed(self.params.seed);
        let records = (0..self.params.num_patients as u64)
            .map(|offset| {
                let features = self.sampler.sample(&mut streams.features);
                let probability = self.model.probability(&features, &mut streams.noise);
                let outcome = draw_outcome(probability, &mut streams.labels);
                ClinicalRecord {
                    patient_id: self.params.first_patient_id + offset,
                    features,
                    probability,
                    outcome,
                }
            })
            .collect();

        ClinicalCohort {
            params: self.params.clone(),
            records,
        }
    }
}

/// Generate a clinical cohort in one call
pub fn generate_cohort(params: ClinicalParams, regions: &RegionSet) -> Result<ClinicalCohort> {
    let generator = CohortGenerator::new(params, regions)?;
    log::debug!("{}", generator.params());
    Ok(generator.generate())
}

/// A fully materialized clinical cohort
#[derive(Debug, Clone)]
pub struct ClinicalCohort {
    params: ClinicalParams,
    records: Vec<ClinicalRecord>,
}

impl ClinicalCohort {
    #[must_use]
    pub fn params(&self) -> &ClinicalParams {
        &self.params
    }

    #[must_use]
    pub fn records(&self) -> &[ClinicalRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Share of records with a positive outcome
    #[must_use]
    pub fn prevalence(&self) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        let positives = self.records.iter().filter(|r| r.outcome == 1).count();
        positives as f64 / self.records.len() as f64
    }
}

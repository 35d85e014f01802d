//! District-level social determinants of health
//!
//! Every region gets one latent disadvantage score. Each indicator is a
//! clipped linear function of that score plus its own normal noise, which
//! correlates the indicators within a region without exposing the score.

use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::record_batch::RecordBatch;
use arrow_schema::{DataType, Field, Schema, SchemaRef};
use rand::distr::{Distribution, Uniform};
use rand_distr::Normal;

use crate::config::{IndicatorSpec, SdohParams};
use crate::error::{Result, SynthError};
use crate::export::TabularDataset;
use crate::region::{CODE_COLUMN, NAME_COLUMN, Region, RegionSet};
use crate::sampling::{Bounds, SeedStreams, normal};

/// Derived indicators of one region
#[derive(Debug, Clone, PartialEq)]
pub struct RegionProfile {
    pub region: Region,
    /// Indicator values in the order of [`SdohParams::indicators`]
    pub indicators: Vec<f64>,
}

#[derive(Debug, Clone, Copy)]
struct IndicatorModel {
    spec: IndicatorSpec,
    noise: Normal<f64>,
    bounds: Bounds,
}

impl IndicatorModel {
    fn new(spec: IndicatorSpec) -> Result<Self> {
        Ok(Self {
            spec,
            noise: normal(0.0, spec.noise_std_dev)?,
            bounds: Bounds::new(spec.lower, spec.upper)?,
        })
    }

    fn derive(&self, score: f64, noise: f64) -> f64 {
        self.bounds
            .clip(self.spec.base + self.spec.slope * score + noise)
    }
}

/// Generator for the SDOH table
#[derive(Debug, Clone)]
pub struct ProfileGenerator {
    params: SdohParams,
    score: Uniform<f64>,
    models: Vec<IndicatorModel>,
}

impl ProfileGenerator {
    pub fn new(params: SdohParams) -> Result<Self> {
        let (low, high) = params.score_range;
        let score = Uniform::new(low, high).map_err(|e| {
            SynthError::invalid_parameter("disadvantage score", format!("[{low}, {high}): {e}"))
        })?;
        let models = params
            .indicators
            .iter()
            .copied()
            .map(IndicatorModel::new)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            params,
            score,
            models,
        })
    }

    #[must_use]
    pub fn params(&self) -> &SdohParams {
        &self.params
    }

    /// Derive one profile per region, in region order
    #[must_use]
    pub fn generate(&self, regions: &RegionSet) -> SdohTable {
        let mut streams = SeedStreams::from_seed(self.params.seed);

        let scores: Vec<f64> = regions
            .iter()
            .map(|_| self.score.sample(&mut streams.features))
            .collect();

        // Indicator-major draw order: all regions for the first indicator, then the next
        let columns: Vec<Vec<f64>> = self
            .models
            .iter()
            .map(|model| {
                scores
                    .iter()
                    .map(|&score| model.derive(score, model.noise.sample(&mut streams.noise)))
                    .collect()
            })
            .collect();

        let profiles = regions
            .iter()
            .enumerate()
            .map(|(row, region)| RegionProfile {
                region: region.clone(),
                indicators: columns.iter().map(|column| column[row]).collect(),
            })
            .collect();

        SdohTable {
            params: self.params.clone(),
            profiles,
        }
    }
}

/// Generate the SDOH table in one call
pub fn generate_profiles(params: SdohParams, regions: &RegionSet) -> Result<SdohTable> {
    let generator = ProfileGenerator::new(params)?;
    log::debug!("{}", generator.params());
    Ok(generator.generate(regions))
}

/// One row per region with the derived indicators
#[derive(Debug, Clone)]
pub struct SdohTable {
    params: SdohParams,
    profiles: Vec<RegionProfile>,
}

impl SdohTable {
    #[must_use]
    pub fn params(&self) -> &SdohParams {
        &self.params
    }

    #[must_use]
    pub fn profiles(&self) -> &[RegionProfile] {
        &self.profiles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Output column names in order
    #[must_use]
    pub fn column_names(&self) -> Vec<&'static str> {
        [CODE_COLUMN, NAME_COLUMN]
            .into_iter()
            .chain(self.params.indicators.iter().map(|spec| spec.column))
            .collect()
    }

    /// Values of one indicator across all regions
    #[must_use]
    pub fn indicator_values(&self, index: usize) -> Vec<f64> {
        self.profiles.iter().map(|p| p.indicators[index]).collect()
    }
}

impl TabularDataset for SdohTable {
    fn file_stem(&self) -> &str {
        self.params.file_stem
    }

    fn schema(&self) -> SchemaRef {
        let mut fields = vec![
            Field::new(CODE_COLUMN, DataType::Int64, false),
            Field::new(NAME_COLUMN, DataType::Utf8, true),
        ];
        fields.extend(
            self.params
                .indicators
                .iter()
                .map(|spec| Field::new(spec.column, DataType::Float64, false)),
        );
        Arc::new(Schema::new(fields))
    }

    fn to_record_batch(&self) -> Result<RecordBatch> {
        let mut columns: Vec<ArrayRef> = vec![
            Arc::new(Int64Array::from_iter_values(
                self.profiles.iter().map(|p| p.region.code),
            )),
            Arc::new(
                self.profiles
                    .iter()
                    .map(|p| p.region.name.as_deref())
                    .collect::<StringArray>(),
            ),
        ];
        for index in 0..self.params.indicators.len() {
            columns.push(Arc::new(Float64Array::from(self.indicator_values(index))));
        }
        Ok(RecordBatch::try_new(self.schema(), columns)?)
    }
}

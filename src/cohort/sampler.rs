//! Feature and outcome sampling for clinical records

use rand::Rng;
use rand::distr::{Distribution, Uniform};

use crate::cohort::record::{PatientFeatures, Sex};
use crate::config::ClinicalParams;
use crate::error::{Result, SynthError};
use crate::region::RegionSet;
use crate::sampling::{Bounds, Categorical, ClippedNormal, Flag, Season};

/// Day-of-year draw used for season bucketing, `[1, 366)`
const DAY_OF_YEAR: (u16, u16) = (1, 366);

/// Draws the independent attributes of one patient
#[derive(Debug, Clone)]
pub struct FeatureSampler {
    region: Categorical<i64>,
    age: Uniform<u32>,
    sex: Categorical<Sex>,
    bmi: ClippedNormal,
    hypertension: Flag,
    high_cholesterol: Flag,
    family_history: Flag,
    day_of_year: Option<Uniform<u16>>,
}

impl FeatureSampler {
    /// Build the per-field distributions for a cohort
    pub fn new(params: &ClinicalParams, regions: &RegionSet) -> Result<Self> {
        let region = Categorical::uniform(regions.codes())?;
        let (min_age, max_age) = params.age_range;
        let age = Uniform::new(min_age, max_age).map_err(|e| {
            SynthError::invalid_parameter("age range", format!("[{min_age}, {max_age}): {e}"))
        })?;
        let sex = Categorical::weighted(&params.sex_weights)?;
        let bmi = ClippedNormal::new(
            params.bmi_mean,
            params.bmi_std_dev,
            Bounds::new(params.bmi_bounds.0, params.bmi_bounds.1)?,
        )?;

        let day_of_year = if params.tracks_season() {
            let day = Uniform::new(DAY_OF_YEAR.0, DAY_OF_YEAR.1)
                .map_err(|e| SynthError::invalid_parameter("day of year", e))?;
            Some(day)
        } else {
            None
        };

        Ok(Self {
            region,
            age,
            sex,
            bmi,
            hypertension: Flag::new(params.hypertension_rate)?,
            high_cholesterol: Flag::new(params.high_cholesterol_rate)?,
            family_history: Flag::new(params.family_history_rate)?,
            day_of_year,
        })
    }

    /// Clipping range of the BMI draw
    #[must_use]
    pub fn bmi_bounds(&self) -> Bounds {
        self.bmi.bounds()
    }
}

impl Distribution<PatientFeatures> for FeatureSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PatientFeatures {
        PatientFeatures {
            region: self.region.sample(rng),
            age: self.age.sample(rng),
            sex: self.sex.sample(rng),
            bmi: self.bmi.sample(rng),
            has_hypertension: self.hypertension.sample(rng),
            has_high_cholesterol: self.high_cholesterol.sample(rng),
            family_history_diabetes: self.family_history.sample(rng),
            season: self
                .day_of_year
                .as_ref()
                .map(|day| Season::from_day_of_year(day.sample(rng))),
        }
    }
}

/// Bernoulli outcome with the given success probability
pub fn draw_outcome<R: Rng + ?Sized>(probability: f64, rng: &mut R) -> u8 {
    u8::from(rng.random::<f64>() < probability)
}

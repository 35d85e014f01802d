//! Logistic risk scoring
//!
//! A record's risk score is a weighted sum of centred features, comorbidity
//! indicators, an optional seasonal term, an intercept and one zero-mean
//! normal noise draw. The sigmoid maps the score to the probability used by
//! the outcome draw.

use rand::Rng;
use rand::distr::Distribution;
use rand_distr::Normal;

use crate::cohort::record::PatientFeatures;
use crate::config::RiskParams;
use crate::error::Result;
use crate::sampling::{Season, normal};

/// Smallest probability the sigmoid returns; the largest is `1 - PROBABILITY_FLOOR`
pub const PROBABILITY_FLOOR: f64 = 1e-9;

/// Logistic function bounded to `[PROBABILITY_FLOOR, 1 - PROBABILITY_FLOOR]`
///
/// Evaluated in the form that avoids overflowing `exp` for either sign of `x`.
#[must_use]
pub fn sigmoid(x: f64) -> f64 {
    let p = if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    };
    p.clamp(PROBABILITY_FLOOR, 1.0 - PROBABILITY_FLOOR)
}

/// Additive risk per season label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonalEffect {
    pub monsoon: f64,
    pub post_monsoon: f64,
}

impl SeasonalEffect {
    /// Term added to the score for a season; seasons outside the outbreak
    /// windows contribute nothing
    #[must_use]
    pub fn multiplier(&self, season: Season) -> f64 {
        match season {
            Season::Monsoon => self.monsoon,
            Season::PostMonsoon => self.post_monsoon,
            Season::Other => 0.0,
        }
    }
}

/// Linear risk score with a normal noise term
#[derive(Debug, Clone)]
pub struct LinearRiskModel {
    params: RiskParams,
    noise: Normal<f64>,
}

impl LinearRiskModel {
    pub fn new(params: RiskParams) -> Result<Self> {
        let noise = normal(0.0, params.noise_std_dev)?;
        Ok(Self { params, noise })
    }

    #[must_use]
    pub fn params(&self) -> &RiskParams {
        &self.params
    }

    /// Deterministic part of the score
    #[must_use]
    pub fn linear_score(&self, features: &PatientFeatures) -> f64 {
        let p = &self.params;
        let mut score = p.age_coefficient * (f64::from(features.age) - p.age_baseline)
            + p.bmi_coefficient * (features.bmi - p.bmi_baseline)
            + p.hypertension_weight * f64::from(features.has_hypertension)
            + p.high_cholesterol_weight * f64::from(features.has_high_cholesterol)
            + p.family_history_weight * f64::from(features.family_history_diabetes)
            + p.intercept;

        if let (Some(effect), Some(season)) = (&p.seasonal, features.season) {
            score += effect.multiplier(season);
        }
        score
    }

    /// Full score including one noise draw from `rng`
    pub fn score<R: Rng + ?Sized>(&self, features: &PatientFeatures, rng: &mut R) -> f64 {
        self.linear_score(features) + self.noise.sample(rng)
    }

    /// Outcome probability for a record
    pub fn probability<R: Rng + ?Sized>(&self, features: &PatientFeatures, rng: &mut R) -> f64 {
        sigmoid(self.score(features, rng))
    }
}

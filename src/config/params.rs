//! Distribution and model constants for each dataset variant

use std::fmt;

use crate::cohort::record::Sex;
use crate::risk::SeasonalEffect;

/// Coefficients of the linear risk score
#[derive(Debug, Clone, PartialEq)]
pub struct RiskParams {
    /// Weight applied to `(age - age_baseline)`
    pub age_coefficient: f64,
    pub age_baseline: f64,
    /// Weight applied to `(bmi - bmi_baseline)`
    pub bmi_coefficient: f64,
    pub bmi_baseline: f64,
    /// Added when the hypertension flag is set
    pub hypertension_weight: f64,
    /// Added when the high cholesterol flag is set
    pub high_cholesterol_weight: f64,
    /// Added when the family history flag is set
    pub family_history_weight: f64,
    /// Standard deviation of the zero-mean noise term
    pub noise_std_dev: f64,
    /// Constant offset of the score
    pub intercept: f64,
    /// Per-season additive term; `None` disables season sampling entirely
    pub seasonal: Option<SeasonalEffect>,
}

/// Parameters of a clinical cohort
#[derive(Debug, Clone, PartialEq)]
pub struct ClinicalParams {
    /// Short variant name used in logs and file names
    pub name: &'static str,
    /// Seed of the run's master generator
    pub seed: u64,
    /// Number of simulated patients
    pub num_patients: usize,
    /// Identifier given to the first patient; later ones count up by one
    pub first_patient_id: u64,
    /// Half-open age range `[min, max)`
    pub age_range: (u32, u32),
    pub sex_weights: [(Sex, f64); 2],
    pub bmi_mean: f64,
    pub bmi_std_dev: f64,
    /// Inclusive clipping range of the BMI draw
    pub bmi_bounds: (f64, f64),
    pub hypertension_rate: f64,
    pub high_cholesterol_rate: f64,
    pub family_history_rate: f64,
    pub risk: RiskParams,
    /// Header of the binary outcome column
    pub outcome_column: &'static str,
    /// Output file name without extension
    pub file_stem: &'static str,
}

impl ClinicalParams {
    /// General chronic-disease cohort
    #[must_use]
    pub fn general() -> Self {
        Self {
            name: "clinical",
            seed: 101,
            num_patients: 50_000,
            first_patient_id: 1001,
            age_range: (18, 85),
            sex_weights: [(Sex::Male, 0.52), (Sex::Female, 0.48)],
            bmi_mean: 26.0,
            bmi_std_dev: 6.0,
            bmi_bounds: (15.0, 50.0),
            hypertension_rate: 0.3,
            high_cholesterol_rate: 0.4,
            family_history_rate: 0.15,
            risk: RiskParams {
                age_coefficient: 0.04,
                age_baseline: 50.0,
                bmi_coefficient: 0.15,
                bmi_baseline: 25.0,
                hypertension_weight: 0.8,
                high_cholesterol_weight: 0.6,
                family_history_weight: 1.0,
                noise_std_dev: 0.5,
                intercept: -2.5,
                seasonal: None,
            },
            outcome_column: "Has_Disease",
            file_stem: "synthetic_clinical_dataset",
        }
    }

    /// Dengue outbreak cohort with a seasonal risk boost
    #[must_use]
    pub fn dengue() -> Self {
        Self {
            name: "dengue",
            seed: 101,
            num_patients: 50_000,
            first_patient_id: 1001,
            age_range: (18, 85),
            sex_weights: [(Sex::Male, 0.52), (Sex::Female, 0.48)],
            bmi_mean: 24.0,
            bmi_std_dev: 5.0,
            bmi_bounds: (15.0, 45.0),
            hypertension_rate: 0.2,
            high_cholesterol_rate: 0.3,
            family_history_rate: 0.1,
            risk: RiskParams {
                age_coefficient: 0.01,
                age_baseline: 40.0,
                bmi_coefficient: 0.1,
                bmi_baseline: 22.0,
                hypertension_weight: 0.0,
                high_cholesterol_weight: 0.0,
                family_history_weight: 0.0,
                noise_std_dev: 0.5,
                intercept: -5.0,
                seasonal: Some(SeasonalEffect {
                    monsoon: 4.0,
                    post_monsoon: 3.5,
                }),
            },
            outcome_column: "Has_Dengue",
            file_stem: "synthetic_clinical_dataset_dengue",
        }
    }

    /// Whether records carry a season column
    #[must_use]
    pub fn tracks_season(&self) -> bool {
        self.risk.seasonal.is_some()
    }

    /// Same parameters with a different population size
    #[must_use]
    pub fn with_num_patients(mut self, num_patients: usize) -> Self {
        self.num_patients = num_patients;
        self
    }

    /// Same parameters with a different seed
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl fmt::Display for ClinicalParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Clinical Parameters ({}):", self.name)?;
        writeln!(f, "  Seed: {}", self.seed)?;
        writeln!(f, "  Patients: {}", self.num_patients)?;
        writeln!(f, "  Age: [{}, {})", self.age_range.0, self.age_range.1)?;
        writeln!(
            f,
            "  BMI: N({}, {}) clipped to [{}, {}]",
            self.bmi_mean, self.bmi_std_dev, self.bmi_bounds.0, self.bmi_bounds.1
        )?;
        writeln!(
            f,
            "  Flag rates: hypertension {}, cholesterol {}, family history {}",
            self.hypertension_rate, self.high_cholesterol_rate, self.family_history_rate
        )?;
        writeln!(f, "  Seasonal: {}", self.tracks_season())?;
        writeln!(f, "  Outcome column: {}", self.outcome_column)
    }
}

/// Linear recipe for one derived SDOH indicator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorSpec {
    /// Output column header
    pub column: &'static str,
    pub base: f64,
    /// Change per unit of disadvantage score
    pub slope: f64,
    pub noise_std_dev: f64,
    pub lower: f64,
    pub upper: f64,
}

impl IndicatorSpec {
    const fn new(
        column: &'static str,
        base: f64,
        slope: f64,
        noise_std_dev: f64,
        lower: f64,
        upper: f64,
    ) -> Self {
        Self {
            column,
            base,
            slope,
            noise_std_dev,
            lower,
            upper,
        }
    }
}

/// The eleven district-level indicators, in output column order
pub const SDOH_INDICATORS: [IndicatorSpec; 11] = [
    IndicatorSpec::new("Pct_Pop_Below_Poverty", 10.0, 30.0, 3.0, 5.0, 50.0),
    IndicatorSpec::new("Pct_Scheduled_Caste", 5.0, 40.0, 4.0, 5.0, 60.0),
    IndicatorSpec::new("Avg_Household_Income", 50_000.0, -40_000.0, 5_000.0, 8_000.0, 60_000.0),
    IndicatorSpec::new("Pct_Illiterate", 3.0, 15.0, 2.0, 2.0, 25.0),
    IndicatorSpec::new("Literacy_Rate", 90.0, -40.0, 5.0, 40.0, 95.0),
    IndicatorSpec::new("Pct_HH_No_Toilet", 10.0, 40.0, 5.0, 10.0, 60.0),
    IndicatorSpec::new("Pct_HH_Electricity", 98.0, -60.0, 5.0, 30.0, 99.0),
    IndicatorSpec::new("Pct_HH_Clean_Cooking_Fuel", 95.0, -70.0, 5.0, 20.0, 99.0),
    IndicatorSpec::new("Air_Quality_Index_Avg", 50.0, 150.0, 10.0, 40.0, 250.0),
    IndicatorSpec::new("Health_Insurance_Coverage", 90.0, -50.0, 5.0, 30.0, 98.0),
    IndicatorSpec::new("Primary_Health_Centers_Per_100k", 5.0, -4.0, 0.5, 0.5, 6.0),
];

/// Parameters of the district SDOH table
#[derive(Debug, Clone, PartialEq)]
pub struct SdohParams {
    pub seed: u64,
    /// Output file name without extension
    pub file_stem: &'static str,
    /// Range of the latent disadvantage score
    pub score_range: (f64, f64),
    pub indicators: Vec<IndicatorSpec>,
}

impl Default for SdohParams {
    fn default() -> Self {
        Self {
            seed: 42,
            file_stem: "synthetic_sdoh_dataset",
            score_range: (0.1, 1.0),
            indicators: SDOH_INDICATORS.to_vec(),
        }
    }
}

impl fmt::Display for SdohParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SDOH Parameters:")?;
        writeln!(f, "  Seed: {}", self.seed)?;
        writeln!(
            f,
            "  Disadvantage score: [{}, {}]",
            self.score_range.0, self.score_range.1
        )?;
        for spec in &self.indicators {
            writeln!(
                f,
                "  {}: {} + {} * d + N(0, {}) clipped to [{}, {}]",
                spec.column, spec.base, spec.slope, spec.noise_std_dev, spec.lower, spec.upper
            )?;
        }
        Ok(())
    }
}

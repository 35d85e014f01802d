//! Record types of the clinical cohorts

use std::fmt;

use crate::sampling::Season;

/// Recorded sex of a simulated patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Independently sampled attributes of one patient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatientFeatures {
    /// District code
    pub region: i64,
    pub age: u32,
    pub sex: Sex,
    pub bmi: f64,
    pub has_hypertension: u8,
    pub has_high_cholesterol: u8,
    pub family_history_diabetes: u8,
    /// Present only for seasonal variants
    pub season: Option<Season>,
}

/// One simulated patient with derived risk and outcome
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClinicalRecord {
    pub patient_id: u64,
    pub features: PatientFeatures,
    /// Sigmoid of the risk score, strictly inside (0, 1)
    pub probability: f64,
    /// 1 when the outcome draw fell below `probability`
    pub outcome: u8,
}

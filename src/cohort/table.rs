//! Arrow representation of a clinical cohort

use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::record_batch::RecordBatch;
use arrow_schema::{DataType, Field, Schema, SchemaRef};

use crate::cohort::{ClinicalCohort, ClinicalRecord};
use crate::error::Result;
use crate::export::TabularDataset;
use crate::region::CODE_COLUMN;

/// Leading columns shared by every clinical variant
pub const BASE_COLUMNS: [&str; 8] = [
    "Patient_ID",
    CODE_COLUMN,
    "Age",
    "Sex",
    "BMI",
    "Has_Hypertension",
    "Has_High_Cholesterol",
    "Family_History_Diabetes",
];

/// Header of the season column in seasonal variants
pub const SEASON_COLUMN: &str = "Season";

impl ClinicalCohort {
    /// Output column names in order
    #[must_use]
    pub fn column_names(&self) -> Vec<&'static str> {
        let mut names = BASE_COLUMNS.to_vec();
        if self.params().tracks_season() {
            names.push(SEASON_COLUMN);
        }
        names.push(self.params().outcome_column);
        names
    }

    fn int_column(&self, value: impl Fn(&ClinicalRecord) -> i64) -> ArrayRef {
        Arc::new(Int64Array::from_iter_values(self.records().iter().map(value)))
    }
}

impl TabularDataset for ClinicalCohort {
    fn file_stem(&self) -> &str {
        self.params().file_stem
    }

    fn schema(&self) -> SchemaRef {
        let fields: Vec<Field> = self
            .column_names()
            .into_iter()
            .map(|name| {
                let data_type = match name {
                    "Sex" | SEASON_COLUMN => DataType::Utf8,
                    "BMI" => DataType::Float64,
                    _ => DataType::Int64,
                };
                Field::new(name, data_type, false)
            })
            .collect();
        Arc::new(Schema::new(fields))
    }

    #[allow(clippy::cast_possible_wrap)]
    fn to_record_batch(&self) -> Result<RecordBatch> {
        let records = self.records();
        let mut columns: Vec<ArrayRef> = vec![
            self.int_column(|r| r.patient_id as i64),
            self.int_column(|r| r.features.region),
            self.int_column(|r| i64::from(r.features.age)),
            Arc::new(
                records
                    .iter()
                    .map(|r| Some(r.features.sex.label()))
                    .collect::<StringArray>(),
            ),
            Arc::new(Float64Array::from_iter_values(
                records.iter().map(|r| r.features.bmi),
            )),
            self.int_column(|r| i64::from(r.features.has_hypertension)),
            self.int_column(|r| i64::from(r.features.has_high_cholesterol)),
            self.int_column(|r| i64::from(r.features.family_history_diabetes)),
        ];

        if self.params().tracks_season() {
            columns.push(Arc::new(
                records
                    .iter()
                    .map(|r| r.features.season.map(|s| s.label()))
                    .collect::<StringArray>(),
            ));
        }
        columns.push(self.int_column(|r| i64::from(r.outcome)));

        Ok(RecordBatch::try_new(self.schema(), columns)?)
    }
}

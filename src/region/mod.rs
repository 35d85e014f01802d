//! District loading from a GeoJSON boundary dataset
//!
//! Only the feature properties are read; geometry is ignored. Each feature
//! contributes one [`Region`] in file order.

use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::util::open_boundary_file;
use crate::error::{Result, SynthError};
use crate::utils::logging::log_operation_complete;

/// Property holding the numeric district code
pub const CODE_COLUMN: &str = "dtcode11";
/// Property holding the district name
pub const NAME_COLUMN: &str = "dtname";

/// A district identified by its census code
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region {
    pub code: i64,
    pub name: Option<String>,
}

impl Region {
    #[must_use]
    pub fn new(code: i64, name: Option<String>) -> Self {
        Self { code, name }
    }
}

/// Non-empty, ordered set of regions
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSet {
    regions: Vec<Region>,
}

impl RegionSet {
    /// Wrap a list of regions, rejecting an empty list
    pub fn new(regions: Vec<Region>) -> Result<Self> {
        if regions.is_empty() {
            return Err(SynthError::EmptyRegionSet);
        }
        Ok(Self { regions })
    }

    /// Build an unnamed region set from bare codes
    pub fn from_codes(codes: impl IntoIterator<Item = i64>) -> Result<Self> {
        Self::new(codes.into_iter().map(|c| Region::new(c, None)).collect())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// A region set is never empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    /// Region codes in input order
    #[must_use]
    pub fn codes(&self) -> Vec<i64> {
        self.regions.iter().map(|r| r.code).collect()
    }

    /// Whether every region carries a name
    #[must_use]
    pub fn has_names(&self) -> bool {
        self.regions.iter().all(|r| r.name.is_some())
    }
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Option<Map<String, Value>>,
}

impl Feature {
    fn has_property(&self, key: &str) -> bool {
        self.properties.as_ref().is_some_and(|p| p.contains_key(key))
    }
}

/// Reader for district codes and names from a boundary file
#[derive(Debug, Clone)]
pub struct RegionLoader {
    path: PathBuf,
    require_names: bool,
}

impl RegionLoader {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            require_names: false,
        }
    }

    /// Fail when no feature carries a district name column
    #[must_use]
    pub fn with_required_names(mut self, required: bool) -> Self {
        self.require_names = required;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the region set
    pub fn load(&self) -> Result<RegionSet> {
        let start = Instant::now();
        let file = open_boundary_file(&self.path, "district codes")?;
        let collection: FeatureCollection = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| SynthError::region_load(&self.path, format!("invalid GeoJSON: {e}")))?;

        let regions = collection
            .features
            .iter()
            .enumerate()
            .map(|(idx, feature)| self.parse_feature(idx, feature))
            .collect::<Result<Vec<_>>>()?;

        if regions.is_empty() {
            return Err(SynthError::region_load(&self.path, "no features found"));
        }
        // The name column must exist; a null or non-text name on a single
        // feature is kept as a missing name
        let has_name_column = collection
            .features
            .iter()
            .any(|f| f.has_property(NAME_COLUMN));
        if self.require_names && !has_name_column {
            return Err(SynthError::region_load(
                &self.path,
                format!("no feature has the '{NAME_COLUMN}' column"),
            ));
        }

        log_operation_complete("loaded", &self.path, regions.len(), Some(start.elapsed()));
        RegionSet::new(regions)
    }

    fn parse_feature(&self, idx: usize, feature: &Feature) -> Result<Region> {
        let props = feature.properties.as_ref().ok_or_else(|| {
            SynthError::region_load(&self.path, format!("feature {idx} has no properties"))
        })?;

        let raw_code = props.get(CODE_COLUMN).ok_or_else(|| {
            SynthError::region_load(
                &self.path,
                format!("feature {idx} is missing the '{CODE_COLUMN}' column"),
            )
        })?;
        let code = parse_code(raw_code).ok_or_else(|| {
            SynthError::region_load(
                &self.path,
                format!("feature {idx} has a non-integer '{CODE_COLUMN}' value: {raw_code}"),
            )
        })?;

        let name = props
            .get(NAME_COLUMN)
            .and_then(Value::as_str)
            .map(|s| s.trim().to_string());

        Ok(Region::new(code, name))
    }
}

/// Interpret a property value as an integer district code
fn parse_code(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn integral(x: f64) -> Option<i64> {
    (x.is_finite() && x.fract() == 0.0 && x.abs() < 9.0e15).then_some(x as i64)
}

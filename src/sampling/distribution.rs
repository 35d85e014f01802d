//! Bounded distributions used by the samplers
//!
//! Every field of a synthetic record is drawn from one of these. Each type
//! implements [`rand::distr::Distribution`] so the samplers can treat them
//! uniformly and pass the owning generator explicitly.

use rand::Rng;
use rand::distr::weighted::WeightedIndex;
use rand::distr::{Bernoulli, Distribution, Uniform};
use rand_distr::Normal;

use crate::error::{Result, SynthError};

/// Inclusive `[lower, upper]` range applied to a sampled value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Smallest value kept after clipping
    pub lower: f64,
    /// Largest value kept after clipping
    pub upper: f64,
}

impl Bounds {
    /// Create bounds, rejecting inverted or non-finite ranges
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        if !lower.is_finite() || !upper.is_finite() || lower > upper {
            return Err(SynthError::invalid_parameter(
                "bounds",
                format!("[{lower}, {upper}] is not a valid range"),
            ));
        }
        Ok(Self { lower, upper })
    }

    /// Clip a value into the range
    #[must_use]
    pub fn clip(&self, value: f64) -> f64 {
        value.clamp(self.lower, self.upper)
    }

    /// Whether a value lies inside the range
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.lower..=self.upper).contains(&value)
    }
}

/// Normal distribution whose samples are clipped to [`Bounds`]
#[derive(Debug, Clone, Copy)]
pub struct ClippedNormal {
    normal: Normal<f64>,
    bounds: Bounds,
}

impl ClippedNormal {
    /// Create a clipped normal with the given mean and standard deviation
    pub fn new(mean: f64, std_dev: f64, bounds: Bounds) -> Result<Self> {
        let normal = normal(mean, std_dev)?;
        Ok(Self { normal, bounds })
    }

    /// The clipping range
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

impl Distribution<f64> for ClippedNormal {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.bounds.clip(self.normal.sample(rng))
    }
}

/// Build a normal distribution, mapping parameter errors into [`SynthError`]
pub fn normal(mean: f64, std_dev: f64) -> Result<Normal<f64>> {
    Normal::new(mean, std_dev)
        .map_err(|e| SynthError::invalid_parameter("normal", format!("N({mean}, {std_dev}): {e}")))
}

#[derive(Debug, Clone)]
enum Picker {
    Uniform(Uniform<usize>),
    Weighted(WeightedIndex<f64>),
}

/// Categorical draw over a fixed set of values
#[derive(Debug, Clone)]
pub struct Categorical<T> {
    values: Vec<T>,
    picker: Picker,
}

impl<T: Clone> Categorical<T> {
    /// Equal probability for every value
    pub fn uniform(values: Vec<T>) -> Result<Self> {
        if values.is_empty() {
            return Err(SynthError::invalid_parameter(
                "categorical",
                "cannot draw from an empty set of values",
            ));
        }
        let picker = Uniform::new(0, values.len())
            .map_err(|e| SynthError::invalid_parameter("categorical", e))?;
        Ok(Self {
            values,
            picker: Picker::Uniform(picker),
        })
    }

    /// Explicit weight per value; weights need not sum to one
    pub fn weighted(choices: &[(T, f64)]) -> Result<Self> {
        let picker = WeightedIndex::new(choices.iter().map(|(_, w)| *w))
            .map_err(|e| SynthError::invalid_parameter("categorical weights", e))?;
        Ok(Self {
            values: choices.iter().map(|(v, _)| v.clone()).collect(),
            picker: Picker::Weighted(picker),
        })
    }

    /// Values this distribution draws from, in declaration order
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }
}

impl<T: Clone> Distribution<T> for Categorical<T> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        let idx = match &self.picker {
            Picker::Uniform(u) => u.sample(rng),
            Picker::Weighted(w) => w.sample(rng),
        };
        self.values[idx].clone()
    }
}

/// Binary indicator drawn as 1 with probability `p`, else 0
#[derive(Debug, Clone, Copy)]
pub struct Flag {
    inner: Bernoulli,
    p: f64,
}

impl Flag {
    /// Create a flag with success probability `p`
    pub fn new(p: f64) -> Result<Self> {
        let inner = Bernoulli::new(p)
            .map_err(|e| SynthError::invalid_parameter("flag probability", format!("{p}: {e}")))?;
        Ok(Self { inner, p })
    }

    /// Success probability
    #[must_use]
    pub fn probability(&self) -> f64 {
        self.p
    }
}

impl Distribution<u8> for Flag {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        u8::from(self.inner.sample(rng))
    }
}

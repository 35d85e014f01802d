//! Seeded random streams owned by a single generation run

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Independent generators derived from one run seed
///
/// The master generator is consumed in a fixed order, so the same seed
/// always yields the same three streams.
#[derive(Debug, Clone)]
pub struct SeedStreams {
    /// Feature draws (region, age, sex, BMI, flags, day of year, latent scores)
    pub features: StdRng,
    /// Additive noise of the risk score and derived indicators
    pub noise: StdRng,
    /// Uniform draws deciding the binary outcome
    pub labels: StdRng,
}

impl SeedStreams {
    /// Derive the streams for a run seed
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        let mut master = StdRng::seed_from_u64(seed);
        let features = StdRng::from_rng(&mut master);
        let noise = StdRng::from_rng(&mut master);
        let labels = StdRng::from_rng(&mut master);
        Self {
            features,
            noise,
            labels,
        }
    }
}

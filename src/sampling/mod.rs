//! Sampling building blocks shared by every dataset variant
//!
//! This module provides the bounded distributions, the season buckets used by
//! the dengue variant, and the seeded random streams a run draws from.

pub mod distribution;
pub mod season;
pub mod streams;

pub use distribution::{Bounds, Categorical, ClippedNormal, Flag, normal};
pub use season::Season;
pub use streams::SeedStreams;

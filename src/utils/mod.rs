//! Utilities shared across the generators

pub mod logging;

//! Error types
//!
//! Generation itself cannot fail once it starts. Everything here is raised
//! either while building a generator or while obtaining a seed.

use std::io;

/// Problems with a generator configuration
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Invalid range for {name}: {min}..={max}")]
    InvalidRange {
        name: &'static str,
        min: i32,
        max: i32,
    },

    #[error("Invalid chance for {name}: {value}% (must be 0-100)")]
    InvalidChance { name: &'static str, value: u32 },

    #[error("Invalid weight for {name}: {value} (must be positive)")]
    InvalidWeight { name: &'static str, value: u32 },

    #[error("Invalid distribution for {name}: {reason}")]
    InvalidDistribution {
        name: &'static str,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("Serialize error: {0}")]
    Serialize(#[from] ron::Error),
}

/// Failures surfaced by [`crate::LevelGenerator`]
#[derive(thiserror::Error, Debug)]
pub enum GenerationError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Entropy source unavailable: {0}")]
    Entropy(#[from] rand::Error),
}

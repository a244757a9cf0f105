//! Error types for motion configuration
//!
//! Configuration is validated when descriptors and mappings are built.
//! Once construction succeeds, sampling and event handling cannot fail;
//! event-time anomalies are logged and ignored by the orchestration layer.

use thiserror::Error;

/// Errors produced while validating motion configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("intersection threshold {0} is outside 0.0..=1.0")]
    ThresholdOutOfRange(f32),

    #[error("cubic bezier x control {0} is outside 0.0..=1.0")]
    BezierControlOutOfRange(f32),

    #[error("non-finite {what}: {value}")]
    NonFinite { what: &'static str, value: f32 },

    #[error("transition state name must not be empty")]
    EmptyStateName,

    #[error("mapping needs at least two stops, got {0}")]
    TooFewStops(usize),

    #[error("mapping has {domain} domain stops but {range} range stops")]
    StopCountMismatch { domain: usize, range: usize },

    #[error("mapping domain stops must be strictly increasing ({prev} then {next})")]
    DomainNotIncreasing { prev: f32, next: f32 },

    #[error("ticker span must be positive, got {0}")]
    NonPositiveSpan(f32),

    #[error("accordion needs at least one item")]
    EmptyAccordion,

    #[error("element handle is stale or was never registered")]
    UnknownElement,

    #[error("transition spec does not declare required state {0:?}")]
    MissingState(&'static str),
}

/// Convenience alias used across the unfurl crates
pub type Result<T> = std::result::Result<T, ConfigError>;

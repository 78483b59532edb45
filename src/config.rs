use std::env;

use anyhow::{Context, Result, bail};

pub const THRESHOLD_ENV: &str = "ESSAY_OVERLAP_THRESHOLD";
pub const DEFAULT_THRESHOLD: f64 = 50.0;

/// Flag value wins, then the environment, then the default.
pub fn resolve_threshold(override_value: Option<f64>) -> Result<f64> {
    let env_value = env::var(THRESHOLD_ENV).ok();
    threshold_from_sources(override_value, env_value.as_deref())
}

fn threshold_from_sources(override_value: Option<f64>, env_value: Option<&str>) -> Result<f64> {
    let threshold = match (override_value, env_value) {
        (Some(value), _) => value,
        (None, Some(raw)) => raw
            .trim()
            .parse::<f64>()
            .with_context(|| format!("invalid {THRESHOLD_ENV} value: {raw}"))?,
        (None, None) => DEFAULT_THRESHOLD,
    };
    validate_threshold(threshold)
}

pub fn validate_threshold(threshold: f64) -> Result<f64> {
    if !threshold.is_finite() || !(0.0..=100.0).contains(&threshold) {
        bail!("threshold must be between 0 and 100, got {threshold}");
    }
    Ok(threshold)
}

//! Semantic checks applied after parsing.

use crate::{Error, Result, schema::SpudConfig};

/// Reject configs the dispatcher cannot run with.
pub fn validate(config: &SpudConfig) -> Result<()> {
    for (key, value) in config.probabilities.entries() {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(Error::InvalidProbability { key, value });
        }
    }
    if config.identity.name.trim().is_empty() {
        return Err(Error::EmptyName);
    }
    Ok(())
}

//! Config schema types (identity, probability gates, response pools, addressing).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpudConfig {
    pub identity: IdentityConfig,
    pub probabilities: ProbabilityConfig,
    pub pools: PoolsConfig,
    pub addressing: AddressingConfig,
}

/// Bot identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Display name, also used for `@name` mentions and name-mode addressing.
    pub name: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            name: "spud".into(),
        }
    }
}

/// Chance to respond once a category has matched, one gate per category.
///
/// A draw `r` in `[0, 1)` passes the gate when `r < probability`, so `1.0`
/// always fires and `0.0` never does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbabilityConfig {
    pub oblique: f64,
    pub greeting: f64,
    pub goodnight: f64,
    pub thanks: f64,
    pub snark: f64,
}

impl Default for ProbabilityConfig {
    fn default() -> Self {
        Self {
            oblique: 1.0,
            greeting: 1.0,
            goodnight: 1.0,
            thanks: 0.98,
            snark: 0.90,
        }
    }
}

impl ProbabilityConfig {
    /// All gates with their config keys, in dispatch order.
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("oblique", self.oblique),
            ("greeting", self.greeting),
            ("goodnight", self.goodnight),
            ("thanks", self.thanks),
            ("snark", self.snark),
        ]
    }
}

/// Where the response pools live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolsConfig {
    /// Directory holding the pool files. Relative paths resolve against the
    /// working directory.
    pub dir: PathBuf,
    pub files: PoolFiles,
}

impl Default for PoolsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data"),
            files: PoolFiles::default(),
        }
    }
}

impl PoolsConfig {
    /// Full path of a pool file name inside [`PoolsConfig::dir`].
    pub fn path_of(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }
}

/// File name of each category's pool, relative to [`PoolsConfig::dir`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolFiles {
    pub oblique: String,
    pub greeting: String,
    pub goodnight: String,
    pub thanks: String,
    pub snark: String,
}

impl Default for PoolFiles {
    fn default() -> Self {
        Self {
            oblique: "oblique-strategies.yml".into(),
            greeting: "greetings.yml".into(),
            goodnight: "goodnight-phrases.yml".into(),
            thanks: "thanks-phrases.yml".into(),
            snark: "snark-lines.yml".into(),
        }
    }
}

/// How a transport decides a message was directed at the bot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressingConfig {
    pub mode: AddressMode,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressMode {
    /// Explicit mention or direct message only.
    Mention,
    /// Mention, direct message, or the bot name anywhere in the text.
    #[default]
    Name,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_gates() {
        let p = ProbabilityConfig::default();
        assert_eq!(p.oblique, 1.0);
        assert_eq!(p.greeting, 1.0);
        assert_eq!(p.goodnight, 1.0);
        assert_eq!(p.thanks, 0.98);
        assert_eq!(p.snark, 0.90);
    }

    #[test]
    fn pool_paths_join_dir() {
        let pools = PoolsConfig::default();
        assert_eq!(
            pools.path_of(&pools.files.snark),
            PathBuf::from("data/snark-lines.yml")
        );
    }

    #[test]
    fn entries_follow_dispatch_order() {
        let keys: Vec<_> = ProbabilityConfig::default()
            .entries()
            .iter()
            .map(|(k, _)| *k)
            .collect();
        assert_eq!(keys, ["oblique", "greeting", "goodnight", "thanks", "snark"]);
    }
}

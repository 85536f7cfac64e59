//! Canned-response pools: loaded once at startup, drawn from with replacement.
//!
//! A pool source is a YAML (canonical) or JSON document holding a plain list
//! of strings. An empty document or `null` is an empty pool, not an error.

use std::path::{Path, PathBuf};

use {
    spud_config::PoolsConfig,
    tracing::{debug, warn},
};

use crate::{Error, Result, category::Category, random::UniformSource};

/// Load one pool source.
///
/// Fails with [`Error::PoolNotFound`] when `path` does not exist and with
/// [`Error::Parse`] when the content is not a list of strings.
pub fn load_pool(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::PoolNotFound {
            path: path.to_path_buf(),
        });
    }
    let raw = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let pool = parse_pool(&raw, path)?;
    debug!(path = %path.display(), entries = pool.len(), "loaded response pool");
    Ok(pool)
}

fn parse_pool(raw: &str, path: &Path) -> Result<Vec<String>> {
    if is_blank_document(raw) {
        return Ok(Vec::new());
    }
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yml");
    let parsed: Option<Vec<String>> = match ext {
        "yml" | "yaml" => serde_yaml::from_str(raw).map_err(|e| Error::parse(path, e))?,
        "json" => serde_json::from_str(raw).map_err(|e| Error::parse(path, e))?,
        _ => {
            return Err(Error::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        },
    };
    Ok(parsed.unwrap_or_default())
}

/// Only whitespace, YAML comments and document markers.
fn is_blank_document(raw: &str) -> bool {
    raw.lines().map(str::trim).all(|line| {
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}

/// Pick one entry uniformly, without removing it. `None` for an empty pool.
pub fn random_item<'a>(pool: &'a [String], rng: &mut impl UniformSource) -> Option<&'a str> {
    if pool.is_empty() {
        return None;
    }
    let r = rng.next_uniform();
    // r < 1.0, the clamp only guards against a misbehaving source.
    let idx = ((r * pool.len() as f64) as usize).min(pool.len() - 1);
    Some(pool[idx].as_str())
}

/// One loaded pool per category, immutable after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponsePools {
    pools: [Vec<String>; 5],
}

impl ResponsePools {
    /// Load every category's pool from the configured directory.
    ///
    /// Any load failure aborts; empty pools are allowed and only logged.
    pub fn load(config: &PoolsConfig) -> Result<Self> {
        let mut pools = Self::default();
        for category in Category::ALL {
            let path = source_path(config, category);
            let pool = load_pool(&path)?;
            if pool.is_empty() {
                warn!(%category, path = %path.display(), "response pool is empty");
            }
            pools.pools[category.index()] = pool;
        }
        Ok(pools)
    }

    /// Build from in-memory lists, in [`Category::ALL`] order.
    pub fn from_lists(pools: [Vec<String>; 5]) -> Self {
        Self { pools }
    }

    pub fn get(&self, category: Category) -> &[String] {
        &self.pools[category.index()]
    }

    /// Draw a line for `category`, `None` when its pool is empty.
    pub fn draw(&self, category: Category, rng: &mut impl UniformSource) -> Option<&str> {
        random_item(self.get(category), rng)
    }
}

/// Path of the pool source configured for `category`.
pub fn source_path(config: &PoolsConfig, category: Category) -> PathBuf {
    let files = &config.files;
    let file = match category {
        Category::Oblique => &files.oblique,
        Category::Greeting => &files.greeting,
        Category::Goodnight => &files.goodnight,
        Category::Thanks => &files.thanks,
        Category::Snark => &files.snark,
    };
    config.path_of(file)
}

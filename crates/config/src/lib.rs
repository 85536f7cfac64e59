//! Configuration loading, validation and env substitution.
//!
//! Config files: `spud.toml`, `spud.yaml`, `spud.yml` or `spud.json`
//! Searched in `./` then `~/.config/spud/`.
//!
//! Supports `${ENV_VAR}` and `${ENV_VAR:-fallback}` substitution in the raw
//! file before parsing.

pub mod env_subst;
pub mod error;
pub mod loader;
pub mod schema;
pub mod validate;

pub use {
    error::{Error, Result},
    loader::{apply_env_overrides, config_dir, discover_and_load, load_config},
    schema::{
        AddressMode, AddressingConfig, IdentityConfig, PoolFiles, PoolsConfig, ProbabilityConfig,
        SpudConfig,
    },
    validate::validate,
};

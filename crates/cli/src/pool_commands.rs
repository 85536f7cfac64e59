use anyhow::{Context, Result};

use {
    spud_auto_reply::{Category, ResponsePools, pools::source_path},
    spud_config::SpudConfig,
};

/// Load every pool and print how many lines each holds.
pub fn handle_pools(config: &SpudConfig) -> Result<()> {
    let pools = ResponsePools::load(&config.pools).context("loading response pools")?;
    for category in Category::ALL {
        let count = pools.get(category).len();
        let path = source_path(&config.pools, category);
        let note = if count == 0 { "  (never responds)" } else { "" };
        println!("{category:<10} {count:>4}  {}{note}", path.display());
    }
    Ok(())
}

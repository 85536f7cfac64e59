use std::path::Path;

use {anyhow::Result, clap::Subcommand};

use spud_config::SpudConfig;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML.
    Show,
    /// Load and validate the configuration, exit non-zero on errors.
    Check,
}

pub fn handle_config(action: ConfigAction, path: Option<&Path>) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = crate::load_config(path)?;
            print!("{}", render(&config)?);
            Ok(())
        },
        ConfigAction::Check => match crate::load_config(path) {
            Ok(_) => {
                eprintln!("No issues found.");
                Ok(())
            },
            Err(e) => {
                eprintln!("error: {e:#}");
                std::process::exit(1);
            },
        },
    }
}

fn render(config: &SpudConfig) -> Result<String> {
    Ok(toml::to_string_pretty(config)?)
}

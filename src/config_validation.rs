// Configuration validation module

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

use crate::config::{load_config, AppConfig};
use crate::core::routes::Route;

/// Load and validate configuration
pub fn load_and_validate_config(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let config = load_config(config_path).context("Failed to load configuration")?;
    validate_config(&config)?;
    Ok(config)
}

/// Validate the loaded configuration.
/// Structural problems are errors; cosmetic oddities only warn.
pub fn validate_config(config: &AppConfig) -> Result<()> {
    if config.application.title.trim().is_empty() {
        bail!("application.title must not be empty");
    }

    if Route::from_page_name(&config.application.start_page).is_none() {
        bail!(
            "Unknown start_page '{}' (expected one of: about, build, perform, research, gallery)",
            config.application.start_page
        );
    }

    if config.application.bindings.is_empty() {
        eprintln!("Warning: no key bindings configured; the bindings legend will be empty");
    }
    for binding in &config.application.bindings {
        if binding.key.trim().is_empty() {
            eprintln!(
                "Warning: binding '{}' has an empty key label",
                binding.description
            );
        }
    }

    Ok(())
}

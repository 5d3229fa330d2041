// Configuration loading module

use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tui_primitives::DrawerSide;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub application: ApplicationConfig,
    pub drawer: DrawerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationConfig {
    pub title: String,
    pub start_page: String,
    pub status_bar: StatusBarConfigYaml,
    pub bindings: Vec<BindingConfigYaml>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BindingConfigYaml {
    pub key: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusBarConfigYaml {
    pub default_text: String,
    #[serde(default)]
    pub menu_text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DrawerConfig {
    pub side: DrawerSide,
}

/// Default config location: src/config.yaml next to the sources
pub fn default_config_path() -> PathBuf {
    let mut default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    default_path.push("src");
    default_path.push("config.yaml");
    default_path
}

pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let path = config_path.unwrap_or_else(default_config_path);

    let contents = fs::read_to_string(&path)?;
    let config: AppConfig = serde_yaml::from_str(&contents)?;
    Ok(config)
}

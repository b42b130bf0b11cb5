// Configuration loading for teeprint

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;
use teeprint::cfg::TypeOptions;
use teeprint::log::LogSinkConfig;

use crate::cli::Cli;

/// Load a log sink configuration, choosing the format by file extension
pub fn load_config(path: &Path) -> Result<LogSinkConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let config = match extension.as_str() {
        "json" | "json5" => LogSinkConfig::from_json(&content),
        "yaml" | "yml" => LogSinkConfig::from_yaml(&content),
        "toml" => LogSinkConfig::from_toml(&content),
        other => return Err(anyhow!("Unsupported config format: '{}'", other)),
    };

    config.with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Merge the config file (if any) with command-line overrides
pub fn resolve_config(cli: &Cli) -> Result<LogSinkConfig> {
    let mut config = match cli.config {
        Some(ref path) => load_config(Path::new(&*shellexpand::tilde(path)))?,
        None => LogSinkConfig::default(),
    };

    if let Some(ref log_file) = cli.log_file {
        config.destination = TypeOptions::new(
            "FileDestination",
            serde_json::json!({
                "file_path": shellexpand::tilde(log_file).to_string(),
                "append": !cli.truncate,
            }),
        );
    }

    if cli.no_log_flush {
        config.flush_after_log = false;
    }

    Ok(config)
}

use cosmic_core::Config;
use std::path::Path;

pub fn run(config: &Config, explicit_path: Option<&Path>) -> anyhow::Result<()> {
    let source = match explicit_path {
        Some(p) => p.display().to_string(),
        None => cosmic_core::config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<no config directory>".to_string()),
    };

    println!("Config file: {}", source);
    println!("{}", serde_json::to_string_pretty(&redacted(config)?)?);
    Ok(())
}

fn redacted(config: &Config) -> anyhow::Result<serde_json::Value> {
    let mut value = serde_json::to_value(config)?;
    value["nasa_api_key"] = serde_json::json!(config.masked_api_key());
    Ok(value)
}

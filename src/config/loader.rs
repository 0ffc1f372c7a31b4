//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::HarvestConfig;
use super::secret::secret_string;
use crate::domain::errors::HarvestError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into HarvestConfig
/// 4. Applies environment variable overrides (TUBEHARVEST_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns `HarvestError::Configuration` if any of these steps fail.
///
/// # Examples
///
/// ```no_run
/// use tubeharvest::config::loader::load_config;
///
/// let config = load_config("tubeharvest.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<HarvestConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(HarvestError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        HarvestError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let config = parse_config(&contents)?;

    config.validate().map_err(|e| {
        HarvestError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Parses configuration text without validating it
///
/// Substitution and environment overrides are applied, so the result is what
/// `load_config` would validate.
pub fn parse_config(contents: &str) -> Result<HarvestConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: HarvestConfig = toml::from_str(&contents)
        .map_err(|e| HarvestError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error naming every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| HarvestError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut lines = Vec::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    processed_line = processed_line.replace(&format!("${{{var_name}}}"), &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        lines.push(processed_line);
    }

    if !missing_vars.is_empty() {
        return Err(HarvestError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(lines.join("\n"))
}

/// Applies environment variable overrides using TUBEHARVEST_* prefix
///
/// Environment variables follow the pattern: TUBEHARVEST_<SECTION>_<KEY>
/// For example: TUBEHARVEST_YOUTUBE_API_KEY, TUBEHARVEST_STATE_FLUSH_EVERY_ROWS
fn apply_env_overrides(config: &mut HarvestConfig) {
    if let Ok(val) = std::env::var("TUBEHARVEST_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("TUBEHARVEST_YOUTUBE_API_KEY") {
        config.youtube.api_key = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("TUBEHARVEST_YOUTUBE_BASE_URL") {
        config.youtube.base_url = val;
    }
    if let Ok(val) = std::env::var("TUBEHARVEST_YOUTUBE_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.youtube.timeout_seconds = timeout;
        }
    }

    if let Ok(val) = std::env::var("TUBEHARVEST_INPUT_PATH") {
        config.input.path = val;
    }
    if let Ok(val) = std::env::var("TUBEHARVEST_INPUT_HANDLE_COLUMN") {
        config.input.handle_column = Some(val);
    }

    if let Ok(val) = std::env::var("TUBEHARVEST_OUTPUT_PATH") {
        config.output.path = val;
    }

    if let Ok(val) = std::env::var("TUBEHARVEST_STATE_CHECKPOINT_PATH") {
        config.state.checkpoint_path = val;
    }
    if let Ok(val) = std::env::var("TUBEHARVEST_STATE_FLUSH_EVERY_ROWS") {
        if let Ok(rows) = val.parse() {
            config.state.flush_every_rows = rows;
        }
    }

    if let Ok(val) = std::env::var("TUBEHARVEST_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("TUBEHARVEST_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}

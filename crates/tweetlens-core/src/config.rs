use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_f32 = |var: &str, default: &str| -> Result<f32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<f32>().map_err(|e| invalid(var, e.to_string()))
    };

    let log_level = or_default("TWEETLENS_LOG_LEVEL", "info");
    let tei_embed_url = optional("TWEETLENS_TEI_EMBED_URL");
    let tei_classify_url = optional("TWEETLENS_TEI_CLASSIFY_URL");
    let request_timeout_secs = parse_u64("TWEETLENS_REQUEST_TIMEOUT_SECS", "30")?;
    let knowledge_base_path = optional("TWEETLENS_KNOWLEDGE_BASE_PATH").map(PathBuf::from);
    let max_texts = parse_usize("TWEETLENS_MAX_TEXTS", "100")?;
    let context_top_k = parse_usize("TWEETLENS_CONTEXT_TOP_K", "2")?;
    let confidence_boost = parse_f32("TWEETLENS_CONFIDENCE_BOOST", "0.05")?;
    let hash_embed_dim = parse_usize("TWEETLENS_HASH_EMBED_DIM", "256")?;

    if context_top_k == 0 {
        return Err(invalid(
            "TWEETLENS_CONTEXT_TOP_K",
            "must be at least 1".to_string(),
        ));
    }

    if !(0.0..=1.0).contains(&confidence_boost) {
        return Err(invalid(
            "TWEETLENS_CONFIDENCE_BOOST",
            format!("{confidence_boost} is outside [0, 1]"),
        ));
    }

    if hash_embed_dim == 0 {
        return Err(invalid(
            "TWEETLENS_HASH_EMBED_DIM",
            "must be at least 1".to_string(),
        ));
    }

    Ok(AppConfig {
        log_level,
        tei_embed_url,
        tei_classify_url,
        request_timeout_secs,
        knowledge_base_path,
        max_texts,
        context_top_k,
        confidence_boost,
        hash_embed_dim,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use anyhow::{bail, Context, Result};

use crate::pipeline::ChainConfig;

pub const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub groq_api_url: String,
    pub chain: ChainConfig,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let profile = std::env::var("CHAIN_PROFILE").unwrap_or_else(|_| "generation".to_string());

        Ok(Config {
            groq_api_key: require_env("GROQ_API_KEY")?,
            groq_api_url: std::env::var("GROQ_API_URL")
                .unwrap_or_else(|_| DEFAULT_GROQ_API_URL.to_string()),
            chain: chain_for_profile(&profile)?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Maps a `CHAIN_PROFILE` value to its fixed model/temperature pair.
fn chain_for_profile(profile: &str) -> Result<ChainConfig> {
    match profile.trim().to_ascii_lowercase().as_str() {
        "generation" => Ok(ChainConfig::generation()),
        "extraction" => Ok(ChainConfig::extraction()),
        other => bail!("CHAIN_PROFILE must be 'generation' or 'extraction', got '{other}'"),
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_generation() {
        let chain = chain_for_profile("generation").unwrap();
        assert_eq!(chain, ChainConfig::generation());
    }

    #[test]
    fn test_profile_is_case_insensitive() {
        let chain = chain_for_profile(" Extraction ").unwrap();
        assert_eq!(chain.temperature, 0.0);
    }

    #[test]
    fn test_unknown_profile_rejected() {
        let err = chain_for_profile("creative").unwrap_err();
        assert!(err.to_string().contains("creative"));
    }
}

//! Engine configuration read from the environment.

use std::str::FromStr;

use crate::infrastructure::ollama::{
    DEFAULT_LLM_TIMEOUT_SECS, DEFAULT_OLLAMA_BASE_URL, DEFAULT_OLLAMA_MODEL,
};
use crate::use_cases::GameRules;

/// Runtime configuration for the engine binary.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub server_host: String,
    pub server_port: u16,
    pub ollama_url: String,
    pub ollama_model: String,
    pub llm_timeout_secs: u64,
    /// Retries on top of the first LLM attempt. Zero disables the retry wrapper.
    pub llm_max_retries: u32,
    pub rules: GameRules,
    /// Raw `CORS_ALLOWED_ORIGINS` value, if set.
    pub cors_allowed_origins: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".into(),
            server_port: 3000,
            ollama_url: DEFAULT_OLLAMA_BASE_URL.into(),
            ollama_model: DEFAULT_OLLAMA_MODEL.into(),
            llm_timeout_secs: DEFAULT_LLM_TIMEOUT_SECS,
            llm_max_retries: 0,
            rules: GameRules::default(),
            cors_allowed_origins: None,
        }
    }
}

impl EngineConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let rules = defaults.rules;

        let first = |keys: &[&str]| keys.iter().find_map(|key| lookup(*key));

        Self {
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: parse_or(
                "SERVER_PORT",
                first(&["SERVER_PORT", "PORT"]),
                defaults.server_port,
            ),
            ollama_url: first(&["OLLAMA_BASE_URL", "OLLAMA_URL"]).unwrap_or(defaults.ollama_url),
            ollama_model: lookup("OLLAMA_MODEL").unwrap_or(defaults.ollama_model),
            llm_timeout_secs: parse_or(
                "LLM_TIMEOUT_SECS",
                lookup("LLM_TIMEOUT_SECS"),
                defaults.llm_timeout_secs,
            ),
            llm_max_retries: parse_or(
                "LLM_MAX_RETRIES",
                lookup("LLM_MAX_RETRIES"),
                defaults.llm_max_retries,
            ),
            rules: GameRules {
                k_factor: parse_or("ELO_K_FACTOR", lookup("ELO_K_FACTOR"), rules.k_factor),
                win_gold: parse_or("WIN_GOLD_REWARD", lookup("WIN_GOLD_REWARD"), rules.win_gold),
                loss_gold: parse_or(
                    "LOSS_GOLD_REWARD",
                    lookup("LOSS_GOLD_REWARD"),
                    rules.loss_gold,
                ),
                cooldown_secs: parse_or(
                    "BATTLE_COOLDOWN_SECS",
                    lookup("BATTLE_COOLDOWN_SECS"),
                    rules.cooldown_secs,
                ),
                starting_rating: parse_or(
                    "STARTING_RATING",
                    lookup("STARTING_RATING"),
                    rules.starting_rating,
                ),
            },
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    match raw {
        None => default,
        Some(value) => match value.trim().parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::warn!(
                    key,
                    value = %value,
                    default = %default,
                    "Invalid configuration value, using default"
                );
                default
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> EngineConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EngineConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = config_from(&[]);

        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.ollama_url, "http://localhost:11434");
        assert_eq!(config.llm_timeout_secs, 60);
        assert_eq!(config.llm_max_retries, 0);
        assert_eq!(config.rules, GameRules::default());
        assert!(config.cors_allowed_origins.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("OLLAMA_URL", "http://ollama:11434"),
            ("ELO_K_FACTOR", "24"),
            ("BATTLE_COOLDOWN_SECS", "5"),
            ("WIN_GOLD_REWARD", "50"),
            ("STARTING_RATING", "1200"),
            ("CORS_ALLOWED_ORIGINS", "*"),
        ]);

        assert_eq!(config.server_port, 8080);
        assert_eq!(config.ollama_url, "http://ollama:11434");
        assert_eq!(config.rules.k_factor, 24);
        assert_eq!(config.rules.cooldown_secs, 5);
        assert_eq!(config.rules.win_gold, 50);
        assert_eq!(config.rules.loss_gold, 5);
        assert_eq!(config.rules.starting_rating, 1200);
        assert_eq!(config.cors_allowed_origins.as_deref(), Some("*"));
    }

    #[test]
    fn server_port_takes_precedence_over_port() {
        let config = config_from(&[("SERVER_PORT", "4000"), ("PORT", "5000")]);
        assert_eq!(config.server_port, 4000);
    }

    #[test]
    fn unparseable_values_fall_back_to_defaults() {
        let config = config_from(&[
            ("SERVER_PORT", "not-a-port"),
            ("ELO_K_FACTOR", "-3"),
            ("LLM_MAX_RETRIES", ""),
        ]);

        assert_eq!(config.server_port, 3000);
        assert_eq!(config.rules.k_factor, 32);
        assert_eq!(config.llm_max_retries, 0);
    }
}

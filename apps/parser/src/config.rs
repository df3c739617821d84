use anyhow::{Context, Result};

/// Command-line configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub rust_log: String,
    /// Pretty-print the JSON written to stdout.
    pub pretty_output: bool,
    /// Emit the per-field candidate score tables next to each résumé.
    pub include_scores: bool,
    pub featured_skill_slots: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            pretty_output: parse_env("PRETTY_OUTPUT", false)?,
            include_scores: parse_env("INCLUDE_SCORES", false)?,
            featured_skill_slots: parse_env("FEATURED_SKILL_SLOTS", 6)?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value '{value}'")),
        Err(_) => Ok(default),
    }
}

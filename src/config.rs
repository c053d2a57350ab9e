use std::env;
use std::time::Duration;

/// Production API base used when `PORTFOLIO_API_BASE` is not set.
pub const DEFAULT_API_BASE: &str = "https://srvr.amgad.design/api";

/// Delay applied before serving sample or demo data, so loading-state UI
/// behaves the same as it does against the live API.
const DEFAULT_SIMULATED_LATENCY_MS: u64 = 300;

//
// ──────────────────────────────────────────────────────────
// Runtime mode
// ──────────────────────────────────────────────────────────
//

/// Selected once at startup from `RUST_ENV`. Development mode never touches
/// the network for public reads; it serves bundled sample data instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeMode {
    Development,
    Production,
}

impl RuntimeMode {
    pub fn from_env() -> Self {
        match env::var("RUST_ENV").as_deref() {
            Ok("production") => RuntimeMode::Production,
            _ => RuntimeMode::Development,
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, RuntimeMode::Development)
    }
}

//
// ──────────────────────────────────────────────────────────
// Client configuration
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base: String,
    pub mode: RuntimeMode,
    pub simulated_latency: Duration,
}

impl ClientConfig {
    /// Load configuration from the environment.
    ///
    /// Tries `.env.{RUST_ENV}` first, then falls back to `.env`. Every
    /// variable has a default, so a bare environment is valid.
    pub fn from_env() -> Self {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", env_name);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        let api_base =
            env::var("PORTFOLIO_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        Self {
            api_base,
            mode: RuntimeMode::from_env(),
            simulated_latency: Duration::from_millis(DEFAULT_SIMULATED_LATENCY_MS),
        }
    }

    /// Fixed configuration, independent of the process environment.
    /// Used by tests and by embedders that wire everything explicitly.
    pub fn fixed(api_base: impl Into<String>, mode: RuntimeMode) -> Self {
        Self {
            api_base: api_base.into(),
            mode,
            simulated_latency: Duration::from_millis(DEFAULT_SIMULATED_LATENCY_MS),
        }
    }

    pub fn with_simulated_latency(mut self, latency: Duration) -> Self {
        self.simulated_latency = latency;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_config_keeps_given_base_and_mode() {
        let config = ClientConfig::fixed("http://localhost:5000/api", RuntimeMode::Production);

        assert_eq!(config.api_base, "http://localhost:5000/api");
        assert_eq!(config.mode, RuntimeMode::Production);
        assert_eq!(config.simulated_latency, Duration::from_millis(300));
    }

    #[test]
    fn test_with_simulated_latency_overrides_default() {
        let config = ClientConfig::fixed("http://localhost:5000/api", RuntimeMode::Development)
            .with_simulated_latency(Duration::ZERO);

        assert_eq!(config.simulated_latency, Duration::ZERO);
    }

    #[test]
    fn test_development_mode_predicate() {
        assert!(RuntimeMode::Development.is_development());
        assert!(!RuntimeMode::Production.is_development());
    }
}

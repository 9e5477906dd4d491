use std::time::Duration;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database_url: String,
    pub listen_addr: String,
    pub request_timeout_secs: u64,
}

impl Settings {
    /// Reads defaults, then `TRIVIA_*` environment variables (a `.env` file is honoured).
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_environment(Environment::with_prefix("TRIVIA").try_parsing(true))
    }

    fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("database_url", "sqlite:trivia.db")?
            .set_default("listen_addr", "0.0.0.0:8080")?
            .set_default("request_timeout_secs", 30)?
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn environment(vars: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        Environment::with_prefix("TRIVIA")
            .try_parsing(true)
            .source(Some(source))
    }

    #[test]
    fn defaults_apply_without_environment() {
        let settings = Settings::from_environment(environment(&[])).unwrap();
        assert_eq!(settings.database_url, "sqlite:trivia.db");
        assert_eq!(settings.listen_addr, "0.0.0.0:8080");
        assert_eq!(settings.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn environment_overrides_defaults() {
        let settings = Settings::from_environment(environment(&[
            ("TRIVIA_DATABASE_URL", "sqlite::memory:"),
            ("TRIVIA_REQUEST_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(settings.database_url, "sqlite::memory:");
        assert_eq!(settings.request_timeout_secs, 5);
    }
}

use anyhow::{bail, Context, Result};

/// Rendering environment. Development injects the live-reload script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(AppEnv::Development),
            "production" | "prod" => Ok(AppEnv::Production),
            other => bail!("APP_ENV must be 'development' or 'production', got '{other}'"),
        }
    }

    pub fn is_development(self) -> bool {
        self == AppEnv::Development
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub app_env: AppEnv,
    /// Only the seed binary talks to the database; the site itself is static.
    pub database_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            app_env: match std::env::var("APP_ENV") {
                Ok(raw) => AppEnv::parse(&raw)?,
                Err(_) => AppEnv::Production,
            },
            database_url: std::env::var("DATABASE_URL").ok(),
        })
    }

    pub fn require_database_url(&self) -> Result<&str> {
        self.database_url
            .as_deref()
            .context("Required environment variable 'DATABASE_URL' is not set")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(database_url: Option<&str>) -> Config {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            app_env: AppEnv::Production,
            database_url: database_url.map(str::to_string),
        }
    }

    #[test]
    fn test_app_env_accepts_short_and_long_names() {
        assert_eq!(AppEnv::parse("development").unwrap(), AppEnv::Development);
        assert_eq!(AppEnv::parse(" Dev ").unwrap(), AppEnv::Development);
        assert_eq!(AppEnv::parse("PRODUCTION").unwrap(), AppEnv::Production);
        assert_eq!(AppEnv::parse("prod").unwrap(), AppEnv::Production);
    }

    #[test]
    fn test_app_env_rejects_unknown_value() {
        let err = AppEnv::parse("staging").unwrap_err();
        assert!(err.to_string().contains("staging"));
    }

    #[test]
    fn test_only_development_is_development() {
        assert!(AppEnv::Development.is_development());
        assert!(!AppEnv::Production.is_development());
    }

    #[test]
    fn test_require_database_url_reports_missing_variable() {
        let err = config(None).require_database_url().unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
        assert_eq!(
            config(Some("postgres://localhost/portfolio"))
                .require_database_url()
                .unwrap(),
            "postgres://localhost/portfolio"
        );
    }
}

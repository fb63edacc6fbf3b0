//! Handles settings for the application.
//!
//! Values are layered, last wins:
//!
//! 1. built-in defaults (port 3000, local SQLite file);
//! 2. an optional `settings.toml` next to the binary;
//! 3. the `PORT`, `DATABASE_URL` and `HOLONET_LOG` environment variables.
use config::{Config, ConfigError, File};
use serde::Deserialize;

const DEFAULT_DATABASE: &str = "sqlite:holonet.db?mode=rwc";
/// Log level used when no settings are available yet.
pub const DEFAULT_LEVEL: &str = "info";

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: String,
    pub port: u16,
    pub database: String,
}

impl Server {
    /// Connection string handed to sea-orm. Heroku-style `postgres://` URLs
    /// are rewritten to the `postgresql://` scheme.
    pub fn database_url(&self) -> String {
        match self.database.strip_prefix("postgres://") {
            Some(rest) => format!("postgresql://{rest}"),
            None => self.database.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
}

/// Environment overrides, read once at startup.
#[derive(Debug, Default)]
pub struct Overrides {
    pub port: Option<String>,
    pub database_url: Option<String>,
    pub level: Option<String>,
}

impl Overrides {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT").ok(),
            database_url: std::env::var("DATABASE_URL").ok(),
            level: std::env::var("HOLONET_LOG").ok(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::build(File::with_name("settings").required(false), Overrides::from_env())
    }

    fn build<S>(file: S, overrides: Overrides) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let settings = Config::builder()
            .set_default("app.level", DEFAULT_LEVEL)?
            .set_default("server.bind", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.database", DEFAULT_DATABASE)?
            .add_source(file)
            .set_override_option("server.port", overrides.port.filter(|p| !p.is_empty()))?
            .set_override_option(
                "server.database",
                overrides.database_url.filter(|url| !url.is_empty()),
            )?
            .set_override_option("app.level", overrides.level)?
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    fn no_file() -> impl config::Source + Send + Sync + 'static {
        File::from_str("", FileFormat::Toml)
    }

    #[test]
    fn defaults() {
        let settings = Settings::build(no_file(), Overrides::default()).unwrap();
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.server.bind, "0.0.0.0");
        assert_eq!(settings.server.database_url(), DEFAULT_DATABASE);
        assert_eq!(settings.app.level, "info");
    }

    #[test]
    fn file_is_overridden_by_env() {
        let file = File::from_str(
            "[server]\nport = 8080\ndatabase = \"sqlite::memory:\"\n\n[app]\nlevel = \"debug\"\n",
            FileFormat::Toml,
        );

        let settings = Settings::build(file, Overrides::default()).unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.database, "sqlite::memory:");
        assert_eq!(settings.app.level, "debug");

        let file = File::from_str("[server]\nport = 8080\n", FileFormat::Toml);
        let overrides = Overrides {
            port: Some("4000".to_string()),
            database_url: Some("postgres://rebels@db/holonet".to_string()),
            level: None,
        };
        let settings = Settings::build(file, overrides).unwrap();
        assert_eq!(settings.server.port, 4000);
        assert_eq!(
            settings.server.database_url(),
            "postgresql://rebels@db/holonet"
        );
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let overrides = Overrides {
            port: Some(String::new()),
            database_url: Some(String::new()),
            level: None,
        };
        let settings = Settings::build(no_file(), overrides).unwrap();
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.server.database, DEFAULT_DATABASE);
    }

    #[test]
    fn invalid_port_is_an_error() {
        let overrides = Overrides {
            port: Some("not-a-port".to_string()),
            ..Default::default()
        };
        assert!(Settings::build(no_file(), overrides).is_err());
    }
}

//! Database connection settings
//!
//! Read from `DB_HOST`, `DB_PORT`, `DB_NAME`, `DB_USER` and `DB_PASSWORD`.
//! Anything left unset falls back to the libpq defaults that
//! `PgConnectOptions` applies (`PGHOST`, `PGPORT`, ..., then localhost:5432).

use sqlx::postgres::PgConnectOptions;

pub const ENV_HOST: &str = "DB_HOST";
pub const ENV_PORT: &str = "DB_PORT";
pub const ENV_NAME: &str = "DB_NAME";
pub const ENV_USER: &str = "DB_USER";
pub const ENV_PASSWORD: &str = "DB_PASSWORD";

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a port number, got '{value}'")]
    InvalidPort { var: &'static str, value: String },
}

/// Connection parameters for the products database
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DbConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub name: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
}

// Hand-written so the password never reaches a log line.
impl std::fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

impl DbConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get(ENV_PORT) {
            Some(raw) => Some(raw.trim().parse::<u16>().map_err(|_| {
                ConfigError::InvalidPort {
                    var: ENV_PORT,
                    value: raw.clone(),
                }
            })?),
            None => None,
        };

        Ok(Self {
            host: get(ENV_HOST),
            port,
            name: get(ENV_NAME),
            user: get(ENV_USER),
            password: get(ENV_PASSWORD),
        })
    }

    /// Build sqlx connect options, layering the configured values over the defaults.
    pub fn connect_options(&self) -> PgConnectOptions {
        let mut options = PgConnectOptions::new();
        if let Some(host) = &self.host {
            options = options.host(host);
        }
        if let Some(port) = self.port {
            options = options.port(port);
        }
        if let Some(name) = &self.name {
            options = options.database(name);
        }
        if let Some(user) = &self.user {
            options = options.username(user);
        }
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        options
    }

    /// Host/database pair for log lines.
    pub fn describe(&self) -> String {
        format!(
            "{}/{}",
            self.host.as_deref().unwrap_or("<default host>"),
            self.name.as_deref().unwrap_or("<default db>")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn reads_all_variables() {
        let config = DbConfig::from_lookup(lookup(&[
            ("DB_HOST", "db.internal"),
            ("DB_PORT", "6543"),
            ("DB_NAME", "shop"),
            ("DB_USER", "app"),
            ("DB_PASSWORD", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.host.as_deref(), Some("db.internal"));
        assert_eq!(config.port, Some(6543));
        assert_eq!(config.name.as_deref(), Some("shop"));
        assert_eq!(config.user.as_deref(), Some("app"));
        assert_eq!(config.password.as_deref(), Some("secret"));

        let options = config.connect_options();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_database(), Some("shop"));
        assert_eq!(options.get_username(), "app");
    }

    #[test]
    fn missing_and_empty_variables_are_unset() {
        let config = DbConfig::from_lookup(lookup(&[("DB_HOST", ""), ("DB_NAME", "shop")])).unwrap();
        assert_eq!(config.host, None);
        assert_eq!(config.port, None);
        assert_eq!(config.name.as_deref(), Some("shop"));
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = DbConfig::from_lookup(lookup(&[("DB_PORT", "postgres")])).unwrap_err();
        assert_eq!(err.to_string(), "DB_PORT must be a port number, got 'postgres'");
    }

    #[test]
    fn debug_hides_password() {
        let config = DbConfig {
            password: Some("hunter2".into()),
            ..Default::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("***"));
    }
}

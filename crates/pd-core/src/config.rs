//! Database connection settings.
//!
//! Read from the environment:
//! - `DB_USERNAME` (default `root`)
//! - `DB_PASSWORD` (default empty)
//! - `DB_HOST` (default `localhost`)
//! - `DB_NAME` (no default; when unset the driver connects without selecting a database)

/// Environment variable names.
pub const ENV_DB_USERNAME: &str = "DB_USERNAME";
pub const ENV_DB_PASSWORD: &str = "DB_PASSWORD";
pub const ENV_DB_HOST: &str = "DB_HOST";
pub const ENV_DB_NAME: &str = "DB_NAME";

const DEFAULT_USERNAME: &str = "root";
const DEFAULT_HOST: &str = "localhost";

/// Connection parameters for the users database.
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub database: Option<String>,
}

impl DbConfig {
    /// Resolve settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through `lookup`, applying the defaults above.
    ///
    /// An empty `DB_NAME` counts as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        DbConfig {
            user: lookup(ENV_DB_USERNAME).unwrap_or_else(|| DEFAULT_USERNAME.to_string()),
            password: lookup(ENV_DB_PASSWORD).unwrap_or_default(),
            host: lookup(ENV_DB_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            database: lookup(ENV_DB_NAME).filter(|name| !name.is_empty()),
        }
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl std::fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let password = if self.password.is_empty() {
            "<empty>"
        } else {
            "<redacted>"
        };
        f.debug_struct("DbConfig")
            .field("user", &self.user)
            .field("password", &password)
            .field("host", &self.host)
            .field("database", &self.database)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DbConfig::default();
        assert_eq!(config.user, "root");
        assert_eq!(config.password, "");
        assert_eq!(config.host, "localhost");
        assert_eq!(config.database, None);
    }

    #[test]
    fn test_all_set() {
        let config = DbConfig::from_lookup(lookup_from(&[
            ("DB_USERNAME", "holberton"),
            ("DB_PASSWORD", "s3cr3t"),
            ("DB_HOST", "db.internal"),
            ("DB_NAME", "my_db"),
        ]));
        assert_eq!(config.user, "holberton");
        assert_eq!(config.password, "s3cr3t");
        assert_eq!(config.host, "db.internal");
        assert_eq!(config.database.as_deref(), Some("my_db"));
    }

    #[test]
    fn test_empty_database_is_unset() {
        let config = DbConfig::from_lookup(lookup_from(&[("DB_NAME", "")]));
        assert_eq!(config.database, None);
    }

    #[test]
    fn test_debug_hides_password() {
        let config = DbConfig::from_lookup(lookup_from(&[("DB_PASSWORD", "s3cr3t")]));
        let dbg = format!("{:?}", config);
        assert!(!dbg.contains("s3cr3t"));
        assert!(dbg.contains("<redacted>"));
        assert!(format!("{:?}", DbConfig::default()).contains("<empty>"));
    }
}

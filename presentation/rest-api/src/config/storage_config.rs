use std::env;

use super::error::ConfigError;

/// Which product store the service runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    Memory,
    Postgres(PostgresSettings),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostgresSettings {
    pub database_url: String,
    pub max_connections: u32,
    pub migrations_path: String,
}

impl StorageConfig {
    /// Load storage configuration from environment variables
    ///
    /// Environment variables:
    /// - STORAGE_BACKEND: "memory" (default) or "postgres"
    /// - DATABASE_URL: PostgreSQL connection string (required for "postgres")
    /// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
    /// - MIGRATIONS_PATH: migrations directory (default: "./migrations")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend = lookup("STORAGE_BACKEND").unwrap_or_else(|| "memory".to_string());

        match backend.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageConfig::Memory),
            "postgres" => {
                let database_url =
                    lookup("DATABASE_URL").ok_or(ConfigError::MissingValue("DATABASE_URL"))?;
                let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
                    Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                        key: "DATABASE_MAX_CONNECTIONS",
                        value: raw,
                    })?,
                    None => 5,
                };
                let migrations_path =
                    lookup("MIGRATIONS_PATH").unwrap_or_else(|| "./migrations".to_string());

                Ok(StorageConfig::Postgres(PostgresSettings {
                    database_url,
                    max_connections,
                    migrations_path,
                }))
            }
            _ => Err(ConfigError::InvalidValue {
                key: "STORAGE_BACKEND",
                value: backend,
            }),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            StorageConfig::Memory => "memory",
            StorageConfig::Postgres(_) => "postgres",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn should_default_to_memory_backend() {
        let config = StorageConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config, StorageConfig::Memory);
        assert_eq!(config.backend_name(), "memory");
    }

    #[test]
    fn should_read_postgres_settings() {
        let config = StorageConfig::from_lookup(lookup_from(&[
            ("STORAGE_BACKEND", "Postgres"),
            ("DATABASE_URL", "postgres://localhost/catalog"),
            ("DATABASE_MAX_CONNECTIONS", "10"),
        ]))
        .unwrap();

        assert_eq!(
            config,
            StorageConfig::Postgres(PostgresSettings {
                database_url: "postgres://localhost/catalog".to_string(),
                max_connections: 10,
                migrations_path: "./migrations".to_string(),
            })
        );
    }

    #[test]
    fn should_require_database_url_for_postgres() {
        let result = StorageConfig::from_lookup(lookup_from(&[("STORAGE_BACKEND", "postgres")]));

        assert_eq!(result.unwrap_err(), ConfigError::MissingValue("DATABASE_URL"));
    }

    #[test]
    fn should_reject_unknown_backend() {
        let result = StorageConfig::from_lookup(lookup_from(&[("STORAGE_BACKEND", "sqlite")]));

        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidValue { key: "STORAGE_BACKEND", .. }
        ));
    }
}

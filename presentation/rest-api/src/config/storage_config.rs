use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Where grocery items and categories are kept.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageConfig {
    /// Process-local store; contents are lost on restart.
    InMemory,
    Postgres {
        url: String,
        max_connections: u32,
        migrations_path: String,
    },
}

impl StorageConfig {
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string. When unset the in-memory store is used.
    /// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
    /// - MIGRATIONS_PATH: migrations directory (default: "infrastructure/persistence/migrations")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let Some(url) = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()) else {
            return Self::InMemory;
        };

        let max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);
        let migrations_path =
            lookup("MIGRATIONS_PATH").unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string());

        Self::Postgres {
            url,
            max_connections,
            migrations_path,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StorageConfig::InMemory => "memory",
            StorageConfig::Postgres { .. } => "postgres",
        }
    }
}

/// Connects to PostgreSQL and applies pending migrations.
///
/// # Errors
/// Returns error if the connection or a migration fails
pub async fn init_database(
    url: &str,
    max_connections: u32,
    migrations_path: &str,
) -> anyhow::Result<PgPool> {
    let config = DatabaseConfig::new(url.to_string()).with_max_connections(max_connections);
    let pool = create_postgres_pool(&config).await?;
    run_migrations(&pool, migrations_path).await?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_in_memory_store_without_database_url() {
        let config = StorageConfig::from_lookup(|_| None);

        assert_eq!(config, StorageConfig::InMemory);
        assert_eq!(config.label(), "memory");
    }

    #[test]
    fn should_use_in_memory_store_when_database_url_blank() {
        let config = StorageConfig::from_lookup(|key| match key {
            "DATABASE_URL" => Some("  ".to_string()),
            _ => None,
        });

        assert_eq!(config, StorageConfig::InMemory);
    }

    #[test]
    fn should_use_postgres_with_defaults() {
        let config = StorageConfig::from_lookup(|key| match key {
            "DATABASE_URL" => Some("postgres://localhost/groceries".to_string()),
            _ => None,
        });

        assert_eq!(
            config,
            StorageConfig::Postgres {
                url: "postgres://localhost/groceries".to_string(),
                max_connections: DEFAULT_MAX_CONNECTIONS,
                migrations_path: DEFAULT_MIGRATIONS_PATH.to_string(),
            }
        );
    }

    #[test]
    fn should_read_pool_size_and_migrations_path() {
        let config = StorageConfig::from_lookup(|key| match key {
            "DATABASE_URL" => Some("postgres://db/groceries".to_string()),
            "DATABASE_MAX_CONNECTIONS" => Some("20".to_string()),
            "MIGRATIONS_PATH" => Some("/srv/migrations".to_string()),
            _ => None,
        });

        assert!(matches!(
            config,
            StorageConfig::Postgres { max_connections: 20, ref migrations_path, .. }
                if migrations_path == "/srv/migrations"
        ));
    }
}

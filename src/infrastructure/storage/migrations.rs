//! Database migrations infrastructure

use sqlx::postgres::PgPool;

use crate::domain::DomainError;

/// A single versioned schema migration
#[derive(Debug, Clone)]
pub struct Migration {
    pub version: i64,
    pub description: &'static str,
    pub up: &'static str,
}

/// The full migration set, in order.
///
/// The unique constraints here carry invariants the services rely on:
/// `users.email` rejects duplicate registrations, and the fixed
/// `company_settings` primary key makes the singleton hold under concurrent
/// first-writes.
pub fn migrations() -> Vec<Migration> {
    vec![
        Migration {
            version: 1,
            description: "create users table",
            up: r#"
                CREATE TABLE IF NOT EXISTS users (
                    id UUID PRIMARY KEY,
                    username TEXT NOT NULL,
                    email TEXT NOT NULL UNIQUE,
                    password_hash TEXT NOT NULL,
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                )
            "#,
        },
        Migration {
            version: 2,
            description: "create company_settings singleton table",
            up: r#"
                CREATE TABLE IF NOT EXISTS company_settings (
                    id INTEGER PRIMARY KEY,
                    company_name TEXT NOT NULL,
                    header_color TEXT NOT NULL,
                    footer_text TEXT NOT NULL,
                    footer_color TEXT NOT NULL,
                    logo_url TEXT
                )
            "#,
        },
        Migration {
            version: 3,
            description: "create college_records table",
            up: r#"
                CREATE TABLE IF NOT EXISTS college_records (
                    id BIGSERIAL PRIMARY KEY,
                    school_name TEXT NOT NULL,
                    degree TEXT NOT NULL,
                    period_from TEXT NOT NULL,
                    period_to TEXT NOT NULL,
                    highest_attained TEXT NOT NULL,
                    year_graduated TEXT NOT NULL,
                    honors TEXT NOT NULL,
                    person_id BIGINT NOT NULL
                )
            "#,
        },
    ]
}

/// PostgreSQL migrator with a `_migrations` ledger table
#[derive(Debug)]
pub struct PostgresMigrator {
    pool: PgPool,
}

impl PostgresMigrator {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Runs all pending migrations
    pub async fn run(&self) -> Result<(), DomainError> {
        self.ensure_migrations_table().await?;

        for migration in migrations() {
            self.run_migration(&migration).await?;
        }

        Ok(())
    }

    async fn ensure_migrations_table(&self) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS _migrations (
                version BIGINT PRIMARY KEY,
                description TEXT NOT NULL,
                installed_on TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create migrations table: {}", e)))?;

        Ok(())
    }

    async fn run_migration(&self, migration: &Migration) -> Result<(), DomainError> {
        let applied: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM _migrations WHERE version = $1)")
                .bind(migration.version)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::storage(format!("Failed to check migration status: {}", e))
                })?;

        if applied {
            return Ok(());
        }

        sqlx::query(migration.up)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::storage(format!(
                    "Failed to run migration {}: {}",
                    migration.version, e
                ))
            })?;

        sqlx::query("INSERT INTO _migrations (version, description) VALUES ($1, $2)")
            .bind(migration.version)
            .bind(migration.description)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::storage(format!(
                    "Failed to record migration {}: {}",
                    migration.version, e
                ))
            })?;

        tracing::info!(
            version = migration.version,
            description = migration.description,
            "Applied migration"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_ordered_and_unique() {
        let all = migrations();

        let mut versions: Vec<i64> = all.iter().map(|m| m.version).collect();
        let sorted = versions.clone();
        versions.dedup();

        assert_eq!(versions, sorted);
        assert!(versions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_schema_carries_uniqueness_invariants() {
        let all = migrations();

        assert!(all[0].up.contains("email TEXT NOT NULL UNIQUE"));
        assert!(all[1].up.contains("id INTEGER PRIMARY KEY"));
    }
}

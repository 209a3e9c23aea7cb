use anyhow::{Context, Result};
use sea_orm::sqlx::sqlite::SqlitePoolOptions;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, SqlxSqliteConnector};
use sea_orm_migration::MigratorTrait;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

use crate::models::{NewUser, Planet, PlanetFields, User};

pub mod error;
pub mod migrator;
pub mod repositories;
pub mod seed;

pub use error::{StoreError, StoreResult};

/// Rows inserted by [`Store::seed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub planets: usize,
    pub users: usize,
}

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        let in_memory = db_url.contains(":memory:");

        if !in_memory {
            let path_str = db_url
                .trim_start_matches("sqlite://")
                .trim_start_matches("sqlite:");
            let path_str = path_str.split('?').next().unwrap_or(path_str);
            if let Some(parent) = Path::new(path_str).parent()
                && !parent.as_os_str().is_empty()
            {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)
                    .with_context(|| format!("Failed to create database file {path_str}"))?;
            }
        }

        // An in-memory database lives and dies with its connection, so the pool
        // holds exactly one and never recycles it.
        let conn = if in_memory {
            let pool = SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .acquire_timeout(Duration::from_secs(10))
                .connect(db_url)
                .await
                .with_context(|| format!("Failed to connect to {db_url}"))?;
            SqlxSqliteConnector::from_sqlx_sqlite_pool(pool)
        } else {
            let mut opt = ConnectOptions::new(db_url.to_string());
            opt.connect_timeout(Duration::from_secs(10))
                .acquire_timeout(Duration::from_secs(10))
                .max_connections(max_connections)
                .min_connections(min_connections)
                .idle_timeout(Duration::from_secs(300))
                .max_lifetime(Duration::from_secs(600))
                .sqlx_logging(false);
            Database::connect(opt)
                .await
                .with_context(|| format!("Failed to connect to {db_url}"))?
        };

        migrator::Migrator::up(&conn, None)
            .await
            .context("Failed to apply migrations")?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    /// Rolls back every migration, dropping both tables.
    pub async fn drop_all(&self) -> Result<()> {
        migrator::Migrator::down(&self.conn, None)
            .await
            .context("Failed to roll back migrations")?;
        Ok(())
    }

    /// Inserts the sample planets and users, skipping rows that already exist.
    pub async fn seed(&self) -> StoreResult<SeedReport> {
        let mut report = SeedReport::default();

        for fields in seed::planets() {
            match self.create_planet(fields).await {
                Ok(planet) => {
                    debug!(p_id = planet.p_id, "Seeded planet {}", planet.fields.p_name);
                    report.planets += 1;
                }
                Err(StoreError::Conflict(msg)) => debug!("Skipping seed row: {msg}"),
                Err(e) => return Err(e),
            }
        }

        for user in seed::users() {
            match self.create_user(user).await {
                Ok(_) => report.users += 1,
                Err(StoreError::Conflict(msg)) => debug!("Skipping seed row: {msg}"),
                Err(e) => return Err(e),
            }
        }

        Ok(report)
    }

    fn planet_repo(&self) -> repositories::planet::PlanetRepository {
        repositories::planet::PlanetRepository::new(self.conn.clone())
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    pub async fn list_planets(&self) -> StoreResult<Vec<Planet>> {
        self.planet_repo().list().await
    }

    pub async fn get_planet(&self, id: i32) -> StoreResult<Planet> {
        self.planet_repo().get(id).await
    }

    pub async fn create_planet(&self, fields: PlanetFields) -> StoreResult<Planet> {
        self.planet_repo().create(fields).await
    }

    pub async fn update_planet(&self, id: i32, fields: PlanetFields) -> StoreResult<Planet> {
        self.planet_repo().update(id, fields).await
    }

    pub async fn delete_planet(&self, id: i32) -> StoreResult<()> {
        self.planet_repo().delete(id).await
    }

    pub async fn count_planets(&self) -> StoreResult<u64> {
        self.planet_repo().count().await
    }

    pub async fn count_planets_named(&self, name: &str) -> StoreResult<u64> {
        self.planet_repo().count_named(name).await
    }

    pub async fn create_user(&self, user: NewUser) -> StoreResult<User> {
        self.user_repo().create(user).await
    }

    pub async fn find_user_by_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> StoreResult<User> {
        self.user_repo().find_by_credentials(email, password).await
    }

    pub async fn count_users_with_email(&self, email: &str) -> StoreResult<u64> {
        self.user_repo().count_with_email(email).await
    }
}

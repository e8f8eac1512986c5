//! Admin service for database inspection and migration control.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::admin::AdminRepository,
    error::AppError,
    model::admin::{DatabaseStatus, MigrationStatus, TableSchema, KNOWN_TABLES},
};

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks connectivity and reports the database clock and version.
    ///
    /// # Returns
    /// - `Ok(DatabaseStatus)` - Database reachable
    /// - `Err(AppError::DbErr)` - Connection or status query failed
    pub async fn status(&self) -> Result<DatabaseStatus, AppError> {
        let repo = AdminRepository::new(self.db);
        Ok(repo.status().await?)
    }

    /// Describes the columns of one of the registry tables.
    ///
    /// # Returns
    /// - `Ok(TableSchema)` - Column listing for the table
    /// - `Err(AppError::NotFound)` - Table is unknown or does not exist yet
    /// - `Err(AppError::DbErr)` - Database error during inspection
    pub async fn schema(&self, table: &str) -> Result<TableSchema, AppError> {
        if !KNOWN_TABLES.contains(&table) {
            return Err(AppError::NotFound("Table not found".to_string()));
        }

        let repo = AdminRepository::new(self.db);
        let columns = repo.columns(table).await?;
        if columns.is_empty() {
            return Err(AppError::NotFound("Table not found".to_string()));
        }

        Ok(TableSchema {
            table: table.to_string(),
            columns,
        })
    }

    pub async fn user_schema(&self) -> Result<TableSchema, AppError> {
        self.schema("users").await
    }

    pub async fn migration_status(&self) -> Result<MigrationStatus, AppError> {
        let repo = AdminRepository::new(self.db);
        Ok(repo.migration_status().await?)
    }

    /// Applies pending migrations and returns the resulting status.
    pub async fn run_migrations(&self) -> Result<MigrationStatus, AppError> {
        let repo = AdminRepository::new(self.db);

        repo.run_migrations().await?;
        let status = repo.migration_status().await?;

        tracing::info!("Migrations applied, {} total", status.applied.len());

        Ok(status)
    }
}

//! Database administration queries.
//!
//! Backend-specific SQL for connectivity checks and schema inspection, plus access to
//! the migration state. Only PostgreSQL and SQLite are compiled in; other backends get
//! a generic SQL fallback.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, DbErr, Statement};

use crate::server::model::admin::{DatabaseStatus, MigrationStatus, TableColumn};

pub struct AdminRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Pings the database and reads its clock and version.
    ///
    /// # Returns
    /// - `Ok(DatabaseStatus)` - Database reachable
    /// - `Err(DbErr)` - Connection failed or the status query failed
    pub async fn status(&self) -> Result<DatabaseStatus, DbErr> {
        self.db.ping().await?;

        let backend = self.db.get_database_backend();
        let sql = match backend {
            DbBackend::Postgres => {
                "SELECT CAST(CURRENT_TIMESTAMP AS TEXT) AS time, version() AS version"
            }
            DbBackend::Sqlite => {
                "SELECT CURRENT_TIMESTAMP AS time, 'SQLite ' || sqlite_version() AS version"
            }
            _ => "SELECT CAST(CURRENT_TIMESTAMP AS CHAR) AS time, VERSION() AS version",
        };

        let row = self
            .db
            .query_one_raw(Statement::from_string(backend, sql))
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Database returned no status row".to_string()))?;

        Ok(DatabaseStatus {
            backend: backend_name(backend).to_string(),
            time: row.try_get("", "time")?,
            version: row.try_get("", "version")?,
        })
    }

    /// Lists the columns of a table in declaration order.
    ///
    /// # Arguments
    /// - `table` - Table name, bound as a query parameter
    ///
    /// # Returns
    /// - `Ok(Vec<TableColumn>)` - Columns, empty if the table does not exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn columns(&self, table: &str) -> Result<Vec<TableColumn>, DbErr> {
        let backend = self.db.get_database_backend();
        let sql = match backend {
            DbBackend::Sqlite => {
                r#"SELECT name, type AS data_type,
                     CASE WHEN "notnull" = 0 THEN 'YES' ELSE 'NO' END AS is_nullable
                   FROM pragma_table_info(?) ORDER BY cid"#
            }
            _ => {
                r#"SELECT CAST(column_name AS TEXT) AS name,
                     CAST(data_type AS TEXT) AS data_type,
                     CAST(is_nullable AS TEXT) AS is_nullable
                   FROM information_schema.columns
                   WHERE table_schema = current_schema() AND table_name = $1
                   ORDER BY ordinal_position"#
            }
        };

        let rows = self
            .db
            .query_all_raw(Statement::from_sql_and_values(backend, sql, [table.into()]))
            .await?;

        rows.into_iter()
            .map(|row| {
                let is_nullable: String = row.try_get("", "is_nullable")?;
                Ok(TableColumn {
                    name: row.try_get("", "name")?,
                    data_type: row.try_get("", "data_type")?,
                    nullable: is_nullable == "YES",
                })
            })
            .collect()
    }

    /// Reads applied and pending migration names.
    pub async fn migration_status(&self) -> Result<MigrationStatus, DbErr> {
        let applied = Migrator::get_applied_migrations(self.db)
            .await?
            .iter()
            .map(|m| m.name().to_string())
            .collect();
        let pending = Migrator::get_pending_migrations(self.db)
            .await?
            .iter()
            .map(|m| m.name().to_string())
            .collect();

        Ok(MigrationStatus { applied, pending })
    }

    /// Applies every pending migration.
    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        Migrator::up(self.db, None).await
    }
}

fn backend_name(backend: DbBackend) -> &'static str {
    match backend {
        DbBackend::Postgres => "postgres",
        DbBackend::Sqlite => "sqlite",
        _ => "mysql",
    }
}

//! Database administration models.

use crate::model::admin::{ColumnDto, DatabaseStatusDto, MigrationStatusDto, TableSchemaDto};

/// Tables whose schema may be inspected through the admin API.
pub const KNOWN_TABLES: [&str; 4] = ["users", "guests", "items", "guest_items"];

/// Connectivity report for the configured database.
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseStatus {
    /// Backend name, e.g. `postgres` or `sqlite`.
    pub backend: String,
    /// Server time as reported by the database.
    pub time: String,
    /// Server version string.
    pub version: String,
}

impl DatabaseStatus {
    pub fn into_dto(self) -> DatabaseStatusDto {
        DatabaseStatusDto {
            connected: true,
            backend: self.backend,
            time: self.time,
            version: self.version,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableColumn {
    pub name: String,
    pub data_type: String,
    pub nullable: bool,
}

impl TableColumn {
    pub fn into_dto(self) -> ColumnDto {
        ColumnDto {
            name: self.name,
            data_type: self.data_type,
            nullable: self.nullable,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableSchema {
    pub table: String,
    pub columns: Vec<TableColumn>,
}

impl TableSchema {
    pub fn into_dto(self) -> TableSchemaDto {
        TableSchemaDto {
            table: self.table,
            columns: self.columns.into_iter().map(TableColumn::into_dto).collect(),
        }
    }
}

/// Names of applied and pending migrations.
#[derive(Debug, Clone, PartialEq)]
pub struct MigrationStatus {
    pub applied: Vec<String>,
    pub pending: Vec<String>,
}

impl MigrationStatus {
    pub fn into_dto(self) -> MigrationStatusDto {
        MigrationStatusDto {
            applied: self.applied,
            pending: self.pending,
        }
    }
}

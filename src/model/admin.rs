use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DatabaseStatusDto {
    pub connected: bool,
    pub backend: String,
    pub time: String,
    pub version: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ColumnDto {
    pub name: String,
    pub data_type: String,
    pub nullable: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TableSchemaDto {
    pub table: String,
    pub columns: Vec<ColumnDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MigrationStatusDto {
    pub applied: Vec<String>,
    pub pending: Vec<String>,
}

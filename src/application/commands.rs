use std::path::PathBuf;

use crate::domain::{order_mapping::OrderMapping, sql_dialect::SqlDialectKind};

#[derive(Debug)]
pub struct GenerateInsertSqlCommand {
    pub csv_path: PathBuf,
    pub table_name: String,
    pub dialect_kind: SqlDialectKind,
    pub separator: char,
    pub exclude_first_line: bool,
    pub order_mapping: OrderMapping,
    /// `None` writes to a timestamp-named file in the working directory.
    pub output_path: Option<PathBuf>,
}

#[derive(Debug)]
pub struct GenerateInsertSqlResult {
    pub output_path: PathBuf,
    pub row_count: usize,
}

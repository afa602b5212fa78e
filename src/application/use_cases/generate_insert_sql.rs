use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::{
    application::commands::{GenerateInsertSqlCommand, GenerateInsertSqlResult},
    domain::insert_statement::InsertStatementGenerator,
    infrastructure::{
        csv_rows::CsvRowReader,
        output_file::{timestamped_output_path, write_sql},
    },
};

#[derive(Debug, Default)]
pub struct GenerateInsertSqlUseCase;

impl GenerateInsertSqlUseCase {
    pub fn execute(&self, command: GenerateInsertSqlCommand) -> Result<GenerateInsertSqlResult> {
        let row_reader = CsvRowReader::new(command.separator, command.exclude_first_line)?;
        let generator = InsertStatementGenerator::new(
            &command.table_name,
            command.dialect_kind,
            command.order_mapping,
        )?;

        let rows = row_reader.read_path(&command.csv_path)?;
        debug!(
            rows = rows.len(),
            path = %command.csv_path.display(),
            "read csv rows"
        );

        // Rendering finishes before the output file exists, so a bad row leaves nothing behind.
        let sql = generator
            .generate(&rows)
            .with_context(|| format!("Unable to convert {}", command.csv_path.display()))?;

        let output_path = command.output_path.unwrap_or_else(timestamped_output_path);
        write_sql(&output_path, &sql)?;
        info!(
            dialect = %generator.dialect(),
            rows = rows.len(),
            output = %output_path.display(),
            "wrote insert statement"
        );

        Ok(GenerateInsertSqlResult {
            output_path,
            row_count: rows.len(),
        })
    }
}

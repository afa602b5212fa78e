use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("Table name must not be empty")]
    EmptyTableName,
    #[error("Order mapping must contain at least one column")]
    EmptyOrderMapping,
    #[error("Order mapping must be a JSON object of column name to field index: {0}")]
    InvalidOrderMapping(String),
    #[error("Order mapping column names must not be blank")]
    BlankColumnName,
    #[error("Column `{0}` appears more than once in the order mapping")]
    DuplicateColumn(String),
    #[error("Column `{column}` maps to negative field index {index}")]
    NegativeFieldIndex { column: String, index: i64 },
    #[error("Columns `{first}` and `{second}` both map to field index {index}")]
    DuplicateFieldIndex {
        index: usize,
        first: String,
        second: String,
    },
    #[error("Separator must be a single ASCII character, got {0:?}")]
    InvalidSeparator(char),
    #[error("Row {row} has {field_count} fields, but the order mapping needs field index {index}")]
    FieldIndexOutOfRange {
        row: usize,
        index: usize,
        field_count: usize,
    },
}

pub type GenerateResult<T> = Result<T, GenerateError>;

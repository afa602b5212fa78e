pub mod errors;
pub mod insert_statement;
pub mod order_mapping;
pub mod sql_dialect;

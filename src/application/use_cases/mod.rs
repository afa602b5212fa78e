pub mod generate_insert_sql;

pub mod csv_rows;
pub mod output_file;

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDateTime, Timelike};

const SQL_EXTENSION: &str = "sql";

/// Builds `{year}{month}{day}{hour}{minute}{second}.sql` without zero padding,
/// so 2026-03-05 10:05:04 becomes `2026351054.sql`.
pub fn timestamp_file_name(moment: NaiveDateTime) -> String {
    format!(
        "{}{}{}{}{}{}.{SQL_EXTENSION}",
        moment.year(),
        moment.month(),
        moment.day(),
        moment.hour(),
        moment.minute(),
        moment.second()
    )
}

/// Output path in the working directory named after the current local time.
/// Two runs in the same second share a name and the later one overwrites.
pub fn timestamped_output_path() -> PathBuf {
    PathBuf::from(timestamp_file_name(Local::now().naive_local()))
}

pub fn write_sql(path: &Path, sql: &str) -> Result<()> {
    let output_file = File::create(path)
        .with_context(|| format!("Unable to create file: {}", path.display()))?;
    let mut output_writer = BufWriter::new(output_file);
    output_writer
        .write_all(sql.as_bytes())
        .with_context(|| format!("Unable to write file: {}", path.display()))?;
    output_writer.flush()?;
    Ok(())
}

mod application;
mod domain;
mod infrastructure;
mod interfaces;

use anyhow::Result;
use console::style;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

use crate::application::use_cases::generate_insert_sql::GenerateInsertSqlUseCase;
use crate::interfaces::cli::collect_generate_command;

fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let command = collect_generate_command()?;
    let use_case = GenerateInsertSqlUseCase::default();

    println!(
        "{}",
        style(format!("Generating {} insert statement...", command.dialect_kind)).cyan()
    );
    let result = use_case.execute(command)?;

    println!(
        "{} {} ({} rows)",
        style("Generated SQL has been saved to").green(),
        style(result.output_path.display()).bold(),
        result.row_count,
    );
    Ok(())
}

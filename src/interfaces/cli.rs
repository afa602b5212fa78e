use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Result, anyhow};
use clap::{Parser, ValueEnum};
use console::style;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

use crate::{
    application::commands::GenerateInsertSqlCommand,
    domain::{order_mapping::OrderMapping, sql_dialect::SqlDialectKind},
};

const DEFAULT_SEPARATOR: char = ',';

#[derive(Debug, Parser)]
#[command(
    name = "csv2sql",
    version,
    about = "Convert a csv file to a sql insert statement for the specified table"
)]
struct CliArgs {
    #[arg(help = "The CSV file to be read")]
    csv_file: PathBuf,
    #[arg(long, short = 't', help = "The name of the database table")]
    table: Option<String>,
    #[arg(long, short = 'd', value_enum, default_value_t = CliDialect::Mysql)]
    db: CliDialect,
    #[arg(
        long,
        short = 's',
        default_value_t = DEFAULT_SEPARATOR,
        help = "The separator used in the CSV"
    )]
    separator: char,
    #[arg(
        long = "exclude_first_line",
        short = 'e',
        visible_alias = "exclude-first-line",
        help = "Exclude the first line of csv file"
    )]
    exclude_first_line: bool,
    #[arg(
        long = "order_mapping",
        short = 'm',
        visible_alias = "order-mapping",
        help = r#"Order mapping of csv field index to table column, e.g. {"id":0,"name":1}"#
    )]
    order_mapping: Option<OrderMapping>,
    #[arg(
        long,
        short = 'o',
        help = "Write to this path instead of a timestamp-named file"
    )]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliDialect {
    Mysql,
    Oracle,
}

impl From<CliDialect> for SqlDialectKind {
    fn from(value: CliDialect) -> Self {
        match value {
            CliDialect::Mysql => SqlDialectKind::MySql,
            CliDialect::Oracle => SqlDialectKind::Oracle,
        }
    }
}

pub fn collect_generate_command() -> Result<GenerateInsertSqlCommand> {
    if env::args_os().len() == 1 {
        return collect_interactive_command();
    }
    collect_command_from_args(CliArgs::parse())
}

fn collect_command_from_args(args: CliArgs) -> Result<GenerateInsertSqlCommand> {
    let table = args
        .table
        .ok_or_else(|| anyhow!("--table is required when using argument mode"))?;
    let table_name = ensure_non_empty_value(table, "Table name")?;
    let order_mapping = args
        .order_mapping
        .ok_or_else(|| anyhow!("--order_mapping is required when using argument mode"))?;

    Ok(GenerateInsertSqlCommand {
        csv_path: args.csv_file,
        table_name,
        dialect_kind: args.db.into(),
        separator: args.separator,
        exclude_first_line: args.exclude_first_line,
        order_mapping,
        output_path: args.output,
    })
}

fn collect_interactive_command() -> Result<GenerateInsertSqlCommand> {
    let theme = ColorfulTheme::default();

    println!();
    println!(
        "{}",
        style(" CSV TO SQL ")
            .black()
            .on_cyan()
            .bold()
            .underlined()
    );
    println!("{}", style("Turn csv rows into one batch INSERT").dim());
    println!();

    let csv_file: String = Input::with_theme(&theme)
        .with_prompt("CSV file path")
        .validate_with(|value: &String| {
            if Path::new(value.trim()).is_file() {
                Ok(())
            } else {
                Err("CSV file does not exist")
            }
        })
        .interact_text()?;

    let table_name: String = Input::with_theme(&theme)
        .with_prompt("Table name")
        .validate_with(|value: &String| {
            if value.trim().is_empty() {
                Err("Table name must not be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let dialect_items = SqlDialectKind::ALL
        .iter()
        .map(|dialect| dialect.as_str())
        .collect::<Vec<_>>();
    let selected_dialect_index = Select::with_theme(&theme)
        .with_prompt("Database type")
        .default(0)
        .items(&dialect_items)
        .interact()?;
    let dialect_kind = SqlDialectKind::ALL[selected_dialect_index];

    let separator: char = Input::with_theme(&theme)
        .with_prompt("Separator")
        .default(DEFAULT_SEPARATOR)
        .interact_text()?;

    let exclude_first_line = Confirm::with_theme(&theme)
        .with_prompt("Exclude the first line?")
        .default(false)
        .interact()?;

    let raw_mapping: String = Input::with_theme(&theme)
        .with_prompt(r#"Order mapping (e.g. {"id":0,"name":1})"#)
        .validate_with(|value: &String| {
            OrderMapping::parse(value)
                .map(|_| ())
                .map_err(|error| error.to_string())
        })
        .interact_text()?;
    let order_mapping = OrderMapping::parse(&raw_mapping)?;

    let output_name: String = Input::with_theme(&theme)
        .with_prompt("Output file (empty for a timestamped name)")
        .allow_empty(true)
        .interact_text()?;
    let output_path = Some(output_name.trim())
        .filter(|name| !name.is_empty())
        .map(PathBuf::from);

    Ok(GenerateInsertSqlCommand {
        csv_path: PathBuf::from(csv_file.trim()),
        table_name,
        dialect_kind,
        separator,
        exclude_first_line,
        order_mapping,
        output_path,
    })
}

fn ensure_non_empty_value(value: String, field_name: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(anyhow!("{field_name} must not be empty"));
    }
    Ok(value)
}

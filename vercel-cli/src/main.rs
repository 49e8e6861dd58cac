mod cli;
mod error;
mod paths;
mod print;
mod projects;

use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io;
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;

use clap::Parser;
use datatables::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};
use vercel_lib::ApiClient;

use crate::cli::Cli;
use crate::error::CliError;

fn init_logging(level: &str) -> Result<(), Box<dyn std::error::Error>> {
    let path = paths::log_file();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let level = LevelFilter::from_str(level).unwrap_or(LevelFilter::Info);
    WriteLogger::init(level, Config::default(), File::create(&path)?)?;
    log::info!("Logging to {}", path.display());
    Ok(())
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let client = ApiClient::builder().base_url(&cli.api_url).build()?;
    let projects =
        projects::list_projects(&client, &cli.token, cli.team_id.as_deref(), cli.limit).await?;

    let theme = match cli.theme.as_str() {
        "light" => GeistTheme::light(),
        _ => GeistTheme::dark(),
    };
    let table = DataTable::new(TableConfig::default().id("projects").sticky(false))
        .with_theme(Arc::new(theme.clone()))
        .render_row_menu_items(projects::menu_items());
    let columns = projects::columns();

    // First pass sizes the selection and wires up the checkboxes.
    table.compose(&projects, &columns)?;
    select_rows(&table, &cli.select, cli.select_all, projects.len())?;

    let root = table.compose(&projects, &columns)?;
    let lines = tabledom::render_lines(&root, &theme);
    print::write_lines(&mut io::stdout().lock(), &lines, cli.no_color)?;

    let selected = table.selection().checked_indices();
    if !selected.is_empty() {
        let names: Vec<&str> = selected
            .iter()
            .filter_map(|&i| projects.get(i).map(|p| p.name.as_str()))
            .collect();
        println!("\n{} selected: {}", names.len(), names.join(", "));
    }
    Ok(())
}

/// Check the requested rows on a composed table. Repeated indices count once.
fn select_rows<R: TableRow>(
    table: &DataTable<R>,
    rows: &[usize],
    select_all: bool,
    len: usize,
) -> Result<(), CliError> {
    let id = &table.config().id;
    for index in rows.iter().copied().collect::<BTreeSet<_>>() {
        if table.selection().is_checked(index) {
            continue;
        }
        if !table.dispatch(&format!("{}-row-{}-checkbox", id, index), "on_activate") {
            return Err(CliError::RowOutOfRange { index, len });
        }
    }
    if select_all && !table.is_all_checked() {
        table.dispatch(&format!("{}-select-all", id), "on_activate");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli.log_level) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

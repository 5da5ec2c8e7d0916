use super::error;
use super::output;
use super::Commands;
use crate::app::config::Config;
use crate::file::manager::FileManager;
use crate::file::value::Value;
use anyhow::{Context, Result};
use std::path::Path;

/// Handle a CLI command and return exit code
pub fn handle_command(command: Commands, config: &Config) -> i32 {
    let path = config.data.path.as_path();
    let result = match command {
        Commands::Read { json } => handle_read(path, json),
        Commands::Write { rows } => handle_write(path, &rows),
        Commands::Append { value } => handle_append(path, &value),
        Commands::Init { force } => handle_init(config, force),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            error::exit_code_for(&e)
        }
    }
}

/// Run the sample sequence: read, append, read, write, read
///
/// A missing data file is reported and ends the run normally; any other
/// failure is returned to the caller.
pub fn run_demo(config: &Config) -> Result<()> {
    ensure_data_file(&config.data.path, &config.seed_content())?;

    let fm = match FileManager::new(&config.data.path) {
        Ok(fm) => fm,
        Err(e) if e.is_not_found() => {
            println!("{}", e);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("READ:");
    println!("{}", output::format_rows(&fm.read()?));

    fm.append(&[Value::from(10)])?;

    println!("AFTER APPEND:");
    println!("{}", output::format_rows(&fm.read()?));

    fm.write(&[vec![Value::from("New Data")], vec![Value::from(101)]])?;

    println!("AFTER WRITE:");
    println!("{}", output::format_rows(&fm.read()?));

    Ok(())
}

/// Create the data file with `seed` unless something already exists there
///
/// Returns `true` when the file was created.
pub fn ensure_data_file(path: &Path, seed: &str) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    write_seed(path, seed)?;
    Ok(true)
}

fn write_seed(path: &Path, seed: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }
    std::fs::write(path, seed).with_context(|| format!("Failed to create {:?}", path))?;
    tracing::info!("Created sample data file at {:?}", path);
    Ok(())
}

fn handle_read(path: &Path, json: bool) -> Result<i32> {
    let rows = FileManager::new(path)?.read()?;
    if json {
        println!("{}", output::format_rows_json(&rows)?);
    } else {
        println!("{}", output::format_rows(&rows));
    }
    Ok(error::SUCCESS)
}

fn handle_write(path: &Path, rows: &[String]) -> Result<i32> {
    let fm = FileManager::new(path)?;
    let rows = parse_rows(rows);
    fm.write(&rows)?;
    println!("Wrote {} row(s) to {}", rows.len(), path.display());
    Ok(error::SUCCESS)
}

fn handle_append(path: &Path, value: &str) -> Result<i32> {
    let fm = FileManager::new(path)?;
    fm.append(&[Value::parse(value)])?;

    let rows = fm.read()?;
    if let Some(last) = rows.last() {
        println!("Appended: {}", last.join(","));
    }
    Ok(error::SUCCESS)
}

fn handle_init(config: &Config, force: bool) -> Result<i32> {
    let path = config.data.path.as_path();
    if force {
        write_seed(path, &config.seed_content())?;
        println!("Reset {}", path.display());
    } else if ensure_data_file(path, &config.seed_content())? {
        println!("Created {}", path.display());
    } else {
        println!("{} already exists (use --force to overwrite)", path.display());
    }
    Ok(error::SUCCESS)
}

/// Split command-line rows on commas and type each field
pub fn parse_rows(rows: &[String]) -> Vec<Vec<Value>> {
    rows.iter()
        .map(|row| row.split(',').map(Value::parse).collect())
        .collect()
}

use anyhow::{bail, Result};
use std::{
    env,
    path::{Path, PathBuf},
    process::exit,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use adreport::{export, grid, report};

fn main() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env_filter).init();

    // Expect an export file, plus an optional output workbook path.
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <EXPORT_FILE> [OUTPUT_XLSX]", args[0]);
        exit(1);
    }

    let input = PathBuf::from(&args[1]);
    info!(file = %input.display(), "loading export");
    let grid = load_grid(&input)?;

    let records = report::build_report(&grid)?;
    info!("normalized {} campaign rows", records.len());

    match args.get(2) {
        Some(output) => export::write_xlsx(&records, Path::new(output))?,
        None => {
            serde_json::to_writer_pretty(std::io::stdout().lock(), &records)?;
            println!();
        }
    }

    Ok(())
}

/// Pick a loader from the file extension.
fn load_grid(path: &Path) -> Result<grid::RawGrid> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    match ext.as_str() {
        "csv" => grid::csv::load_csv_grid(path),
        "xlsx" | "xls" | "xlsm" => grid::xlsx::load_xlsx_grid(path),
        other => bail!("unsupported export format: .{other} (expected .csv or .xlsx)"),
    }
}

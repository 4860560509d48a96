//! archhealth CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use archhealth::{
    analyze_architecture, format_analysis_report, load_catalog, AnalysisConfig, ArchError, Cli,
    OutputFormat,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

/// Logs go to stderr so stdout stays machine-readable
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "archhealth=debug" } else { "archhealth=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> archhealth::Result<String> {
    let config = match &cli.config {
        Some(path) => AnalysisConfig::from_toml_file(path)?,
        None => AnalysisConfig::default(),
    };

    let catalog = load_catalog(&cli.catalog)?;
    let analysis = analyze_architecture(&catalog, &cli.root, &config)?;

    let output = match cli.format {
        OutputFormat::Json => serde_json::to_string_pretty(&analysis).map_err(ArchError::from)?,
        OutputFormat::Text => format_analysis_report(&analysis),
    };

    Ok(output)
}

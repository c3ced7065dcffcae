mod atomic;
mod logging;
mod settings;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use mockgen_core::{Error as CoreError, SchemaDocument, validate_interface};
use mockgen_generate::{GenerationError, OutputFormat, Synthesizer, format_records};
use thiserror::Error;
use tracing::{error, info, warn};

use atomic::{write_bytes_atomic, write_json_atomic};
use logging::{LogFormat, init_logging};
use settings::resolve_options;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("schema error: {0}")]
    Core(#[from] CoreError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Parser, Debug)]
#[command(
    name = "mockgen",
    version,
    about = "Generate mock records from a schema document"
)]
struct Cli {
    /// Schema document (JSON) describing the interfaces.
    #[arg(short, long, value_name = "FILE")]
    schema: PathBuf,
    /// Name of the interface to mock.
    #[arg(short, long, value_name = "NAME")]
    interface: String,
    /// Number of records to generate.
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    count: i64,
    /// Output format: json or csv.
    #[arg(short, long, default_value = "json")]
    output: String,
    /// Write output to this file instead of stdout.
    #[arg(short = 'f', long, value_name = "FILE")]
    out_file: Option<PathBuf>,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// TOML file with synthesis options.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Locale for name-derived values (en_US, pt_BR).
    #[arg(long)]
    locale: Option<String>,
    /// Also write the synthesis report as JSON.
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.log_format) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(event = "run_failed", error = %err);
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let timer = Instant::now();
    let format: OutputFormat = cli.output.parse()?;
    let options = resolve_options(cli.config.as_deref(), cli.locale.as_deref())?;

    info!(
        event = "run_started",
        schema = %cli.schema.display(),
        interface = %cli.interface,
        count = cli.count,
        format = %format,
        locale = %options.locale,
    );

    let document = SchemaDocument::from_path(&cli.schema)?;
    let interface = document.interface(&cli.interface)?;
    validate_interface(interface)?;

    let synthesizer = Synthesizer::new(options)?;
    let result = match cli.seed {
        Some(seed) => synthesizer.synthesize_seeded(interface, cli.count, seed)?,
        None => {
            let mut rng = rand::rng();
            synthesizer.synthesize_with_report(interface, cli.count, &mut rng)?
        }
    };

    for field in &result.report.degraded {
        warn!(event = "field_degraded", path = %field.path, reason = %field.reason);
    }

    let rendered = format_records(&result.records, format)?;
    match &cli.out_file {
        Some(path) => {
            write_bytes_atomic(path, rendered.as_bytes())?;
            info!(event = "output_written", path = %path.display(), bytes = rendered.len());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
        }
    }

    if let Some(path) = &cli.report {
        write_json_atomic(path, &result.report)?;
        info!(event = "report_written", path = %path.display());
    }

    info!(
        event = "run_finished",
        records = result.records.len(),
        duration_ms = timer.elapsed().as_millis() as u64,
    );
    Ok(())
}

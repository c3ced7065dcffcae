use std::env;
use std::path::PathBuf;

use mockgen_core::SchemaDocument;
use mockgen_generate::{OutputFormat, SynthesisOptions, Synthesizer, format_records};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let mut schema_path: Option<PathBuf> = None;
    let mut interface: Option<String> = None;
    let mut count: i64 = 5;
    let mut format = OutputFormat::Json;
    let mut seed: u64 = 42;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--schema" => schema_path = args.next().map(PathBuf::from),
            "--interface" => interface = args.next(),
            "--count" => count = args.next().ok_or("missing --count value")?.parse()?,
            "--output" => format = args.next().ok_or("missing --output value")?.parse()?,
            "--seed" => seed = args.next().ok_or("missing --seed value")?.parse()?,
            _ => return Err(format!("unexpected argument: {arg}").into()),
        }
    }

    let schema_path = schema_path.ok_or("missing --schema path")?;
    let interface = interface.ok_or("missing --interface name")?;

    let document = SchemaDocument::from_path(&schema_path)?;
    let interface = document.interface(&interface)?;

    let synthesizer = Synthesizer::new(SynthesisOptions::default())?;
    let result = synthesizer.synthesize_seeded(interface, count, seed)?;

    println!("{}", format_records(&result.records, format)?);
    eprintln!(
        "generated={} dropped={} degraded={}",
        result.report.records_generated,
        result.report.optional_dropped,
        result.report.degraded.len()
    );
    Ok(())
}

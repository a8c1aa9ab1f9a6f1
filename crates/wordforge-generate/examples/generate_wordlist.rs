use std::env;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use wordforge_core::{CharsetSpec, EnumerationRequest};
use wordforge_generate::{
    CancelToken, GenerateOptions, GenerationEngine, GenerationJob, NoProgress, Output,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let mut seed = String::new();
    let mut max_length = 2;
    let mut out: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        let value = args.next();
        match (arg.as_str(), value) {
            ("--seed", Some(value)) => seed = value,
            ("--max-length", Some(value)) => max_length = value.parse()?,
            ("--out", Some(value)) => out = Some(PathBuf::from(value)),
            _ => return Err(format!("unexpected or incomplete argument: {arg}").into()),
        }
    }

    let charset = CharsetSpec {
        symbols: false,
        ..CharsetSpec::default()
    }
    .build();
    let request = EnumerationRequest::new(seed, &charset, max_length)?;

    let options = GenerateOptions {
        output: out.map_or(Output::Stdout, Output::File),
        rng_seed: None,
    };
    let job = GenerationJob::Exhaustive(request);
    let engine = GenerationEngine::new(options);
    let report = engine.run(&job, &mut NoProgress, &CancelToken::new())?;

    eprintln!("items={} bytes={}", report.items_written, report.bytes_written);
    Ok(())
}

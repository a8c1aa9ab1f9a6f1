mod progress;
mod registry;
mod supervise;
mod workspace;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use progress::StderrProgress;
use registry::init_logging;
use supervise::{Supervised, supervise};
use thiserror::Error;
use wordforge_core::{
    CharsetSpec, EnumerationRequest, Error as CoreError, PolicyDecision, SafetyPolicy,
    SampleRequest, SeedVariantRequest,
};
use wordforge_generate::{
    CancelToken, GenerateOptions, GenerationEngine, GenerationError, GenerationJob, Output,
};
use workspace::{DEFAULT_CONFIG_PATH, Settings, load_settings, save_settings};

#[derive(Debug, Error)]
enum CliError {
    #[error("config error: {0}")]
    Workspace(#[from] workspace::WorkspaceError),
    #[error("registry error: {0}")]
    Registry(#[from] registry::RegistryError),
    #[error("invalid parameters: {0}")]
    Core(#[from] CoreError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Parser, Debug)]
#[command(
    name = "wordforge",
    version,
    about = "Wordlist generator for password auditing"
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// Config file (defaults to ./wordforge.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Write JSON logs to this file instead of stderr.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    /// Write a JSON run report to this path.
    #[arg(long, global = true)]
    report: Option<PathBuf>,
    /// Suppress progress and the completion summary.
    #[arg(short, long, global = true, default_value_t = false)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Every string over the alphabet up to a maximum length.
    Exhaustive(ExhaustiveArgs),
    /// Random strings over the alphabet.
    Random(RandomArgs),
    /// Common mutations of a seed word.
    Variants(VariantArgs),
    /// Print the exhaustive output size without generating anything.
    Estimate(EstimateArgs),
    /// Manage the config file.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a config file holding the defaults.
    Init {
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        path: PathBuf,
        /// Overwrite an existing file.
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

#[derive(Args, Debug, Clone, Copy)]
struct CharsetArgs {
    /// Exclude uppercase letters.
    #[arg(long, default_value_t = false)]
    no_upper: bool,
    /// Exclude lowercase letters.
    #[arg(long, default_value_t = false)]
    no_lower: bool,
    /// Exclude digits.
    #[arg(long, default_value_t = false)]
    no_digits: bool,
    /// Exclude symbols.
    #[arg(long, default_value_t = false)]
    no_symbols: bool,
}

impl CharsetArgs {
    /// Flags only ever remove classes the config enabled.
    fn apply(self, base: CharsetSpec) -> CharsetSpec {
        CharsetSpec {
            upper: base.upper && !self.no_upper,
            lower: base.lower && !self.no_lower,
            digits: base.digits && !self.no_digits,
            symbols: base.symbols && !self.no_symbols,
        }
    }
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Output file; stdout when omitted.
    #[arg(short, long)]
    out: Option<PathBuf>,
}

impl OutputArgs {
    fn output(&self) -> Output {
        match &self.out {
            Some(path) => Output::File(path.clone()),
            None => Output::Stdout,
        }
    }
}

#[derive(Args, Debug)]
struct ExhaustiveArgs {
    /// Fixed prefix for every line.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    seed: String,
    #[arg(long)]
    max_length: Option<usize>,
    /// Skip the size check and run the requested length as is.
    #[arg(long, default_value_t = false)]
    no_limit: bool,
    #[command(flatten)]
    charset: CharsetArgs,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct RandomArgs {
    /// Fixed prefix for every line.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    seed: String,
    #[arg(long)]
    count: Option<u64>,
    #[arg(long)]
    min_length: Option<usize>,
    #[arg(long)]
    max_length: Option<usize>,
    /// Seed the generator for a reproducible sample.
    #[arg(long)]
    rng_seed: Option<u64>,
    #[command(flatten)]
    charset: CharsetArgs,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct VariantArgs {
    /// Word to mutate.
    #[arg(long, allow_hyphen_values = true)]
    seed: String,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct EstimateArgs {
    #[arg(long)]
    max_length: Option<usize>,
    #[command(flatten)]
    charset: CharsetArgs,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    if let Command::Config(ConfigCommand::Init { path, force }) = &cli.command {
        return init_config(path, *force);
    }

    let settings = load_settings(cli.global.config.as_deref())?;
    init_logging(&settings.logging.level, cli.global.log_file.as_deref())?;

    match cli.command {
        Command::Exhaustive(args) => run_exhaustive(args, &settings, &cli.global).await,
        Command::Random(args) => run_random(args, &settings, &cli.global).await,
        Command::Variants(args) => run_variants(args, &cli.global).await,
        Command::Estimate(args) => run_estimate(args, &settings),
        Command::Config(_) => Ok(()),
    }
}

fn init_config(path: &Path, force: bool) -> Result<(), CliError> {
    if path.exists() && !force {
        return Err(CliError::InvalidConfig(format!(
            "{} already exists; pass --force to overwrite",
            path.display()
        )));
    }
    save_settings(path, &Settings::default())?;
    println!("config written to {}", path.display());
    Ok(())
}

async fn run_exhaustive(
    args: ExhaustiveArgs,
    settings: &Settings,
    global: &GlobalArgs,
) -> Result<(), CliError> {
    let charset = args.charset.apply(settings.charset);
    let requested = args.max_length.unwrap_or(settings.exhaustive.max_length);
    let policy = if args.no_limit {
        SafetyPolicy {
            enabled: false,
            ..settings.policy
        }
    } else {
        settings.policy
    };

    let decision = policy.evaluate(charset.len(), requested)?;
    if let PolicyDecision::Downgrade {
        requested,
        applied,
        estimate,
    } = decision
    {
        tracing::warn!(
            event = "policy_downgrade",
            requested,
            applied,
            estimate = ?estimate,
            threshold = policy.threshold,
            "output exceeds threshold"
        );
        if !global.quiet {
            let size = estimate.map_or_else(|| "overflow".to_string(), |n| n.to_string());
            eprintln!(
                "warning: {size} candidates exceeds the limit of {}; max length {requested} -> {applied} (use --no-limit to override)",
                policy.threshold
            );
        }
    }

    let request = EnumerationRequest::new(args.seed, &charset.build(), decision.max_length())?;
    let options = GenerateOptions {
        output: args.output.output(),
        rng_seed: None,
    };
    run_job(GenerationJob::Exhaustive(request), options, global).await
}

async fn run_random(
    args: RandomArgs,
    settings: &Settings,
    global: &GlobalArgs,
) -> Result<(), CliError> {
    let charset = args.charset.apply(settings.charset);
    let defaults = &settings.random;
    let request = SampleRequest::new(
        args.seed,
        &charset.build(),
        args.count.unwrap_or(defaults.count),
        args.min_length.unwrap_or(defaults.min_length),
        args.max_length.unwrap_or(defaults.max_length),
    )?;
    let options = GenerateOptions {
        output: args.output.output(),
        rng_seed: args.rng_seed,
    };
    run_job(GenerationJob::Random(request), options, global).await
}

async fn run_variants(args: VariantArgs, global: &GlobalArgs) -> Result<(), CliError> {
    let request = SeedVariantRequest::new(&args.seed)?;
    let options = GenerateOptions {
        output: args.output.output(),
        rng_seed: None,
    };
    run_job(GenerationJob::Variants(request), options, global).await
}

fn run_estimate(args: EstimateArgs, settings: &Settings) -> Result<(), CliError> {
    let charset = args.charset.apply(settings.charset);
    let max_length = args.max_length.unwrap_or(settings.exhaustive.max_length);

    match wordforge_core::estimate(charset.len(), max_length) {
        Ok(total) => println!("{total}"),
        Err(CoreError::Overflow { .. }) => println!("overflow"),
        Err(err) => return Err(err.into()),
    }

    if let PolicyDecision::Downgrade { applied, .. } =
        settings.policy.evaluate(charset.len(), max_length)?
    {
        eprintln!(
            "note: exceeds the limit of {}; exhaustive would run with max length {applied}",
            settings.policy.threshold
        );
    }
    Ok(())
}

/// Run `job` on a blocking worker while the runtime watches for Ctrl-C.
///
/// The first interrupt flips the cancel token; the worker stops at the next
/// item and its `Cancelled` error is returned once it has flushed. A second
/// interrupt exits with status 130 without waiting.
async fn run_job(
    job: GenerationJob,
    options: GenerateOptions,
    global: &GlobalArgs,
) -> Result<(), CliError> {
    let cancel = CancelToken::new();
    let worker_cancel = cancel.clone();
    let engine = GenerationEngine::new(options);
    let quiet = global.quiet;

    let worker = tokio::task::spawn_blocking(move || {
        let mut progress = StderrProgress::new(quiet);
        let result = engine.run(&job, &mut progress, &worker_cancel);
        progress.finish();
        result
    });

    let result = match supervise(worker, &cancel, tokio::signal::ctrl_c).await? {
        Supervised::Finished(result) => result,
        Supervised::Abandoned => {
            eprintln!("interrupted again; exiting without waiting for the writer");
            std::process::exit(130);
        }
    };

    let report = match result {
        Ok(report) => report,
        Err(err) => {
            if let Some(written) = err.lines_written()
                && !global.quiet
            {
                eprintln!("stopped after {written} candidate(s)");
            }
            return Err(err.into());
        }
    };

    if let Some(path) = &global.report {
        report.write_json(path)?;
        tracing::info!(event = "report_written", path = %path.display());
    }

    if !global.quiet {
        eprintln!("{} candidate(s) -> {}", report.items_written, report.output);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charset_flags_only_remove_classes() {
        let flags = CharsetArgs {
            no_upper: true,
            no_lower: false,
            no_digits: false,
            no_symbols: true,
        };
        let base = CharsetSpec {
            digits: false,
            ..CharsetSpec::default()
        };
        let applied = flags.apply(base);
        assert_eq!(
            applied,
            CharsetSpec {
                upper: false,
                lower: true,
                digits: false,
                symbols: false,
            }
        );
    }

    #[test]
    fn parses_exhaustive_with_globals() {
        let cli = Cli::try_parse_from([
            "wordforge",
            "exhaustive",
            "--seed",
            "-pw",
            "--max-length",
            "3",
            "--no-symbols",
            "-o",
            "out.txt",
            "--quiet",
        ])
        .expect("parse");
        assert!(cli.global.quiet);
        match cli.command {
            Command::Exhaustive(args) => {
                assert_eq!(args.seed, "-pw");
                assert_eq!(args.max_length, Some(3));
                assert!(args.charset.no_symbols);
                assert_eq!(args.output.output(), Output::File(PathBuf::from("out.txt")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn variants_requires_seed() {
        assert!(Cli::try_parse_from(["wordforge", "variants"]).is_err());
    }

    #[test]
    fn random_defaults_to_stdout() {
        let cli = Cli::try_parse_from(["wordforge", "random", "--rng-seed", "7"]).expect("parse");
        match cli.command {
            Command::Random(args) => {
                assert_eq!(args.rng_seed, Some(7));
                assert_eq!(args.output.output(), Output::Stdout);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

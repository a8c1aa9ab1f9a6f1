use std::fs::File;
use std::io::{self, Write};
use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};
use wordforge_core::estimate;

use crate::cancel::CancelToken;
use crate::errors::GenerationError;
use crate::generators::{WriteSummary, enumerate, sample, write_variants};
use crate::model::{GenerateOptions, GenerationJob, GenerationReport, Output};
use crate::progress::ProgressSink;

/// Entry point for running one generation job against one output.
#[derive(Debug, Clone, Default)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Open the configured output, run `job` into it and close it.
    ///
    /// The output is opened once and dropped on every exit path. A failed or
    /// cancelled run leaves the lines already written in place.
    pub fn run<P>(
        &self,
        job: &GenerationJob,
        progress: &mut P,
        cancel: &CancelToken,
    ) -> Result<GenerationReport, GenerationError>
    where
        P: ProgressSink + ?Sized,
    {
        let writer = open_output(&self.options.output)?;
        self.run_with_writer(job, writer, progress, cancel)
    }

    /// Run `job` into a caller-supplied writer.
    pub fn run_with_writer<W, P>(
        &self,
        job: &GenerationJob,
        writer: W,
        progress: &mut P,
        cancel: &CancelToken,
    ) -> Result<GenerationReport, GenerationError>
    where
        W: Write,
        P: ProgressSink + ?Sized,
    {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let started_at = chrono::Utc::now().to_rfc3339();
        let mode = job.mode();

        info!(
            run_id = %run_id,
            mode = %mode,
            output = %self.options.output,
            "generation started"
        );

        let mut estimated = None;
        let mut rng_seed = None;
        let outcome: Result<WriteSummary, GenerationError> = match job {
            GenerationJob::Exhaustive(request) => {
                estimated = estimate(request.charset().len(), request.max_length()).ok();
                info!(
                    charset_len = request.charset().len(),
                    max_length = request.max_length(),
                    estimate = ?estimated,
                    "enumerating"
                );
                enumerate(request, writer, progress, cancel)
            }
            GenerationJob::Random(request) => {
                let seed = self
                    .options
                    .rng_seed
                    .unwrap_or_else(|| rand::rng().random());
                rng_seed = Some(seed);
                info!(
                    count = request.count(),
                    min_length = request.min_length(),
                    max_length = request.max_length(),
                    rng_seed = seed,
                    "sampling"
                );
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                sample(request, writer, &mut rng, progress, cancel)
            }
            GenerationJob::Variants(request) => write_variants(request, writer),
        };

        let summary = match outcome {
            Ok(summary) => summary,
            Err(err) => {
                match &err {
                    GenerationError::Cancelled { written } => {
                        warn!(run_id = %run_id, written, "generation cancelled");
                    }
                    _ => warn!(run_id = %run_id, error = %err, "generation failed"),
                }
                return Err(err);
            }
        };

        let elapsed = start.elapsed();
        let report = GenerationReport {
            run_id,
            started_at,
            mode,
            output: self.options.output.clone(),
            items_written: summary.items,
            bytes_written: summary.bytes,
            estimate: estimated,
            rng_seed,
            duration_ms: elapsed.as_millis() as u64,
            throughput_items_per_sec: if elapsed.as_secs_f64() > 0.0 {
                summary.items as f64 / elapsed.as_secs_f64()
            } else {
                0.0
            },
        };

        info!(
            run_id = %report.run_id,
            items = report.items_written,
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(report)
    }
}

fn open_output(output: &Output) -> Result<Box<dyn Write>, GenerationError> {
    match output {
        Output::Stdout => Ok(Box::new(io::stdout().lock())),
        Output::File(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)?;
            }
            Ok(Box::new(File::create(path)?))
        }
    }
}

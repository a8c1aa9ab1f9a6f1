use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use wordforge_core::{EnumerationRequest, GenerationMode, SampleRequest, SeedVariantRequest};

use crate::errors::GenerationError;

/// Where generated lines go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Output {
    Stdout,
    /// Created (or truncated) once per run; missing parent directories are
    /// created.
    File(PathBuf),
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Stdout => f.write_str("stdout"),
            Output::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Options for the generation engine.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub output: Output,
    /// Seed for the random sampler. Drawn from the thread RNG when absent
    /// and recorded in the report.
    pub rng_seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output: Output::Stdout,
            rng_seed: None,
        }
    }
}

/// One validated unit of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationJob {
    Exhaustive(EnumerationRequest),
    Random(SampleRequest),
    Variants(SeedVariantRequest),
}

impl GenerationJob {
    pub fn mode(&self) -> GenerationMode {
        match self {
            GenerationJob::Exhaustive(_) => GenerationMode::ExhaustiveCombinations,
            GenerationJob::Random(_) => GenerationMode::RandomSample,
            GenerationJob::Variants(_) => GenerationMode::SeedVariants,
        }
    }
}

/// Report for a completed generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub started_at: String,
    pub mode: GenerationMode,
    pub output: Output,
    pub items_written: u64,
    pub bytes_written: u64,
    /// Exact enumeration size, when representable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<u128>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rng_seed: Option<u64>,
    pub duration_ms: u64,
    pub throughput_items_per_sec: f64,
}

impl GenerationReport {
    /// Write the report as pretty JSON, creating parent directories.
    pub fn write_json(&self, path: &Path) -> Result<(), GenerationError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_vec_pretty(self)?)?;
        Ok(())
    }
}

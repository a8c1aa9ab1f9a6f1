//! Wordlist generation engine for Wordforge.
//!
//! Streams exhaustive enumerations and random samples over an alphabet to a
//! line-oriented output, and expands single seed words into common
//! human-style mutations. Generators hold no state between calls.

pub mod cancel;
pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;
pub mod output;
pub mod progress;
pub mod rng;

pub use cancel::CancelToken;
pub use engine::GenerationEngine;
pub use errors::GenerationError;
pub use generators::{WriteSummary, enumerate, expand, sample, write_variants};
pub use model::{GenerateOptions, GenerationJob, GenerationReport, Output};
pub use progress::{NoProgress, ProgressSink, ProgressUpdate};
pub use rng::RandomSource;

//! Core contracts and helpers for Wordforge.
//!
//! This crate defines the alphabet builder, the validated request types
//! consumed by the generation engine, the output-size estimator and the
//! caller-side safety policy shared by the engine and the CLI.

pub mod charset;
pub mod error;
pub mod estimate;
pub mod policy;
pub mod request;

pub use charset::{CharsetSpec, DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};
pub use error::{Error, Result};
pub use estimate::{estimate, tier_size};
pub use policy::{PolicyDecision, SafetyPolicy};
pub use request::{EnumerationRequest, GenerationMode, SampleRequest, SeedVariantRequest};

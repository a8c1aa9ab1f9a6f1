use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Generation mode selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    ExhaustiveCombinations,
    RandomSample,
    SeedVariants,
}

impl GenerationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationMode::ExhaustiveCombinations => "exhaustive_combinations",
            GenerationMode::RandomSample => "random_sample",
            GenerationMode::SeedVariants => "seed_variants",
        }
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for an exhaustive enumeration.
///
/// Built once per invocation and validated on construction, so an engine
/// holding one never sees an empty alphabet or a zero length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerationRequest {
    seed: String,
    charset: Vec<char>,
    max_length: usize,
}

impl EnumerationRequest {
    pub fn new(seed: impl Into<String>, charset: &str, max_length: usize) -> Result<Self> {
        let charset = non_empty_charset(charset)?;
        if max_length < 1 {
            return Err(Error::InvalidLength(max_length));
        }
        Ok(Self {
            seed: seed.into(),
            charset,
            max_length,
        })
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn charset(&self) -> &[char] {
        &self.charset
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

/// Parameters for a randomized sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleRequest {
    seed: String,
    charset: Vec<char>,
    count: u64,
    min_length: usize,
    max_length: usize,
}

impl SampleRequest {
    pub fn new(
        seed: impl Into<String>,
        charset: &str,
        count: u64,
        min_length: usize,
        max_length: usize,
    ) -> Result<Self> {
        let charset = non_empty_charset(charset)?;
        if min_length < 1 || min_length > max_length {
            return Err(Error::InvalidRange {
                min: min_length,
                max: max_length,
            });
        }
        Ok(Self {
            seed: seed.into(),
            charset,
            count,
            min_length,
            max_length,
        })
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn charset(&self) -> &[char] {
        &self.charset
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

/// Seed word for variant expansion. Surrounding whitespace is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedVariantRequest {
    seed: String,
}

impl SeedVariantRequest {
    pub fn new(seed: &str) -> Result<Self> {
        let seed = seed.trim();
        if seed.is_empty() {
            return Err(Error::EmptySeed);
        }
        Ok(Self {
            seed: seed.to_string(),
        })
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

fn non_empty_charset(charset: &str) -> Result<Vec<char>> {
    let chars: Vec<char> = charset.chars().collect();
    if chars.is_empty() {
        return Err(Error::EmptyAlphabet);
    }
    Ok(chars)
}

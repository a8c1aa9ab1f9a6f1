use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>/?";

/// Character classes enabled for generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharsetSpec {
    pub upper: bool,
    pub lower: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for CharsetSpec {
    fn default() -> Self {
        Self {
            upper: true,
            lower: true,
            digits: true,
            symbols: true,
        }
    }
}

impl CharsetSpec {
    /// Concatenate the enabled classes: uppercase, lowercase, digits, symbols.
    ///
    /// Returns an empty string when every class is disabled.
    pub fn build(&self) -> String {
        let mut chars = String::new();
        if self.upper {
            chars.push_str(UPPERCASE);
        }
        if self.lower {
            chars.push_str(LOWERCASE);
        }
        if self.digits {
            chars.push_str(DIGITS);
        }
        if self.symbols {
            chars.push_str(SYMBOLS);
        }
        chars
    }

    /// Like [`CharsetSpec::build`] but rejects an empty alphabet.
    pub fn alphabet(&self) -> Result<Vec<char>> {
        let chars: Vec<char> = self.build().chars().collect();
        if chars.is_empty() {
            return Err(Error::EmptyAlphabet);
        }
        Ok(chars)
    }

    /// Size of the resolved alphabet without building it.
    pub fn len(&self) -> usize {
        let mut size = 0;
        if self.upper {
            size += UPPERCASE.len();
        }
        if self.lower {
            size += LOWERCASE.len();
        }
        if self.digits {
            size += DIGITS.len();
        }
        if self.symbols {
            size += SYMBOLS.len();
        }
        size
    }

    pub fn is_empty(&self) -> bool {
        !(self.upper || self.lower || self.digits || self.symbols)
    }
}

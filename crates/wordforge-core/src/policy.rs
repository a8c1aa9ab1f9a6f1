use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::estimate::estimate;

/// Caller-side cap on exhaustive output size.
///
/// The engine never consults this; the CLI does before building an
/// [`EnumerationRequest`](crate::EnumerationRequest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafetyPolicy {
    pub enabled: bool,
    /// Largest estimate accepted without downgrading.
    pub threshold: u64,
    /// Length applied when the threshold is exceeded.
    pub fallback_max_length: usize,
}

impl Default for SafetyPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: 5_000_000,
            fallback_max_length: 3,
        }
    }
}

/// Outcome of a pre-flight check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyDecision {
    /// Run as requested. `estimate` is `None` when it overflowed and the
    /// policy is disabled.
    Proceed {
        max_length: usize,
        estimate: Option<u128>,
    },
    /// Requested output too large; run with `applied` instead.
    Downgrade {
        requested: usize,
        applied: usize,
        /// `None` when the requested size overflowed.
        estimate: Option<u128>,
    },
}

impl PolicyDecision {
    pub fn max_length(&self) -> usize {
        match self {
            PolicyDecision::Proceed { max_length, .. } => *max_length,
            PolicyDecision::Downgrade { applied, .. } => *applied,
        }
    }
}

impl SafetyPolicy {
    /// Compare the enumeration size for `alphabet_size` and `max_length`
    /// against the threshold. An overflowing estimate exceeds any threshold.
    /// The fallback never raises the requested length.
    pub fn evaluate(&self, alphabet_size: usize, max_length: usize) -> Result<PolicyDecision> {
        let estimate = match estimate(alphabet_size, max_length) {
            Ok(total) => Some(total),
            Err(Error::Overflow { .. }) => None,
            Err(err) => return Err(err),
        };

        let exceeds = estimate.is_none_or(|total| total > u128::from(self.threshold));
        if !self.enabled || !exceeds {
            return Ok(PolicyDecision::Proceed {
                max_length,
                estimate,
            });
        }

        let applied = self.fallback_max_length.clamp(1, max_length);
        if applied == max_length {
            return Ok(PolicyDecision::Proceed {
                max_length,
                estimate,
            });
        }

        Ok(PolicyDecision::Downgrade {
            requested: max_length,
            applied,
            estimate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proceeds_under_threshold() {
        let policy = SafetyPolicy::default();
        let decision = policy.evaluate(88, 2).expect("valid");
        assert_eq!(
            decision,
            PolicyDecision::Proceed {
                max_length: 2,
                estimate: Some(88 + 88 * 88)
            }
        );
    }

    #[test]
    fn downgrades_over_threshold() {
        let policy = SafetyPolicy::default();
        let decision = policy.evaluate(88, 4).expect("valid");
        assert_eq!(decision.max_length(), 3);
        assert!(matches!(
            decision,
            PolicyDecision::Downgrade {
                requested: 4,
                applied: 3,
                ..
            }
        ));
    }

    #[test]
    fn overflow_counts_as_exceeding() {
        let policy = SafetyPolicy::default();
        let decision = policy.evaluate(88, 64).expect("valid");
        assert_eq!(
            decision,
            PolicyDecision::Downgrade {
                requested: 64,
                applied: 3,
                estimate: None
            }
        );
    }

    #[test]
    fn disabled_policy_never_downgrades() {
        let policy = SafetyPolicy {
            enabled: false,
            ..SafetyPolicy::default()
        };
        assert_eq!(policy.evaluate(88, 64).expect("valid").max_length(), 64);
    }

    #[test]
    fn fallback_never_raises_length() {
        let policy = SafetyPolicy {
            threshold: 10,
            fallback_max_length: 5,
            ..SafetyPolicy::default()
        };
        assert_eq!(policy.evaluate(26, 2).expect("valid").max_length(), 2);
    }
}

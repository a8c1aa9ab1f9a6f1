use std::io::Write;

use tracing::debug;
use wordforge_core::{EnumerationRequest, Error as CoreError, estimate, tier_size};

use crate::cancel::CancelToken;
use crate::errors::GenerationError;
use crate::output::LineSink;
use crate::progress::{ProgressSink, ProgressUpdate, Throttle};

use super::{WriteSummary, finish, interrupt, sink_error};

/// Write every string of length `1..=max_length` over the request charset,
/// each prefixed by the seed.
///
/// Lengths ascend; within a length the rightmost position varies fastest, so
/// output for identical requests is identical byte for byte. Progress is
/// reported at the end of every length tier and, throttled, in between.
pub fn enumerate<W, P>(
    request: &EnumerationRequest,
    sink: W,
    progress: &mut P,
    cancel: &CancelToken,
) -> Result<WriteSummary, GenerationError>
where
    W: Write,
    P: ProgressSink + ?Sized,
{
    let charset = request.charset();
    let seed = request.seed();
    let total = match estimate(charset.len(), request.max_length()) {
        Ok(total) => Some(total),
        Err(CoreError::Overflow { .. }) => None,
        Err(err) => return Err(err.into()),
    };

    let mut sink = LineSink::new(sink);
    let mut throttle = Throttle::new();
    let mut odometer = Odometer::new(charset.len());

    for length in 1..=request.max_length() {
        odometer.reset(length);
        loop {
            if cancel.is_cancelled() {
                return Err(interrupt(&mut sink));
            }

            let chars = odometer.digits().iter().map(|&idx| charset[idx]);
            sink.write_candidate(seed, chars)
                .map_err(|err| sink_error(&sink, err))?;

            if throttle.tick() {
                progress.report(&ProgressUpdate {
                    processed: sink.lines_produced(),
                    total,
                    tier: length,
                });
            }

            if !odometer.advance() {
                break;
            }
        }

        debug!(
            length,
            tier_items = ?tier_size(charset.len(), length),
            processed = sink.lines_produced(),
            "length tier completed"
        );
        progress.report(&ProgressUpdate {
            processed: sink.lines_produced(),
            total,
            tier: length,
        });
    }

    finish(sink)
}

/// Mixed-radix counter over charset indices.
struct Odometer {
    radix: usize,
    digits: Vec<usize>,
}

impl Odometer {
    fn new(radix: usize) -> Self {
        Self {
            radix,
            digits: Vec::new(),
        }
    }

    fn reset(&mut self, length: usize) {
        self.digits.clear();
        self.digits.resize(length, 0);
    }

    fn digits(&self) -> &[usize] {
        &self.digits
    }

    /// Step to the next tuple; false once every tuple has been visited.
    fn advance(&mut self) -> bool {
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < self.radix {
                return true;
            }
            *digit = 0;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::Odometer;

    #[test]
    fn odometer_counts_rightmost_first() {
        let mut odometer = Odometer::new(2);
        odometer.reset(2);
        let mut seen = vec![odometer.digits().to_vec()];
        while odometer.advance() {
            seen.push(odometer.digits().to_vec());
        }
        assert_eq!(seen, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
    }

    #[test]
    fn odometer_wraps_after_single_digit() {
        let mut odometer = Odometer::new(3);
        odometer.reset(1);
        assert!(odometer.advance());
        assert!(odometer.advance());
        assert!(!odometer.advance());
        assert_eq!(odometer.digits(), &[0]);
    }
}

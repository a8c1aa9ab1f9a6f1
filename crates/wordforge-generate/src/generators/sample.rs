use std::io::Write;

use wordforge_core::SampleRequest;

use crate::cancel::CancelToken;
use crate::errors::GenerationError;
use crate::output::LineSink;
use crate::progress::{ProgressSink, ProgressUpdate, Throttle};
use crate::rng::RandomSource;

use super::{WriteSummary, finish, interrupt, sink_error};

/// Write `count` random candidates, each the seed followed by a suffix whose
/// length is drawn from `min_length..=max_length` and whose characters are
/// drawn independently from the charset.
///
/// Duplicates are kept. For a given source state the output is fixed: the
/// length is drawn first, then one index per character, left to right.
pub fn sample<W, R, P>(
    request: &SampleRequest,
    sink: W,
    rng: &mut R,
    progress: &mut P,
    cancel: &CancelToken,
) -> Result<WriteSummary, GenerationError>
where
    W: Write,
    R: RandomSource + ?Sized,
    P: ProgressSink + ?Sized,
{
    let charset = request.charset();
    let seed = request.seed();
    let total = Some(u128::from(request.count()));

    let mut sink = LineSink::new(sink);
    let mut throttle = Throttle::new();
    let mut suffix: Vec<char> = Vec::with_capacity(request.max_length());
    let mut length = request.min_length();

    for _ in 0..request.count() {
        if cancel.is_cancelled() {
            return Err(interrupt(&mut sink));
        }

        length = rng.uniform_inclusive(request.min_length(), request.max_length());
        suffix.clear();
        for _ in 0..length {
            suffix.push(charset[rng.index(charset.len())]);
        }

        sink.write_candidate(seed, suffix.iter().copied())
            .map_err(|err| sink_error(&sink, err))?;

        if throttle.tick() {
            progress.report(&ProgressUpdate {
                processed: sink.lines_produced(),
                total,
                tier: length,
            });
        }
    }

    progress.report(&ProgressUpdate {
        processed: sink.lines_produced(),
        total,
        tier: length,
    });

    finish(sink)
}

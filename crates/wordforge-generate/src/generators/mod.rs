//! Candidate generators: exhaustive enumeration, random sampling and seed
//! variant expansion.

mod enumerate;
mod sample;
mod variants;

use std::io::Write;

use serde::Serialize;

use crate::errors::GenerationError;
use crate::output::LineSink;

pub use enumerate::enumerate;
pub use sample::sample;
pub use variants::{LEET_MAP, NUMERIC_SUFFIXES, VARIANT_SYMBOLS, expand, write_variants};

/// Totals for a completed streaming run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WriteSummary {
    pub items: u64,
    pub bytes: u64,
}

fn finish<W: Write>(mut sink: LineSink<W>) -> Result<WriteSummary, GenerationError> {
    sink.flush().map_err(|err| sink_error(&sink, err))?;
    Ok(WriteSummary {
        items: sink.lines_written(),
        bytes: sink.bytes_written(),
    })
}

/// Flush what was written and report the stop. A failed flush wins over
/// the cancellation.
fn interrupt<W: Write>(sink: &mut LineSink<W>) -> GenerationError {
    match sink.flush() {
        Ok(()) => GenerationError::Cancelled {
            written: sink.lines_written(),
        },
        Err(err) => sink_error(sink, err),
    }
}

fn sink_error<W: Write>(sink: &LineSink<W>, source: std::io::Error) -> GenerationError {
    GenerationError::Sink {
        written: sink.lines_written(),
        source,
    }
}

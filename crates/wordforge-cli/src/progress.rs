use std::io::{IsTerminal, Write};

use wordforge_generate::{ProgressSink, ProgressUpdate};

/// Single-line progress display on stderr.
///
/// Draws nothing when disabled or when stderr is not a terminal, so piped
/// runs and log captures stay clean.
pub struct StderrProgress {
    enabled: bool,
    drawn: bool,
}

impl StderrProgress {
    pub fn new(quiet: bool) -> Self {
        Self {
            enabled: !quiet && std::io::stderr().is_terminal(),
            drawn: false,
        }
    }

    /// Move past the progress line once the run is over.
    pub fn finish(&mut self) {
        if self.drawn {
            eprintln!();
            self.drawn = false;
        }
    }
}

impl ProgressSink for StderrProgress {
    fn report(&mut self, update: &ProgressUpdate) {
        if !self.enabled {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        // A broken stderr is not worth failing the run over.
        let _ = write!(stderr, "\r{}\x1b[K", render(update));
        let _ = stderr.flush();
        self.drawn = true;
    }
}

fn render(update: &ProgressUpdate) -> String {
    match update.total {
        Some(total) if total > 0 => {
            let percent = update.processed as f64 / total as f64 * 100.0;
            format!(
                "length {} | {} / {} ({percent:.1}%)",
                update.tier,
                group_digits(u128::from(update.processed)),
                group_digits(total)
            )
        }
        _ => format!(
            "length {} | {}",
            update.tier,
            group_digits(u128::from(update.processed))
        ),
    }
}

fn group_digits(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

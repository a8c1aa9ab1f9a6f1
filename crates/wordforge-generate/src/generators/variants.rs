use std::collections::BTreeSet;
use std::io::Write;

use wordforge_core::SeedVariantRequest;

use crate::errors::GenerationError;
use crate::output::LineSink;

use super::{WriteSummary, finish, sink_error};

/// Symbols used as affixes.
pub const VARIANT_SYMBOLS: [&str; 7] = ["!", "@", "#", "$", "_", "-", "."];

/// Numeric suffixes appended to every base form.
pub const NUMERIC_SUFFIXES: [&str; 7] = ["1", "12", "123", "01", "001", "2024", "2025"];

/// Leetspeak substitutions applied to the lowercase form.
pub const LEET_MAP: [(char, char); 5] = [
    ('a', '4'),
    ('e', '3'),
    ('i', '1'),
    ('o', '0'),
    ('s', '5'),
];

/// Human-style mutations of a seed word, deduplicated and sorted by code
/// point.
///
/// Base forms are the lowercase, uppercase, title-case and leetspeak
/// spellings. Each contributes itself, `base+num`, `base+sym`,
/// `base+sym+num` and `sym+base+num`, at most 113 candidates per base.
pub fn expand(request: &SeedVariantRequest) -> Vec<String> {
    let lower = request.seed().to_lowercase();
    let bases = [
        lower.clone(),
        request.seed().to_uppercase(),
        title_case(request.seed()),
        leetspeak(&lower),
    ];

    let mut variants = BTreeSet::new();
    for base in &bases {
        variants.insert(base.clone());

        for num in NUMERIC_SUFFIXES {
            variants.insert(format!("{base}{num}"));
        }

        for sym in VARIANT_SYMBOLS {
            variants.insert(format!("{base}{sym}"));
        }

        for sym in VARIANT_SYMBOLS {
            for num in NUMERIC_SUFFIXES {
                variants.insert(format!("{base}{sym}{num}"));
                variants.insert(format!("{sym}{base}{num}"));
            }
        }
    }

    variants.into_iter().collect()
}

/// Expand `request` and write the variants one per line.
pub fn write_variants<W: Write>(
    request: &SeedVariantRequest,
    sink: W,
) -> Result<WriteSummary, GenerationError> {
    let mut sink = LineSink::new(sink);
    for variant in expand(request) {
        sink.write_line(&variant)
            .map_err(|err| sink_error(&sink, err))?;
    }
    finish(sink)
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

fn leetspeak(word: &str) -> String {
    word.chars()
        .map(|ch| {
            LEET_MAP
                .iter()
                .find(|(from, _)| *from == ch)
                .map_or(ch, |(_, to)| *to)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_lowers_the_tail() {
        assert_eq!(title_case("pASSWORD"), "Password");
        assert_eq!(title_case("x"), "X");
    }

    #[test]
    fn leetspeak_substitutes_only_mapped_letters() {
        assert_eq!(leetspeak("passwordies"), "p455w0rd135");
        assert_eq!(leetspeak("xyz"), "xyz");
    }
}

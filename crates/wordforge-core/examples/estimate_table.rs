use wordforge_core::{CharsetSpec, Error, SafetyPolicy, estimate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let specs = [
        (
            "digits",
            CharsetSpec {
                upper: false,
                lower: false,
                digits: true,
                symbols: false,
            },
        ),
        (
            "lower",
            CharsetSpec {
                upper: false,
                lower: true,
                digits: false,
                symbols: false,
            },
        ),
        (
            "alnum",
            CharsetSpec {
                symbols: false,
                ..CharsetSpec::default()
            },
        ),
        ("all", CharsetSpec::default()),
    ];
    let policy = SafetyPolicy::default();
    println!("{:>6} {:>2} {:>40} policy", "class", "n", "estimate");

    for (name, spec) in specs {
        for max_length in [4, 8, 16, 32] {
            let total = match estimate(spec.len(), max_length) {
                Ok(total) => total.to_string(),
                Err(Error::Overflow { .. }) => "overflow".to_string(),
                Err(err) => return Err(err.into()),
            };
            let applied = policy.evaluate(spec.len(), max_length)?.max_length();
            println!("{name:>6} {max_length:>2} {total:>40} {applied}");
        }
    }
    Ok(())
}

use wordforge_core::SeedVariantRequest;
use wordforge_generate::expand;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Some(seed) = std::env::args().nth(1) else {
        return Err("usage: list_variants <seed>".into());
    };
    let request = SeedVariantRequest::new(&seed)?;
    for variant in expand(&request) {
        println!("{variant}");
    }
    Ok(())
}

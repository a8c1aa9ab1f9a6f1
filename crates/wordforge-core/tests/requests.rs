use wordforge_core::{
    EnumerationRequest, Error, GenerationMode, SampleRequest, SeedVariantRequest,
};

#[test]
fn enumeration_rejects_zero_length() {
    assert_eq!(
        EnumerationRequest::new("", "ab", 0),
        Err(Error::InvalidLength(0))
    );
}

#[test]
fn enumeration_rejects_empty_charset() {
    assert_eq!(
        EnumerationRequest::new("x", "", 2),
        Err(Error::EmptyAlphabet)
    );
}

#[test]
fn enumeration_keeps_charset_order() {
    let request = EnumerationRequest::new("pw", "ba", 2).expect("valid request");
    assert_eq!(request.charset(), &['b', 'a']);
    assert_eq!(request.seed(), "pw");
    assert_eq!(request.max_length(), 2);
}

#[test]
fn sample_rejects_inverted_range() {
    assert_eq!(
        SampleRequest::new("", "ab", 5, 4, 3),
        Err(Error::InvalidRange { min: 4, max: 3 })
    );
}

#[test]
fn sample_rejects_zero_min_length() {
    assert_eq!(
        SampleRequest::new("", "ab", 5, 0, 3),
        Err(Error::InvalidRange { min: 0, max: 3 })
    );
}

#[test]
fn sample_allows_zero_count() {
    let request = SampleRequest::new("", "ab", 0, 1, 1).expect("valid request");
    assert_eq!(request.count(), 0);
}

#[test]
fn variant_seed_is_trimmed() {
    let request = SeedVariantRequest::new("  cat\t").expect("valid request");
    assert_eq!(request.seed(), "cat");
}

#[test]
fn variant_seed_rejects_blank() {
    assert_eq!(SeedVariantRequest::new(""), Err(Error::EmptySeed));
    assert_eq!(SeedVariantRequest::new(" \n "), Err(Error::EmptySeed));
}

#[test]
fn mode_serializes_snake_case() {
    let json = serde_json::to_string(&GenerationMode::RandomSample).expect("serialize mode");
    assert_eq!(json, "\"random_sample\"");
    assert_eq!(GenerationMode::SeedVariants.to_string(), "seed_variants");
}

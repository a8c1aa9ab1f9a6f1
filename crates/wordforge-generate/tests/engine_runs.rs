use std::path::PathBuf;

use wordforge_core::{EnumerationRequest, GenerationMode, SampleRequest, SeedVariantRequest};
use wordforge_generate::{
    CancelToken, GenerateOptions, GenerationEngine, GenerationError, GenerationJob, NoProgress,
    Output,
};

fn temp_out_dir(label: &str) -> PathBuf {
    let name = format!("wordforge_{label}_{}", uuid::Uuid::new_v4());
    let dir = std::env::temp_dir().join(name);
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn engine_for(path: &PathBuf, rng_seed: Option<u64>) -> GenerationEngine {
    GenerationEngine::new(GenerateOptions {
        output: Output::File(path.clone()),
        rng_seed,
    })
}

#[test]
fn exhaustive_run_writes_file_and_report() {
    let dir = temp_out_dir("exhaustive");
    let path = dir.join("nested").join("words.txt");
    let request = EnumerationRequest::new("x", "ab", 2).expect("valid request");
    let job = GenerationJob::Exhaustive(request);

    let report = engine_for(&path, None)
        .run(&job, &mut NoProgress, &CancelToken::new())
        .expect("run succeeds");

    let contents = std::fs::read_to_string(&path).expect("read output");
    assert_eq!(contents, "xa\nxb\nxaa\nxab\nxba\nxbb\n");
    assert_eq!(report.mode, GenerationMode::ExhaustiveCombinations);
    assert_eq!(report.items_written, 6);
    assert_eq!(report.bytes_written, contents.len() as u64);
    assert_eq!(report.estimate, Some(6));
    assert_eq!(report.rng_seed, None);

    let report_path = dir.join("report.json");
    report.write_json(&report_path).expect("write report");
    let raw = std::fs::read_to_string(&report_path).expect("read report");
    let json: serde_json::Value = serde_json::from_str(&raw).expect("parse report");
    assert_eq!(json["mode"], "exhaustive_combinations");
    assert_eq!(json["items_written"], 6);
    assert!(json.get("rng_seed").is_none());
}

#[test]
fn random_runs_with_same_seed_match() {
    let dir = temp_out_dir("random");
    let first = dir.join("a.txt");
    let second = dir.join("b.txt");
    let request = SampleRequest::new("pw", "abc123", 50, 4, 12).expect("valid request");
    let job = GenerationJob::Random(request);

    let report_a = engine_for(&first, Some(2024))
        .run(&job, &mut NoProgress, &CancelToken::new())
        .expect("run A");
    let report_b = engine_for(&second, Some(2024))
        .run(&job, &mut NoProgress, &CancelToken::new())
        .expect("run B");

    assert_eq!(
        std::fs::read(&first).expect("read A"),
        std::fs::read(&second).expect("read B")
    );
    assert_eq!(report_a.rng_seed, Some(2024));
    assert_eq!(report_b.items_written, 50);
}

#[test]
fn random_run_records_drawn_seed() {
    let request = SampleRequest::new("", "ab", 3, 1, 2).expect("valid");
    let job = GenerationJob::Random(request);
    let engine = GenerationEngine::default();
    let mut out = Vec::new();
    let report = engine
        .run_with_writer(&job, &mut out, &mut NoProgress, &CancelToken::new())
        .expect("run succeeds");
    assert!(report.rng_seed.is_some());
    assert_eq!(report.items_written, 3);
}

#[test]
fn variants_run_writes_sorted_lines() {
    let request = SeedVariantRequest::new("cat").expect("valid seed");
    let job = GenerationJob::Variants(request);
    let mut out = Vec::new();
    let report = GenerationEngine::default()
        .run_with_writer(&job, &mut out, &mut NoProgress, &CancelToken::new())
        .expect("run succeeds");
    assert_eq!(report.items_written, 452);
    assert_eq!(report.mode, GenerationMode::SeedVariants);

    let text = String::from_utf8(out).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();
    let mut sorted = lines.clone();
    sorted.sort();
    assert_eq!(lines, sorted);
}

#[test]
fn cancelled_run_keeps_partial_file() {
    let dir = temp_out_dir("cancel");
    let path = dir.join("words.txt");
    let request = EnumerationRequest::new("", "abc", 3).expect("valid request");
    let job = GenerationJob::Exhaustive(request);
    let cancel = CancelToken::new();
    cancel.cancel();

    let err = engine_for(&path, None)
        .run(&job, &mut NoProgress, &cancel)
        .expect_err("cancelled");
    assert!(matches!(err, GenerationError::Cancelled { written: 0 }));
    assert!(path.exists());
    let contents = std::fs::read_to_string(&path).expect("read output");
    assert_eq!(contents, "");
}

use gsim_serial::{generate, generate_with, validate, BatchReport, SerialEngine};
use rand::rngs::StdRng;
use rand::SeedableRng;
use regex::Regex;

#[test]
fn test_generated_serials_round_trip() {
    for _ in 0..100 {
        let serial = generate().to_string();
        assert!(validate(&serial), "self-generated serial rejected: {}", serial);
    }
}

#[test]
fn test_generated_serials_match_format() {
    let pattern = Regex::new(r"^GSIM-[0-9A-F]{4}-[0-9A-F]{4}-[0-9A-F]{4}$").unwrap();

    for _ in 0..100 {
        let serial = generate().to_string();
        assert_eq!(serial.len(), 19);
        assert!(pattern.is_match(&serial), "bad format: {}", serial);
    }
}

#[test]
fn test_seeded_rng_is_deterministic() {
    let mut first = StdRng::seed_from_u64(42);
    let mut second = StdRng::seed_from_u64(42);

    for _ in 0..20 {
        assert_eq!(
            generate_with(&mut first).to_string(),
            generate_with(&mut second).to_string()
        );
    }
}

#[test]
fn test_engine_reports_requested_count() {
    let mut engine = SerialEngine::new(StdRng::seed_from_u64(7));
    let report = engine.run(25).unwrap();

    assert_eq!(report.reports.len(), 25);
    assert!(report.all_valid);
    assert!(report.reports.iter().all(|r| r.valid));
}

#[test]
fn test_engine_with_same_seed_produces_same_batch() {
    let mut first = SerialEngine::new(StdRng::seed_from_u64(1234));
    let mut second = SerialEngine::new(StdRng::seed_from_u64(1234));

    let serials = |report: BatchReport| -> Vec<String> {
        report.reports.into_iter().map(|r| r.serial).collect()
    };

    assert_eq!(
        serials(first.run(10).unwrap()),
        serials(second.run(10).unwrap())
    );
}

#[test]
fn test_batch_report_serializes_to_json() {
    let mut engine = SerialEngine::new(StdRng::seed_from_u64(99));
    let report = engine.run(3).unwrap();

    let json = serde_json::to_string_pretty(&report).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed["reports"].as_array().unwrap().len(), 3);
    assert_eq!(parsed["all_valid"], serde_json::Value::Bool(true));

    for entry in parsed["reports"].as_array().unwrap() {
        let serial = entry["serial"].as_str().unwrap();
        assert!(validate(serial));
        assert_eq!(entry["valid"], serde_json::Value::Bool(true));
    }
}

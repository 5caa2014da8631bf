use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn sathi_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("sathi");
    path
}

/// Temp dir with a config that serves the built-in sample catalog.
fn setup_test_env() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let config_dir = tmp.path().join("config");
    fs::create_dir_all(&config_dir).unwrap();

    let config_path = config_dir.join("sathi.toml");
    fs::write(
        &config_path,
        r#"[server]
bind = "127.0.0.1:7341"

[logging]
filter = "healthsathi=warn"
"#,
    )
    .unwrap();

    (tmp, config_path)
}

/// Temp dir with a config pointing at a small custom catalog.
fn setup_custom_catalog() -> (TempDir, PathBuf) {
    let (tmp, config_path) = setup_test_env();
    let catalog_path = tmp.path().join("catalog.json");
    fs::write(
        &catalog_path,
        r#"{
  "doctors": [
    {"id": "a", "name": "Dr. Kavya Rao", "specialty": "Cardiology",
     "languages": ["Kannada", "English"], "consultation_fee": "150"},
    {"id": "b", "name": "Dr. Arjun Das", "specialty": "Neurology",
     "languages": ["Odia"], "consultation_fee": "free"}
  ]
}"#,
    )
    .unwrap();

    fs::write(
        &config_path,
        format!("[catalog]\npath = \"{}\"\n", catalog_path.display()),
    )
    .unwrap();

    (tmp, config_path)
}

fn run_sathi(config_path: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = sathi_binary();
    let output = Command::new(&binary)
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|e| panic!("Failed to run sathi binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();
    (stdout, stderr, success)
}

fn run_json(config_path: &Path, args: &[&str]) -> Value {
    let mut full = args.to_vec();
    full.push("--json");
    let (stdout, stderr, success) = run_sathi(config_path, &full);
    assert!(success, "{:?} failed: stdout={}, stderr={}", args, stdout, stderr);
    serde_json::from_str(&stdout)
        .unwrap_or_else(|e| panic!("stdout is not JSON ({}): {}", e, stdout))
}

fn names(v: &Value) -> Vec<&str> {
    v.as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect()
}

#[test]
fn test_doctors_by_specialty() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_sathi(&config_path, &["doctors", "--specialty", "cardiology"]);
    assert!(success, "doctors failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("1. Dr. Amit Kumar"));
    assert!(stdout.contains("fee: ₹400"));
    assert!(!stdout.contains("\n2. "));
}

#[test]
fn test_doctors_low_price_json() {
    let (_tmp, config_path) = setup_test_env();

    let v = run_json(&config_path, &["doctors", "--price", "low"]);
    assert_eq!(names(&v), vec!["Dr. Rajesh Sharma", "Dr. Sunita Singh"]);
    assert!(v
        .as_array()
        .unwrap()
        .iter()
        .all(|d| d["consultation_fee"].as_f64().unwrap() <= 200.0));
}

#[test]
fn test_doctors_all_filters_inactive() {
    let (_tmp, config_path) = setup_test_env();

    let v = run_json(
        &config_path,
        &["doctors", "--specialty", "all", "--language", "ALL", "--price", "all"],
    );
    assert_eq!(v.as_array().unwrap().len(), 6);
}

#[test]
fn test_doctors_combined_is_intersection() {
    let (_tmp, config_path) = setup_test_env();

    let v = run_json(
        &config_path,
        &["doctors", "--specialty", "general", "--language", "hindi"],
    );
    assert_eq!(names(&v), vec!["Dr. Rajesh Sharma", "Dr. Lakshmi Iyer"]);
}

#[test]
fn test_doctors_search_case_insensitive() {
    let (_tmp, config_path) = setup_test_env();

    let upper = run_json(&config_path, &["doctors", "RAJESH"]);
    let lower = run_json(&config_path, &["doctors", "rajesh"]);
    assert_eq!(upper, lower);
    assert_eq!(names(&upper), vec!["Dr. Rajesh Sharma"]);
}

#[test]
fn test_no_results_message() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_sathi(&config_path, &["doctors", "zzzz"]);
    assert!(success);
    assert!(stdout.contains("No results."));
}

#[test]
fn test_unknown_specialty_fails() {
    let (_tmp, config_path) = setup_test_env();

    let (_, stderr, success) = run_sathi(&config_path, &["doctors", "--specialty", "dermatology"]);
    assert!(!success);
    assert!(stderr.contains("dermatology"), "stderr={}", stderr);
}

#[test]
fn test_articles_in_hindi() {
    let (_tmp, config_path) = setup_test_env();

    let v = run_json(&config_path, &["articles", "--language", "hindi"]);
    let ids: Vec<&str> = v
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["2", "4", "6"]);
}

#[test]
fn test_videos_and_records() {
    let (_tmp, config_path) = setup_test_env();

    let v = run_json(&config_path, &["videos", "first aid"]);
    assert_eq!(v.as_array().unwrap().len(), 1);

    let v = run_json(&config_path, &["records", "--type", "lab_report"]);
    let records = v.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["type"], "lab_report");

    let (stdout, _, success) = run_sathi(&config_path, &["records", "amit"]);
    assert!(success);
    assert!(stdout.contains("Dr. Amit Kumar"));
}

#[test]
fn test_symptom_lookup() {
    let (_tmp, config_path) = setup_test_env();

    let v = run_json(&config_path, &["symptoms", "pain"]);
    assert_eq!(names(&v), vec!["Chest Pain", "Stomach Pain"]);
}

#[test]
fn test_assess_high_risk() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_sathi(
        &config_path,
        &["assess", "--age", "60", "--gender", "male", "Fever", "chest pain"],
    );
    assert!(success, "assess failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("Severity: high"));
    assert!(stdout.contains("Seek immediate medical attention"));
    assert!(stdout.contains("Please seek medical care."));
}

#[test]
fn test_assess_needs_profile_and_symptoms() {
    let (_tmp, config_path) = setup_test_env();

    let (_, stderr, success) = run_sathi(&config_path, &["assess", "Fever"]);
    assert!(!success);
    assert!(stderr.contains("age"), "stderr={}", stderr);

    let (_, stderr, success) = run_sathi(&config_path, &["assess", "--age", "30", "--gender", "female"]);
    assert!(!success);
    assert!(stderr.contains("at least one symptom"), "stderr={}", stderr);

    let (_, stderr, success) = run_sathi(
        &config_path,
        &["assess", "--age", "30", "--gender", "female", "Hiccups"],
    );
    assert!(!success);
    assert!(stderr.contains("unknown symptom"), "stderr={}", stderr);
}

#[test]
fn test_emergency_listing() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_sathi(&config_path, &["emergency"]);
    assert!(success);
    assert!(stdout.contains("108"));
    let phc = stdout.find("Primary Health Center").unwrap();
    let city = stdout.find("City Medical Center").unwrap();
    assert!(phc < city, "hospitals should be nearest first");

    let v = run_json(&config_path, &["emergency", "--facility", "cardiac"]);
    assert_eq!(names(&v["hospitals"]), vec!["City Medical Center"]);
}

#[test]
fn test_bmi() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_sathi(&config_path, &["bmi", "--weight", "70", "--height", "170"]);
    assert!(success);
    assert!(stdout.contains("BMI 24.2"));

    let (_, stderr, success) = run_sathi(&config_path, &["bmi", "--weight", "70", "--height", "0"]);
    assert!(!success);
    assert!(stderr.contains("height"));
}

#[test]
fn test_bmi_skips_config() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("sathi.toml");
    fs::write(&config_path, "[server]\nbind = \"not an address\"\n").unwrap();

    let (stdout, stderr, success) =
        run_sathi(&config_path, &["bmi", "--weight", "70", "--height", "170"]);
    assert!(success, "bmi failed: stderr={}", stderr);
    assert!(stdout.contains("BMI 24.2"));
}

#[test]
fn test_missing_config_uses_sample_catalog() {
    let tmp = TempDir::new().unwrap();
    let absent = tmp.path().join("absent.toml");

    let v = run_json(&absent, &["catalog"]);
    assert_eq!(v["source"], "built-in sample");
    assert_eq!(v["counts"]["doctors"], 6);
    assert_eq!(v["counts"]["symptoms"], 12);
}

#[test]
fn test_invalid_config_fails() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("sathi.toml");
    fs::write(&config_path, "[server]\nbind = \"not an address\"\n").unwrap();

    let (_, stderr, success) = run_sathi(&config_path, &["doctors"]);
    assert!(!success);
    assert!(stderr.contains("server.bind"), "stderr={}", stderr);
}

#[test]
fn test_custom_catalog() {
    let (_tmp, config_path) = setup_custom_catalog();

    let v = run_json(&config_path, &["doctors"]);
    assert_eq!(names(&v), vec!["Dr. Kavya Rao", "Dr. Arjun Das"]);

    // numeric strings are read as fees; unusable fees match no bracket
    let v = run_json(&config_path, &["doctors", "--price", "low"]);
    assert_eq!(names(&v), vec!["Dr. Kavya Rao"]);
    for bracket in ["medium", "high"] {
        let v = run_json(&config_path, &["doctors", "--price", bracket]);
        assert!(v.as_array().unwrap().is_empty());
    }

    let v = run_json(&config_path, &["doctors", "--language", "odia"]);
    assert_eq!(names(&v), vec!["Dr. Arjun Das"]);

    let v = run_json(&config_path, &["articles"]);
    assert!(v.as_array().unwrap().is_empty());
}

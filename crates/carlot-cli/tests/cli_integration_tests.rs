//! CLI integration tests
//!
//! Drive the built binary against the embedded inventory and temp-dir seeds.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const SMALL_SEED: &str = r#"
schema_version: 0
brands:
  - id: b1
    title: Toyota
  - id: b2
    title: Honda
models:
  - id: m1
    brandId: b1
    title: Corolla
  - id: m2
    brandId: b2
    title: Civic
vehicles:
  - id: v1
    modelId: m1
    price: 20000
    year: 2020
  - id: v2
    modelId: m2
    price: 18000
    year: 2019
"#;

fn write_seed(temp_dir: &TempDir) -> PathBuf {
    let path = temp_dir.path().join("seed.yaml");
    fs::write(&path, SMALL_SEED).unwrap();
    path
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_carlot-cli"))
        .current_dir(dir)
        .env("RUST_LOG", "off")
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_list_uses_embedded_inventory_without_seed() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(temp_dir.path(), &["list"]);

    assert!(output.status.success(), "Stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.starts_with("## List of vehicles"));
    assert!(out.contains("| Identification | Brand | Model | Price | Year |"));
    assert!(out.contains("Corolla"));
}

#[test]
fn test_list_filters_by_brand() {
    let temp_dir = TempDir::new().unwrap();
    let seed = write_seed(&temp_dir);

    let output = run(
        temp_dir.path(),
        &["list", "--seed", seed.to_str().unwrap(), "--brand", "b2"],
    );

    assert!(output.status.success(), "Stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("## Honda brand vehicles"));
    assert!(out.contains("| v2 | Honda | Civic | 18000 | 2019 |"));
    assert!(!out.contains("Corolla"));
}

#[test]
fn test_list_all_brands_sentinel() {
    let temp_dir = TempDir::new().unwrap();
    let seed = write_seed(&temp_dir);

    let output = run(
        temp_dir.path(),
        &["list", "--seed", seed.to_str().unwrap(), "--brand", "0"],
    );

    assert!(output.status.success(), "Stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("## List of vehicles"));
    assert!(out.contains("Corolla"));
    assert!(out.contains("Civic"));
}

#[test]
fn test_list_unknown_brand_fails() {
    let temp_dir = TempDir::new().unwrap();
    let seed = write_seed(&temp_dir);

    let output = run(
        temp_dir.path(),
        &["list", "--seed", seed.to_str().unwrap(), "--brand", "b9"],
    );

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("Error:"));
    assert!(err.contains("Selected brand does not exist"));
}

#[test]
fn test_list_json_format() {
    let temp_dir = TempDir::new().unwrap();
    let seed = write_seed(&temp_dir);

    let output = run(
        temp_dir.path(),
        &["list", "--seed", seed.to_str().unwrap(), "--format", "json"],
    );

    assert!(output.status.success(), "Stderr: {}", stderr(&output));
    let view: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(view["title"], "List of vehicles");
    assert_eq!(view["rows"].as_array().map(Vec::len), Some(2));
    assert_eq!(view["rows"][0]["brand"], "Toyota");
}

#[test]
fn test_list_writes_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let seed = write_seed(&temp_dir);
    let out_path = temp_dir.path().join("inventory.md");

    let output = run(
        temp_dir.path(),
        &[
            "list",
            "--seed",
            seed.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ],
    );

    assert!(output.status.success(), "Stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("✓ Rendered to"));
    let written = fs::read_to_string(&out_path).unwrap();
    assert!(written.contains("| v1 | Toyota | Corolla | 20000 | 2020 |"));
}

#[test]
fn test_brands_lists_all_option_first() {
    let temp_dir = TempDir::new().unwrap();
    let seed = write_seed(&temp_dir);

    let output = run(temp_dir.path(), &["brands", "--seed", seed.to_str().unwrap()]);

    assert!(output.status.success(), "Stderr: {}", stderr(&output));
    let lines: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(lines, vec!["- `0` All brands", "- `b1` Toyota", "- `b2` Honda"]);
}

#[test]
fn test_apply_script_continues_past_failures() {
    let temp_dir = TempDir::new().unwrap();
    let seed = write_seed(&temp_dir);
    let script = temp_dir.path().join("script.yaml");
    fs::write(
        &script,
        r#"
- op: vehicle_add
  brandId: b1
  modelId: m1
  price: 15000
  year: 2018
- op: vehicle_update
  vehicleId: v2
  brandId: b2
  modelId: m9
  price: 1
  year: 2000
- op: vehicle_update
  vehicleId: v2
  brandId: b2
  modelId: m2
  price: 17000
  year: 2019
- op: vehicle_delete
  vehicleId: v1
- op: vehicle_delete
  vehicleId: v1
"#,
    )
    .unwrap();

    let output = run(
        temp_dir.path(),
        &[
            "apply",
            script.to_str().unwrap(),
            "--seed",
            seed.to_str().unwrap(),
        ],
    );

    assert!(output.status.success(), "Stderr: {}", stderr(&output));
    let out = stdout(&output);

    assert!(out.contains("✓ Added vehicle"));
    assert!(out.contains("✗ vehicle_update: Model not found: m9"));
    assert!(out.contains("✓ Updated vehicle v2"));
    assert!(out.contains("✓ Deleted vehicle v1"));
    assert!(out.contains("✓ No vehicle v1 to delete"));
    assert!(out.contains("1 command(s) failed"));

    assert!(out.contains("| v2 | Honda | Civic | 17000 | 2019 |"));
    assert!(!out.contains("| v1 |"));
    assert!(out.contains("| Toyota | Corolla | 15000 | 2018 |"));
}

#[test]
fn test_apply_rejects_malformed_script() {
    let temp_dir = TempDir::new().unwrap();
    let script = temp_dir.path().join("bad.yaml");
    fs::write(&script, "- op: vehicle_paint\n  vehicleId: v1\n").unwrap();

    let output = run(temp_dir.path(), &["apply", script.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Error:"));
}

#[test]
fn test_bad_seed_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let seed = temp_dir.path().join("seed.yaml");
    fs::write(&seed, "schema_version: 3\n").unwrap();

    let output = run(temp_dir.path(), &["list", "--seed", seed.to_str().unwrap()]);

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("Error:"));
    assert!(err.contains("schema_version"));
}

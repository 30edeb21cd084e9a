//! Subcommand tests against a temporary output directory

use benchgen_cli::{cli, dispatch};
use pretty_assertions::assert_eq;
use std::path::Path;

fn run(args: &[&str]) -> (bool, String) {
    let matches = cli().try_get_matches_from(args).unwrap();
    let mut out = Vec::new();
    let passed = dispatch(&matches, &mut out).unwrap();
    (passed, String::from_utf8(out).unwrap())
}

fn files_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn generate_writes_filtered_variants_and_report() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("generated");
    let report = dir.path().join("report.json");

    let (passed, stdout) = run(&[
        "benchgen",
        "generate",
        "--output",
        out.to_str().unwrap(),
        "--filter",
        "^List_Controlled_Def_.*_Integer$",
        "--report",
        report.to_str().unwrap(),
    ]);
    assert!(passed);
    assert!(stdout.starts_with("2 variants: 2 written, 0 unchanged, 0 failed"));
    assert_eq!(
        files_in(&out),
        [
            "list_controlled_def_bounded_integer.adb",
            "list_controlled_def_bounded_integer.ads",
            "list_controlled_def_unbounded_integer.adb",
            "list_controlled_def_unbounded_integer.ads",
        ]
    );

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(report).unwrap()).unwrap();
    assert_eq!(value["variants"].as_array().unwrap().len(), 2);
    assert_eq!(value["failures"].as_array().unwrap().len(), 0);
}

#[test]
fn second_generate_leaves_files_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().to_str().unwrap().to_string();
    let args = ["benchgen", "generate", "--output", &out, "--filter", "StrStr$"];

    run(&args);
    let (passed, stdout) = run(&args);
    assert!(passed);
    assert!(stdout.starts_with("4 variants: 0 written, 4 unchanged"));
}

#[test]
fn configuration_file_sets_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("from-config");
    let config = dir.path().join("benchgen.toml");
    std::fs::write(
        &config,
        format!("output-dir = {:?}\nwrite-mode = \"always\"\n", out.to_str().unwrap()),
    )
    .unwrap();

    let (passed, _) = run(&[
        "benchgen",
        "--config",
        config.to_str().unwrap(),
        "generate",
        "--filter",
        "^Vector_Ada12_Def_Bounded_Integer$",
    ]);
    assert!(passed);
    assert!(out.join("vector_ada12_def_bounded_integer.adb").exists());
}

#[test]
fn invalid_configuration_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("bad.toml");
    std::fs::write(&config, "failure-policy = \"sometimes\"\n").unwrap();

    let matches = cli()
        .try_get_matches_from(["benchgen", "check", "--config", config.to_str().unwrap()])
        .unwrap();
    let err = dispatch(&matches, &mut Vec::new()).unwrap_err();
    assert!(format!("{err:#}").contains("loading configuration"));
}

#[test]
fn list_json_includes_every_variant() {
    let (passed, stdout) = run(&["benchgen", "list", "--json"]);
    assert!(passed);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 34);
    assert_eq!(entries[0]["id"], "List_Ada12_Def_Bounded_Integer");
    assert_eq!(entries[0]["stem"], "list_ada12_def_bounded_integer");
    assert_eq!(
        entries[0]["steps"],
        serde_json::json!(["fill", "copy", "cursor loop", "for-of loop", "count_if"])
    );
}

#[test]
fn list_marks_favorites() {
    let (_, stdout) = run(&["benchgen", "list"]);
    let favorite = stdout
        .lines()
        .find(|line| line.contains("List_Ada12_No_Checks_Def_Unbounded_Integer"))
        .unwrap();
    assert!(favorite.starts_with('*'));
    assert_eq!(stdout.lines().count(), 34);
}

#[test]
fn check_passes_on_default_catalog() {
    let (passed, stdout) = run(&["benchgen", "check"]);
    assert!(passed);
    assert!(stdout.contains("34 variants checked, 68 files rendered, 0 failed"));
}

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::PathBuf;
use std::process::Command;

fn bin() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("errorsig"))
}

fn fixture(name: &str) -> PathBuf {
    let mut p = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.push("../fixtures/evm");
    p.push(name);
    p
}

#[test]
fn resolve_project_error_from_candidate_file() {
    let mut cmd = bin();
    cmd.arg("resolve")
        .arg("0x025dbdd4")
        .arg("-c")
        .arg(fixture("yield-optimizer-errors.json"));
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Decoded Selector: 0x025dbdd4"))
        .stdout(predicate::str::contains("Corresponding Error: InsufficientFee()"));
}

#[test]
fn resolve_standard_error_with_hint() {
    let mut cmd = bin();
    cmd.args(["resolve", "118CDAA7"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Corresponding Error: OwnableUnauthorizedAccount(address)",
        ))
        .stdout(predicate::str::contains("Hint:"));
}

#[test]
fn resolve_unknown_selector_still_succeeds() {
    let mut cmd = bin();
    cmd.args(["resolve", "0x025dbdd4"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Selector: 0x025dbdd4 - unknown"));
}

#[test]
fn resolve_malformed_input_warns_and_succeeds() {
    let mut cmd = bin();
    cmd.args(["resolve", "0x08c379a0deadbeef"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Revert data '0x08c379a0deadbeef' is not a 4-byte selector",
        ))
        .stderr(predicate::str::contains("WARN"));
}

#[test]
fn resolve_json_output_in_input_order() {
    let mut cmd = bin();
    cmd.args(["resolve", "0x789ed35c", "0xdeadbeef", "0x12", "--json", "-c"])
        .arg(fixture("optimizer-core-errors.json"));
    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let results: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["outcome"], "matched");
    assert_eq!(results[0]["signature"], "UnsupportedDepositToken()");
    assert_eq!(results[1]["outcome"], "unknown");
    assert_eq!(results[1]["selector"], "0xdeadbeef");
    assert_eq!(results[2]["outcome"], "malformed");
}

#[test]
fn no_standard_without_files_is_an_error() {
    let mut cmd = bin();
    cmd.args(["resolve", "0x025dbdd4", "--no-standard"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("candidate set is empty"));
}

#[test]
fn missing_candidate_file_is_an_error() {
    let mut cmd = bin();
    cmd.args(["resolve", "0x025dbdd4", "-c", "/no/such/errors.json"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("loading candidates from"));
}

#[test]
fn invalid_candidate_entry_reports_index() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, r#"["ZeroAmount()", "NotASignature"]"#).unwrap();

    let mut cmd = bin();
    cmd.args(["table", "--no-standard", "-c"]).arg(&path);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid candidate at index 1"));
}

#[test]
fn table_lists_selectors() {
    let mut cmd = bin();
    cmd.args(["table", "--no-standard", "-c"])
        .arg(fixture("optimizer-core-errors.json"));
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--- Error Selectors (20) ---"))
        .stdout(predicate::str::contains("UnsupportedDepositToken(): 0x789ed35c"))
        .stdout(predicate::str::contains("ZeroAmount(): 0x1f2a2005"));
}

#[test]
fn hash_canonicalises_declaration() {
    let mut cmd = bin();
    cmd.args(["hash", "error OwnableUnauthorizedAccount(address owner)"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Signature: OwnableUnauthorizedAccount(address)"))
        .stdout(predicate::str::contains("Selector:  0x118cdaa7"));
}

#[test]
fn hash_json() {
    let mut cmd = bin();
    cmd.args(["hash", "InvalidReceiver()", "--json"]);
    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let out: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(out["selector"], "0x1e4ec46b");
    assert!(out["keccak256"].as_str().unwrap().starts_with("0x1e4ec46b"));
}

#[test]
fn hash_rejects_garbage() {
    let mut cmd = bin();
    cmd.args(["hash", "not a signature"]);
    cmd.assert().failure();
}

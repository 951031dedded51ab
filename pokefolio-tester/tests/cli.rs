use std::path::{Path, PathBuf};
use std::process::Command;

fn temp_path(label: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "pokefolio-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

fn shipped_pack() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../pokefolio-web/static/assets/data")
}

#[test]
fn shipped_pack_passes_strict_json_report() {
    let exe = env!("CARGO_BIN_EXE_pokefolio-tester");
    let output_path = temp_path("shipped");
    let status = Command::new(exe)
        .arg("--data-dir")
        .arg(shipped_pack())
        .args(["--report", "json", "--strict", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());

    let content = std::fs::read_to_string(&output_path).expect("read output");
    let report: serde_json::Value = serde_json::from_str(&content).expect("json report");
    assert_eq!(report["options_checked"], 4);
    assert_eq!(report["findings"], serde_json::json!([]));
}

#[test]
fn broken_pack_fails_with_markdown_findings() {
    let exe = env!("CARGO_BIN_EXE_pokefolio-tester");
    let pack = temp_path("broken");
    std::fs::create_dir_all(&pack).expect("create pack dir");
    std::fs::write(
        pack.join("site-config.json"),
        r#"{
            "pageTitle": "T",
            "trainerName": "JAY",
            "emailConfig": {"serviceId": "s", "templateId": "t", "publicKey": "k"},
            "battleOptions": [
                {"id": "bag", "label": "BAG", "route": "/bag", "component": "bag", "configFile": "projects.json"}
            ]
        }"#,
    )
    .expect("write site config");

    let output_path = temp_path("broken-report");
    let status = Command::new(exe)
        .arg("--data-dir")
        .arg(&pack)
        .args(["--report", "markdown", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(!status.success());

    let content = std::fs::read_to_string(&output_path).expect("read output");
    assert!(content.contains("# Pokefolio Config Pack Report"));
    assert!(content.contains("| error | bag (projects.json) |"));
    let _ = std::fs::remove_dir_all(pack);
}

#[test]
fn unknown_component_kind_is_reported() {
    let exe = env!("CARGO_BIN_EXE_pokefolio-tester");
    let pack = temp_path("kind");
    std::fs::create_dir_all(&pack).expect("create pack dir");
    std::fs::write(
        pack.join("site-config.json"),
        r#"{
            "pageTitle": "T",
            "trainerName": "JAY",
            "emailConfig": {"serviceId": "s", "templateId": "t", "publicKey": "k"},
            "battleOptions": [
                {"id": "map", "label": "MAP", "route": "/map", "component": "town-map", "configFile": "map.json"}
            ]
        }"#,
    )
    .expect("write site config");

    let output = Command::new(exe)
        .arg("--data-dir")
        .arg(&pack)
        .args(["--report", "json"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json report");
    assert_eq!(report["options_checked"], 0);
    assert_eq!(report["findings"][0]["severity"], "error");
    assert_eq!(report["findings"][0]["file"], "site-config.json");
    let _ = std::fs::remove_dir_all(pack);
}

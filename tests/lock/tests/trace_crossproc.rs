//! Cross-process determinism: the `trace_fixture` binary produces the same
//! lines regardless of cwd, locale, or unrelated environment variables, and
//! those lines match the checked-in golden fixture.

use std::path::{Path, PathBuf};
use std::process::Command;

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_path_buf()
}

/// `cargo test` places test binaries in `target/<profile>/deps/`; the
/// `trace_fixture` binary sits one level up.
fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("trace_fixture");
    path.to_string_lossy().to_string()
}

fn run_variant(target: i64, work_dir: &Path, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();
    let mut command = Command::new(&bin);
    command
        .arg(target.to_string())
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={}, overrides={env_overrides:?}): {e}", work_dir.display())
    });
    assert!(
        output.status.success(),
        "trace_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

fn expected_lines(target: i64) -> String {
    let text = std::fs::read_to_string(workspace_root().join("tests/fixtures/demo_trace_golden.json"))
        .expect("golden fixture exists");
    let golden: serde_json::Value = serde_json::from_str(&text).expect("golden fixture is JSON");
    let entry = &golden["targets"][target.to_string()];
    format!(
        "found_index={}\ntotal_steps={}\nprobes={}\ntrace_digest={}\nreport_digest={}\n",
        entry["found_index"].as_str().unwrap(),
        entry["total_steps"].as_u64().unwrap(),
        entry["probes"].as_str().unwrap(),
        entry["trace_digest"].as_str().unwrap(),
        entry["report_digest"].as_str().unwrap(),
    )
}

fn assert_variants_agree(target: i64) {
    let root = workspace_root();
    let tmp = std::env::temp_dir();

    let baseline = run_variant(target, &root, &[]);
    let other_cwd = run_variant(target, &tmp, &[]);
    let c_locale = run_variant(target, &root, &[("LC_ALL", "C"), ("LANG", "C")]);
    let noisy = run_variant(
        target,
        &root,
        &[
            ("BISECT_NOISE", "1"),
            ("RUST_LOG", "trace"),
            ("LC_ALL", "en_US.UTF-8"),
            ("TZ", "Pacific/Kiritimati"),
        ],
    );

    assert_eq!(baseline, other_cwd, "output depends on cwd");
    assert_eq!(baseline, c_locale, "output depends on locale");
    assert_eq!(baseline, noisy, "output depends on unrelated env");
    assert_eq!(baseline, expected_lines(target), "output drifted from golden fixture");
}

#[test]
fn crossproc_found_target_matches_golden() {
    assert_variants_agree(15);
}

#[test]
fn crossproc_missing_target_matches_golden() {
    assert_variants_agree(1);
}

//! Core purity: the kernel and search crates stay free of I/O, logging,
//! randomness, and wall-clock reads. Those belong to the harness and CLI.

use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Forbidden patterns in non-comment Rust source lines.
const FORBIDDEN_PATTERNS: &[&str] = &[
    "println!",
    "eprintln!",
    "print!",
    "dbg!",
    "tracing::",
    "rand::",
    "thread_rng",
    "std::time",
    "std::env",
    "std::fs",
    "std::io",
];

fn walk(dir: &Path, violations: &mut Vec<(String, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, violations);
        } else if path.extension().is_some_and(|e| e == "rs") {
            check_file(&path, violations);
        }
    }
}

fn check_file(path: &Path, violations: &mut Vec<(String, usize, String)>) {
    let Ok(content) = fs::read_to_string(path) else {
        return;
    };
    for (line_no, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*') {
            continue;
        }
        for pattern in FORBIDDEN_PATTERNS {
            if trimmed.contains(pattern) {
                violations.push((path.display().to_string(), line_no + 1, line.to_string()));
            }
        }
    }
}

fn workspace_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
}

fn assert_clean(crate_dir: &str) {
    let src = workspace_root().join(crate_dir).join("src");
    assert!(src.is_dir(), "{} must exist", src.display());

    let mut violations = Vec::new();
    walk(&src, &mut violations);
    if !violations.is_empty() {
        let mut msg = format!("{crate_dir} contains impure references:\n");
        for (file, line, text) in &violations {
            writeln!(msg, "  {file}:{line}: {text}").unwrap();
        }
        panic!("{msg}");
    }
}

#[test]
fn kernel_is_pure() {
    assert_clean("kernel");
}

#[test]
fn search_is_pure() {
    assert_clean("search");
}

#[test]
fn core_manifests_have_no_side_effect_deps() {
    for crate_dir in ["kernel", "search"] {
        let manifest = fs::read_to_string(workspace_root().join(crate_dir).join("Cargo.toml"))
            .expect("manifest readable");
        for dep in ["tracing", "rand", "clap", "anyhow"] {
            assert!(
                !manifest.lines().any(|l| l.trim_start().starts_with(dep)),
                "{crate_dir}/Cargo.toml must not depend on {dep}"
            );
        }
    }
}

//! Purpose: Enforce deterministic temp file cleanup patterns in tests.
//!
//! Ensures all temp file creation uses the tempfile crate's RAII types
//! rather than std::env::temp_dir() with manual cleanup.
//!
//! Non-scope: This test does not verify runtime behavior; it only checks
//! source code patterns. Files are analyzed statically.
//!
//! Invariants:
//! - Test code uses the tempfile crate for temp file management
//! - No hardcoded /tmp paths in tests
//! - tempfile handles are bound to a named variable so they live until the test ends

use std::fs;
use std::path::{Path, PathBuf};

/// Skipped: this file names the patterns it searches for.
const SELF_FILE: &str = "temp_file_hygiene_tests.rs";

/// Walk up from the package directory to the workspace root.
fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .ancestors()
        .find(|dir| {
            fs::read_to_string(dir.join("Cargo.toml"))
                .map(|content| content.contains("[workspace]"))
                .unwrap_or(false)
        })
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

/// Every Rust source under `crates/` that contains at least one test.
fn test_sources() -> Vec<(PathBuf, String)> {
    walkdir::WalkDir::new(workspace_root().join("crates"))
        .into_iter()
        .filter_entry(|e| e.file_name() != std::ffi::OsStr::new("target"))
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .filter(|e| !e.path().ends_with(SELF_FILE))
        .filter_map(|e| {
            let content = fs::read_to_string(e.path()).ok()?;
            content
                .contains("#[test]")
                .then(|| (e.path().to_path_buf(), content))
        })
        .collect()
}

#[test]
fn test_sources_are_found() {
    assert!(
        !test_sources().is_empty(),
        "no test sources found under {}",
        workspace_root().join("crates").display()
    );
}

#[test]
fn test_no_manual_temp_dir_usage() {
    let mut violations: Vec<String> = Vec::new();

    for (path, content) in test_sources() {
        if content.contains("std::env::temp_dir()") {
            violations.push(format!(
                "{}: uses std::env::temp_dir() - prefer tempfile::tempdir() for RAII cleanup",
                path.display()
            ));
        }

        if content.contains("\"/tmp") {
            violations.push(format!(
                "{}: contains hardcoded /tmp path - prefer tempfile crate",
                path.display()
            ));
        }

        if content.contains("std::fs::remove_file") && !content.contains("tempfile") {
            violations.push(format!(
                "{}: uses std::fs::remove_file without tempfile - prefer NamedTempFile for automatic cleanup",
                path.display()
            ));
        }
    }

    assert!(
        violations.is_empty(),
        "Found manual temp file patterns (not panic-safe):\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_tempfile_bindings_retained() {
    let mut violations: Vec<String> = Vec::new();

    for (path, content) in test_sources() {
        for (i, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.starts_with("//") {
                continue;
            }

            // `let _ =` drops the guard immediately and deletes the file
            let dropped = trimmed.starts_with("let _ = tempfile::")
                || trimmed.starts_with("let _ = TempDir::new")
                || trimmed.starts_with("let _ = NamedTempFile");

            let unbound = (trimmed.starts_with("tempfile::") || trimmed.starts_with("TempDir::new"))
                && trimmed.ends_with(';');

            if dropped || unbound {
                violations.push(format!(
                    "{}:{}: tempfile handle not retained - bind it to a named variable",
                    path.display(),
                    i + 1
                ));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Found tempfile instances not properly retained:\n{}",
        violations.join("\n")
    );
}

//! Hygiene checks over the client source tree.
//!
//! Each antipattern has a budget. The budget only ever goes down: adding a
//! hit means removing another first.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

// Panics take down the whole wasm instance.
const MAX_UNWRAP: usize = 0;
const MAX_EXPECT: usize = 0;
const MAX_PANIC: usize = 0;
const MAX_TODO: usize = 0;

// `let _ =` is only allowed for the off-browser stubs and the console logger init.
const MAX_SILENT_DISCARD: usize = 4;
// `.ok()` is only allowed where `None` is the documented result.
const MAX_DOT_OK: usize = 2;

const MAX_ALLOW_DEAD_CODE: usize = 0;

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits(pattern: &str) -> (usize, String) {
    let found: Vec<(String, usize)> = source_files()
        .into_iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then_some((file.path, count))
        })
        .collect();
    let total = found.iter().map(|(_, c)| c).sum();
    let listing = found
        .iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");
    (total, listing)
}

fn assert_budget(pattern: &str, max: usize) {
    let (count, listing) = hits(pattern);
    assert!(count <= max, "{pattern} budget exceeded: found {count}, max {max}.\n{listing}");
}

#[test]
fn source_tree_is_found() {
    assert!(!source_files().is_empty(), "run from the client crate root");
}

#[test]
fn unwrap_budget() {
    assert_budget(".unwrap()", MAX_UNWRAP);
}

#[test]
fn expect_budget() {
    assert_budget(".expect(", MAX_EXPECT);
}

#[test]
fn panic_budget() {
    assert_budget("panic!(", MAX_PANIC);
}

#[test]
fn todo_budget() {
    assert_budget("todo!(", MAX_TODO);
}

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", MAX_SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    assert_budget(".ok()", MAX_DOT_OK);
}

#[test]
fn allow_dead_code_budget() {
    assert_budget("#[allow(dead_code)]", MAX_ALLOW_DEAD_CODE);
}

#[test]
fn serde_stays_inside_hydrate_modules() {
    for file in source_files() {
        let lines: Vec<&str> = file.content.lines().collect();
        let gated_from = lines
            .windows(2)
            .position(|w| w[0].trim() == "#[cfg(feature = \"hydrate\")]" && w[1].trim_start().starts_with("mod "))
            .map(|i| i + 1);
        for (n, line) in lines.iter().enumerate() {
            if line.contains("serde") {
                assert!(
                    gated_from.is_some_and(|start| n > start),
                    "{}:{} uses serde outside a hydrate-only module; serde is optional under `hydrate`",
                    file.path,
                    n + 1
                );
            }
        }
    }
}

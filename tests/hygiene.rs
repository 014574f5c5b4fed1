//! Hygiene: scans production sources for patterns that panic in the browser
//! or swallow errors without looking at them. Every budget is zero; helpers
//! that genuinely need one of these belong in a `_test.rs` file.

use std::fs;
use std::path::Path;

struct Rule {
    pattern: &'static str,
    what: &'static str,
}

const RULES: &[Rule] = &[
    Rule { pattern: ".unwrap()", what: "unwrap" },
    Rule { pattern: ".expect(", what: "expect" },
    Rule { pattern: "panic!(", what: "panic" },
    Rule { pattern: "unreachable!(", what: "unreachable" },
    Rule { pattern: "todo!(", what: "todo" },
    Rule { pattern: "unimplemented!(", what: "unimplemented" },
    Rule { pattern: "let _ =", what: "silent discard" },
    Rule { pattern: ".ok()", what: "error-to-option" },
    Rule { pattern: "#[allow(dead_code)]", what: "dead code allowance" },
];

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `_test.rs` siblings.
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

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "run from the crate root");
}

#[test]
fn zero_budget_patterns() {
    let files = source_files();
    let mut report = Vec::new();
    for rule in RULES {
        for (path, count) in hits(&files, rule.pattern) {
            report.push(format!("  {}: {path}: {count}", rule.what));
        }
    }
    assert!(report.is_empty(), "hygiene violations:\n{}", report.join("\n"));
}

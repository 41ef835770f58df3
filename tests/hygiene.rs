//! Hygiene: scans production sources for patterns that crash the page or
//! swallow errors. Budgets only ever go down.

use std::fs;
use std::path::Path;

/// (pattern, budget, why it matters)
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics abort the wasm module"),
    (".expect(", 0, "panics abort the wasm module"),
    ("panic!(", 0, "panics abort the wasm module"),
    ("unreachable!(", 0, "panics abort the wasm module"),
    ("todo!(", 0, "unfinished code path"),
    ("unimplemented!(", 0, "unfinished code path"),
    ("let _ =", 0, "discards a result without looking at it"),
    (".ok()", 0, "turns an error into a silent None"),
    ("#[allow(dead_code)]", 0, "hides unused code"),
    ("std::thread", 0, "widgets run on the browser main thread"),
];

/// Production `.rs` files under `src/`, skipping `*_test.rs` siblings.
fn source_files(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            source_files(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

#[test]
fn source_tree_is_not_empty() {
    let mut files = Vec::new();
    source_files(Path::new("src"), &mut files);
    assert!(files.iter().any(|(name, _)| name.ends_with("lib.rs")), "src/lib.rs not found");
}

#[test]
fn antipattern_budgets_hold() {
    let mut files = Vec::new();
    source_files(Path::new("src"), &mut files);

    let mut failures = Vec::new();
    for &(pattern, budget, why) in BUDGETS {
        let hits: Vec<(String, usize)> = files
            .iter()
            .map(|(name, content)| (name.clone(), content.lines().filter(|l| l.contains(pattern)).count()))
            .filter(|(_, n)| *n > 0)
            .collect();
        let total: usize = hits.iter().map(|(_, n)| n).sum();
        if total > budget {
            let detail = hits.iter().map(|(name, n)| format!("    {name}: {n}")).collect::<Vec<_>>().join("\n");
            failures.push(format!("`{pattern}` found {total}, max {budget} ({why})\n{detail}"));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

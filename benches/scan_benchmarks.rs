//! Benchmarks for scanning and edit planning.
//!
//! Run with: cargo bench --bench scan_benchmarks

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::fs;
use std::hint::black_box;
use std::path::Path;
use tempfile::TempDir;
use todoly::annotation::parse_line;
use todoly::edit::Mutator;
use todoly::infra::{FileSource, MemoryWorkspace, Workspace};
use todoly::scan::{Aggregator, group_records, parse_document};

// =============================================================================
// Test Data Generation
// =============================================================================

const TAGS: &[&str] = &["ui", "api", "db", "perf", "docs", "build"];

const EXTENSIONS: &[&str] = &["ts", "tsx", "js", "cs"];

/// Generate a source file with a mix of code, open and done annotations.
fn generate_file_content(index: usize, lines: usize) -> String {
    let mut content = String::new();
    for line in 0..lines {
        let n = index + line;
        match n % 10 {
            0 => content.push_str(&format!(
                "    // TODO [{}][{}]: handle case {}\n",
                TAGS[n % TAGS.len()],
                TAGS[(n + 1) % TAGS.len()],
                n
            )),
            3 => content.push_str(&format!("    // DONE [{}]: finished {}\n", TAGS[n % TAGS.len()], n)),
            7 => content.push_str(&format!("    // TODO: untagged {}\n", n)),
            _ => content.push_str(&format!("    let value{} = compute({});\n", n, n)),
        }
    }
    content
}

fn file_name(index: usize) -> String {
    format!("src/mod{}/file{}.{}", index % 8, index, EXTENSIONS[index % EXTENSIONS.len()])
}

/// Create a temporary workspace with N source files
fn create_test_workspace(count: usize) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");

    for i in 0..count {
        let path = dir.path().join(file_name(i));
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create dir");
        fs::write(&path, generate_file_content(i, 200)).expect("Failed to write file");
    }

    dir
}

fn memory_workspace(count: usize) -> MemoryWorkspace {
    let ws = MemoryWorkspace::new();
    for i in 0..count {
        ws.insert(file_name(i), generate_file_content(i, 200));
    }
    ws
}

// =============================================================================
// Parsing Benchmarks
// =============================================================================

fn bench_parse_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_line");

    group.bench_function("tagged", |b| {
        b.iter(|| parse_line(black_box("    // TODO [ui][layout]: fix padding")))
    });
    group.bench_function("plain_code", |b| {
        b.iter(|| parse_line(black_box("    let value = compute(42);")))
    });
    group.bench_function("malformed", |b| {
        b.iter(|| parse_line(black_box("    // TODO [notclosed: msg")))
    });

    group.finish();
}

fn bench_parse_and_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_and_group");

    for lines in [100, 1000, 10000] {
        let content = generate_file_content(0, lines);

        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::new("lines", lines), &content, |b, content| {
            b.iter(|| group_records(parse_document(Path::new("a.ts"), content)))
        });
    }

    group.finish();
}

// =============================================================================
// Workspace Benchmarks
// =============================================================================

fn bench_scan_disk(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_disk");

    for size in [50, 200, 500] {
        // Create test data once, outside the benchmark
        let dir = create_test_workspace(size);
        let ws = Workspace::new(dir.path());

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("files", size), &size, |b, _| {
            b.iter(|| Aggregator::new(&ws).scan().unwrap())
        });
    }

    group.finish();
}

fn bench_plan_delete_completed(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_delete_completed");

    for size in [50, 200, 500] {
        let ws = memory_workspace(size);
        let files = ws.list_files().unwrap();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("files", size), &size, |b, _| {
            b.iter(|| Mutator::new(&ws).delete_all_completed(&files))
        });
    }

    group.finish();
}

criterion_group!(parse_benches, bench_parse_line, bench_parse_and_group);

criterion_group!(workspace_benches, bench_scan_disk, bench_plan_delete_completed);

criterion_main!(parse_benches, workspace_benches);

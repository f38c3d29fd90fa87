// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

use criterion::{Criterion, criterion_group, criterion_main};
use gituml_graph::build;
use gituml_log::CommitRecord;

fn synthetic_history(commits: usize) -> Vec<CommitRecord> {
    (0..commits)
        .rev()
        .map(|i| CommitRecord {
            sha: format!("{:040x}", i),
            summary: format!("commit number {}", i),
            parents: if i == 0 {
                vec![]
            } else {
                vec![format!("{:040x}", i - 1)]
            },
            files: vec![format!("src/module_{}.rs", i % 17), "src/lib.rs".to_string()],
        })
        .collect()
}

fn build_benchmark(c: &mut Criterion) {
    let commits = synthetic_history(1000);
    c.bench_function("build_1000_commits", |b| {
        b.iter(|| build(std::hint::black_box(&commits)))
    });
}

criterion_group!(benches, build_benchmark);
criterion_main!(benches);

//! This bench test simulates driving a large list of requirements through
//! the full lifecycle, one command dispatch at a time.

#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use reqtrack::{Command, RequirementsList};

/// Generates a list with a large number of submitted requirements.
fn preseed_list(count: usize) -> RequirementsList {
    let mut list = RequirementsList::new();
    for i in 0..count {
        list.add(format!("requirement {i}"), format!("AT-{i}"));
    }
    list
}

fn apply_commands(c: &mut Criterion) {
    let accept = Command::accept(2, "3 days").unwrap();
    let assign = Command::assign("dev").unwrap();
    let complete = Command::complete();
    let pass = Command::pass();

    c.bench_function("drive 1000 requirements to verified", |b| {
        b.iter_batched(
            || preseed_list(1000),
            |mut list| {
                let ids: Vec<_> = list.rows().map(|row| row.id).collect();
                for id in ids {
                    list.execute(id, &accept).unwrap();
                    list.execute(id, &assign).unwrap();
                    list.execute(id, &complete).unwrap();
                    list.execute(id, &pass).unwrap();
                }
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, apply_commands);
criterion_main!(benches);

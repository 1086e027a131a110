use std::hint::black_box;
use std::io::Write;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use github_user_search::history::load_history;
use tempfile::NamedTempFile;

/// Generate a synthetic history store with N rows
fn generate_history_file(num_entries: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();

    for i in 0..num_entries {
        let entry = format!(
            r#"{{"Timestamp":"2024-01-{:02} 12:00:00","Search Type":"{}","Input":"query {}","Results":"user{}, user{}","Result Count":2}}"#,
            (i % 28) + 1,
            if i % 2 == 0 { "name" } else { "email" },
            i,
            i,
            i + 1
        );
        writeln!(file, "{}", entry).unwrap();
    }

    file.flush().unwrap();
    file
}

fn bench_load_history(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_history");

    for size in [100, 1_000, 10_000, 50_000].iter() {
        let file = generate_history_file(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| load_history(black_box(file.path())).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_load_history);
criterion_main!(benches);

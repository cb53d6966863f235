use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use pricelens_matching::{DEFAULT_THRESHOLD, is_similar, similarity};

fn bench_similarity(c: &mut Criterion) {
    let pairs = [
        ("short", "Blue Shirt M", "Blue Shirt Medium"),
        (
            "typical",
            "Organic Cotton Crewneck T-Shirt Heather Grey / Medium",
            "Organic Cotton Crew Neck Tee Grey Medium",
        ),
        (
            "long",
            "Limited Edition Hand-Finished Ceramic Pour-Over Coffee Dripper Set with Walnut Stand and Double-Walled Glass Carafe 600ml",
            "Hand Finished Ceramic Pour Over Coffee Dripper with Walnut Stand & Glass Carafe (600 ml, Limited Edition)",
        ),
    ];

    let mut group = c.benchmark_group("similarity");
    for (name, a, b) in pairs {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("score", name), &(a, b), |bench, (a, b)| {
            bench.iter(|| similarity(black_box(a), black_box(b)));
        });
    }
    group.finish();
}

fn bench_catalog_scan(c: &mut Criterion) {
    // One seller variant against a 250-variant competitor catalog, the shape
    // of work the orchestrator performs per seller variant.
    let seller = "Organic Cotton Crewneck T-Shirt Medium";
    let competitors: Vec<String> = (0..250)
        .map(|i| format!("Competitor Product Line {i} Cotton Tee Size {}", i % 5))
        .collect();

    c.bench_function("scan_250_variants", |bench| {
        bench.iter(|| {
            competitors
                .iter()
                .filter(|label| is_similar(black_box(seller), label, DEFAULT_THRESHOLD))
                .count()
        });
    });
}

criterion_group!(benches, bench_similarity, bench_catalog_scan);
criterion_main!(benches);

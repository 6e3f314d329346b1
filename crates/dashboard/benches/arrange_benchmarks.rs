use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use dashboard::geometry::{Region, Size};
use dashboard::layouts::{DashboardLayout, Layout};

fn bench_arrangement(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard_arrangement");
    let layout = DashboardLayout::new(Size::new(12, 5));

    for count in [6, 24, 96] {
        group.bench_with_input(BenchmarkId::new("arrangement", count), &count, |b, &count| {
            b.iter(|| layout.arrangement(black_box(count), black_box(Size::new(200, 60))))
        });
    }
    group.finish();
}

fn bench_arrange_placements(c: &mut Criterion) {
    let visible: Vec<usize> = (0..48).collect();
    let mut layout = DashboardLayout::new(Size::new(12, 5)).with_desired_cols(6);

    c.bench_function("arrange_48_pinned_cols", |b| {
        b.iter(|| layout.arrange(black_box(&visible), black_box(Region::new(0, 0, 200, 60))))
    });
}

criterion_group!(benches, bench_arrangement, bench_arrange_placements);
criterion_main!(benches);

use criterion::{
    AxisScale, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, PlotConfiguration,
};

use kdspace::prelude::*;
use rand::prelude::*;

type Scalar = f32;
type Point = [Scalar; 3];

pub fn random_points(rng: &mut StdRng, i: usize) -> Vec<Point> {
    (0..i)
        .map(|_| [0.0; 3].map(|_: Scalar| rng.gen_range(-5e3..5e3)))
        .collect()
}

#[inline]
fn bench_build<F>(
    points: &[Point],
    splitter: Strategy,
    group: &mut BenchmarkGroup<'_, criterion::measurement::WallTime>,
    name: &str,
    mut build: F,
) where
    F: FnMut(&mut KdTree<Point, 3, Intrinsic, Strategy>) -> BuildReport,
{
    let tree = KdTree::from_items(points.iter().copied(), Intrinsic, splitter, Config::default())
        .expect("valid configuration");

    group.bench_function(BenchmarkId::new(name, points.len()), |bencher| {
        bencher.iter_batched_ref(|| tree.clone(), &mut build, BatchSize::LargeInput)
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("kdspace");
    group
        .plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic))
        .warm_up_time(std::time::Duration::from_secs(1))
        .measurement_time(std::time::Duration::from_secs(1))
        .sample_size(15);

    let point_count_iterator = (4..19).map(|i| 2usize.pow(i));
    let strategies = [
        ("Median", Strategy::default()),
        ("Median::Rotate", MedianSplit::rotating().into()),
        ("Rotating", RotatingSplit::default().into()),
    ];

    let g = &mut group;
    for i in point_count_iterator {
        let points = random_points(&mut StdRng::seed_from_u64(1808), i);

        for (name, splitter) in strategies {
            bench_build(&points, splitter, g, name, KdTree::build);

            #[cfg(feature = "parallel")]
            {
                let name = &format!("{name}::parallel");
                bench_build(&points, splitter, g, name, KdTree::build_parallel);
            }
        }
    }

    group.finish();
}

criterion::criterion_group!(benches, criterion_benchmark);
criterion::criterion_main!(benches);

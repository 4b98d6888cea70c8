use criterion::{BenchmarkId, Criterion, criterion_group};
use dataseries::{DataPoint, Series, UnionResult, VersionedValue, datapoint};
use itertools::EitherOrBoth;
use rand::prelude::*;

type Value = Option<VersionedValue<u32, u16>>;
type Sample = DataPoint<u64, Value>;

/// Alternating open/close data points with random gaps, `version` identifies the replica
fn intervals(rng: &mut StdRng, n_els: usize, max_gap: u64, version: u32) -> Vec<Sample> {
    let mut point = 0;
    (0..n_els)
        .map(|i| {
            point += rng.random_range(1..=max_gap);
            let value =
                (i % 2 == 0).then(|| VersionedValue::new(version, rng.random_range(0..4)));
            datapoint(point, value)
        })
        .collect()
}

fn resolve(x: UnionResult<Value, Value>) -> Value {
    x.reduce(core::cmp::max)
}

/// Union built from a sorted join of the points, carrying the last value of each side by hand
fn join_baseline(left: &[Sample], right: &[Sample]) -> Vec<Sample> {
    itertools::merge_join_by(left.iter(), right.iter(), |l, r| l.point().cmp(r.point()))
        .scan((None, None), |(last_left, last_right), step| {
            let point = match step {
                EitherOrBoth::Left(l) => {
                    *last_left = Some(*l.data());
                    *l.point()
                }
                EitherOrBoth::Right(r) => {
                    *last_right = Some(*r.data());
                    *r.point()
                }
                EitherOrBoth::Both(l, r) => {
                    *last_left = Some(*l.data());
                    *last_right = Some(*r.data());
                    *l.point()
                }
            };
            let value = match (*last_left, *last_right) {
                (Some(l), Some(r)) => core::cmp::max(l, r),
                (Some(v), None) | (None, Some(v)) => v,
                (None, None) => None,
            };
            Some(datapoint(point, value))
        })
        .collect()
}

fn bench_union(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let mut group = c.benchmark_group("Union VS Itertools merge_join_by");
    for n_els in [1_000, 10_000, 100_000, 1_000_000] {
        let left = intervals(&mut rng, n_els, 100, 1);
        let right = intervals(&mut rng, n_els / 10, 1000, 2);

        group.bench_function(BenchmarkId::new("Union", n_els), |b| {
            b.iter(|| {
                left.iter()
                    .copied()
                    .union(right.iter().copied(), resolve)
                    .collect::<Vec<_>>()
            });
        });
        group.bench_function(BenchmarkId::new("Itertools merge_join_by", n_els), |b| {
            b.iter(|| join_baseline(&left, &right));
        });
    }
    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let mut group = c.benchmark_group("Merge VS Itertools coalesce");
    for n_els in [1_000, 10_000, 100_000, 1_000_000] {
        let left = intervals(&mut rng, n_els, 100, 1);
        let right = intervals(&mut rng, n_els, 100, 1);
        let resolved = left
            .iter()
            .copied()
            .union(right.iter().copied(), resolve)
            .collect::<Vec<_>>();

        group.bench_function(BenchmarkId::new("Merge", n_els), |b| {
            b.iter(|| resolved.iter().copied().merge().collect::<Vec<_>>());
        });
        group.bench_function(BenchmarkId::new("Itertools coalesce", n_els), |b| {
            b.iter(|| {
                itertools::Itertools::coalesce(resolved.iter().copied(), |prev, cur| {
                    if prev.data() == cur.data() { Ok(prev) } else { Err((prev, cur)) }
                })
                .collect::<Vec<_>>()
            });
        });
    }
    group.finish();
}

fn bench_union_merge(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let n_els = 2_usize.pow(20);
    let left = intervals(&mut rng, n_els, 100, 1);
    let right = intervals(&mut rng, n_els / 16, 1000, 2);

    c.bench_function(&format!("Union + Merge ({n_els} + {} items)", n_els / 16), |b| {
        b.iter(|| {
            left.iter()
                .copied()
                .union(right.iter().copied(), resolve)
                .merge()
                .collect::<Vec<_>>()
        });
    });
}

criterion_group!(benches, bench_union, bench_merge, bench_union_merge);

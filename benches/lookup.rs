use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use geo_lookup::kdtree::{KDTree, KDTreeIndex};
use geo_lookup::lookup::{CoordStrategy, IdStrategy};
use geo_lookup::Record;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstar::RTree;

fn generate_records(n: usize) -> Vec<Record<f64>> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n)
        .map(|i| {
            Record::new(
                rng.gen_range(0..i64::MAX),
                rng.gen_range(-180.0..180.0),
                rng.gen_range(-90.0..90.0),
            )
            .with_name(format!("place {i}"))
        })
        .collect()
}

fn generate_queries(n: usize) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(7);
    (0..n)
        .map(|_| (rng.gen_range(-180.0..180.0), rng.gen_range(-90.0..90.0)))
        .collect()
}

fn benchmark_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    for size in [1_000, 100_000] {
        let records = generate_records(size);
        let coords: Vec<(f64, f64)> = records.iter().map(|r| (r.lon, r.lat)).collect();
        let points: Vec<[f64; 2]> = coords.iter().map(|&(x, y)| [x, y]).collect();

        group.bench_with_input(BenchmarkId::new("kdtree", size), &size, |b, _| {
            b.iter(|| KDTree::from_coords(&coords).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("rstar bulk", size), &size, |b, _| {
            b.iter(|| RTree::bulk_load(points.clone()))
        });
        group.bench_with_input(BenchmarkId::new("binsort", size), &size, |b, _| {
            b.iter(|| IdStrategy::BinarySort.build(&records).unwrap().num_items())
        });
    }
    group.finish();
}

fn benchmark_coord_lookup(c: &mut Criterion) {
    let records = generate_records(10_000);
    let queries = generate_queries(100);
    let mut group = c.benchmark_group("lookup_by_coord");

    for strategy in CoordStrategy::ALL {
        let index = strategy.build(&records).unwrap();
        group.bench_function(strategy.name(), |b| {
            b.iter(|| {
                for &(x, y) in &queries {
                    index.lookup_by_coord(x, y);
                }
            })
        });
    }

    let points: Vec<[f64; 2]> = records.iter().map(|r| [r.lon, r.lat]).collect();
    let rstar_tree = RTree::bulk_load(points);
    group.bench_function("rstar", |b| {
        b.iter(|| {
            for &(x, y) in &queries {
                rstar_tree.nearest_neighbor(&[x, y]);
            }
        })
    });

    let coords: Vec<(f64, f64)> = records.iter().map(|r| (r.lon, r.lat)).collect();
    let tree = KDTree::from_coords(&coords).unwrap();
    group.bench_function("kdtree within", |b| {
        b.iter(|| {
            for &(x, y) in &queries {
                tree.within(x, y, 5.);
            }
        })
    });
    group.finish();
}

fn benchmark_id_lookup(c: &mut Criterion) {
    let records = generate_records(10_000);
    let ids: Vec<i64> = records.iter().step_by(100).map(|r| r.id).collect();
    let mut group = c.benchmark_group("lookup_by_id");

    for strategy in IdStrategy::ALL {
        let index = strategy.build(&records).unwrap();
        group.bench_function(strategy.name(), |b| {
            b.iter(|| {
                for &id in &ids {
                    index.lookup_by_id(id);
                }
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_construction,
    benchmark_coord_lookup,
    benchmark_id_lookup
);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rs_barnes_hut::barnes_hut::{direct_displacement, BarnesHut, Body};
use rs_barnes_hut::geometry::{Rect, Vec2};
use rs_barnes_hut::quadtree::{QuadTree, QuadTreeConfig, QueryList};

const WORLD: Rect = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(800.0, 600.0));

fn random_bodies(count: usize) -> Vec<Body<usize>> {
    let mut rng = StdRng::seed_from_u64(1234);
    (0..count)
        .map(|id| {
            Body::new(
                id,
                Vec2::new(rng.random_range(0.0..800.0), rng.random_range(0.0..600.0)),
                rng.random_range(0.1..6.0),
            )
        })
        .collect()
}

fn build(bodies: &[Body<usize>]) -> QuadTree<usize> {
    let mut tree = QuadTree::with_config(WORLD, QuadTreeConfig::default()).unwrap();
    for body in bodies {
        let _ = tree.insert(body.id, body.position, body.mass);
    }
    tree
}

pub fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for count in [1_000, 10_000] {
        let bodies = random_bodies(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &bodies, |b, bodies| {
            b.iter(|| build(black_box(bodies)))
        });
    }
    group.finish();
}

pub fn bench_forces(c: &mut Criterion) {
    let mut group = c.benchmark_group("forces");
    group.sample_size(20);
    let bodies = random_bodies(2_000);
    let tree = build(&bodies);

    for theta in [0.5, 1.0] {
        let bh = BarnesHut::new(theta, 9.81);
        group.bench_with_input(BenchmarkId::new("barnes_hut", theta), &bh, |b, bh| {
            b.iter(|| {
                bodies
                    .iter()
                    .fold(Vec2::ZERO, |acc, body| acc + bh.displacement(&tree, black_box(body)))
            })
        });
    }

    group.bench_function("direct", |b| {
        b.iter(|| {
            bodies
                .iter()
                .fold(Vec2::ZERO, |acc, body| acc + direct_displacement(&bodies, black_box(body), 9.81))
        })
    });
    group.finish();
}

pub fn bench_radius_query(c: &mut Criterion) {
    let bodies = random_bodies(10_000);
    let tree = build(&bodies);
    let mut list = QueryList::new(64).unwrap();

    c.bench_function("find_in_radius", |b| {
        b.iter(|| {
            let mut total = 0;
            for body in bodies.iter().take(500) {
                list.reset();
                total += tree.find_in_radius(body.position, black_box(50.0), &mut list).unwrap();
            }
            total
        })
    });
}

criterion_group!(benches, bench_insert, bench_forces, bench_radius_query);
criterion_main!(benches);

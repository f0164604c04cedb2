//! Hot-path benchmarks: one full route per movement tick is the budget.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use yatra_route::{
    CollisionFlag, CollisionFlagMap, DefaultReachStrategy, RouteFinder, RouteRequest,
};

fn open_field() -> CollisionFlagMap {
    let mut map = CollisionFlagMap::new();
    for x in 3100..3300 {
        for z in 3100..3300 {
            map.set(x, z, 0, CollisionFlag::OPEN);
        }
    }
    map
}

fn scattered_field() -> CollisionFlagMap {
    let mut map = CollisionFlagMap::new();
    for x in 3100..3300 {
        for z in 3100..3300 {
            let flags = if (x * 7 + z * 13) % 11 == 0 {
                CollisionFlag::LOC
            } else {
                CollisionFlag::OPEN
            };
            map.set(x, z, 0, flags);
        }
    }
    map
}

fn bench_find_route(c: &mut Criterion) {
    let open = open_field();
    let scattered = scattered_field();
    let mut finder = RouteFinder::with_defaults();

    c.bench_function("find_route/open_60_tiles", |b| {
        let request = RouteRequest::new(0, 3200, 3200, 3260, 3230);
        b.iter(|| {
            let route = finder.find_route(&open, &DefaultReachStrategy, black_box(&request));
            black_box(route)
        })
    });

    c.bench_function("find_route/scattered_60_tiles", |b| {
        let request = RouteRequest::new(0, 3200, 3200, 3260, 3230);
        b.iter(|| {
            let route = finder.find_route(&scattered, &DefaultReachStrategy, black_box(&request));
            black_box(route)
        })
    });

    c.bench_function("find_route/scattered_size_2", |b| {
        let request = RouteRequest::new(0, 3200, 3200, 3250, 3240).with_src_size(2);
        b.iter(|| {
            let route = finder.find_route(&scattered, &DefaultReachStrategy, black_box(&request));
            black_box(route)
        })
    });

    c.bench_function("find_route/unreachable_full_window", |b| {
        // Worst case: the frontier exhausts the whole window, then the
        // approach scan runs.
        let request = RouteRequest::new(0, 3200, 3200, 3200, 3290);
        b.iter(|| {
            let route = finder.find_route(&scattered, &DefaultReachStrategy, black_box(&request));
            black_box(route)
        })
    });
}

criterion_group!(benches, bench_find_route);
criterion_main!(benches);

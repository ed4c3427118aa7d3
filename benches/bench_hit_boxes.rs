// benches/bench_hit_boxes.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use roadmap_builder::build_advanced_info;
use roadmap_builder::road_network::coordinates::Coordinates;
use roadmap_builder::road_network::grid_generator::generate_ring_grid;
use roadmap_builder::road_network::hit_box::road_hit_box;
use roadmap_builder::road_network::orientation::Orientation;
use roadmap_builder::road_network::render_plan::RenderPlan;
use roadmap_builder::road_network::road::LaneType;

fn bench_road_hit_box(c: &mut Criterion) {
    let source = Coordinates::new(50, 50);
    let destination = Coordinates::new(200, 50);
    c.bench_function("road_hit_box", |b| {
        b.iter(|| {
            for orientation in Orientation::ALL {
                black_box(road_hit_box(
                    orientation,
                    LaneType::DoubleDirection,
                    black_box(source),
                    black_box(destination),
                    50,
                ));
            }
        });
    });
}

fn bench_hit_testing(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(9);
    let info = generate_ring_grid(16, 16, &mut rng).unwrap();
    let map = build_advanced_info(&info).unwrap();
    let (width, height) = map.canvas_size();
    let probes: Vec<Coordinates> = (0..height)
        .step_by(37)
        .flat_map(|y| (0..width).step_by(37).map(move |x| Coordinates::new(x, y)))
        .collect();

    c.bench_function("road_at_16x16", |b| {
        b.iter(|| {
            for &probe in &probes {
                black_box(map.road_at(probe));
            }
        });
    });

    c.bench_function("render_plan_16x16", |b| {
        b.iter(|| black_box(RenderPlan::new(&map)));
    });
}

criterion_group!(benches, bench_road_hit_box, bench_hit_testing);
criterion_main!(benches);

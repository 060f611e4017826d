use artillery_engine::{
    find_optimal_angle, rk4_step, DragLaw, PhysicalParams, ProjectileDynamics, TrajectorySolver,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_rk4_step(c: &mut Criterion) {
    let params = PhysicalParams::default();
    let dynamics = ProjectileDynamics::new(&params);
    let state = [1.0e4, 8.0e3, 1100.0, 900.0];

    c.bench_function("rk4_step", |b| {
        b.iter(|| rk4_step(&dynamics, black_box(&state), black_box(0.1)))
    });
}

fn bench_single_trajectory(c: &mut Criterion) {
    let solver = TrajectorySolver::new(PhysicalParams::default()).with_time_step(0.1);

    c.bench_function("trajectory_55deg_h0.1", |b| {
        b.iter(|| solver.solve(black_box(55.0)).unwrap())
    });
}

fn bench_angle_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("angle_sweep");
    group.sample_size(10);

    for law in [DragLaw::Quadratic, DragLaw::Doubled] {
        let params = PhysicalParams {
            drag_law: law,
            ..PhysicalParams::default()
        };
        let solver = TrajectorySolver::new(params).with_time_step(0.1);
        group.bench_function(law.to_string(), |b| {
            b.iter(|| find_optimal_angle(black_box(&solver)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_rk4_step,
    bench_single_trajectory,
    bench_angle_sweep
);
criterion_main!(benches);

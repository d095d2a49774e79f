//! 链渲染与场景合成的性能基准测试
//!
//! 渲染管线每帧执行一次，验证其开销相对 60 FPS 帧预算可以忽略。

use armhud_core::units::Deg;
use armhud_core::{
    CanvasSize, JointSpec, SceneConfig, TelemetrySnapshot, compose_scene, render_chain,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use nalgebra::Point2;

fn bench_render_chain(c: &mut Criterion) {
    let joints = [
        JointSpec::new(Deg(35.0), 22.0),
        JointSpec::new(Deg(-60.0), 16.0),
        JointSpec::new(Deg(15.0), 8.0),
    ];

    c.bench_function("render_chain_3_joints", |b| {
        b.iter(|| {
            render_chain(
                black_box(Point2::new(400.0, 300.0)),
                black_box(Deg(-90.0)),
                black_box(&joints),
                black_box(4.0),
            )
        })
    });
}

fn bench_compose_scene(c: &mut Criterion) {
    let mut snapshot = TelemetrySnapshot::with_lengths(vec![22.0, 16.0, 8.0]);
    snapshot.current_angles = vec![Deg(35.0), Deg(-60.0), Deg(15.0)];
    snapshot.target_angles = vec![Deg(50.0), Deg(-30.0), Deg(0.0)];
    let canvas = CanvasSize::new(800.0, 600.0);
    let config = SceneConfig::default();

    c.bench_function("compose_scene_full", |b| {
        b.iter(|| compose_scene(black_box(canvas), black_box(&snapshot), black_box(&config)))
    });
}

criterion_group!(benches, bench_render_chain, bench_compose_scene);
criterion_main!(benches);

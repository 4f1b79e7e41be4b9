use criterion::{criterion_group, criterion_main, Criterion};
use gl3d::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A camera-like chain of rotations and translations.
fn create_camera_stack(rng: &mut StdRng) -> InvertibleTransforms3D {
	(0..8).fold(InvertibleTransforms3D::new(), |stack, i| match i % 3 {
		0 => stack.rotate_y(rng.gen_range(-3.0..3.0)),
		1 => stack.rotate_x(rng.gen_range(-3.0..3.0)),
		_ => stack.translate_xyz(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0)),
	})
}

fn bench_inverse(c: &mut Criterion) {
	let mut rng = StdRng::seed_from_u64(0);
	let stack = create_camera_stack(&mut rng);
	let matrix = *stack.matrix();

	c.bench_function("general_inverse", |b| {
		b.iter(|| matrix.inverse());
	});
	c.bench_function("stack_inverse", |b| {
		b.iter(|| stack.inverse());
	});
}

fn bench_picking(c: &mut Criterion) {
	let mut rng = StdRng::seed_from_u64(1);
	let config = SceneConfig { ship_count: 1_000, ..Default::default() };
	let scene = Scene::from_config(&config, &mut rng);
	let click = Point2D::new(250.0, 250.0);
	c.bench_function("pick_1000_ships", |b| {
		b.iter(|| {
			let ray = scene.camera_ray(&config.canvas, &click).unwrap();
			scene.hits(&ray)
		});
	});
}

criterion_group!(transforms, bench_inverse, bench_picking);
criterion_main!(transforms);

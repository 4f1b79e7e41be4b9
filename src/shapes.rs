use std::f64::consts::TAU;

use crate::matrix::Matrix3D;
use crate::points::Points3D;
use crate::vector::Vector3D;

/// An arrow-head ship in the XY plane, drawn as two triangles.
pub fn make_spaceship() -> Points3D {
	let translate = Matrix3D::identity().translate_xyz(0.0, -0.25, 0.0);
	let mirror = Matrix3D::identity().scale_xyz(-1.0, 1.0, 1.0);
	let left_half = translate.transform_points(&Points3D::from_flat(&[
		-0.5, 0.0, 0.0,
		0.0, 0.75, 0.0,
		0.0, 0.15, 0.0,
	]));

	left_half.concat(&mirror.transform_points(&left_half))
}

/// Grid lines on the plane `y`, as pairs of line endpoints.
pub fn make_ground(y: f64, xz_start: f64, size: f64, points_per_axis: usize) -> Points3D {
	// With no divisions only the starting lines are drawn.
	let offset = |i: usize| {
		if points_per_axis == 0 {
			0.0
		} else {
			size * i as f64 / points_per_axis as f64
		}
	};
	let mut points = Vec::with_capacity(4 * (points_per_axis + 1));

	for i in 0..=points_per_axis {
		let x = xz_start + offset(i);
		points.push(Vector3D::new(x, y, xz_start));
		points.push(Vector3D::new(x, y, xz_start + size));
	}

	for i in 0..=points_per_axis {
		let z = xz_start + offset(i);
		points.push(Vector3D::new(xz_start, y, z));
		points.push(Vector3D::new(xz_start + size, y, z));
	}

	Points3D::new(points)
}

/// A unit circle in the XY plane, as a line loop.
pub fn make_circle(segments: usize) -> Points3D {
	let start = Vector3D::new(1.0, 0.0, 0.0);
	let points = (0..segments)
		.map(|i| {
			let rotation = Matrix3D::identity().rotate_z(TAU * (i as f64 / segments as f64));
			rotation.transform_vector(&start)
		})
		.collect();
	Points3D::new(points)
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPSILON: f64 = 1e-9;

	#[test]
	fn spaceship_is_mirrored() {
		let ship = make_spaceship();
		assert_eq!(ship.len(), 6);
		for i in 0..3 {
			let left = ship.get(i).unwrap();
			let right = ship.get(i + 3).unwrap();
			assert!((left.x + right.x).abs() < EPSILON);
			assert!((left.y - right.y).abs() < EPSILON);
		}
		assert!(ship.get(1).unwrap().approx_eq(&Vector3D::new(0.0, 0.5, 0.0), EPSILON));
	}

	#[test]
	fn ground_spans_grid() {
		let ground = make_ground(-1.0, -1.0, 2.0, 20);
		assert_eq!(ground.len(), 84);
		assert!(ground.iter().all(|p| p.y == -1.0));
		let last = ground.get(ground.len() - 1).unwrap();
		assert!(last.approx_eq(&Vector3D::new(1.0, -1.0, 1.0), EPSILON));
	}

	#[test]
	fn ground_with_zero_divisions() {
		let ground = make_ground(-1.0, -1.0, 2.0, 0);
		assert_eq!(ground.len(), 4);
		assert!(ground.iter().all(|p| p.x.is_finite() && p.y.is_finite() && p.z.is_finite()));
		assert!(ground.get(0).unwrap().approx_eq(&Vector3D::new(-1.0, -1.0, -1.0), EPSILON));
		assert!(ground.get(3).unwrap().approx_eq(&Vector3D::new(1.0, -1.0, -1.0), EPSILON));
	}

	#[test]
	fn circle_points_have_unit_radius() {
		let circle = make_circle(20);
		assert_eq!(circle.len(), 20);
		assert!(circle.iter().all(|p| (p.length() - 1.0).abs() < EPSILON && p.z == 0.0));
		assert!(circle.get(5).unwrap().approx_eq(&Vector3D::new(0.0, 1.0, 0.0), EPSILON));
	}
}

use crate::ray::Ray3D;
use crate::vector::Vector3D;

/// Closest point where `ray` meets the sphere, or `None` if it misses or the
/// sphere lies entirely behind the ray's origin.
///
/// With a unit direction the quadratic reduces to `t² + 2bt + c = 0`, so the
/// roots are `-b ± sqrt(b² - c)`. A tangent ray has one repeated root.
pub fn ray_sphere_intersection(ray: &Ray3D, center: &Vector3D, radius: f64) -> Option<Vector3D> {
	let origin_minus_center = ray.origin() - center;
	let b = ray.direction().dot(&origin_minus_center);
	let c = origin_minus_center.dot(&origin_minus_center) - radius * radius;
	let b_squared_minus_c = b * b - c;

	if b_squared_minus_c < 0.0 {
		return None;
	}

	let sqrt = b_squared_minus_c.sqrt();
	[-b - sqrt, -b + sqrt]
		.into_iter()
		.filter(|t| *t >= 0.0)
		.min_by(f64::total_cmp)
		.map(|t| ray.point_along(t))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
	pub center: Vector3D,
	pub radius: f64,
}

impl Sphere {
	pub fn new(center: Vector3D, radius: f64) -> Self {
		Self { center, radius }
	}

	pub fn intersect(&self, ray: &Ray3D) -> Option<Vector3D> {
		ray_sphere_intersection(ray, &self.center, self.radius)
	}

	pub fn is_hit_by(&self, ray: &Ray3D) -> bool {
		self.intersect(ray).is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPSILON: f64 = 1e-9;

	fn ray_towards_origin() -> Ray3D {
		Ray3D::new(Vector3D::new(0.0, 0.0, 5.0), Vector3D::direction(0.0, 0.0, -1.0)).unwrap()
	}

	#[test]
	fn hit_returns_near_side() {
		let hit = ray_sphere_intersection(&ray_towards_origin(), &Vector3D::default(), 1.0);
		assert!(hit.unwrap().approx_eq(&Vector3D::new(0.0, 0.0, 1.0), EPSILON));
	}

	#[test]
	fn miss_returns_none() {
		let center = Vector3D::new(10.0, 0.0, 0.0);
		assert_eq!(ray_sphere_intersection(&ray_towards_origin(), &center, 1.0), None);
	}

	#[test]
	fn tangent_returns_single_point() {
		let ray = Ray3D::new(Vector3D::new(1.0, 0.0, 5.0), Vector3D::direction(0.0, 0.0, -1.0)).unwrap();
		let hit = ray_sphere_intersection(&ray, &Vector3D::default(), 1.0);
		assert!(hit.unwrap().approx_eq(&Vector3D::new(1.0, 0.0, 0.0), EPSILON));
	}

	#[test]
	fn sphere_behind_origin_is_ignored() {
		let ray = Ray3D::new(Vector3D::new(0.0, 0.0, 5.0), Vector3D::direction(0.0, 0.0, 1.0)).unwrap();
		assert_eq!(ray_sphere_intersection(&ray, &Vector3D::default(), 1.0), None);
	}

	#[test]
	fn origin_inside_sphere_hits_far_side() {
		let ray = Ray3D::new(Vector3D::default(), Vector3D::direction(1.0, 0.0, 0.0)).unwrap();
		let sphere = Sphere::new(Vector3D::default(), 2.0);
		assert!(sphere.intersect(&ray).unwrap().approx_eq(&Vector3D::new(2.0, 0.0, 0.0), EPSILON));
		assert!(sphere.is_hit_by(&ray));
	}
}

use serde::Deserialize;
use serde::Serialize;

use crate::error::Error;
use crate::error::Result;

/// A three-dimensional vector in homogeneous coordinates.
///
/// Points carry `w = 1` and directions `w = 0`. Nothing enforces that
/// distinction: arithmetic keeps the left operand's `w`, so subtracting two
/// points yields something with `w = 1` even though it is really a
/// direction. Callers that feed such a value through a translation matrix
/// get it translated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector3D {
	pub x: f64,
	pub y: f64,
	pub z: f64,
	pub w: f64,
}

impl Default for Vector3D {
	fn default() -> Self {
		Self::new(0.0, 0.0, 0.0)
	}
}

impl Vector3D {
	/// A point (`w = 1`).
	pub const fn new(x: f64, y: f64, z: f64) -> Self {
		Self { x, y, z, w: 1.0 }
	}

	pub const fn with_w(x: f64, y: f64, z: f64, w: f64) -> Self {
		Self { x, y, z, w }
	}

	/// A direction (`w = 0`), unaffected by translation.
	pub const fn direction(x: f64, y: f64, z: f64) -> Self {
		Self { x, y, z, w: 0.0 }
	}

	/// Divides x, y and z by w and resets w to 1.
	///
	/// A zero `w` yields infinities, the same as any other float division.
	pub fn perspective_divide(&self) -> Vector3D {
		Vector3D::new(self.x / self.w, self.y / self.w, self.z / self.w)
	}

	pub fn plus(&self, v: &Vector3D) -> Vector3D {
		Vector3D::with_w(self.x + v.x, self.y + v.y, self.z + v.z, self.w)
	}

	pub fn minus(&self, v: &Vector3D) -> Vector3D {
		Vector3D::with_w(self.x - v.x, self.y - v.y, self.z - v.z, self.w)
	}

	pub fn times(&self, n: f64) -> Vector3D {
		Vector3D::with_w(self.x * n, self.y * n, self.z * n, self.w)
	}

	pub fn dot(&self, v: &Vector3D) -> f64 {
		self.x * v.x + self.y * v.y + self.z * v.z
	}

	pub fn cross(&self, v: &Vector3D) -> Vector3D {
		Vector3D::with_w(
			self.y * v.z - self.z * v.y,
			self.z * v.x - self.x * v.z,
			self.x * v.y - self.y * v.x,
			self.w,
		)
	}

	pub fn length(&self) -> f64 {
		self.dot(self).sqrt()
	}

	/// Scales x, y and z to unit length, keeping w.
	pub fn normalize(&self) -> Result<Vector3D> {
		let len = self.length();
		if len == 0.0 {
			return Err(Error::DegenerateVector);
		}
		Ok(Vector3D::with_w(self.x / len, self.y / len, self.z / len, self.w))
	}

	pub fn approx_eq(&self, other: &Vector3D, epsilon: f64) -> bool {
		(self.x - other.x).abs() <= epsilon
			&& (self.y - other.y).abs() <= epsilon
			&& (self.z - other.z).abs() <= epsilon
			&& (self.w - other.w).abs() <= epsilon
	}

	pub fn to_array3(&self) -> [f32; 3] {
		[self.x as f32, self.y as f32, self.z as f32]
	}
}

impl From<[f64; 3]> for Vector3D {
	fn from(v: [f64; 3]) -> Self {
		Vector3D::new(v[0], v[1], v[2])
	}
}

impl std::ops::Add for Vector3D {
	type Output = Vector3D;

	fn add(self, other: Vector3D) -> Vector3D {
		self.plus(&other)
	}
}

impl std::ops::Sub for Vector3D {
	type Output = Vector3D;

	fn sub(self, other: Vector3D) -> Vector3D {
		self.minus(&other)
	}
}

impl std::ops::Sub for &Vector3D {
	type Output = Vector3D;

	fn sub(self, other: &Vector3D) -> Vector3D {
		self.minus(other)
	}
}

impl std::ops::Mul<f64> for Vector3D {
	type Output = Vector3D;

	fn mul(self, n: f64) -> Vector3D {
		self.times(n)
	}
}

impl std::ops::Neg for Vector3D {
	type Output = Vector3D;

	fn neg(self) -> Vector3D {
		self.times(-1.0)
	}
}

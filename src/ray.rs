use crate::error::Result;
use crate::vector::Vector3D;

/// A ray with a unit-length direction, emanating from `origin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray3D {
	origin: Vector3D,
	direction: Vector3D,
}

impl Ray3D {
	/// Normalizes `direction`; fails if it has zero length.
	pub fn new(origin: Vector3D, direction: Vector3D) -> Result<Self> {
		Ok(Self {
			origin,
			direction: direction.normalize()?,
		})
	}

	/// The ray starting at `from` and passing through `to`.
	pub fn from_to(from: Vector3D, to: Vector3D) -> Result<Self> {
		Self::new(from, to - from)
	}

	pub fn origin(&self) -> &Vector3D {
		&self.origin
	}

	pub fn direction(&self) -> &Vector3D {
		&self.direction
	}

	pub fn point_along(&self, t: f64) -> Vector3D {
		self.origin + self.direction * t
	}
}

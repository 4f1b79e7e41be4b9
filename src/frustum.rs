use serde::Deserialize;
use serde::Serialize;

/// Bounds of an off-center perspective frustum in eye space.
///
/// `near` and `far` are positive distances along the camera's -Z axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerspectiveOptions {
	pub left: f64,
	pub right: f64,
	pub top: f64,
	pub bottom: f64,
	pub near: f64,
	pub far: f64,
}

impl Default for PerspectiveOptions {
	fn default() -> Self {
		Self {
			left: -1.0,
			right: 1.0,
			top: 1.0,
			bottom: -1.0,
			near: 1.0,
			far: 4.0,
		}
	}
}

impl PerspectiveOptions {
	pub fn width(&self) -> f64 {
		self.right - self.left
	}

	pub fn height(&self) -> f64 {
		self.top - self.bottom
	}

	pub fn depth(&self) -> f64 {
		self.far - self.near
	}
}

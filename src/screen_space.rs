use serde::Deserialize;
use serde::Serialize;

use crate::frustum::PerspectiveOptions;
use crate::matrix::Matrix3D;
use crate::vector::Vector3D;

/// A position on the canvas in pixels, y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
	pub x: f64,
	pub y: f64,
}

impl Point2D {
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions2D {
	pub width: f64,
	pub height: f64,
}

impl Default for Dimensions2D {
	fn default() -> Self {
		Self { width: 500.0, height: 500.0 }
	}
}

/// The point on the near plane, in eye coordinates, under the given pixel.
pub fn screen_coords_to_eye(canvas: &Dimensions2D, point: &Point2D, perspective: &PerspectiveOptions) -> Vector3D {
	let x_pct = point.x / canvas.width;
	// Pixel rows count down from the top, eye space y points up.
	let y_pct = (canvas.height - point.y) / canvas.height;

	let x = perspective.left + x_pct * perspective.width();
	let y = perspective.bottom + y_pct * perspective.height();

	Vector3D::new(x, y, -perspective.near)
}

/// The world-space point on the camera's near plane under the given pixel.
///
/// `camera_transform` maps camera-local coordinates into the world, i.e. it
/// is the inverse of the view matrix.
pub fn screen_coords_to_world(
	canvas: &Dimensions2D,
	point: &Point2D,
	perspective: &PerspectiveOptions,
	camera_transform: &Matrix3D,
) -> Vector3D {
	let point_relative_to_camera = screen_coords_to_eye(canvas, point, perspective);
	camera_transform.transform_vector(&point_relative_to_camera)
}

/// Projects a world-space point to canvas pixels.
///
/// Returns `None` for points at or behind the eye, whose clip-space `w` is
/// not positive.
pub fn world_to_screen(
	canvas: &Dimensions2D,
	point: &Vector3D,
	projection: &Matrix3D,
	view: &Matrix3D,
) -> Option<Point2D> {
	let clip = projection.multiply(view).transform_vector(point);
	if clip.w <= 0.0 {
		return None;
	}
	let ndc = clip.perspective_divide();
	let x = (ndc.x + 1.0) / 2.0 * canvas.width;
	let y = canvas.height - (ndc.y + 1.0) / 2.0 * canvas.height;
	Some(Point2D::new(x, y))
}

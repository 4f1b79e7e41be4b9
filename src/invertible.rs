use serde::Deserialize;
use serde::Serialize;

use crate::matrix::Matrix3D;
use crate::vector::Vector3D;

/// A rigid primitive that can be undone exactly.
///
/// Only translations and rotations belong here. A scale would need its
/// reciprocal rather than its negation, so it is deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TransformOp {
	Translate(Vector3D),
	RotateX(f64),
	RotateY(f64),
	RotateZ(f64),
}

impl TransformOp {
	pub fn inverted(&self) -> TransformOp {
		match *self {
			TransformOp::Translate(v) => TransformOp::Translate(-v),
			TransformOp::RotateX(radians) => TransformOp::RotateX(-radians),
			TransformOp::RotateY(radians) => TransformOp::RotateY(-radians),
			TransformOp::RotateZ(radians) => TransformOp::RotateZ(-radians),
		}
	}

	/// Right-multiplies the primitive onto `m`.
	pub fn apply(&self, m: &Matrix3D) -> Matrix3D {
		match self {
			TransformOp::Translate(v) => m.translate(v),
			TransformOp::RotateX(radians) => m.rotate_x(*radians),
			TransformOp::RotateY(radians) => m.rotate_y(*radians),
			TransformOp::RotateZ(radians) => m.rotate_z(*radians),
		}
	}
}

/// Keeps track of the rigid transforms applied to it so the inverse can be
/// produced by undoing them in reverse order instead of inverting the
/// accumulated matrix numerically (Real-Time Rendering, 4th ed., 4.1.8).
///
/// Each builder call returns a new stack; the receiver is left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<TransformOp>", into = "Vec<TransformOp>")]
pub struct InvertibleTransforms3D {
	matrix: Matrix3D,
	ops: Vec<TransformOp>,
}

impl InvertibleTransforms3D {
	pub fn new() -> Self {
		Self::default()
	}

	/// Replays an op log recorded in application order.
	pub fn from_ops(ops: impl IntoIterator<Item = TransformOp>) -> Self {
		ops.into_iter().fold(Self::new(), |stack, op| stack.push(op))
	}

	fn push(&self, op: TransformOp) -> Self {
		let mut ops = self.ops.clone();
		ops.push(op);
		Self {
			matrix: op.apply(&self.matrix),
			ops,
		}
	}

	pub fn translate(&self, v: &Vector3D) -> Self {
		self.push(TransformOp::Translate(*v))
	}

	pub fn translate_xyz(&self, x: f64, y: f64, z: f64) -> Self {
		self.translate(&Vector3D::new(x, y, z))
	}

	/// Rotate counter-clockwise around the X axis.
	pub fn rotate_x(&self, radians: f64) -> Self {
		self.push(TransformOp::RotateX(radians))
	}

	/// Rotate counter-clockwise around the Y axis.
	pub fn rotate_y(&self, radians: f64) -> Self {
		self.push(TransformOp::RotateY(radians))
	}

	/// Rotate counter-clockwise around the Z axis.
	pub fn rotate_z(&self, radians: f64) -> Self {
		self.push(TransformOp::RotateZ(radians))
	}

	/// The accumulated forward transform.
	pub fn matrix(&self) -> &Matrix3D {
		&self.matrix
	}

	/// Recorded ops, first call first.
	pub fn ops(&self) -> &[TransformOp] {
		&self.ops
	}

	/// The exact inverse of [`matrix`](Self::matrix).
	pub fn inverse(&self) -> Matrix3D {
		self.ops
			.iter()
			.rev()
			.fold(Matrix3D::identity(), |m, op| op.inverted().apply(&m))
	}
}

impl From<Vec<TransformOp>> for InvertibleTransforms3D {
	fn from(ops: Vec<TransformOp>) -> Self {
		Self::from_ops(ops)
	}
}

impl From<InvertibleTransforms3D> for Vec<TransformOp> {
	fn from(stack: InvertibleTransforms3D) -> Self {
		stack.ops
	}
}

use crate::color::Color;
use crate::matrix::Matrix3D;
use crate::vector::Vector3D;

/// A `mat4` uniform, column-major.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RawMatrix {
	pub value: [[f32; 4]; 4],
}

impl From<&Matrix3D> for RawMatrix {
	fn from(m: &Matrix3D) -> Self {
		let flat = m.to_column_major();
		let mut value = [[0.0; 4]; 4];
		for (col, chunk) in flat.chunks_exact(4).enumerate() {
			value[col].copy_from_slice(chunk);
		}
		Self { value }
	}
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RawPosition {
	pub position: [f32; 3],
}

impl From<&Vector3D> for RawPosition {
	fn from(v: &Vector3D) -> Self {
		Self { position: v.to_array3() }
	}
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RawColor {
	pub color: [f32; 4],
}

impl From<&Color> for RawColor {
	fn from(c: &Color) -> Self {
		Self { color: c.to_array() }
	}
}

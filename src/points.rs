use crate::raw_types::RawPosition;
use crate::vector::Vector3D;

/// An ordered list of points, as fed to a vertex buffer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Points3D {
	points: Vec<Vector3D>,
}

impl Points3D {
	pub fn new(points: Vec<Vector3D>) -> Self {
		Self { points }
	}

	/// Reads consecutive `x, y, z` triples. A trailing partial triple is
	/// ignored.
	pub fn from_flat(values: &[f64]) -> Self {
		let points = values
			.chunks_exact(3)
			.map(|c| Vector3D::new(c[0], c[1], c[2]))
			.collect();
		Self { points }
	}

	pub fn concat(&self, other: &Points3D) -> Points3D {
		let mut points = self.points.clone();
		points.extend_from_slice(&other.points);
		Points3D { points }
	}

	pub fn map(&self, f: impl Fn(&Vector3D) -> Vector3D) -> Points3D {
		Points3D { points: self.points.iter().map(f).collect() }
	}

	pub fn len(&self) -> usize {
		self.points.len()
	}

	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Vector3D> {
		self.points.iter()
	}

	pub fn get(&self, index: usize) -> Option<&Vector3D> {
		self.points.get(index)
	}

	/// Flattened `x, y, z` triples narrowed to `f32`.
	pub fn to_f32_vec(&self) -> Vec<f32> {
		self.points.iter().flat_map(|p| p.to_array3()).collect()
	}

	pub fn to_raw(&self) -> Vec<RawPosition> {
		self.points.iter().map(RawPosition::from).collect()
	}

	/// Bytes ready for a vertex buffer upload.
	pub fn as_bytes(&self) -> Vec<u8> {
		bytemuck::cast_slice(&self.to_raw()).to_vec()
	}
}

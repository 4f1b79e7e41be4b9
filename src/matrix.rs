use crate::error::Error;
use crate::error::Result;
use crate::frustum::PerspectiveOptions;
use crate::points::Points3D;
use crate::vector::Vector3D;

const IDENTITY: [[f64; 4]; 4] = [
	[1.0, 0.0, 0.0, 0.0],
	[0.0, 1.0, 0.0, 0.0],
	[0.0, 0.0, 1.0, 0.0],
	[0.0, 0.0, 0.0, 1.0],
];

/// A 4x4 homogeneous transform stored in row-major order.
///
/// Vectors are columns and are transformed as `M·v`. Every builder method
/// right-multiplies its primitive onto `self`, so in a chain such as
/// `Matrix3D::identity().translate(t).rotate_z(a)` the rotation is applied to
/// a vector first and the translation last.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3D {
	values: [[f64; 4]; 4],
}

impl Default for Matrix3D {
	fn default() -> Self {
		Self::identity()
	}
}

impl Matrix3D {
	pub const fn new(values: [[f64; 4]; 4]) -> Self {
		Self { values }
	}

	pub const fn identity() -> Self {
		Self { values: IDENTITY }
	}

	pub fn values(&self) -> &[[f64; 4]; 4] {
		&self.values
	}

	/// Entry at the given zero-based row and column.
	pub fn value_at(&self, row: usize, col: usize) -> f64 {
		self.values[row][col]
	}

	pub fn translate(&self, v: &Vector3D) -> Matrix3D {
		self.translate_xyz(v.x, v.y, v.z)
	}

	pub fn translate_xyz(&self, x: f64, y: f64, z: f64) -> Matrix3D {
		self.multiply(&Matrix3D::new([
			[1.0, 0.0, 0.0, x],
			[0.0, 1.0, 0.0, y],
			[0.0, 0.0, 1.0, z],
			[0.0, 0.0, 0.0, 1.0],
		]))
	}

	/// Uniform scale.
	pub fn scale(&self, s: f64) -> Matrix3D {
		self.scale_xyz(s, s, s)
	}

	pub fn scale_xyz(&self, x: f64, y: f64, z: f64) -> Matrix3D {
		self.multiply(&Matrix3D::new([
			[x, 0.0, 0.0, 0.0],
			[0.0, y, 0.0, 0.0],
			[0.0, 0.0, z, 0.0],
			[0.0, 0.0, 0.0, 1.0],
		]))
	}

	/// Rotate counter-clockwise around the X axis (+Y towards +Z).
	///
	/// Older WebGL tutorial code rotated clockwise around X and Y, so
	/// scenes ported from it spin the other way.
	pub fn rotate_x(&self, radians: f64) -> Matrix3D {
		let (s, c) = radians.sin_cos();
		self.multiply(&Matrix3D::new([
			[1.0, 0.0, 0.0, 0.0],
			[0.0, c, -s, 0.0],
			[0.0, s, c, 0.0],
			[0.0, 0.0, 0.0, 1.0],
		]))
	}

	/// Rotate counter-clockwise around the Y axis (+Z towards +X).
	pub fn rotate_y(&self, radians: f64) -> Matrix3D {
		let (s, c) = radians.sin_cos();
		self.multiply(&Matrix3D::new([
			[c, 0.0, s, 0.0],
			[0.0, 1.0, 0.0, 0.0],
			[-s, 0.0, c, 0.0],
			[0.0, 0.0, 0.0, 1.0],
		]))
	}

	/// Rotate counter-clockwise around the Z axis (+X towards +Y).
	pub fn rotate_z(&self, radians: f64) -> Matrix3D {
		let (s, c) = radians.sin_cos();
		self.multiply(&Matrix3D::new([
			[c, -s, 0.0, 0.0],
			[s, c, 0.0, 0.0],
			[0.0, 0.0, 1.0, 0.0],
			[0.0, 0.0, 0.0, 1.0],
		]))
	}

	/// `self · other`: the result applies `other` first, then `self`.
	pub fn multiply(&self, other: &Matrix3D) -> Matrix3D {
		// Each column of the product is the corresponding column of `other`
		// pushed through `self`.
		let cols = [0, 1, 2, 3].map(|i| self.transform_vector(&other.column(i)));
		Matrix3D::new([
			[cols[0].x, cols[1].x, cols[2].x, cols[3].x],
			[cols[0].y, cols[1].y, cols[2].y, cols[3].y],
			[cols[0].z, cols[1].z, cols[2].z, cols[3].z],
			[cols[0].w, cols[1].w, cols[2].w, cols[3].w],
		])
	}

	pub fn transform_vector(&self, v: &Vector3D) -> Vector3D {
		let row = |r: usize| {
			let m = &self.values[r];
			m[0] * v.x + m[1] * v.y + m[2] * v.z + m[3] * v.w
		};
		Vector3D::with_w(row(0), row(1), row(2), row(3))
	}

	pub fn transform_points(&self, points: &Points3D) -> Points3D {
		points.map(|p| self.transform_vector(p))
	}

	/// Column `col` (zero-based) as a vector.
	pub fn column(&self, col: usize) -> Vector3D {
		let m = &self.values;
		Vector3D::with_w(m[0][col], m[1][col], m[2][col], m[3][col])
	}

	pub fn transpose(&self) -> Matrix3D {
		let cols = [0, 1, 2, 3].map(|i| self.column(i));
		Matrix3D::new(cols.map(|c| [c.x, c.y, c.z, c.w]))
	}

	/// Apply `f` to every entry.
	pub fn map(&self, f: impl Fn(f64) -> f64) -> Matrix3D {
		Matrix3D::new(self.values.map(|row| row.map(&f)))
	}

	pub fn multiply_by_constant(&self, n: f64) -> Matrix3D {
		self.map(|value| value * n)
	}

	/// Builds the matrix that takes eye coordinates into clip coordinates.
	///
	/// Eye space is right-handed with the camera looking down -Z, so `near`
	/// and `far` are given as positive distances. Clip coordinates usually
	/// end up with `w != 1`; the perspective divide turns them into NDC,
	/// where the near plane lands on z = -1 and the far plane on z = 1.
	pub fn perspective_projection(options: &PerspectiveOptions) -> Matrix3D {
		let PerspectiveOptions { left, right, top, bottom, near, far } = *options;
		let width = options.width();
		let height = options.height();
		let depth = options.depth();
		let double_near = 2.0 * near;
		Matrix3D::new([
			[double_near / width, 0.0, (right + left) / width, 0.0],
			[0.0, double_near / height, (top + bottom) / height, 0.0],
			[0.0, 0.0, -(far + near) / depth, -2.0 * far * near / depth],
			[0.0, 0.0, -1.0, 0.0],
		])
	}

	pub fn determinant(&self) -> f64 {
		let m = self.flatten();
		let adj = adjugate(&m);
		determinant_from(&m, &adj)
	}

	/// General inverse by cofactor expansion.
	///
	/// Fails only when the determinant is exactly zero; nearly singular
	/// matrices produce large but finite entries.
	pub fn inverse(&self) -> Result<Matrix3D> {
		let m = self.flatten();
		let adj = adjugate(&m);
		let det = determinant_from(&m, &adj);
		if det == 0.0 {
			return Err(Error::SingularMatrix);
		}
		let inv_det = 1.0 / det;
		let mut values = [[0.0; 4]; 4];
		for (i, value) in adj.iter().enumerate() {
			values[i / 4][i % 4] = value * inv_det;
		}
		Ok(Matrix3D::new(values))
	}

	/// Column-major single-precision entries, the layout GLSL expects for a
	/// `mat4` uniform.
	pub fn to_column_major(&self) -> [f32; 16] {
		let mut out = [0.0f32; 16];
		for col in 0..4 {
			for row in 0..4 {
				out[col * 4 + row] = self.values[row][col] as f32;
			}
		}
		out
	}

	pub fn approx_eq(&self, other: &Matrix3D, epsilon: f64) -> bool {
		self.flatten()
			.iter()
			.zip(other.flatten().iter())
			.all(|(a, b)| (a - b).abs() <= epsilon)
	}

	fn flatten(&self) -> [f64; 16] {
		let mut out = [0.0; 16];
		for (i, value) in self.values.iter().flatten().enumerate() {
			out[i] = *value;
		}
		out
	}
}

impl std::ops::Mul for Matrix3D {
	type Output = Matrix3D;

	fn mul(self, other: Matrix3D) -> Matrix3D {
		self.multiply(&other)
	}
}

impl std::ops::Mul<Vector3D> for Matrix3D {
	type Output = Vector3D;

	fn mul(self, v: Vector3D) -> Vector3D {
		self.transform_vector(&v)
	}
}

fn determinant_from(m: &[f64; 16], adj: &[f64; 16]) -> f64 {
	m[0] * adj[0] + m[1] * adj[4] + m[2] * adj[8] + m[3] * adj[12]
}

/// Transposed cofactor matrix of a flattened 4x4 matrix (MESA's GLU
/// `invert_matrix` expansion). The expansion is layout agnostic: a row-major
/// input yields a row-major adjugate.
fn adjugate(m: &[f64; 16]) -> [f64; 16] {
	let mut inv = [0.0; 16];

	inv[0] = m[5] * m[10] * m[15] - m[5] * m[11] * m[14] - m[9] * m[6] * m[15]
		+ m[9] * m[7] * m[14] + m[13] * m[6] * m[11] - m[13] * m[7] * m[10];
	inv[4] = -m[4] * m[10] * m[15] + m[4] * m[11] * m[14] + m[8] * m[6] * m[15]
		- m[8] * m[7] * m[14] - m[12] * m[6] * m[11] + m[12] * m[7] * m[10];
	inv[8] = m[4] * m[9] * m[15] - m[4] * m[11] * m[13] - m[8] * m[5] * m[15]
		+ m[8] * m[7] * m[13] + m[12] * m[5] * m[11] - m[12] * m[7] * m[9];
	inv[12] = -m[4] * m[9] * m[14] + m[4] * m[10] * m[13] + m[8] * m[5] * m[14]
		- m[8] * m[6] * m[13] - m[12] * m[5] * m[10] + m[12] * m[6] * m[9];

	inv[1] = -m[1] * m[10] * m[15] + m[1] * m[11] * m[14] + m[9] * m[2] * m[15]
		- m[9] * m[3] * m[14] - m[13] * m[2] * m[11] + m[13] * m[3] * m[10];
	inv[5] = m[0] * m[10] * m[15] - m[0] * m[11] * m[14] - m[8] * m[2] * m[15]
		+ m[8] * m[3] * m[14] + m[12] * m[2] * m[11] - m[12] * m[3] * m[10];
	inv[9] = -m[0] * m[9] * m[15] + m[0] * m[11] * m[13] + m[8] * m[1] * m[15]
		- m[8] * m[3] * m[13] - m[12] * m[1] * m[11] + m[12] * m[3] * m[9];
	inv[13] = m[0] * m[9] * m[14] - m[0] * m[10] * m[13] - m[8] * m[1] * m[14]
		+ m[8] * m[2] * m[13] + m[12] * m[1] * m[10] - m[12] * m[2] * m[9];

	inv[2] = m[1] * m[6] * m[15] - m[1] * m[7] * m[14] - m[5] * m[2] * m[15]
		+ m[5] * m[3] * m[14] + m[13] * m[2] * m[7] - m[13] * m[3] * m[6];
	inv[6] = -m[0] * m[6] * m[15] + m[0] * m[7] * m[14] + m[4] * m[2] * m[15]
		- m[4] * m[3] * m[14] - m[12] * m[2] * m[7] + m[12] * m[3] * m[6];
	inv[10] = m[0] * m[5] * m[15] - m[0] * m[7] * m[13] - m[4] * m[1] * m[15]
		+ m[4] * m[3] * m[13] + m[12] * m[1] * m[7] - m[12] * m[3] * m[5];
	inv[14] = -m[0] * m[5] * m[14] + m[0] * m[6] * m[13] + m[4] * m[1] * m[14]
		- m[4] * m[2] * m[13] - m[12] * m[1] * m[6] + m[12] * m[2] * m[5];

	inv[3] = -m[1] * m[6] * m[11] + m[1] * m[7] * m[10] + m[5] * m[2] * m[11]
		- m[5] * m[3] * m[10] - m[9] * m[2] * m[7] + m[9] * m[3] * m[6];
	inv[7] = m[0] * m[6] * m[11] - m[0] * m[7] * m[10] - m[4] * m[2] * m[11]
		+ m[4] * m[3] * m[10] + m[8] * m[2] * m[7] - m[8] * m[3] * m[6];
	inv[11] = -m[0] * m[5] * m[11] + m[0] * m[7] * m[9] + m[4] * m[1] * m[11]
		- m[4] * m[3] * m[9] - m[8] * m[1] * m[7] + m[8] * m[3] * m[5];
	inv[15] = m[0] * m[5] * m[10] - m[0] * m[6] * m[9] - m[4] * m[1] * m[10]
		+ m[4] * m[2] * m[9] + m[8] * m[1] * m[6] - m[8] * m[2] * m[5];

	inv
}

#[cfg(test)]
mod tests {
	use std::f64::consts::FRAC_PI_2;

	use super::*;

	const EPSILON: f64 = 1e-6;

	fn sample_matrix() -> Matrix3D {
		Matrix3D::new([
			[2.0, 0.5, -1.0, 3.0],
			[0.0, 1.5, 4.0, -2.0],
			[1.0, -3.0, 2.5, 0.25],
			[0.5, 0.0, 1.0, 1.0],
		])
	}

	#[test]
	fn default_is_identity() {
		assert_eq!(Matrix3D::default(), Matrix3D::identity());
		let v = Vector3D::with_w(1.0, 2.0, 3.0, 4.0);
		assert_eq!(Matrix3D::identity().transform_vector(&v), v);
	}

	#[test]
	fn chain_applies_last_call_first() {
		let m = Matrix3D::identity().translate_xyz(1.0, 0.0, 0.0).rotate_z(FRAC_PI_2);
		let p = m.transform_vector(&Vector3D::new(1.0, 0.0, 0.0));
		assert!(p.approx_eq(&Vector3D::new(1.0, 1.0, 0.0), EPSILON));
	}

	#[test]
	fn multiply_composes_right_to_left() {
		let a = Matrix3D::identity().rotate_x(0.3);
		let b = Matrix3D::identity().translate_xyz(1.0, -2.0, 0.5);
		let v = Vector3D::new(0.2, 0.4, -0.7);
		let lhs = (a * b).transform_vector(&v);
		let rhs = a.transform_vector(&b.transform_vector(&v));
		assert!(lhs.approx_eq(&rhs, EPSILON));
	}

	#[test]
	fn rotations_are_counter_clockwise() {
		let id = Matrix3D::identity();
		let z = id.rotate_z(FRAC_PI_2) * Vector3D::direction(1.0, 0.0, 0.0);
		assert!(z.approx_eq(&Vector3D::direction(0.0, 1.0, 0.0), EPSILON));
		let x = id.rotate_x(FRAC_PI_2) * Vector3D::direction(0.0, 1.0, 0.0);
		assert!(x.approx_eq(&Vector3D::direction(0.0, 0.0, 1.0), EPSILON));
		let y = id.rotate_y(FRAC_PI_2) * Vector3D::direction(0.0, 0.0, 1.0);
		assert!(y.approx_eq(&Vector3D::direction(1.0, 0.0, 0.0), EPSILON));
	}

	#[test]
	fn rotation_round_trip() {
		for theta in [0.0, 0.1, 1.0, -2.5, 3.9, 100.0] {
			let id = Matrix3D::identity();
			assert!(id.rotate_x(theta).multiply(&id.rotate_x(-theta)).approx_eq(&id, EPSILON));
			assert!(id.rotate_y(theta).multiply(&id.rotate_y(-theta)).approx_eq(&id, EPSILON));
			assert!(id.rotate_z(theta).multiply(&id.rotate_z(-theta)).approx_eq(&id, EPSILON));
		}
	}

	#[test]
	fn translation_ignores_directions() {
		let m = Matrix3D::identity().translate_xyz(5.0, 6.0, 7.0);
		let d = Vector3D::direction(1.0, 2.0, 3.0);
		assert_eq!(m.transform_vector(&d), d);
		let p = Vector3D::new(1.0, 2.0, 3.0);
		assert_eq!(m.transform_vector(&p), Vector3D::new(6.0, 8.0, 10.0));
	}

	#[test]
	fn scale_xyz_mirrors() {
		let m = Matrix3D::identity().scale_xyz(-1.0, 1.0, 1.0);
		assert_eq!(m * Vector3D::new(2.0, 3.0, 4.0), Vector3D::new(-2.0, 3.0, 4.0));
	}

	#[test]
	fn inverse_of_general_matrix() {
		let m = sample_matrix();
		let inv = m.inverse().unwrap();
		assert!(m.multiply(&inv).approx_eq(&Matrix3D::identity(), EPSILON));
		assert!(inv.multiply(&m).approx_eq(&Matrix3D::identity(), EPSILON));
	}

	#[test]
	fn inverse_of_projection() {
		let p = Matrix3D::perspective_projection(&PerspectiveOptions::default());
		let inv = p.inverse().unwrap();
		assert!(p.multiply(&inv).approx_eq(&Matrix3D::identity(), EPSILON));
	}

	#[test]
	fn singular_matrix_fails() {
		let m = Matrix3D::identity().scale_xyz(1.0, 0.0, 1.0);
		assert_eq!(m.determinant(), 0.0);
		assert_eq!(m.inverse(), Err(Error::SingularMatrix));

		let duplicate_rows = Matrix3D::new([
			[1.0, 2.0, 3.0, 4.0],
			[1.0, 2.0, 3.0, 4.0],
			[0.0, 1.0, 0.0, 0.0],
			[0.0, 0.0, 0.0, 1.0],
		]);
		assert_eq!(duplicate_rows.inverse(), Err(Error::SingularMatrix));
	}

	#[test]
	fn determinant_of_scale() {
		let m = Matrix3D::identity().scale_xyz(2.0, 3.0, 4.0);
		assert!((m.determinant() - 24.0).abs() < EPSILON);
	}

	#[test]
	fn near_plane_maps_to_minus_one() {
		let p = Matrix3D::perspective_projection(&PerspectiveOptions {
			left: -1.0,
			right: 1.0,
			top: 1.0,
			bottom: -1.0,
			near: 1.0,
			far: 3.0,
		});
		let near = (p * Vector3D::new(0.0, 0.0, -1.0)).perspective_divide();
		assert!((near.z + 1.0).abs() < EPSILON);
		let far = (p * Vector3D::new(0.0, 0.0, -3.0)).perspective_divide();
		assert!((far.z - 1.0).abs() < EPSILON);
		let corner = (p * Vector3D::new(1.0, 1.0, -1.0)).perspective_divide();
		assert!(corner.approx_eq(&Vector3D::new(1.0, 1.0, -1.0), EPSILON));
	}

	#[test]
	fn off_center_frustum_maps_bounds_to_ndc_edges() {
		let options = PerspectiveOptions {
			left: 0.0,
			right: 2.0,
			top: 1.0,
			bottom: 0.5,
			near: 2.0,
			far: 10.0,
		};
		let p = Matrix3D::perspective_projection(&options);
		let lower_left = (p * Vector3D::new(0.0, 0.5, -2.0)).perspective_divide();
		assert!(lower_left.approx_eq(&Vector3D::new(-1.0, -1.0, -1.0), EPSILON));
		let upper_right = (p * Vector3D::new(2.0, 1.0, -2.0)).perspective_divide();
		assert!(upper_right.approx_eq(&Vector3D::new(1.0, 1.0, -1.0), EPSILON));
	}

	#[test]
	fn column_major_layout() {
		let m = Matrix3D::identity().translate_xyz(7.0, 8.0, 9.0);
		let flat = m.to_column_major();
		assert_eq!(&flat[12..16], &[7.0, 8.0, 9.0, 1.0]);
		assert_eq!(flat[0], 1.0);
		assert_eq!(flat[1], 0.0);
	}

	#[test]
	fn transpose_swaps_rows_and_columns() {
		let m = sample_matrix();
		let t = m.transpose();
		assert_eq!(t.value_at(0, 3), m.value_at(3, 0));
		assert_eq!(t.transpose(), m);
	}

	#[test]
	fn multiply_by_constant_scales_every_entry() {
		let m = Matrix3D::identity().multiply_by_constant(3.0);
		assert_eq!(m.value_at(2, 2), 3.0);
		assert_eq!(m.value_at(3, 3), 3.0);
		assert_eq!(m.value_at(0, 1), 0.0);
	}
}

/// Failures surfaced by the math and geometry types.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
	#[error("matrix is singular (determinant is zero)")]
	SingularMatrix,
	#[error("cannot normalize a zero-length vector")]
	DegenerateVector,
	#[error("invalid hex color: {0:?}")]
	InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, Error>;

use crate::error::Error;
use crate::error::Result;
use crate::vector::Vector3D;

/// An RGBA color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
	pub red: f64,
	pub green: f64,
	pub blue: f64,
	pub alpha: f64,
}

pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
pub const PURPLE: Color = Color::rgb(237.0 / 255.0, 34.0 / 255.0, 93.0 / 255.0);
pub const BLUE: Color = Color::rgb(45.0 / 255.0, 123.0 / 255.0, 182.0 / 255.0);

impl Color {
	pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
		Self { red, green, blue, alpha: 1.0 }
	}

	pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
		Self { red, green, blue, alpha }
	}

	/// Parses `#rrggbb` (the `#` is optional, case is ignored).
	pub fn from_hex(hex: &str) -> Result<Color> {
		let digits = hex.strip_prefix('#').unwrap_or(hex);
		if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
			return Err(Error::InvalidColor(hex.to_string()));
		}
		let channel = |i: usize| {
			u8::from_str_radix(&digits[i..i + 2], 16)
				.map(|v| v as f64 / 255.0)
				.map_err(|_| Error::InvalidColor(hex.to_string()))
		};
		Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
	}

	/// The color as a homogeneous vector, alpha in `w`.
	pub fn to_vector(&self) -> Vector3D {
		Vector3D::with_w(self.red, self.green, self.blue, self.alpha)
	}

	pub fn to_array(&self) -> [f32; 4] {
		[self.red as f32, self.green as f32, self.blue as f32, self.alpha as f32]
	}
}

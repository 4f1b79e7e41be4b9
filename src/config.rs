use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;

use crate::frustum::PerspectiveOptions;
use crate::screen_space::Dimensions2D;

/// Settings for the spaceship picking scene, usually read from JSON.
///
/// Every field is optional in the file and falls back to the values the
/// demo ships with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
	pub perspective: PerspectiveOptions,
	pub canvas: Dimensions2D,
	pub ship_count: usize,
	pub camera_distance: f64,
	pub seed: Option<u64>,
	pub log_level: log::LevelFilter,
}

impl Default for SceneConfig {
	fn default() -> Self {
		Self {
			perspective: PerspectiveOptions::default(),
			canvas: Dimensions2D::default(),
			ship_count: 30,
			camera_distance: 2.25,
			seed: None,
			log_level: log::LevelFilter::Info,
		}
	}
}

impl SceneConfig {
	pub fn from_json(json: &str) -> anyhow::Result<Self> {
		let config: SceneConfig = serde_json::from_str(json).context("invalid scene config")?;
		config.validate()?;
		Ok(config)
	}

	pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
		let path = path.as_ref();
		let json = std::fs::read_to_string(path)
			.with_context(|| format!("failed to read scene config {}", path.display()))?;
		Self::from_json(&json).with_context(|| format!("in {}", path.display()))
	}

	fn validate(&self) -> anyhow::Result<()> {
		let p = &self.perspective;
		anyhow::ensure!(p.near > 0.0 && p.far > p.near, "frustum needs 0 < near < far");
		anyhow::ensure!(p.width() != 0.0 && p.height() != 0.0, "frustum has zero width or height");
		anyhow::ensure!(
			self.canvas.width > 0.0 && self.canvas.height > 0.0,
			"canvas dimensions must be positive"
		);
		Ok(())
	}
}

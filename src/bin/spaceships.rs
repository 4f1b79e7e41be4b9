use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use gl3d::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Runs the spaceship picking scene headlessly and reports what each click hits.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
	/// Scene config (JSON). Defaults are used when omitted.
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Ticks to simulate before the clicks.
	#[arg(short, long, default_value_t = 0)]
	ticks: u32,

	/// Pixel to click, as `x,y`. May be repeated.
	#[arg(long, value_parser = parse_point)]
	click: Vec<Point2D>,

	/// Overrides the config's random seed.
	#[arg(long)]
	seed: Option<u64>,
}

fn parse_point(s: &str) -> std::result::Result<Point2D, String> {
	let (x, y) = s.split_once(',').ok_or_else(|| format!("expected x,y but got {:?}", s))?;
	let x = x.trim().parse::<f64>().map_err(|e| e.to_string())?;
	let y = y.trim().parse::<f64>().map_err(|e| e.to_string())?;
	Ok(Point2D::new(x, y))
}

fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	let config = match &args.config {
		Some(path) => SceneConfig::load(path)?,
		None => SceneConfig::default(),
	};
	gl3d::init_logging(config.log_level).context("logger already initialized")?;

	let mut rng = match args.seed.or(config.seed) {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_entropy(),
	};

	let mut scene = Scene::from_config(&config, &mut rng);
	log::info!("created {} spaceships", scene.spaceships().len());

	for _ in 0..args.ticks {
		scene = scene.apply(SceneAction::Tick, &config.canvas)?;
	}
	log::info!("camera at {:?} after {} ticks", scene.camera_position(), args.ticks);

	for point in &args.click {
		let ray = scene.camera_ray(&config.canvas, point)?;
		let hits = scene.hits(&ray);
		if hits.is_empty() {
			log::info!("click at ({}, {}) hit nothing", point.x, point.y);
		} else {
			for i in &hits {
				let ship = &scene.spaceships()[*i];
				log::info!("click at ({}, {}) hit ship {} centered at {:?}", point.x, point.y, i, ship.center());
			}
		}
		scene = scene.shoot_ray(&ray);
	}

	Ok(())
}

use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::color::Color;
use crate::color::BLUE;
use crate::color::PURPLE;
use crate::config::SceneConfig;
use crate::error::Result;
use crate::frustum::PerspectiveOptions;
use crate::intersection::ray_sphere_intersection;
use crate::invertible::InvertibleTransforms3D;
use crate::matrix::Matrix3D;
use crate::ray::Ray3D;
use crate::screen_space::screen_coords_to_world;
use crate::screen_space::Dimensions2D;
use crate::screen_space::Point2D;
use crate::vector::Vector3D;

/// Fraction of a ship's scale covered by its spherical collider.
const COLLIDER_SCALE: f64 = 0.5;
const CAMERA_ROTATION_PER_TICK: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpaceshipState {
	pub orbit_theta: f64,
	pub orbit_theta_velocity: f64,
	pub distance_from_center: f64,
	pub scale: f64,
	pub ship_theta: f64,
	pub ship_theta_velocity: f64,
	pub z: f64,
	pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Spaceship {
	state: SpaceshipState,
	/// Object space to world space.
	transform: Matrix3D,
}

impl Spaceship {
	/// The ship's surface normal, in object space.
	pub const NORMAL: Vector3D = Vector3D::direction(0.0, 0.0, 1.0);

	pub fn new(state: SpaceshipState) -> Self {
		let transform = Matrix3D::identity()
			.rotate_z(state.orbit_theta)
			.translate_xyz(state.distance_from_center, 0.0, state.z)
			.scale(state.scale)
			.rotate_y(state.ship_theta);
		Self { state, transform }
	}

	pub fn random(rng: &mut impl Rng, z: f64) -> Self {
		Self::new(SpaceshipState {
			orbit_theta: rng.gen(),
			orbit_theta_velocity: rng.gen::<f64>() * 0.01,
			distance_from_center: rng.gen(),
			scale: 0.5,
			ship_theta: rng.gen(),
			ship_theta_velocity: rng.gen::<f64>() * 0.05,
			z,
			color: PURPLE,
		})
	}

	pub fn state(&self) -> &SpaceshipState {
		&self.state
	}

	pub fn transform(&self) -> &Matrix3D {
		&self.transform
	}

	pub fn center(&self) -> Vector3D {
		self.transform.transform_vector(&Vector3D::default())
	}

	pub fn collider_radius(&self) -> f64 {
		self.state.scale * COLLIDER_SCALE
	}

	/// Model matrix for drawing the collider as unit circles.
	pub fn collider_transform(&self) -> Matrix3D {
		self.transform.scale(COLLIDER_SCALE)
	}

	pub fn does_ray_intersect(&self, ray: &Ray3D) -> bool {
		ray_sphere_intersection(ray, &self.center(), self.collider_radius()).is_some()
	}

	pub fn with_color(&self, color: Color) -> Spaceship {
		Spaceship::new(SpaceshipState { color, ..self.state })
	}

	pub fn update(&self) -> Spaceship {
		let state = &self.state;
		Spaceship::new(SpaceshipState {
			orbit_theta: state.orbit_theta + state.orbit_theta_velocity,
			ship_theta: state.ship_theta + state.ship_theta_velocity,
			..*state
		})
	}
}

/// The pick ray from the camera through a clicked pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRay {
	pub ray: Ray3D,
}

impl CameraRay {
	pub fn new(
		camera_transform: &InvertibleTransforms3D,
		canvas: &Dimensions2D,
		coords: &Point2D,
		perspective: &PerspectiveOptions,
	) -> Result<Self> {
		let camera = camera_transform.matrix();
		let camera_position = camera.transform_vector(&Vector3D::default());
		let screen_point_in_world = screen_coords_to_world(canvas, coords, perspective, camera);
		let ray = Ray3D::from_to(camera_position, screen_point_in_world)?;
		Ok(Self { ray })
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneState {
	pub perspective: PerspectiveOptions,
	pub spaceships: Vec<Spaceship>,
	pub camera_rotation: f64,
	pub camera_distance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneAction {
	Click(Point2D),
	Tick,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
	state: SceneState,
	/// Eye space to clip space.
	projection_transform: Matrix3D,
	/// Places the camera in the world.
	camera_transform: InvertibleTransforms3D,
	/// World space to eye space.
	view_transform: Matrix3D,
}

impl Scene {
	pub fn new(state: SceneState) -> Self {
		let projection_transform = Matrix3D::perspective_projection(&state.perspective);
		let camera_transform = InvertibleTransforms3D::new()
			.rotate_y(state.camera_rotation)
			.translate_xyz(0.0, 0.0, state.camera_distance);
		let view_transform = camera_transform.inverse();
		Self {
			state,
			projection_transform,
			camera_transform,
			view_transform,
		}
	}

	/// Ships spread evenly over `z` in `-1..1`.
	pub fn from_config(config: &SceneConfig, rng: &mut impl Rng) -> Self {
		let count = config.ship_count;
		let spaceships = (0..count)
			.map(|i| Spaceship::random(&mut *rng, -1.0 + (i as f64 / count as f64) * 2.0))
			.collect();
		Scene::new(SceneState {
			perspective: config.perspective,
			spaceships,
			camera_rotation: 0.0,
			camera_distance: config.camera_distance,
		})
	}

	pub fn state(&self) -> &SceneState {
		&self.state
	}

	pub fn spaceships(&self) -> &[Spaceship] {
		&self.state.spaceships
	}

	pub fn projection_transform(&self) -> &Matrix3D {
		&self.projection_transform
	}

	pub fn camera_transform(&self) -> &InvertibleTransforms3D {
		&self.camera_transform
	}

	pub fn view_transform(&self) -> &Matrix3D {
		&self.view_transform
	}

	/// World-space position of the camera.
	pub fn camera_position(&self) -> Vector3D {
		self.camera_transform.matrix().transform_vector(&Vector3D::default())
	}

	pub fn update(&self) -> Scene {
		let state = &self.state;
		let camera_rotation = state.camera_rotation + CAMERA_ROTATION_PER_TICK;
		log::trace!("camera rotation {:.4}", camera_rotation);
		Scene::new(SceneState {
			camera_rotation,
			spaceships: state.spaceships.iter().map(Spaceship::update).collect(),
			..state.clone()
		})
	}

	/// Indices of the ships whose colliders the ray passes through.
	pub fn hits(&self, ray: &CameraRay) -> Vec<usize> {
		#[cfg(feature = "parallel")]
		let iter = self.state.spaceships.par_iter();
		#[cfg(not(feature = "parallel"))]
		let iter = self.state.spaceships.iter();

		iter.enumerate()
			.filter(|(_, ship)| ship.does_ray_intersect(&ray.ray))
			.map(|(i, _)| i)
			.collect()
	}

	/// Colors every ship the ray hits blue and the rest purple.
	pub fn shoot_ray(&self, ray: &CameraRay) -> Scene {
		let hits = self.hits(ray);
		log::debug!(
			"ray from {:?} along {:?} hit {} of {} ships",
			ray.ray.origin(),
			ray.ray.direction(),
			hits.len(),
			self.state.spaceships.len()
		);
		let spaceships = self
			.state
			.spaceships
			.iter()
			.enumerate()
			.map(|(i, ship)| ship.with_color(if hits.contains(&i) { BLUE } else { PURPLE }))
			.collect();
		Scene::new(SceneState {
			spaceships,
			..self.state.clone()
		})
	}

	pub fn camera_ray(&self, canvas: &Dimensions2D, coords: &Point2D) -> Result<CameraRay> {
		CameraRay::new(&self.camera_transform, canvas, coords, &self.state.perspective)
	}

	pub fn apply(&self, action: SceneAction, canvas: &Dimensions2D) -> Result<Scene> {
		match action {
			SceneAction::Click(point) => Ok(self.shoot_ray(&self.camera_ray(canvas, &point)?)),
			SceneAction::Tick => Ok(self.update()),
		}
	}
}

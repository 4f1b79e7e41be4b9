pub mod error;
pub mod vector;
pub mod matrix;
pub mod frustum;
pub mod invertible;
pub mod ray;
pub mod intersection;
pub mod screen_space;
pub mod color;
pub mod points;
pub mod shapes;
pub mod raw_types;
pub mod scene;
pub mod config;
mod logger;

pub use error::Error;
pub use error::Result;
pub use vector::Vector3D;
pub use matrix::Matrix3D;
pub use frustum::PerspectiveOptions;
pub use invertible::InvertibleTransforms3D;
pub use invertible::TransformOp;
pub use ray::Ray3D;
pub use intersection::ray_sphere_intersection;
pub use intersection::Sphere;
pub use screen_space::*;
pub use color::Color;
pub use points::Points3D;
pub use scene::*;
pub use config::SceneConfig;
pub use logger::init_logging;

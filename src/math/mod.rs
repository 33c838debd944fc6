mod aabb;
mod boundary;
mod ray;

pub use aabb::AABB;
pub use boundary::Boundary;
pub use ray::Ray;

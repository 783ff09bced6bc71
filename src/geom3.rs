pub mod candidates;
mod point_cloud;

pub use point_cloud::{PointCloud, PointCloudFeatures};

pub type Point3 = parry3d_f64::na::Point3<f64>;
pub type Vector3 = parry3d_f64::na::Vector3<f64>;
pub type UnitVec3 = parry3d_f64::na::Unit<Vector3>;
pub type Aabb3 = parry3d_f64::bounding_volume::Aabb;

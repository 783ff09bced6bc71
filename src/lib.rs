//! Weighted sample elimination for turning dense 3D point sets into evenly spaced, blue-noise
//! samples whose prefixes are themselves well distributed (progressive ordering).

use std::error::Error;

pub mod common;
pub mod elimination;
pub mod errors;
pub mod geom3;

pub use elimination::{
    EliminationParams, eliminate, eliminate_in_aabb, eliminate_indices, eliminate_indices_in_aabb,
    eliminate_with,
};
pub use errors::EliminationError;
pub use geom3::{Aabb3, Point3, PointCloud, PointCloudFeatures, UnitVec3, Vector3};

pub type Result<T> = std::result::Result<T, Box<dyn Error>>;

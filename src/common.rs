//! Supporting structures shared by the elimination routines: the spatial index and a few
//! measurements on point sets.

pub mod kd_tree;
pub mod points;

pub use kd_tree::KdTree3;

//! Distance measurements on point sets, mostly used to judge how evenly a sample set is spread.

use crate::Point3;
use crate::common::KdTree3;
use parry3d_f64::na::Point;
use std::num::NonZero;

/// Returns the distance between two points in D-dimensional space.
///
/// # Arguments
///
/// * `a`: the first point
/// * `b`: the second point
///
/// returns: f64
///
/// # Examples
///
/// ```
/// use sample_elim::common::points::dist;
/// use sample_elim::Point3;
/// let a = Point3::new(1.0, 2.0, 0.0);
/// let b = Point3::new(3.0, 2.0, 0.0);
/// assert_eq!(dist(&a, &b), 2.0);
/// ```
pub fn dist<const D: usize>(a: &Point<f64, D>, b: &Point<f64, D>) -> f64 {
    (a - b).norm()
}

/// For every point, the distance to its closest other point. A set with a single point has no
/// neighbors and produces `f64::INFINITY` for it.
///
/// # Arguments
///
/// * `points`: the points to measure
///
/// returns: Vec<f64, Global>
pub fn nearest_neighbor_distances(points: &[Point3]) -> Vec<f64> {
    let tree = KdTree3::new(points);
    let two = NonZero::new(2).expect("2 is non-zero");

    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            tree.nearest(p, two)
                .into_iter()
                .filter(|(j, _)| *j != i)
                .map(|(_, d)| d)
                .next()
                .unwrap_or(f64::INFINITY)
        })
        .collect()
}

/// The smallest distance between any two points in the set, or `None` if there are fewer than
/// two points.
///
/// # Examples
///
/// ```
/// use sample_elim::common::points::min_spacing;
/// use sample_elim::Point3;
/// let points = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(3.0, 0.0, 0.0),
/// ];
/// assert_eq!(min_spacing(&points), Some(1.0));
/// ```
pub fn min_spacing(points: &[Point3]) -> Option<f64> {
    if points.len() < 2 {
        return None;
    }

    nearest_neighbor_distances(points)
        .into_iter()
        .min_by(|a, b| a.total_cmp(b))
}

//! Weighted sample elimination: reduce a dense set of candidate points to a smaller set with a
//! blue-noise (Poisson-disk like) distribution, ordered so that every halving prefix is also well
//! distributed.
//!
//! The domain is the box `[0, extent]`; points near its faces are mirrored across it so that the
//! boundary does not look artificially empty. Use [`eliminate_in_aabb`] for a box with an
//! arbitrary lower corner.

pub mod engine;
mod params;
pub mod progressive;
pub mod queue;
pub mod radius;
pub mod tiling;
pub mod weights;

pub use params::EliminationParams;

use crate::errors::EliminationError;
use crate::{Aabb3, Point3, Result, Vector3};
use engine::elimination_order;
use progressive::progressive_reorder;

/// Eliminate `points` down to `output_size` points using the default parameters.
///
/// # Arguments
///
/// * `points`: the candidate points, all inside `[0, extent]`
/// * `output_size`: how many points to keep, `0 < output_size <= points.len()`
/// * `maximum_distance`: radius over which points influence each other, see
///   [`radius::default_maximum_distance`] for a reasonable choice
/// * `extent`: the size of the sampling domain along each axis
///
/// returns: Result<Vec<OPoint<f64, Const<3>>, Global>, Box<dyn Error, Global>>
///
/// # Examples
///
/// ```
/// use sample_elim::{eliminate, Point3, Vector3};
/// let points = (0..10)
///     .flat_map(|i| (0..10).map(move |j| Point3::new(i as f64 * 0.1, j as f64 * 0.1, 0.0)))
///     .collect::<Vec<_>>();
/// let samples = eliminate(&points, 25, 0.3, &Vector3::new(1.0, 1.0, 0.0)).unwrap();
/// assert_eq!(samples.len(), 25);
/// ```
pub fn eliminate(
    points: &[Point3],
    output_size: usize,
    maximum_distance: f64,
    extent: &Vector3,
) -> Result<Vec<Point3>> {
    eliminate_with(
        points,
        output_size,
        maximum_distance,
        extent,
        &EliminationParams::default(),
    )
}

/// Eliminate `points` down to `output_size` points with explicit parameters.
pub fn eliminate_with(
    points: &[Point3],
    output_size: usize,
    maximum_distance: f64,
    extent: &Vector3,
    params: &EliminationParams,
) -> Result<Vec<Point3>> {
    let order = eliminate_indices(points, output_size, maximum_distance, extent, params)?;
    Ok(order.into_iter().map(|i| points[i]).collect())
}

/// Eliminate inside an arbitrary axis-aligned box. The points are expressed relative to the box's
/// lower corner for the computation, but the returned points are the original values.
pub fn eliminate_in_aabb(
    points: &[Point3],
    output_size: usize,
    maximum_distance: f64,
    aabb: &Aabb3,
    params: &EliminationParams,
) -> Result<Vec<Point3>> {
    let order = eliminate_indices_in_aabb(points, output_size, maximum_distance, aabb, params)?;
    Ok(order.into_iter().map(|i| points[i]).collect())
}

/// Like [`eliminate_indices`], for points inside an arbitrary axis-aligned box.
pub fn eliminate_indices_in_aabb(
    points: &[Point3],
    output_size: usize,
    maximum_distance: f64,
    aabb: &Aabb3,
    params: &EliminationParams,
) -> Result<Vec<usize>> {
    let shifted = points
        .iter()
        .map(|p| Point3::from(p - aabb.mins))
        .collect::<Vec<_>>();
    eliminate_indices(
        &shifted,
        output_size,
        maximum_distance,
        &aabb.extents(),
        params,
    )
}

/// The core entry point: the indices of the selected points, in progressive order when
/// `params.progressive` is set. Returning indices lets callers carry along any per-point data.
///
/// When `output_size == points.len()` the identity order is returned without doing any work.
pub fn eliminate_indices(
    points: &[Point3],
    output_size: usize,
    maximum_distance: f64,
    extent: &Vector3,
    params: &EliminationParams,
) -> Result<Vec<usize>> {
    if output_size == 0 {
        return Err(EliminationError::ZeroOutputSize.into());
    }
    if output_size > points.len() {
        return Err(EliminationError::OutputSizeExceedsInput {
            output_size,
            input_size: points.len(),
        }
        .into());
    }
    if !maximum_distance.is_finite() || maximum_distance <= 0.0 {
        return Err(EliminationError::InvalidMaximumDistance(maximum_distance).into());
    }

    if output_size == points.len() {
        return Ok((0..points.len()).collect());
    }

    params.validate()?;
    check_domain(points, extent)?;

    let mut order =
        elimination_order(points, output_size, maximum_distance, extent, params, false)?;
    if params.progressive {
        progressive_reorder(points, &mut order, maximum_distance, extent, params)?;
    }

    Ok(order)
}

fn check_domain(points: &[Point3], extent: &Vector3) -> std::result::Result<(), EliminationError> {
    if extent.iter().any(|e| !e.is_finite() || *e < 0.0) {
        return Err(EliminationError::InvalidExtent);
    }

    for (index, p) in points.iter().enumerate() {
        let inside = (0..3).all(|d| p[d] >= 0.0 && p[d] <= extent[d]);
        if !inside {
            return Err(EliminationError::PointOutsideDomain { index });
        }
    }

    Ok(())
}

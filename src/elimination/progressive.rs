//! Progressive reordering. The already reduced set is repeatedly eliminated down to half its size,
//! with the eliminated points kept behind the survivors, so that every halving prefix of the final
//! order is itself a well spread subset.

use super::EliminationParams;
use super::engine::elimination_order;
use crate::errors::EliminationError;
use crate::{Point3, Vector3};
use tracing::trace;

/// Reorder `order`, a list of indices into `points`, for progressive consumption.  At each level
/// the maximum distance grows by `params.progressive_scale` while the working prefix halves, until
/// fewer than three points are left.
///
/// # Arguments
///
/// * `points`: the point storage the indices refer to
/// * `order`: the indices to reorder in place
/// * `maximum_distance`: the maximum distance that produced `order`
/// * `extent`: size of the sampling domain
/// * `params`: elimination parameters used for every level
///
/// returns: Result<(), EliminationError>
pub fn progressive_reorder(
    points: &[Point3],
    order: &mut [usize],
    maximum_distance: f64,
    extent: &Vector3,
    params: &EliminationParams,
) -> Result<(), EliminationError> {
    let mut size = order.len();
    let mut distance = maximum_distance;

    let mut level_points = Vec::new();
    let mut level_indices = Vec::new();
    level_points.try_reserve_exact(size)?;
    level_indices.try_reserve_exact(size)?;

    while size >= 3 {
        let half = size / 2;
        distance *= params.progressive_scale;

        level_indices.clear();
        level_indices.extend_from_slice(&order[..size]);
        level_points.clear();
        level_points.extend(level_indices.iter().map(|&i| points[i]));

        let local = elimination_order(&level_points, half, distance, extent, params, true)?;
        for (slot, &l) in order[..size].iter_mut().zip(local.iter()) {
            *slot = level_indices[l];
        }

        trace!(size, half, distance, "progressive level");
        size = half;
    }

    Ok(())
}

//! The weight model: how much a neighbor at a given distance contributes to a point's weight, and
//! the first pass which sums those contributions for every input point.

use super::EliminationParams;
use super::tiling::TiledPoints;
use crate::common::KdTree3;
use crate::errors::EliminationError;
use rayon::prelude::*;

/// The influence of a neighbor at `distance` on a point's weight, `(1 - d / d_max)^alpha`. The
/// distance is first clamped up to `minimum_distance`, so all neighbors closer than that have the
/// same influence.  The result is zero at and beyond `maximum_distance`.
///
/// # Arguments
///
/// * `distance`: the distance between the point and its neighbor
/// * `minimum_distance`: distances below this value are treated as this value
/// * `maximum_distance`: the radius of influence
/// * `alpha`: the falloff exponent
///
/// returns: f64
///
/// # Examples
///
/// ```
/// use sample_elim::elimination::weights::influence;
/// assert_eq!(influence(0.0, 0.0, 1.0, 8.0), 1.0);
/// assert_eq!(influence(0.5, 0.0, 1.0, 8.0), 0.00390625);
/// assert_eq!(influence(1.0, 0.0, 1.0, 8.0), 0.0);
/// ```
pub fn influence(distance: f64, minimum_distance: f64, maximum_distance: f64, alpha: f64) -> f64 {
    let d = distance.max(minimum_distance);
    (1.0 - d / maximum_distance).max(0.0).powf(alpha)
}

/// The minimum distance limit as a fraction of the maximum distance, `(1 - (m / n)^gamma) * beta`.
/// The more points are being removed, the larger the limit, so that heavy reductions tolerate
/// tighter clusters before the influence saturates.
///
/// # Arguments
///
/// * `input_size`: the number of points before elimination
/// * `output_size`: the number of points after elimination
/// * `beta`: scale of the limit
/// * `gamma`: exponent applied to the size ratio
///
/// returns: f64
pub fn limit_fraction(input_size: usize, output_size: usize, beta: f64, gamma: f64) -> f64 {
    let ratio = output_size as f64 / input_size as f64;
    (1.0 - ratio.powf(gamma)) * beta
}

/// The influence function with the distances of one elimination call baked in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightFunction {
    pub alpha: f64,
    pub minimum_distance: f64,
    pub maximum_distance: f64,
}

impl WeightFunction {
    pub fn new(
        params: &EliminationParams,
        input_size: usize,
        output_size: usize,
        maximum_distance: f64,
    ) -> Self {
        let minimum_distance = if params.weight_limiting {
            maximum_distance * limit_fraction(input_size, output_size, params.beta, params.gamma)
        } else {
            0.0
        };

        Self {
            alpha: params.alpha,
            minimum_distance,
            maximum_distance,
        }
    }

    pub fn influence(&self, distance: f64) -> f64 {
        influence(
            distance,
            self.minimum_distance,
            self.maximum_distance,
            self.alpha,
        )
    }
}

/// The initial weight of every input point: the sum of the influences of all neighbors within the
/// maximum distance, found through the tiled index.  Halo copies count towards the point they
/// are near, and any copy of the point itself is ignored.
///
/// Each weight comes from its own neighborhood scan, in the order the tree returns neighbors, so
/// the parallel and sequential passes produce identical values.
///
/// # Arguments
///
/// * `tiled`: the input points and their halo, which `tree` was built from
/// * `tree`: the spatial index over `tiled.points`
/// * `function`: the influence function for this call
/// * `parallel`: spread the scans over the rayon thread pool
///
/// returns: Result<Vec<f64, Global>, EliminationError>
pub fn accumulate_weights(
    tiled: &TiledPoints,
    tree: &KdTree3,
    function: &WeightFunction,
    parallel: bool,
) -> Result<Vec<f64>, EliminationError> {
    let mut weights = Vec::new();
    weights.try_reserve_exact(tiled.input_len())?;
    weights.resize(tiled.input_len(), 0.0);

    let point_weight = |i: usize| -> f64 {
        tree.within(&tiled.points[i], function.maximum_distance)
            .into_iter()
            .filter(|(k, _)| tiled.origins[*k] != i)
            .map(|(_, d)| function.influence(d))
            .sum()
    };

    if parallel {
        weights
            .par_iter_mut()
            .enumerate()
            .for_each(|(i, w)| *w = point_weight(i));
    } else {
        for (i, w) in weights.iter_mut().enumerate() {
            *w = point_weight(i);
        }
    }

    Ok(weights)
}

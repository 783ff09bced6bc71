//! Generation of dense candidate point sets to feed into sample elimination. Everything here is
//! seeded so that the same arguments always produce the same points.

use crate::{Aabb3, Point3, Vector3};
use itertools::iproduct;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniformly distributed random points inside an axis-aligned box.
///
/// # Arguments
///
/// * `count`: the number of points to generate
/// * `aabb`: the box to fill
/// * `seed`: the random seed
///
/// returns: Vec<OPoint<f64, Const<3>>, Global>
pub fn sample_uniform(count: usize, aabb: &Aabb3, seed: u64) -> Vec<Point3> {
    let mut rng = StdRng::seed_from_u64(seed);
    let extents = aabb.extents();
    (0..count)
        .map(|_| {
            let u = Vector3::new(rng.random(), rng.random(), rng.random());
            aabb.mins + u.component_mul(&extents)
        })
        .collect()
}

/// One point per cell of a regular grid covering the box, each displaced randomly within its
/// cell. The number of cells along each axis is the extent divided by `spacing`, rounded, and at
/// least one; flat axes get a single layer.
///
/// # Arguments
///
/// * `aabb`: the box to fill
/// * `spacing`: the approximate cell size
/// * `jitter`: displacement as a fraction of the cell size, from 0 (cell centers) to 1 (anywhere
///   in the cell)
/// * `seed`: the random seed
///
/// returns: Vec<OPoint<f64, Const<3>>, Global>
pub fn sample_jittered_grid(aabb: &Aabb3, spacing: f64, jitter: f64, seed: u64) -> Vec<Point3> {
    let mut rng = StdRng::seed_from_u64(seed);
    let extents = aabb.extents();
    let jitter = jitter.clamp(0.0, 1.0);

    let counts = extents.map(|e| ((e / spacing).round() as usize).max(1));
    let cell = Vector3::new(
        extents.x / counts.x as f64,
        extents.y / counts.y as f64,
        extents.z / counts.z as f64,
    );

    iproduct!(0..counts.x, 0..counts.y, 0..counts.z)
        .map(|(i, j, k)| {
            let u = Vector3::new(
                i as f64 + 0.5 + (rng.random::<f64>() - 0.5) * jitter,
                j as f64 + 0.5 + (rng.random::<f64>() - 0.5) * jitter,
                k as f64 + 0.5 + (rng.random::<f64>() - 0.5) * jitter,
            );
            aabb.mins + u.component_mul(&cell)
        })
        .collect()
}

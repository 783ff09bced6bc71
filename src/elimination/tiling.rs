//! Periodic tiling of the sampling domain. Points close to a face of the bounding box are mirrored
//! to the opposite side so that a range query near the boundary sees a wrapped neighborhood
//! instead of empty space.

use crate::errors::EliminationError;
use crate::{Point3, Vector3};

/// The input points followed by their mirrored halo copies. `origins[k]` is the index of the
/// input point that `points[k]` was created from; the first `input_len` entries are the inputs
/// themselves.
#[derive(Debug, Clone)]
pub struct TiledPoints {
    pub points: Vec<Point3>,
    pub origins: Vec<usize>,
    input_len: usize,
}

impl TiledPoints {
    pub fn input_len(&self) -> usize {
        self.input_len
    }

    /// The number of mirrored copies that were added.
    pub fn halo_len(&self) -> usize {
        self.points.len() - self.input_len
    }

    fn push(&mut self, point: Point3, origin: usize) -> Result<(), EliminationError> {
        self.points.try_reserve(1)?;
        self.origins.try_reserve(1)?;
        self.points.push(point);
        self.origins.push(origin);
        Ok(())
    }
}

/// Lay out the input points without any halo, for when tiling is disabled.
pub fn untiled_points(points: &[Point3]) -> Result<TiledPoints, EliminationError> {
    let mut tiled = TiledPoints {
        points: Vec::new(),
        origins: Vec::new(),
        input_len: points.len(),
    };
    tiled.points.try_reserve_exact(points.len())?;
    tiled.origins.try_reserve_exact(points.len())?;
    tiled.points.extend_from_slice(points);
    tiled.origins.extend(0..points.len());
    Ok(tiled)
}

/// Copy the points and append a mirrored copy of every point lying within `max_distance` of a face
/// of the domain `[0, extent]`. Points near several faces produce edge and corner copies as well.
///
/// The output order is deterministic: inputs first, then the copies grouped by the input index
/// and ordered by axis (x, y, z), upper face before lower face, depth first.  Axes with a zero
/// extent are flat and are not mirrored.
///
/// # Arguments
///
/// * `points`: the input points, all of which are expected to lie inside the domain
/// * `max_distance`: the width of the halo
/// * `extent`: the size of the domain along each axis, with its lower corner at the origin
///
/// returns: Result<TiledPoints, EliminationError>
pub fn tile_points(
    points: &[Point3],
    max_distance: f64,
    extent: &Vector3,
) -> Result<TiledPoints, EliminationError> {
    let mut tiled = untiled_points(points)?;
    for (index, point) in points.iter().enumerate() {
        tile_point(&mut tiled, point, index, max_distance, extent, 0)?;
    }
    Ok(tiled)
}

fn tile_point(
    tiled: &mut TiledPoints,
    point: &Point3,
    index: usize,
    max_distance: f64,
    extent: &Vector3,
    axis: usize,
) -> Result<(), EliminationError> {
    for d in axis..3 {
        if extent[d] <= 0.0 {
            continue;
        }

        if extent[d] - point[d] < max_distance {
            let mut p = *point;
            p[d] -= extent[d];
            tiled.push(p, index)?;
            tile_point(tiled, &p, index, max_distance, extent, d + 1)?;
        }

        if point[d] < max_distance {
            let mut p = *point;
            p[d] += extent[d];
            tiled.push(p, index)?;
            tile_point(tiled, &p, index, max_distance, extent, d + 1)?;
        }
    }

    Ok(())
}

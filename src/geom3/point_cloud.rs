use crate::elimination::{EliminationParams, eliminate_indices_in_aabb};
use crate::{Aabb3, Point3, Result, UnitVec3};

pub trait PointCloudFeatures {
    fn points(&self) -> &[Point3];
    fn normals(&self) -> Option<&[UnitVec3]>;
    fn colors(&self) -> Option<&[[u8; 3]]>;

    fn is_empty(&self) -> bool {
        self.points().is_empty()
    }

    fn len(&self) -> usize {
        self.points().len()
    }

    fn aabb(&self) -> Aabb3 {
        Aabb3::from_points(self.points())
    }

    fn create_from_indices(&self, indices: &[usize]) -> Result<PointCloud> {
        // Verify that all indices are valid
        if indices.iter().any(|&i| i >= self.len()) {
            return Err("Index out of bounds".into());
        }

        let points = self.points();
        let normals = self.normals();
        let colors = self.colors();

        let points = indices.iter().map(|i| points[*i]).collect();
        let normals = normals.map(|n| indices.iter().map(|i| n[*i]).collect());
        let colors = colors.map(|c| indices.iter().map(|i| c[*i]).collect());

        PointCloud::try_new(points, normals, colors)
    }

    /// Reduce the cloud to `count` evenly spread points with weighted sample elimination, using
    /// the cloud's bounding box as the sampling domain. Normals and colors follow their points,
    /// and the result is in progressive order if `params.progressive` is set.
    ///
    /// # Arguments
    ///
    /// * `count`: the number of points to keep
    /// * `maximum_distance`: the radius over which points influence each other
    /// * `params`: elimination parameters
    ///
    /// returns: Result<PointCloud, Box<dyn Error, Global>>
    fn sample_elimination(
        &self,
        count: usize,
        maximum_distance: f64,
        params: &EliminationParams,
    ) -> Result<PointCloud> {
        if self.is_empty() {
            return Err("Cannot sample an empty point cloud".into());
        }

        let indices = eliminate_indices_in_aabb(
            self.points(),
            count,
            maximum_distance,
            &self.aabb(),
            params,
        )?;
        self.create_from_indices(&indices)
    }
}

/// A point cloud with optional normals and colors.
#[derive(Clone)]
pub struct PointCloud {
    points: Vec<Point3>,
    normals: Option<Vec<UnitVec3>>,
    colors: Option<Vec<[u8; 3]>>,
}

impl PointCloud {
    /// Create a new point cloud from points and, optionally, normals and colors.
    ///
    /// # Arguments
    ///
    /// * `points`: The points in the point cloud.
    /// * `normals`: Optional normals to be associated with the points. If provided, the number of
    ///   normals must match the number of points.
    /// * `colors`: Optional colors to be associated with the points. If provided, the number of
    ///   colors must match the number of points.
    ///
    /// returns: PointCloud
    pub fn try_new(
        points: Vec<Point3>,
        normals: Option<Vec<UnitVec3>>,
        colors: Option<Vec<[u8; 3]>>,
    ) -> Result<Self> {
        if let Some(normals) = &normals {
            if normals.len() != points.len() {
                return Err("normals must have the same length as points".into());
            }
        }

        if let Some(colors) = &colors {
            if colors.len() != points.len() {
                return Err("colors must have the same length as points".into());
            }
        }
        Ok(Self {
            points,
            normals,
            colors,
        })
    }
}

impl From<&[Point3]> for PointCloud {
    fn from(points: &[Point3]) -> Self {
        Self {
            points: points.to_vec(),
            normals: None,
            colors: None,
        }
    }
}

impl PointCloudFeatures for PointCloud {
    fn points(&self) -> &[Point3] {
        &self.points
    }

    fn normals(&self) -> Option<&[UnitVec3]> {
        self.normals.as_deref()
    }

    fn colors(&self) -> Option<&[[u8; 3]]> {
        self.colors.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vector3;
    use crate::geom3::candidates::sample_uniform;

    fn colored_cloud(count: usize) -> PointCloud {
        let aabb = Aabb3::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
        let points = sample_uniform(count, &aabb, 21);
        let normals = points
            .iter()
            .map(|p| UnitVec3::new_normalize(p.coords + Vector3::new(0.0, 0.0, 5.0)))
            .collect();
        let colors = (0..count).map(|i| [(i % 256) as u8, 0, 0]).collect();
        PointCloud::try_new(points, Some(normals), Some(colors)).unwrap()
    }

    #[test]
    fn mismatched_normals_are_rejected() {
        let points = vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)];
        let normals = vec![UnitVec3::new_normalize(Vector3::z())];
        assert!(PointCloud::try_new(points, Some(normals), None).is_err());
    }

    #[test]
    fn empty_cloud_cannot_be_sampled() {
        let empty: &[Point3] = &[];
        let cloud = PointCloud::from(empty);
        assert!(
            cloud
                .sample_elimination(1, 0.5, &EliminationParams::default())
                .is_err()
        );
    }

    #[test]
    fn create_from_bad_indices_fails() {
        let cloud = colored_cloud(5);
        assert!(cloud.create_from_indices(&[0, 5]).is_err());
    }

    #[test]
    fn elimination_carries_attributes() {
        let cloud = colored_cloud(400);
        let reduced = cloud
            .sample_elimination(50, 0.6, &EliminationParams::default())
            .unwrap();
        assert_eq!(reduced.len(), 50);

        let normals = reduced.normals().unwrap();
        let colors = reduced.colors().unwrap();
        for (k, p) in reduced.points().iter().enumerate() {
            let i = cloud.points().iter().position(|q| q == p).unwrap();
            assert_eq!(normals[k], cloud.normals().unwrap()[i]);
            assert_eq!(colors[k], cloud.colors().unwrap()[i]);
        }
    }

    #[test]
    fn full_size_elimination_is_a_copy() {
        let cloud = colored_cloud(30);
        let same = cloud
            .sample_elimination(30, 0.6, &EliminationParams::default())
            .unwrap();
        assert_eq!(same.points(), cloud.points());
    }
}

//! A thin wrapper around `kiddo`'s immutable kd-tree which speaks in `Point3` and true (not
//! squared) distances.

use crate::Point3;
use kiddo::{ImmutableKdTree, SquaredEuclidean};
use std::num::NonZero;

/// A balanced 3D kd-tree built once from a slice of points. Indices returned by the queries refer
/// to positions in the slice the tree was built from.
pub struct KdTree3 {
    tree: Option<ImmutableKdTree<f64, 3>>,
    len: usize,
}

impl KdTree3 {
    /// Build and balance a tree over `points`.  The tree does not hold on to the slice, so it
    /// must be rebuilt whenever the point set it refers to changes.
    ///
    /// # Arguments
    ///
    /// * `points`: the points to index
    ///
    /// returns: KdTree3
    pub fn new(points: &[Point3]) -> Self {
        if points.is_empty() {
            return Self { tree: None, len: 0 };
        }

        let entries = points.iter().map(|p| [p.x, p.y, p.z]).collect::<Vec<_>>();
        Self {
            tree: Some(ImmutableKdTree::new_from_slice(&entries)),
            len: points.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Find every indexed point within `radius` of `point`, in no particular order. Each result is
    /// the index of the point and its distance from the query.
    pub fn within(&self, point: &Point3, radius: f64) -> Vec<(usize, f64)> {
        match &self.tree {
            Some(tree) => tree
                .within_unsorted::<SquaredEuclidean>(&[point.x, point.y, point.z], radius * radius)
                .into_iter()
                .map(|n| (n.item as usize, n.distance.sqrt()))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Find the `count` nearest indexed points to `point`, closest first.
    pub fn nearest(&self, point: &Point3, count: NonZero<usize>) -> Vec<(usize, f64)> {
        match &self.tree {
            Some(tree) => tree
                .nearest_n::<SquaredEuclidean>(&[point.x, point.y, point.z], count)
                .into_iter()
                .map(|n| (n.item as usize, n.distance.sqrt()))
                .collect(),
            None => Vec::new(),
        }
    }
}

//! The elimination loop. Every point starts with a weight measuring how crowded its neighborhood
//! is; the heaviest point is removed, its influence is taken back out of its neighbors' weights,
//! and the process repeats until only the requested number of points remain.

use super::EliminationParams;
use super::queue::WeightQueue;
use super::tiling::{TiledPoints, tile_points, untiled_points};
use super::weights::{WeightFunction, accumulate_weights};
use crate::common::KdTree3;
use crate::errors::EliminationError;
use crate::{Point3, Vector3};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EliminationState {
    /// Weights are computed and the queue holds every input point
    Built,
    Eliminating,
    /// The target size was reached, the queue holds only the survivors
    Drained,
    /// The output order has been produced
    Done,
}

/// One elimination call over a fixed point set. The spatial index, weights and queue live exactly
/// as long as this struct.
pub struct WeightedElimination<'a> {
    points: &'a [Point3],
    output_size: usize,
    tiled: TiledPoints,
    tree: KdTree3,
    function: WeightFunction,
    weights: Vec<f64>,
    queue: WeightQueue,
    eliminated: Vec<usize>,
    state: EliminationState,
}

impl<'a> WeightedElimination<'a> {
    /// Prepare an elimination from `points.len()` down to `output_size` points. Arguments are
    /// expected to have been validated by the caller.
    ///
    /// # Arguments
    ///
    /// * `points`: the candidate points, inside `[0, extent]`
    /// * `output_size`: the number of points that will survive
    /// * `maximum_distance`: radius of the weight function and of the halo
    /// * `extent`: size of the sampling domain
    /// * `params`: weight function and tiling parameters
    ///
    /// returns: Result<WeightedElimination, EliminationError>
    pub fn build(
        points: &'a [Point3],
        output_size: usize,
        maximum_distance: f64,
        extent: &Vector3,
        params: &EliminationParams,
    ) -> Result<Self, EliminationError> {
        let function = WeightFunction::new(params, points.len(), output_size, maximum_distance);
        let tiled = if params.tiling {
            tile_points(points, maximum_distance, extent)?
        } else {
            untiled_points(points)?
        };
        let tree = KdTree3::new(&tiled.points);
        let weights = accumulate_weights(&tiled, &tree, &function, params.parallel)?;
        let queue = WeightQueue::build(&weights)?;

        let mut eliminated = Vec::new();
        eliminated.try_reserve_exact(points.len().saturating_sub(output_size))?;

        debug!(
            input_size = points.len(),
            output_size,
            halo_size = tiled.halo_len(),
            minimum_distance = function.minimum_distance,
            maximum_distance,
            "built sample elimination"
        );

        Ok(Self {
            points,
            output_size,
            tiled,
            tree,
            function,
            weights,
            queue,
            eliminated,
            state: EliminationState::Built,
        })
    }

    pub fn state(&self) -> EliminationState {
        self.state
    }

    pub fn function(&self) -> &WeightFunction {
        &self.function
    }

    /// The eliminated indices in the order they were removed.
    pub fn eliminated(&self) -> &[usize] {
        &self.eliminated
    }

    /// Remove the heaviest point until `output_size` points remain.
    pub fn run(&mut self) -> Result<(), EliminationError> {
        self.state = EliminationState::Eliminating;
        while self.queue.len() > self.output_size {
            let Some(p) = self.queue.pop_min() else {
                break;
            };
            self.remove_influence(p)?;
            self.eliminated.push(p);
        }

        self.state = EliminationState::Drained;
        Ok(())
    }

    /// Take the influence of the removed point `p` back out of every active neighbor, including
    /// neighbors seen through the halo.
    fn remove_influence(&mut self, p: usize) -> Result<(), EliminationError> {
        let neighbors = self
            .tree
            .within(&self.points[p], self.function.maximum_distance);

        for (k, d) in neighbors {
            let q = self.tiled.origins[k];
            if q == p || !self.queue.is_active(q) {
                continue;
            }
            self.weights[q] -= self.function.influence(d);
            self.queue.decrease_key(q, self.weights[q])?;
        }

        Ok(())
    }

    /// Produce the output order. The survivors fill the first `output_size` positions, drained
    /// heaviest first from the back, so the most isolated survivor ends up at position 0. With
    /// `copy_eliminated` the eliminated points follow in reverse order of removal, so the first
    /// point removed is last.
    pub fn into_order(mut self, copy_eliminated: bool) -> Result<Vec<usize>, EliminationError> {
        if self.state == EliminationState::Built {
            self.run()?;
        }

        let survivors = self.queue.len();
        let target = if copy_eliminated {
            survivors + self.eliminated.len()
        } else {
            survivors
        };

        let mut order = Vec::new();
        order.try_reserve_exact(target)?;
        order.resize(target, 0);

        for slot in (0..survivors).rev() {
            if let Some(i) = self.queue.pop_min() {
                order[slot] = i;
            }
        }

        if copy_eliminated {
            for (slot, &i) in (survivors..target).rev().zip(self.eliminated.iter()) {
                order[slot] = i;
            }
        }

        self.state = EliminationState::Done;
        debug!(
            survivors,
            eliminated = self.eliminated.len(),
            "finished sample elimination"
        );
        Ok(order)
    }
}

/// Run a complete elimination of `points` down to `output_size` and return the output order as
/// indices into `points`.
pub fn elimination_order(
    points: &[Point3],
    output_size: usize,
    maximum_distance: f64,
    extent: &Vector3,
    params: &EliminationParams,
    copy_eliminated: bool,
) -> Result<Vec<usize>, EliminationError> {
    let mut elimination =
        WeightedElimination::build(points, output_size, maximum_distance, extent, params)?;
    elimination.run()?;
    elimination.into_order(copy_eliminated)
}

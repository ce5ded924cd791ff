//! Hex-grid routing library: coordinate conversions, the grid arena,
//! the two query engines (`change_cost`, `travel_cost`), the air-route
//! editor, and the line protocol that drives them.

pub mod airroute;
pub mod bucket;
pub mod cli;
pub mod coords;
pub mod diffusion;
pub mod error;
pub mod grid;
pub mod protocol;
pub mod queue;
pub mod routing;

use bucket::BucketQueue;
use error::GridError;
use grid::Grid;

/// All process-wide mutable state, expressed as a single owned value
/// instead of statics: the active grid, if `init` has run, and the
/// shortest-path engine's reusable bucket queue. Owned exclusively by
/// the command loop (`protocol::run`) and passed around by `&mut` —
/// there is no concurrent access.
pub struct World {
    grid: Option<Grid>,
    bucket: BucketQueue,
}

impl World {
    pub fn new() -> Self {
        Self {
            grid: None,
            bucket: BucketQueue::new(),
        }
    }

    /// Replaces the active grid. The only operation that can fail with
    /// a Rust `Err`; every other command folds a missing or rejected
    /// grid into its ordinary `KO`/`-1` reply.
    pub fn init(&mut self, cols: u64, rows: u64) -> Result<(), GridError> {
        self.grid = Some(Grid::new(cols, rows)?);
        Ok(())
    }

    pub fn change_cost(&mut self, x: i64, y: i64, p: i32, radius: i64) -> bool {
        match &mut self.grid {
            Some(grid) => diffusion::change_cost(grid, x, y, p, radius),
            None => false,
        }
    }

    pub fn toggle_air_route(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) -> bool {
        match &mut self.grid {
            Some(grid) => airroute::toggle_air_route(grid, x1, y1, x2, y2),
            None => false,
        }
    }

    pub fn travel_cost(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) -> Option<u32> {
        let grid = self.grid.as_mut()?;
        routing::travel_cost(grid, &mut self.bucket, x1, y1, x2, y2)
    }

    #[cfg(test)]
    pub(crate) fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

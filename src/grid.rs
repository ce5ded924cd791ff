//! The hex grid store: a contiguous arena of `Hex` records plus the
//! process-wide version counter and precomputed neighbour deltas.

use crate::coords::{Dims, NeighbourDeltas};
use crate::error::GridError;

/// Color used by diffusion's BFS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Grey,
    Black,
}

/// One outgoing air route: a destination linear index and a cost in
/// `[0, 100]` at creation, `[1, 100]` once diffusion has touched it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AirRoute {
    pub destination: u64,
    pub cost: u8,
}

/// Maximum outgoing air routes per hex.
pub const MAX_AIR_ROUTES: usize = 5;

/// A single hex's persistent state plus the transient scratch fields
/// shared by diffusion (`color`, `distance`) and the shortest-path
/// engine (`distance`, `version`, bucket membership).
#[derive(Debug, Clone)]
pub struct Hex {
    pub land_cost: u8,
    pub air_routes: [AirRoute; MAX_AIR_ROUTES],
    pub air_routes_num: u8,

    // Diffusion scratch.
    pub color: Color,
    // Shared by diffusion and shortest-path; semantics are scoped to
    // whichever operation last bumped `version`.
    pub distance: u32,
    pub version: u32,

    // Bucket-queue membership.
    pub bucket_index: u8,
    pub bucket_next: u64,
    pub bucket_version: u8,
}

/// Sentinel bucket index meaning "not currently in any bucket".
pub const NO_BUCKET: u8 = u8::MAX;
/// Sentinel linear index meaning "no next node in this bucket's list".
pub const NO_NEXT: u64 = u64::MAX;

impl Hex {
    fn fresh() -> Self {
        Self {
            land_cost: 1,
            air_routes: [AirRoute { destination: 0, cost: 0 }; MAX_AIR_ROUTES],
            air_routes_num: 0,
            color: Color::White,
            distance: u32::MAX,
            version: 0,
            bucket_index: NO_BUCKET,
            bucket_next: NO_NEXT,
            bucket_version: 0,
        }
    }

    pub fn routes(&self) -> &[AirRoute] {
        &self.air_routes[..self.air_routes_num as usize]
    }
}

/// Maximum grid dimension in either direction: `2^20`.
pub const MAX_DIM: u64 = 1 << 20;

/// The single process-wide grid. Replacing it (`init`) drops the
/// previous arena entirely — there is no migration of state across
/// `init` calls.
pub struct Grid {
    pub dims: Dims,
    pub deltas: NeighbourDeltas,
    pub cells: Vec<Hex>,
    /// Bumped at the start of every `change_cost` and `travel_cost`
    /// query; compared against each `Hex::version` to lazily
    /// reinitialise scratch fields on first touch.
    pub current_version: u32,
}

impl Grid {
    /// Validates `cols, rows ∈ [1, 2^20]` and allocates a fresh arena
    /// with every cell at its initial state. Returns `GridError` on
    /// invalid dimensions; the caller (the protocol layer) treats that
    /// as fatal.
    pub fn new(cols: u64, rows: u64) -> Result<Self, GridError> {
        if cols == 0 || rows == 0 || cols > MAX_DIM || rows > MAX_DIM {
            return Err(GridError::DimensionsOutOfRange { cols, rows });
        }
        let cols = cols as u32;
        let rows = rows as u32;
        let dims = Dims { cols, rows };
        let cells = vec![Hex::fresh(); dims.cell_count() as usize];
        Ok(Self {
            deltas: NeighbourDeltas::new(cols),
            dims,
            cells,
            current_version: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn hex(&self, idx: u64) -> &Hex {
        &self.cells[idx as usize]
    }

    pub fn hex_mut(&mut self, idx: u64) -> &mut Hex {
        &mut self.cells[idx as usize]
    }

    /// Bumps the global version counter, used by both `change_cost` and
    /// `travel_cost` to lazily reinitialise scratch fields on first
    /// touch within the new query.
    pub fn bump_version(&mut self) -> u32 {
        self.current_version = self.current_version.wrapping_add(1);
        self.current_version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_sets_default_land_cost_and_empty_routes() {
        let grid = Grid::new(3, 3).unwrap();
        assert_eq!(grid.len(), 9);
        for hex in &grid.cells {
            assert_eq!(hex.land_cost, 1);
            assert_eq!(hex.air_routes_num, 0);
        }
    }

    #[test]
    fn rejects_zero_and_oversized_dimensions() {
        assert!(Grid::new(0, 5).is_err());
        assert!(Grid::new(5, 0).is_err());
        assert!(Grid::new(MAX_DIM + 1, 1).is_err());
        assert!(Grid::new(1, MAX_DIM + 1).is_err());
        assert!(Grid::new(MAX_DIM, MAX_DIM).is_err());
    }

    #[test]
    fn reinit_replaces_prior_grid() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.hex_mut(0).land_cost = 50;
        grid = Grid::new(2, 2).unwrap();
        assert_eq!(grid.hex(0).land_cost, 1);
    }
}

//! Radius-bounded diffusion: `change_cost` walks a BFS frontier in
//! axial space out to `radius` hex-hops from a source, applying a
//! floored-division cost delta to each visited hex's land cost and its
//! outgoing air routes.
//!
//! Grounded on the original source's `changeCost`/`changeHexCost`/
//! `floorDiv`. Reuses the grid's lazy per-cell `version` stamp the same
//! way the shortest-path engine does, so repeated `change_cost` calls
//! don't pay for a full-arena reset.

use tracing::trace;

use crate::coords::axial_neighbours;
use crate::grid::{Color, Grid, Hex};
use crate::queue::AxialQueue;

/// Diffusion's own "unreached" sentinel, matching the original source's
/// 16-bit distance field. Distinct from the shortest-path engine's
/// `u32::MAX`, which shares the same `Hex::distance` storage but is
/// scoped to whichever operation last bumped `current_version`.
const UNREACHED: u32 = u16::MAX as u32;

/// Applies a diffusion centred on offset `(x, y)` with signed strength
/// `p` out to `radius` hex-hops. Returns `true` (`OK`) if applied,
/// `false` (`KO`, no mutation) if the arguments are invalid.
///
/// `radius` is taken as a plain signed integer rather than a type that
/// could itself silently discard an out-of-range value; it is declared
/// 16-bit, so anything outside `[1, 2^16 - 1]` is rejected here the
/// same way an out-of-range `p` is.
pub fn change_cost(grid: &mut Grid, x: i64, y: i64, p: i32, radius: i64) -> bool {
    if !(1..=u16::MAX as i64).contains(&radius) || p.abs() > 10 || !grid.dims.in_bounds(x, y) {
        return false;
    }
    let radius = radius as u32;

    let version = grid.bump_version();
    let dims = grid.dims;
    let source_axial = dims.offset_to_axial(x, y);
    let source_idx = dims
        .offset_to_linear(x, y)
        .expect("bounds already validated above");

    touch(grid.hex_mut(source_idx), version);
    {
        let hex = grid.hex_mut(source_idx);
        hex.color = Color::Grey;
        hex.distance = 0;
    }
    apply_delta(grid.hex_mut(source_idx), p, radius, 0);

    let mut queue = AxialQueue::with_capacity(dims.cell_count() as usize);
    queue.enqueue(source_axial);

    while !queue.is_empty() {
        let current = queue.dequeue();
        let current_idx = dims
            .axial_to_linear(current.r, current.q)
            .expect("only in-bounds coordinates are ever enqueued");
        let current_distance = grid.hex(current_idx).distance;
        trace!(hex = current_idx, distance = current_distance, "diffusion visiting cell");
        if current_distance == radius {
            continue;
        }
        let next_distance = current_distance + 1;

        for (neighbour_axial, neighbour_idx) in axial_neighbours(&dims, current) {
            touch(grid.hex_mut(neighbour_idx), version);
            if grid.hex(neighbour_idx).color == Color::White {
                {
                    let hex = grid.hex_mut(neighbour_idx);
                    hex.color = Color::Grey;
                    hex.distance = next_distance;
                }
                apply_delta(grid.hex_mut(neighbour_idx), p, radius, next_distance);
                queue.enqueue(neighbour_axial);
            }
        }
    }

    true
}

/// Lazily resets a cell's diffusion scratch fields the first time this
/// epoch touches it.
fn touch(hex: &mut Hex, version: u32) {
    if hex.version != version {
        hex.color = Color::White;
        hex.distance = UNREACHED;
        hex.version = version;
    }
}

/// `delta = floor(p * (radius - d) / radius)`; applies it to land cost
/// and every outgoing air route, clamping asymmetrically: land cost
/// floors at 0, route costs floor at 1 — a route that would go
/// non-positive goes dead at 1, never 0.
fn apply_delta(hex: &mut Hex, p: i32, radius: u32, d: u32) {
    let delta = floor_div(p as i64 * (radius as i64 - d as i64), radius as i64) as i32;
    if delta == 0 {
        return;
    }

    let new_land = (hex.land_cost as i32 + delta).clamp(0, 100);
    hex.land_cost = new_land as u8;

    for route in hex.air_routes[..hex.air_routes_num as usize].iter_mut() {
        let updated = route.cost as i32 + delta;
        route.cost = if updated <= 0 {
            1
        } else {
            updated.min(100) as u8
        };
    }
}

/// Division rounding toward negative infinity, needed because Rust's
/// `/` truncates toward zero.
fn floor_div(a: i64, b: i64) -> i64 {
    debug_assert!(b > 0);
    if a >= 0 {
        a / b
    } else {
        -((-a + b - 1) / b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::AirRoute;

    #[test]
    fn floor_div_matches_spec_example() {
        // p = -1, radius = 3, d = 1: delta = floor(-2/3) = -1, not 0.
        assert_eq!(floor_div(-1 * (3 - 1), 3), -1);
    }

    #[test]
    fn rejects_bad_radius_strength_or_bounds() {
        let mut grid = Grid::new(5, 5).unwrap();
        assert!(!change_cost(&mut grid, 0, 0, 1, 0));
        assert!(!change_cost(&mut grid, 0, 0, 11, 5));
        assert!(!change_cost(&mut grid, -1, 0, 1, 5));
        assert!(!change_cost(&mut grid, 5, 0, 1, 5));
        // none of the rejected calls mutate the grid
        for hex in &grid.cells {
            assert_eq!(hex.land_cost, 1);
        }
    }

    #[test]
    fn zero_strength_leaves_every_cost_unchanged() {
        let mut grid = Grid::new(5, 5).unwrap();
        assert!(change_cost(&mut grid, 2, 2, 0, 3));
        for hex in &grid.cells {
            assert_eq!(hex.land_cost, 1);
        }
    }

    #[test]
    fn radius_one_updates_only_the_source() {
        let mut grid = Grid::new(5, 5).unwrap();
        let source = grid.dims.offset_to_linear(2, 2).unwrap();
        assert!(change_cost(&mut grid, 2, 2, 10, 1));
        assert_eq!(grid.hex(source).land_cost, 11);
        for (idx, hex) in grid.cells.iter().enumerate() {
            if idx as u64 != source {
                assert_eq!(hex.land_cost, 1, "cell {idx} should be untouched at radius 1");
            }
        }
    }

    #[test]
    fn opposite_strength_restores_unsaturated_costs() {
        let mut grid = Grid::new(5, 5).unwrap();
        assert!(change_cost(&mut grid, 2, 2, 3, 2));
        assert!(change_cost(&mut grid, 2, 2, -3, 2));
        for hex in &grid.cells {
            assert_eq!(hex.land_cost, 1);
        }
    }

    #[test]
    fn route_cost_floors_at_one_not_zero() {
        let mut grid = Grid::new(3, 3).unwrap();
        let source = grid.dims.offset_to_linear(1, 1).unwrap();
        {
            let hex = grid.hex_mut(source);
            hex.air_routes[0] = AirRoute { destination: 0, cost: 1 };
            hex.air_routes_num = 1;
        }
        assert!(change_cost(&mut grid, 1, 1, -10, 1));
        assert_eq!(grid.hex(source).air_routes[0].cost, 1);
        assert_eq!(grid.hex(source).land_cost, 0);
    }
}

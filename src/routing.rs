//! Shortest-path engine: Dijkstra over hex-neighbour edges plus
//! air-route edges, driven by the bucket queue and the grid's lazy
//! per-cell version stamps.
//!
//! Grounded on the original source's `travelCost`, and on
//! `tools/butterfly-route/src/nbg_ch/query.rs`'s `fwd_dist`/`fwd_version`
//! pair for the "stamp instead of reset" discipline applied here to
//! `Hex::distance`/`Hex::version`.

use tracing::{debug, trace};

use crate::bucket::BucketQueue;
use crate::grid::{Grid, Hex};

/// Computes the minimum-cost travel distance from `(x1, y1)` to
/// `(x2, y2)`, or `None` if the target is unreachable (reported as `-1`
/// by the protocol layer). `bucket` is caller-owned so repeated calls
/// reuse its 101-slot head array instead of reallocating per query.
pub fn travel_cost(
    grid: &mut Grid,
    bucket: &mut BucketQueue,
    x1: i64,
    y1: i64,
    x2: i64,
    y2: i64,
) -> Option<u32> {
    let dims = grid.dims;
    let source_idx = dims.offset_to_linear(x1, y1)?;
    let target_idx = dims.offset_to_linear(x2, y2)?;

    if grid.hex(source_idx).land_cost == 0 {
        return None;
    }
    if source_idx == target_idx {
        return Some(0);
    }

    let version = grid.bump_version();
    bucket.initialize(grid);

    touch(grid.hex_mut(source_idx), version);
    grid.hex_mut(source_idx).distance = 0;
    bucket.push(grid, source_idx);

    while !bucket.is_empty() {
        let u = bucket.pop(grid);
        trace!(hex = u, distance = grid.hex(u).distance, "travel_cost popped cell");
        if u == target_idx {
            break;
        }
        // A zero-land-cost hex may be entered but never used to
        // transit further.
        if grid.hex(u).land_cost == 0 {
            continue;
        }

        let step = grid.hex(u).distance + grid.hex(u).land_cost as u32;
        let (neighbours, neighbour_count) = offset_neighbours(grid, u);
        for &v in &neighbours[..neighbour_count] {
            touch(grid.hex_mut(v), version);
            if step < grid.hex(v).distance {
                grid.hex_mut(v).distance = step;
                bucket.push(grid, v);
            }
        }

        let routes_len = grid.hex(u).air_routes_num as usize;
        for i in 0..routes_len {
            let route = grid.hex(u).air_routes[i];
            let step = grid.hex(u).distance + route.cost as u32;
            touch(grid.hex_mut(route.destination), version);
            if step < grid.hex(route.destination).distance {
                grid.hex_mut(route.destination).distance = step;
                bucket.push(grid, route.destination);
            }
        }
    }

    let target = grid.hex(target_idx);
    let result = if target.version != version || target.distance == u32::MAX {
        None
    } else {
        Some(target.distance)
    };
    debug!(source = source_idx, target = target_idx, ?result, "travel_cost finished");
    result
}

fn touch(hex: &mut Hex, version: u32) {
    if hex.version != version {
        hex.distance = u32::MAX;
        hex.version = version;
    }
}

/// Enumerates the up to six offset-adjacent linear indices of `idx`
/// into a stack-allocated array, rejecting column wrap-around at the
/// grid's left/right edge via the `dx` carried alongside each
/// flattened delta. Returns an owned copy rather than a borrowing
/// iterator so the caller is free to take `&mut Grid` again immediately
/// (the relaxation loop needs to, per neighbour).
fn offset_neighbours(grid: &Grid, idx: u64) -> ([u64; 6], usize) {
    let dims = grid.dims;
    let offset = dims.linear_to_offset(idx);
    let deltas = *grid.deltas.for_row(offset.y);
    let cell_count = dims.cell_count() as i64;
    let last_col = dims.cols as i64 - 1;

    let mut out = [0u64; 6];
    let mut count = 0;
    for (delta, dx) in deltas {
        if dx == -1 && offset.x == 0 {
            continue;
        }
        if dx == 1 && offset.x == last_col {
            continue;
        }
        let n = idx as i64 + delta;
        if n < 0 || n >= cell_count {
            continue;
        }
        out[count] = n as u64;
        count += 1;
    }
    (out, count)
}

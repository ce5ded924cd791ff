//! Air-route editor: `toggle_air_route` creates or removes one directed
//! out-edge on the source hex.
//!
//! Grounded on the original source's `toggleAirRoute`/`activateAirRoute`/
//! `removeAirRoute` — including the detail that the removal path's `sum`
//! computation in the original is dead code and must not leak into a
//! cost mutation here: removing a route changes nothing but the route
//! list itself.

use crate::grid::{AirRoute, Grid, MAX_AIR_ROUTES};

/// Toggles the directed route `(x1,y1) -> (x2,y2)`: removes it if it
/// already exists, otherwise appends it (unless the source is already
/// at its 5-route cap). Returns `true` for `OK`, `false` for `KO` (no
/// mutation in the `false` case).
pub fn toggle_air_route(grid: &mut Grid, x1: i64, y1: i64, x2: i64, y2: i64) -> bool {
    let dims = grid.dims;
    let source_idx = match dims.offset_to_linear(x1, y1) {
        Some(idx) => idx,
        None => return false,
    };
    let target_idx = match dims.offset_to_linear(x2, y2) {
        Some(idx) => idx,
        None => return false,
    };

    let hex = grid.hex(source_idx);
    let num = hex.air_routes_num as usize;
    let existing = hex.air_routes[..num]
        .iter()
        .position(|route| route.destination == target_idx);

    if existing.is_none() && num >= MAX_AIR_ROUTES {
        return false;
    }

    let hex = grid.hex_mut(source_idx);
    match existing {
        Some(pos) => {
            for i in pos..num - 1 {
                hex.air_routes[i] = hex.air_routes[i + 1];
            }
            hex.air_routes_num -= 1;
        }
        None => {
            let sum: u32 = hex.land_cost as u32
                + hex.air_routes[..num]
                    .iter()
                    .map(|route| route.cost as u32)
                    .sum::<u32>();
            let cost = (sum / (num as u32 + 1)) as u8;
            hex.air_routes[num] = AirRoute {
                destination: target_idx,
                cost,
            };
            hex.air_routes_num += 1;
        }
    }
    true
}

//! Randomized differential test: the optimized engine (bucket queue +
//! lazy version stamps) must never disagree with a textbook
//! `BinaryHeap` Dijkstra recomputed from scratch over the same grid
//! state. Grounded on
//! `tools/butterfly-route/src/nbg_ch/validate.rs`'s `validate_nbg_ch`,
//! which cross-checks an optimized structure against a naive
//! ground-truth traversal using a seeded RNG.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hexroute::airroute::toggle_air_route;
use hexroute::bucket::BucketQueue;
use hexroute::diffusion::change_cost;
use hexroute::grid::Grid;
use hexroute::routing::travel_cost;

fn naive_travel_cost(grid: &Grid, x1: i64, y1: i64, x2: i64, y2: i64) -> Option<u32> {
    let dims = grid.dims;
    let source = dims.offset_to_linear(x1, y1)?;
    let target = dims.offset_to_linear(x2, y2)?;

    if grid.hex(source).land_cost == 0 {
        return None;
    }
    if source == target {
        return Some(0);
    }

    let mut dist = vec![u32::MAX; grid.len()];
    dist[source as usize] = 0;
    let mut heap = BinaryHeap::new();
    heap.push(Reverse((0u32, source)));

    while let Some(Reverse((d, u))) = heap.pop() {
        if u == target {
            break;
        }
        if d > dist[u as usize] {
            continue;
        }
        let hex = grid.hex(u);
        if hex.land_cost == 0 {
            continue;
        }
        let step = d + hex.land_cost as u32;
        for v in naive_neighbours(grid, u) {
            if step < dist[v as usize] {
                dist[v as usize] = step;
                heap.push(Reverse((step, v)));
            }
        }
        for route in hex.routes() {
            let step = d + route.cost as u32;
            if step < dist[route.destination as usize] {
                dist[route.destination as usize] = step;
                heap.push(Reverse((step, route.destination)));
            }
        }
    }

    let d = dist[target as usize];
    if d == u32::MAX {
        None
    } else {
        Some(d)
    }
}

fn naive_neighbours(grid: &Grid, idx: u64) -> Vec<u64> {
    let dims = grid.dims;
    let offset = dims.linear_to_offset(idx);
    let deltas = grid.deltas.for_row(offset.y);
    let cell_count = dims.cell_count() as i64;
    let last_col = dims.cols as i64 - 1;

    deltas
        .iter()
        .filter_map(|&(delta, dx)| {
            if dx == -1 && offset.x == 0 {
                return None;
            }
            if dx == 1 && offset.x == last_col {
                return None;
            }
            let n = idx as i64 + delta;
            if n < 0 || n >= cell_count {
                return None;
            }
            Some(n as u64)
        })
        .collect()
}

fn random_grid(rng: &mut StdRng) -> Grid {
    let cols = rng.gen_range(2..=6);
    let rows = rng.gen_range(2..=6);
    let mut grid = Grid::new(cols, rows).unwrap();

    for _ in 0..rng.gen_range(5..20) {
        let x = rng.gen_range(0..cols) as i64;
        let y = rng.gen_range(0..rows) as i64;
        if rng.gen_bool(0.5) {
            let p = rng.gen_range(-10..=10);
            let radius = rng.gen_range(1..=8);
            change_cost(&mut grid, x, y, p, radius);
        } else {
            let x2 = rng.gen_range(0..cols) as i64;
            let y2 = rng.gen_range(0..rows) as i64;
            toggle_air_route(&mut grid, x, y, x2, y2);
        }
    }
    grid
}

#[test]
fn bucket_queue_dijkstra_matches_a_naive_binary_heap_dijkstra() {
    for seed in 0u64..12 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut grid = random_grid(&mut rng);
        let mut bucket = BucketQueue::new();

        let cols = grid.dims.cols as i64;
        let rows = grid.dims.rows as i64;

        for _ in 0..30 {
            let x1 = rng.gen_range(0..cols);
            let y1 = rng.gen_range(0..rows);
            let x2 = rng.gen_range(0..cols);
            let y2 = rng.gen_range(0..rows);

            let optimized = travel_cost(&mut grid, &mut bucket, x1, y1, x2, y2);
            let naive = naive_travel_cost(&grid, x1, y1, x2, y2);
            assert_eq!(
                optimized, naive,
                "seed {seed}: travel_cost({x1},{y1},{x2},{y2}) diverged on a {cols}x{rows} grid"
            );
        }
    }
}

//! Line-oriented command protocol: a tokenizer and dispatcher over
//! stdin/stdout. Kept deliberately dumb — parsing lives here, business
//! logic lives in `diffusion`/`routing`/`airroute` — mirroring how
//! `tools/butterfly-route/src/cli.rs` keeps argument handling apart from
//! the graph/query code it calls.

use std::io::{self, BufRead, Write};

use crate::World;

/// Runs the read loop to completion. Returns the process exit code: `0`
/// on a clean EOF, `1` if `init` was given dimensions it rejected (the
/// one fatal path in this protocol).
pub fn run<R: BufRead, W: Write>(world: &mut World, input: R, mut out: W) -> io::Result<i32> {
    for line in input.lines() {
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = tokens.first() else {
            continue;
        };

        match command {
            "init" => {
                if tokens.len() != 3 {
                    continue;
                }
                let Some(cols) = tokens[1].parse::<u64>().ok() else {
                    continue;
                };
                let Some(rows) = tokens[2].parse::<u64>().ok() else {
                    continue;
                };
                match world.init(cols, rows) {
                    Ok(()) => {
                        tracing::info!(cols, rows, "grid initialised");
                        writeln!(out, "OK")?;
                    }
                    Err(err) => {
                        eprintln!("KO: {err}");
                        return Ok(1);
                    }
                }
            }
            "change_cost" => {
                let Some((x, y, p, radius)) = parse_change_cost_args(&tokens[1..]) else {
                    continue;
                };
                let ok = world.change_cost(x, y, p, radius);
                tracing::debug!(x, y, p, radius, ok, "change_cost");
                writeln!(out, "{}", if ok { "OK" } else { "KO" })?;
            }
            "toggle_air_route" => {
                let Some([x1, y1, x2, y2]) = parse_four_signed(&tokens[1..]) else {
                    continue;
                };
                let ok = world.toggle_air_route(x1, y1, x2, y2);
                tracing::debug!(x1, y1, x2, y2, ok, "toggle_air_route");
                writeln!(out, "{}", if ok { "OK" } else { "KO" })?;
            }
            "travel_cost" => {
                let Some([x1, y1, x2, y2]) = parse_four_signed(&tokens[1..]) else {
                    continue;
                };
                match world.travel_cost(x1, y1, x2, y2) {
                    Some(distance) => {
                        tracing::debug!(x1, y1, x2, y2, distance, "travel_cost");
                        writeln!(out, "{distance}")?;
                    }
                    None => {
                        tracing::debug!(x1, y1, x2, y2, "travel_cost unreachable");
                        writeln!(out, "-1")?;
                    }
                }
            }
            other => {
                eprintln!("KO: {other} not a command");
            }
        }
    }
    Ok(0)
}

/// `x y p radius`: all four tokens are parsed as plain signed integers.
/// An out-of-range `radius` (like an out-of-range `p`) is left for
/// `change_cost` to reject as a `KO`, not swallowed here as a malformed
/// token — a textually valid number shouldn't silently get no reply at
/// all just because it doesn't fit a narrower parse type.
fn parse_change_cost_args(tokens: &[&str]) -> Option<(i64, i64, i32, i64)> {
    if tokens.len() != 4 {
        return None;
    }
    let x = tokens[0].parse::<i64>().ok()?;
    let y = tokens[1].parse::<i64>().ok()?;
    let p = tokens[2].parse::<i32>().ok()?;
    let radius = tokens[3].parse::<i64>().ok()?;
    Some((x, y, p, radius))
}

fn parse_four_signed(tokens: &[&str]) -> Option<[i64; 4]> {
    if tokens.len() != 4 {
        return None;
    }
    let mut out = [0i64; 4];
    for (slot, token) in out.iter_mut().zip(tokens) {
        *slot = token.parse().ok()?;
    }
    Some(out)
}

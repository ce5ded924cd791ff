//! Typed, library-level errors. Kept deliberately small: almost every
//! failure mode here is a protocol-level `KO`/`-1` reply, not a Rust
//! `Err` — only a genuinely exceptional grid state is modeled as one.
//! `main` wraps these in `anyhow` at the application boundary: typed
//! errors for library code, `anyhow` for the CLI.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid dimensions out of range: cols={cols}, rows={rows} (must be in [1, 2^20])")]
    DimensionsOutOfRange { cols: u64, rows: u64 },
}

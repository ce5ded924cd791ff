//! Monotone bucket priority queue: 101 singly-linked lists keyed by
//! tentative distance modulo 101, intrusive on `Hex::bucket_next` so
//! the queue itself stays heap-free after `Grid::new`.
//!
//! Correctness rests on every edge weight (land cost or air-route cost)
//! being in `[0, 100]`: a live key can never lag the current popped
//! distance by more than 100, so one full sweep of 101 buckets suffices
//! to extract keys in non-decreasing order.
//!
//! Grounded on the original source's `Bucket`/`initializeBucket`/
//! `pushBucket`/`popBucket`, and on
//! `tools/butterfly-route/src/nbg_ch/query.rs`'s version-stamped search
//! state for the "don't walk the whole arena to reset" discipline.

use crate::grid::{Grid, Hex, NO_BUCKET, NO_NEXT};

pub const BUCKET_SLOTS: usize = 101;

pub struct BucketQueue {
    head: [u64; BUCKET_SLOTS],
    current: usize,
    distance: u32,
    count: usize,
    version: u8,
}

impl BucketQueue {
    pub fn new() -> Self {
        Self {
            head: [NO_NEXT; BUCKET_SLOTS],
            current: 0,
            distance: 0,
            count: 0,
            version: 0,
        }
    }

    /// Starts a fresh epoch. On `bucket_version` wraparound, walks the
    /// arena once to reset every cell's stamp before restarting at 1 —
    /// this is the one case where the queue's O(1)-amortised discipline
    /// pays a one-time O(N) cost.
    pub fn initialize(&mut self, grid: &mut Grid) {
        self.version = self.version.wrapping_add(1);
        if self.version == 0 {
            for hex in grid.cells.iter_mut() {
                hex.bucket_version = 0;
            }
            self.version = 1;
        }
        self.head = [NO_NEXT; BUCKET_SLOTS];
        self.current = 0;
        self.distance = 0;
        self.count = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Inserts (or re-inserts, splicing out any prior membership this
    /// epoch) `idx` at the head of its distance-mod-101 bucket.
    /// Requires `grid.hex(idx).distance` to already hold the tentative
    /// distance to key on.
    pub fn push(&mut self, grid: &mut Grid, idx: u64) {
        let old_version = grid.hex(idx).bucket_version;
        if old_version != self.version {
            let hex = grid.hex_mut(idx);
            hex.bucket_index = NO_BUCKET;
            hex.bucket_next = NO_NEXT;
            hex.bucket_version = self.version;
        } else {
            let old_bucket = grid.hex(idx).bucket_index;
            if old_bucket != NO_BUCKET {
                self.splice_out(grid, old_bucket as usize, idx);
            }
        }

        let new_bucket = (grid.hex(idx).distance % BUCKET_SLOTS as u32) as usize;
        let hex = grid.hex_mut(idx);
        hex.bucket_next = self.head[new_bucket];
        hex.bucket_index = new_bucket as u8;
        self.head[new_bucket] = idx;
        self.count += 1;
    }

    fn splice_out(&mut self, grid: &mut Grid, bucket: usize, idx: u64) {
        if self.head[bucket] == idx {
            self.head[bucket] = grid.hex(idx).bucket_next;
            self.count -= 1;
            return;
        }
        let mut cursor = self.head[bucket];
        while cursor != NO_NEXT {
            let next = grid.hex(cursor).bucket_next;
            if next == idx {
                let after = grid.hex(idx).bucket_next;
                grid.hex_mut(cursor).bucket_next = after;
                self.count -= 1;
                return;
            }
            cursor = next;
        }
    }

    /// Advances through empty buckets until a non-empty one is found,
    /// detaches and returns its head.
    pub fn pop(&mut self, grid: &mut Grid) -> u64 {
        debug_assert!(!self.is_empty(), "pop from empty bucket queue");
        while self.head[self.current] == NO_NEXT {
            self.current = (self.current + 1) % BUCKET_SLOTS;
            self.distance += 1;
        }
        let idx = self.head[self.current];
        let hex: &mut Hex = grid.hex_mut(idx);
        self.head[self.current] = hex.bucket_next;
        hex.bucket_next = NO_NEXT;
        hex.bucket_index = NO_BUCKET;
        self.count -= 1;
        idx
    }
}

impl Default for BucketQueue {
    fn default() -> Self {
        Self::new()
    }
}

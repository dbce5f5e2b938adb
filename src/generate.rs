//! Seeded canonical timeline generation.
//!
//! Every timeline in the workload is derived from a 32-bit seed so a cache
//! miss can rebuild exactly the value that was evicted. The stream is
//! ChaCha8 (`rand_chacha`), the seeded generator used for reproducible
//! fixtures; every draw uses a half-open `[low, high)` range.
//!
//! Draw order is part of the determinism contract and must not change:
//! window count, then per window (length, value), then `created_at`.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::error::{Error, Result};
use crate::timeline::{time_point_from_millis, ObjectGraphTimeline, Window};

/// Window count is drawn from `[MIN_WINDOWS, MAX_WINDOWS)`.
pub const MIN_WINDOWS: usize = 10;
pub const MAX_WINDOWS: usize = 30;

/// Window length in milliseconds is drawn from `[0, MAX_WINDOW_LEN_MS)`.
/// A zero draw yields a zero-length window, which no query can match;
/// that is accepted output, not an error.
pub const MAX_WINDOW_LEN_MS: i64 = 60_000;

/// Window value is drawn from `[0, MAX_VALUE)`.
pub const MAX_VALUE: i32 = 1000;

/// `created_at` is drawn from `[0, MAX_CREATED_AT_MS)` milliseconds.
pub const MAX_CREATED_AT_MS: i64 = 10_000;

/// Builds the canonical timeline for a seed.
///
/// Windows start at 0 ms and are emitted back to back, each window's end
/// becoming the next window's start, so the result is a sorted, contiguous,
/// non-overlapping partition by construction. Calling twice with the same
/// seed yields identical windows.
pub fn timeline_for_seed(seed: u32) -> Result<ObjectGraphTimeline> {
    let mut rng = ChaCha8Rng::seed_from_u64(u64::from(seed));

    let count = rng.gen_range(MIN_WINDOWS..MAX_WINDOWS);
    if !(MIN_WINDOWS..MAX_WINDOWS).contains(&count) {
        return Err(Error::Generation("window count outside [10, 30)"));
    }

    let mut windows = Vec::with_capacity(count);
    let mut start_ms: i64 = 0;
    for _ in 0..count {
        let len_ms = rng.gen_range(0..MAX_WINDOW_LEN_MS);
        let value = rng.gen_range(0..MAX_VALUE);
        if len_ms < 0 {
            return Err(Error::Generation("negative window length"));
        }
        let end_ms = start_ms + len_ms;
        windows.push(Box::new(Window {
            start: time_point_from_millis(start_ms)?,
            end: time_point_from_millis(end_ms)?,
            value,
        }));
        start_ms = end_ms;
    }

    let created_at = time_point_from_millis(rng.gen_range(0..MAX_CREATED_AT_MS))?;
    log::trace!("seed {seed}: {count} windows spanning {start_ms} ms");

    Ok(ObjectGraphTimeline::new(created_at, windows))
}

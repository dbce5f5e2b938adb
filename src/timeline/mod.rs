//! Interval-timeline representations with identical point-query semantics.
//!
//! A timeline is an ordered, non-overlapping, contiguous partition of a time
//! range into half-open windows `[start, end)`, each carrying an `i32` value.
//! Three layouts of the same logical data are provided:
//!
//! - **ObjectGraphTimeline**: one heap allocation per window, time points kept
//!   as full `OffsetDateTime` values. The canonical form; generation produces
//!   it and conversions consume it.
//! - **FlattenedTimeline**: one packed `(i64, i64, i32)` record per window,
//!   inline in a single vector.
//! - **ColumnarTimeline**: three index-aligned vectors, no per-window record.
//!
//! All three answer the same point query: the value of the window containing
//! a time point, by linear scan in stored order. First match is only match
//! because construction guarantees the partition invariant; the scan is kept
//! linear on every variant so query-cost comparisons reflect layout alone.
//!
//! Representations are immutable after construction and own their storage
//! exclusively, so they are freely shared across threads for reads.

pub mod columnar;
pub mod flattened;
pub mod object_graph;

pub use columnar::ColumnarTimeline;
pub use flattened::{FlattenedTimeline, PackedWindow};
pub use object_graph::{ObjectGraphTimeline, Window};

use time::OffsetDateTime;

use crate::error::{Error, Result};

/// Milliseconds since the UNIX epoch for a time point.
pub fn to_epoch_millis(t: OffsetDateTime) -> i64 {
    (t.unix_timestamp_nanos() / 1_000_000) as i64
}

/// Time point for a millisecond offset from the UNIX epoch.
pub fn time_point_from_millis(ms: i64) -> Result<OffsetDateTime> {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(ms) * 1_000_000)
        .map_err(|_| Error::TimeOutOfRange(ms))
}

/// Closed sum over the three representations.
///
/// Dispatch is by match rather than trait objects so a cache of mixed or
/// uniform variants stays a plain value type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timeline {
    ObjectGraph(ObjectGraphTimeline),
    Flattened(FlattenedTimeline),
    Columnar(ColumnarTimeline),
}

impl Timeline {
    /// Value of the window containing `t`, if any.
    pub fn value_at_time(&self, t: OffsetDateTime) -> Option<i32> {
        match self {
            Timeline::ObjectGraph(timeline) => timeline.value_at_time(t),
            Timeline::Flattened(timeline) => timeline.value_at_time(t),
            Timeline::Columnar(timeline) => timeline.value_at_time(t),
        }
    }

    pub fn window_count(&self) -> usize {
        match self {
            Timeline::ObjectGraph(timeline) => timeline.window_count(),
            Timeline::Flattened(timeline) => timeline.window_count(),
            Timeline::Columnar(timeline) => timeline.window_count(),
        }
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            Timeline::ObjectGraph(_) => "object-graph",
            Timeline::Flattened(_) => "flattened-fields",
            Timeline::Columnar(_) => "columnar",
        }
    }
}

/// Derives the flattened-fields form from a canonical timeline.
///
/// Conversion is one-way: the canonical form is the only one that retains
/// enough structure (and `created_at`) to act as a source.
pub fn to_flattened_fields(timeline: &Timeline) -> Result<Timeline> {
    match timeline {
        Timeline::ObjectGraph(canonical) => Ok(Timeline::Flattened(canonical.to_flattened())),
        Timeline::Flattened(_) => Err(Error::NotCanonical("input is already flattened")),
        Timeline::Columnar(_) => Err(Error::NotCanonical("input is columnar")),
    }
}

/// Derives the columnar form from a canonical timeline.
pub fn to_columnar(timeline: &Timeline) -> Result<Timeline> {
    match timeline {
        Timeline::ObjectGraph(canonical) => Ok(Timeline::Columnar(canonical.to_columnar())),
        Timeline::Flattened(_) => Err(Error::NotCanonical("input is flattened")),
        Timeline::Columnar(_) => Err(Error::NotCanonical("input is already columnar")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_round_trip() {
        for ms in [0, 1, 59_999, 1_999_999, 123_456_789] {
            let t = time_point_from_millis(ms).expect("time point");
            assert_eq!(to_epoch_millis(t), ms);
        }
    }

    #[test]
    fn out_of_range_millis_is_an_error() {
        assert!(matches!(
            time_point_from_millis(i64::MAX),
            Err(Error::TimeOutOfRange(_))
        ));
    }
}

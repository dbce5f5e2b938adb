use time::OffsetDateTime;

use super::columnar::ColumnarTimeline;
use super::flattened::{FlattenedTimeline, PackedWindow};
use super::to_epoch_millis;

/// One half-open window `[start, end)` with its value.
///
/// `start == end` is legal; such a window can never match a query point
/// (the point would have to be both `>= start` and `< end`). Generation is
/// allowed to produce them and queries simply skip past.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub start: OffsetDateTime,
    pub end: OffsetDateTime,
    pub value: i32,
}

/// Canonical representation: each window is its own heap allocation and time
/// points are kept as full `OffsetDateTime` values.
///
/// This is the layout under measurement as the "one object per element"
/// baseline; the boxing is deliberate, not incidental.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectGraphTimeline {
    created_at: OffsetDateTime,
    windows: Vec<Box<Window>>,
}

impl ObjectGraphTimeline {
    /// Builds a timeline from windows already in sorted, contiguous,
    /// non-overlapping order. Callers (the generator, tests) uphold that
    /// invariant; queries rely on it rather than re-checking it.
    pub fn new(created_at: OffsetDateTime, windows: Vec<Box<Window>>) -> Self {
        Self {
            created_at,
            windows,
        }
    }

    /// Creation time of the timeline. Not consulted by queries; only this
    /// canonical form retains it.
    pub fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    pub fn windows(&self) -> &[Box<Window>] {
        &self.windows
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// Value of the window containing `t`, by linear scan in stored order.
    pub fn value_at_time(&self, t: OffsetDateTime) -> Option<i32> {
        for window in &self.windows {
            if window.start <= t && t < window.end {
                return Some(window.value);
            }
        }
        None
    }

    /// Projects each window to a packed millisecond record, preserving
    /// order. `created_at` is dropped; it plays no part in queries.
    pub fn to_flattened(&self) -> FlattenedTimeline {
        let windows = self
            .windows
            .iter()
            .map(|w| PackedWindow {
                start_ms: to_epoch_millis(w.start),
                end_ms: to_epoch_millis(w.end),
                value: w.value,
            })
            .collect();
        FlattenedTimeline::new(windows)
    }

    /// Projects starts, ends and values into three index-aligned columns,
    /// preserving order. `created_at` is dropped.
    pub fn to_columnar(&self) -> ColumnarTimeline {
        let starts_ms = self.windows.iter().map(|w| to_epoch_millis(w.start)).collect();
        let ends_ms = self.windows.iter().map(|w| to_epoch_millis(w.end)).collect();
        let values = self.windows.iter().map(|w| w.value).collect();
        ColumnarTimeline::new(starts_ms, ends_ms, values)
    }
}

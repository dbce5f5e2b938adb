use time::OffsetDateTime;

use super::to_epoch_millis;

/// Three contiguous, index-aligned columns; no per-window record exists.
///
/// Window `i` is `[starts_ms[i], ends_ms[i])` with value `values[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnarTimeline {
    starts_ms: Vec<i64>,
    ends_ms: Vec<i64>,
    values: Vec<i32>,
}

impl ColumnarTimeline {
    /// Columns must be index-aligned: equal lengths, same window order.
    pub fn new(starts_ms: Vec<i64>, ends_ms: Vec<i64>, values: Vec<i32>) -> Self {
        debug_assert_eq!(starts_ms.len(), ends_ms.len());
        debug_assert_eq!(starts_ms.len(), values.len());
        Self {
            starts_ms,
            ends_ms,
            values,
        }
    }

    pub fn starts_ms(&self) -> &[i64] {
        &self.starts_ms
    }

    pub fn ends_ms(&self) -> &[i64] {
        &self.ends_ms
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn window_count(&self) -> usize {
        self.starts_ms.len()
    }

    /// Value of the window containing `t`, by linear scan over the columns.
    pub fn value_at_time(&self, t: OffsetDateTime) -> Option<i32> {
        let t_ms = to_epoch_millis(t);
        for i in 0..self.starts_ms.len() {
            if self.starts_ms[i] <= t_ms && t_ms < self.ends_ms[i] {
                return Some(self.values[i]);
            }
        }
        None
    }
}

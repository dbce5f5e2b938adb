use time::OffsetDateTime;

use super::to_epoch_millis;

/// Tightly packed window record: two epoch-millisecond instants and a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedWindow {
    pub start_ms: i64,
    pub end_ms: i64,
    pub value: i32,
}

/// Per-window grouping kept, heavyweight time points dropped: every window
/// lives inline in one vector as a `PackedWindow`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedTimeline {
    windows: Vec<PackedWindow>,
}

impl FlattenedTimeline {
    pub fn new(windows: Vec<PackedWindow>) -> Self {
        Self { windows }
    }

    pub fn windows(&self) -> &[PackedWindow] {
        &self.windows
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// Value of the window containing `t`, by linear scan in stored order.
    /// The query point converts to milliseconds once, up front.
    pub fn value_at_time(&self, t: OffsetDateTime) -> Option<i32> {
        let t_ms = to_epoch_millis(t);
        for window in &self.windows {
            if window.start_ms <= t_ms && t_ms < window.end_ms {
                return Some(window.value);
            }
        }
        None
    }
}

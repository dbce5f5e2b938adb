//! Analytical memory-footprint estimation.
//!
//! There is no runtime object-graph walker here; retained size is computed
//! from the known layout of each representation: `size_of` for the inline
//! part plus the owned heap blocks. Constructors build exact-sized vectors,
//! so length stands in for capacity.

use std::fmt;
use std::hash::Hash;
use std::mem;

use crate::cache::LoadingCache;
use crate::error::Result;
use crate::timeline::{
    ColumnarTimeline, FlattenedTimeline, ObjectGraphTimeline, PackedWindow, Timeline, Window,
};

/// Estimated owned heap storage of a value, excluding its inline size.
pub trait HeapSize {
    fn heap_bytes(&self) -> usize;

    /// Inline size plus owned heap storage.
    fn retained_bytes(&self) -> usize
    where
        Self: Sized,
    {
        mem::size_of::<Self>() + self.heap_bytes()
    }
}

impl HeapSize for ObjectGraphTimeline {
    /// One pointer slot in the vector plus one boxed `Window` per window.
    fn heap_bytes(&self) -> usize {
        self.window_count() * (mem::size_of::<Box<Window>>() + mem::size_of::<Window>())
    }
}

impl HeapSize for FlattenedTimeline {
    fn heap_bytes(&self) -> usize {
        self.window_count() * mem::size_of::<PackedWindow>()
    }
}

impl HeapSize for ColumnarTimeline {
    fn heap_bytes(&self) -> usize {
        self.window_count() * (2 * mem::size_of::<i64>() + mem::size_of::<i32>())
    }
}

impl HeapSize for Timeline {
    fn heap_bytes(&self) -> usize {
        match self {
            Timeline::ObjectGraph(timeline) => timeline.heap_bytes(),
            Timeline::Flattened(timeline) => timeline.heap_bytes(),
            Timeline::Columnar(timeline) => timeline.heap_bytes(),
        }
    }
}

/// Aggregate footprint of one cache's resident values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FootprintReport {
    pub label: String,
    pub entries: usize,
    pub total_bytes: usize,
}

impl FootprintReport {
    pub fn bytes_per_entry(&self) -> f64 {
        if self.entries == 0 {
            return 0.0;
        }
        self.total_bytes as f64 / self.entries as f64
    }
}

impl fmt::Display for FootprintReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.label)?;
        writeln!(f, "- elements: {}", self.entries)?;
        writeln!(
            f,
            "- total memory footprint: {:.2} MiB",
            self.total_bytes as f64 / 1024.0 / 1024.0
        )?;
        write!(
            f,
            "- avg memory / element: {:.1} bytes / element",
            self.bytes_per_entry()
        )
    }
}

/// Walks a cache's resident timelines and sums their retained bytes.
///
/// Counts the value payloads only; cache bookkeeping (map buckets, recency
/// links, `Arc` headers) is identical across representations and would only
/// add a constant offset to every report.
pub fn cache_footprint<K, F>(label: &str, cache: &LoadingCache<K, Timeline, F>) -> FootprintReport
where
    K: Eq + Hash + Clone,
    F: Fn(&K) -> Result<Timeline>,
{
    let entries = cache.entries();
    let total_bytes = entries
        .iter()
        .map(|(_, timeline)| timeline.retained_bytes())
        .sum();
    FootprintReport {
        label: label.to_string(),
        entries: entries.len(),
        total_bytes,
    }
}

//! Memory-layout comparison of interval-timeline representations.
//!
//! The same logical timeline — a sorted, contiguous partition of a time
//! range into half-open, value-bearing windows — is stored three ways: one
//! boxed record per window, packed inline records, and three parallel
//! columns. Point-query semantics are identical across the three; what
//! differs is per-element memory footprint, measured by populating one
//! bounded LRU loading cache per representation over the same key domain.
//!
//! ```
//! use timeline_layout::{timeline_for_seed, to_columnar, LoadingCache, Timeline};
//! use timeline_layout::timeline::time_point_from_millis;
//!
//! let cache = LoadingCache::new(1000, |key: &u32| {
//!     let canonical = Timeline::ObjectGraph(timeline_for_seed(*key)?);
//!     to_columnar(&canonical)
//! })?;
//!
//! let timeline = cache.get(&7)?;
//! let t = time_point_from_millis(1_500)?;
//! let _value = timeline.value_at_time(t);
//! # Ok::<(), timeline_layout::Error>(())
//! ```

pub mod cache;
pub mod error;
pub mod footprint;
pub mod generate;
pub mod timeline;

pub use cache::{CacheStats, LoadingCache};
pub use error::{Error, Result};
pub use footprint::{cache_footprint, FootprintReport, HeapSize};
pub use generate::timeline_for_seed;
pub use timeline::{
    to_columnar, to_flattened_fields, ColumnarTimeline, FlattenedTimeline, ObjectGraphTimeline,
    PackedWindow, Timeline, Window,
};

use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// Generator contract violation: a seeded draw produced a state the
    /// timeline invariants forbid. Programming error, never retried.
    Generation(&'static str),
    /// A cache was configured with zero capacity.
    ZeroCapacity,
    /// A conversion entry point was handed a non-canonical timeline.
    NotCanonical(&'static str),
    /// A millisecond offset does not fit the time-point range.
    TimeOutOfRange(i64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Generation(msg) => write!(f, "generation error: {msg}"),
            Error::ZeroCapacity => write!(f, "cache capacity must be non-zero"),
            Error::NotCanonical(msg) => write!(f, "expected canonical timeline: {msg}"),
            Error::TimeOutOfRange(ms) => write!(f, "time point out of range: {ms} ms"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

//! Error types for yatra-route.

use thiserror::Error;

/// Construction-time configuration errors.
///
/// Search outcomes are never errors: an exhausted frontier produces a failed
/// or alternative [`Route`](crate::Route), and out-of-world coordinates in a
/// request are caller bugs that panic.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteFinderError {
    #[error("ring buffer size must be a non-zero power of two, got {0}")]
    InvalidRingBufferSize(usize),

    #[error("search map size must be a positive even tile count, got {0}")]
    InvalidSearchMapSize(i32),
}

pub type Result<T> = std::result::Result<T, RouteFinderError>;

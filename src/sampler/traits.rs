//! Trait definitions for memory sampling
//!
//! These traits abstract over the platform metrics interface to enable
//! testing with mocks.

use crate::domain::MemoryUsage;
use crate::error::SamplerError;

/// Trait for reading host memory utilization
///
/// This trait abstracts the memory read, allowing for mock implementations
/// in tests while using real platform statistics in production.
pub trait MemorySource: Send {
    /// Read the current host memory utilization
    ///
    /// Fails when the platform metrics interface is unavailable. Callers
    /// must treat this as fatal: proceeding with a stale or default value
    /// would produce incorrect alerting.
    fn sample(&mut self) -> Result<MemoryUsage, SamplerError>;
}

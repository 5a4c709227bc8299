//! Suffix-array construction
//!
//! This module builds the suffix array for a byte text and exposes its
//! lookup surface.
//!
//! - `alphabet`: byte frequency profile and bucket base offsets
//! - `builder`: first-stage bucket sort and the prefix-doubling refiner
//! - `dump`: human-readable dump of the computed arrays
//! - `types`: configuration and index-wide type aliases

pub mod alphabet;
pub mod builder;
pub mod dump;
pub mod types;

// Re-exports for convenience
pub use alphabet::Alphabet;
pub use builder::{BuildStats, SuffixArray};
pub use types::{SearchConfig, SuffixIndex, DEFAULT_CONTEXT_WIDTH};

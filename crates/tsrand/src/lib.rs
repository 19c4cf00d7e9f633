//! Cryptographically sourced random values with a pseudo-random fallback.
//!
//! `tsrand` draws integers, bounded ranges, strings and UUIDs from the
//! operating system CSPRNG. When that source is unavailable, draws fall back
//! to a process-wide pseudo-random generator seeded from the clock, so no
//! operation ever fails for lack of entropy.
//!
//! Use the free functions for the common case, or build a [`Generator`] with
//! your own [`EntropySource`] and [`FallbackSource`].
//!
//! # Example
//! ```rust
//! let n = tsrand::int32();
//! let s = tsrand::string(10);
//! let v = tsrand::visible_string(10);
//! let id = tsrand::uuid();
//! let r = tsrand::range_int(10, 100);
//! # assert!(n >= 0);
//! # assert_eq!(s.len(), 10);
//! # assert_eq!(v.len(), 10);
//! # assert_eq!(id.len(), 36);
//! # assert!((10..100).contains(&r));
//! ```
mod charset;
mod entropy;
mod error;
mod generator;
mod global;
mod mutex;
mod pool;

pub use crate::charset::*;
pub use crate::entropy::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::global::*;
pub use crate::pool::*;

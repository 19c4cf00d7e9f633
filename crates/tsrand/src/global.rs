//! Free functions over a process-wide default [`Generator`].
//!
//! These are the simplest way to use the crate: no setup, safe to call from
//! any thread.
//!
//! # Example
//! ```rust
//! let n = tsrand::range_int64(1_000, 9_999);
//! let code = tsrand::visible_string(8);
//! let id = tsrand::uuid();
//! # assert!((1_000..9_999).contains(&n));
//! # assert_eq!(code.chars().count(), 8);
//! # assert_eq!(id.len(), 36);
//! ```

use crate::{Generator, Result};
use std::sync::LazyLock;

/// The shared generator behind every free function.
static DEFAULT_GENERATOR: LazyLock<Generator> = LazyLock::new(Generator::new);

/// Returns the process-wide default [`Generator`].
pub fn default_generator() -> &'static Generator {
    &DEFAULT_GENERATOR
}

/// Returns a uniform `i32` in `[0, i32::MAX]`.
pub fn int32() -> i32 {
    DEFAULT_GENERATOR.int32()
}

/// Returns a uniform `i64` in `[0, i64::MAX)`.
pub fn int64() -> i64 {
    DEFAULT_GENERATOR.int64()
}

/// Returns a uniform `u32` in `[0, u32::MAX]`.
pub fn uint32() -> u32 {
    DEFAULT_GENERATOR.uint32()
}

/// Returns a uniform `u64` in `[0, u64::MAX)`.
pub fn uint64() -> u64 {
    DEFAULT_GENERATOR.uint64()
}

/// Returns a uniform non-negative `isize`.
pub fn int() -> isize {
    DEFAULT_GENERATOR.int()
}

/// Returns a uniform `usize`.
pub fn uint() -> usize {
    DEFAULT_GENERATOR.uint()
}

/// Returns a uniform `isize` in `[min, max)`, or `0` if `min > max`.
///
/// Prefer [`range_int_safe`] in new code.
pub fn range_int(min: isize, max: isize) -> isize {
    DEFAULT_GENERATOR.range(min, max)
}

/// Returns a uniform `isize` in `[min, max)`.
///
/// # Errors
/// Returns [`Error::InvalidRange`](crate::Error::InvalidRange) if `min > max`.
pub fn range_int_safe(min: isize, max: isize) -> Result<isize> {
    DEFAULT_GENERATOR.range_safe(min, max)
}

/// Returns a uniform `i32` in `[min, max)`, or `0` if `min > max`.
pub fn range_int32(min: i32, max: i32) -> i32 {
    DEFAULT_GENERATOR.range(min, max)
}

/// Returns a uniform `i32` in `[min, max)`.
///
/// # Errors
/// Returns [`Error::InvalidRange`](crate::Error::InvalidRange) if `min > max`.
pub fn range_int32_safe(min: i32, max: i32) -> Result<i32> {
    DEFAULT_GENERATOR.range_safe(min, max)
}

/// Returns a uniform `i64` in `[min, max)`, or `0` if `min > max`.
///
/// Prefer [`range_int64_safe`] in new code.
pub fn range_int64(min: i64, max: i64) -> i64 {
    DEFAULT_GENERATOR.range(min, max)
}

/// Returns a uniform `i64` in `[min, max)`.
///
/// # Errors
/// Returns [`Error::InvalidRange`](crate::Error::InvalidRange) if `min > max`.
pub fn range_int64_safe(min: i64, max: i64) -> Result<i64> {
    DEFAULT_GENERATOR.range_safe(min, max)
}

/// Returns a uniform `u32` in `[min, max)`, or `0` if `min > max`.
pub fn range_uint32(min: u32, max: u32) -> u32 {
    DEFAULT_GENERATOR.range(min, max)
}

/// Returns a uniform `u32` in `[min, max)`.
///
/// # Errors
/// Returns [`Error::InvalidRange`](crate::Error::InvalidRange) if `min > max`.
pub fn range_uint32_safe(min: u32, max: u32) -> Result<u32> {
    DEFAULT_GENERATOR.range_safe(min, max)
}

/// Returns a uniform `u64` in `[min, max)`, or `0` if `min > max`.
pub fn range_uint64(min: u64, max: u64) -> u64 {
    DEFAULT_GENERATOR.range(min, max)
}

/// Returns a uniform `u64` in `[min, max)`.
///
/// # Errors
/// Returns [`Error::InvalidRange`](crate::Error::InvalidRange) if `min > max`.
pub fn range_uint64_safe(min: u64, max: u64) -> Result<u64> {
    DEFAULT_GENERATOR.range_safe(min, max)
}

/// Returns an alphanumeric string of `length` characters.
pub fn string(length: usize) -> String {
    DEFAULT_GENERATOR.string(length)
}

/// Returns a string of `length` characters with no easily confused glyphs.
pub fn visible_string(length: usize) -> String {
    DEFAULT_GENERATOR.visible_string(length)
}

/// Returns a string of `length` characters drawn from `alphabet`.
///
/// Empty if `alphabet` is empty or `length` is zero.
pub fn custom_string(alphabet: &str, length: usize) -> String {
    DEFAULT_GENERATOR.custom_string(alphabet, length)
}

/// Returns a string of `length` ASCII letters.
pub fn alpha_string(length: usize) -> String {
    DEFAULT_GENERATOR.alpha_string(length)
}

/// Returns a string of `length` ASCII digits.
pub fn numeric_string(length: usize) -> String {
    DEFAULT_GENERATOR.numeric_string(length)
}

/// Returns a string of `length` lowercase ASCII letters.
pub fn lowercase_string(length: usize) -> String {
    DEFAULT_GENERATOR.lowercase_string(length)
}

/// Returns a string of `length` uppercase ASCII letters.
pub fn uppercase_string(length: usize) -> String {
    DEFAULT_GENERATOR.uppercase_string(length)
}

/// Returns a 36-character hyphenated UUID string.
pub fn uuid() -> String {
    DEFAULT_GENERATOR.uuid()
}

/// A result type defaulting to this crate's [`Error`].
///
/// Only the range-checked entrypoints are fallible. Every other operation
/// absorbs irregular input or entropy failure and returns a value directly.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `tsrand` can produce.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The lower bound of a `[min, max)` range was greater than the upper
    /// bound.
    ///
    /// Bounds are widened to `i128` so that every supported integer domain
    /// can report its original values.
    #[error("invalid range: min ({min}) must not exceed max ({max})")]
    InvalidRange {
        /// The requested inclusive lower bound.
        min: i128,
        /// The requested exclusive upper bound.
        max: i128,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_range_message_includes_bounds() {
        let err = Error::InvalidRange { min: 10, max: -3 };
        assert_eq!(
            err.to_string(),
            "invalid range: min (10) must not exceed max (-3)"
        );
    }
}

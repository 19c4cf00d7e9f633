use crate::{EntropySource, Error, FallbackSource, Generator, Result};
use core::fmt;
#[cfg(feature = "tracing")]
use tracing::instrument;

mod private {
    pub trait Sealed {}
}

/// Integer types that can be drawn from a `[min, max)` range.
///
/// Implemented for every primitive integer up to 64 bits wide. Arithmetic on
/// the bounds happens in `i128`, so `max - min` never overflows, even for
/// `i64::MIN..i64::MAX` or `0..u64::MAX`.
pub trait RangeInt: Copy + Default + PartialOrd + fmt::Debug + private::Sealed {
    /// Widens the value to `i128` without loss.
    fn widen(self) -> i128;

    /// Narrows an `i128` known to lie within this type's bounds.
    fn narrow(wide: i128) -> Self;
}

macro_rules! range_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl private::Sealed for $ty {}

            impl RangeInt for $ty {
                #[inline]
                #[allow(clippy::cast_lossless)]
                fn widen(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn narrow(wide: i128) -> Self {
                    debug_assert!(<$ty>::try_from(wide).is_ok(), "{wide} out of range");
                    <$ty>::try_from(wide).unwrap_or_default()
                }
            }
        )*
    };
}

range_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<E, F> Generator<E, F>
where
    E: EntropySource,
    F: FallbackSource,
{
    /// Returns a uniform value in `[min, max)`.
    ///
    /// A single-point range (`min == max`) returns `min` without consuming
    /// any entropy.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRange`] if `min > max`.
    ///
    /// # Example
    /// ```
    /// use tsrand::{Error, Generator};
    ///
    /// let generator = Generator::new();
    /// let n = generator.range_safe(-5_i32, 5).unwrap();
    /// assert!((-5..5).contains(&n));
    ///
    /// assert_eq!(generator.range_safe(7_u64, 7), Ok(7));
    /// assert!(matches!(
    ///     generator.range_safe(9_u32, 3),
    ///     Err(Error::InvalidRange { min: 9, max: 3 })
    /// ));
    /// ```
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn range_safe<T: RangeInt>(&self, min: T, max: T) -> Result<T> {
        if min > max {
            return Err(Error::InvalidRange {
                min: min.widen(),
                max: max.widen(),
            });
        }
        if min == max {
            return Ok(min);
        }

        let start = min.widen();
        let span = (max.widen() - start).unsigned_abs();
        // span <= 2^64, so the offset always fits.
        #[allow(clippy::cast_possible_wrap)]
        let offset = self.draw_bounded(span) as i128;
        Ok(T::narrow(start + offset))
    }

    /// Returns a uniform value in `[min, max)`, or zero if `min > max`.
    ///
    /// Kept for call sites that cannot handle a failure. New code should
    /// prefer [`Self::range_safe`], which reports the invalid range.
    pub fn range<T: RangeInt>(&self, min: T, max: T) -> T {
        self.range_safe(min, max).unwrap_or_default()
    }
}

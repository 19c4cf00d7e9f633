use crate::{EntropySource, FallbackSource, Generator, Scratch};

impl<E, F> Generator<E, F>
where
    E: EntropySource,
    F: FallbackSource,
{
    /// Draws a uniform integer in `[0, upper)`.
    ///
    /// Tries the secure source first with a pooled scratch value. If that
    /// fails, the scratch value is released and the draw is served by the
    /// fallback source instead. `upper` values of `0` and `1` return `0`.
    pub fn draw_bounded(&self, upper: u128) -> u128 {
        let secure = {
            let mut scratch = self.pool.acquire();
            scratch.set_bound(upper);
            self.entropy.secure_draw(&mut scratch)
        };
        secure.unwrap_or_else(|| self.fall_back(upper))
    }

    /// Like [`Self::draw_bounded`], but reuses a scratch value the caller
    /// already holds.
    pub(crate) fn draw_in(&self, scratch: &mut Scratch, upper: u128) -> u128 {
        scratch.set_bound(upper);
        self.entropy
            .secure_draw(scratch)
            .unwrap_or_else(|| self.fall_back(upper))
    }

    fn fall_back(&self, upper: u128) -> u128 {
        #[cfg(feature = "tracing")]
        tracing::trace!(upper, "secure draw failed; using fallback");
        self.fallback.bounded(upper)
    }

    /// Returns a uniform `i64` in `[0, i64::MAX)`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn int64(&self) -> i64 {
        self.draw_bounded(i64::MAX as u128) as i64
    }

    /// Returns a uniform `u64` in `[0, u64::MAX)`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn uint64(&self) -> u64 {
        self.draw_bounded(u128::from(u64::MAX)) as u64
    }

    /// Returns a uniform non-negative `i32`.
    ///
    /// Keeps the high 32 bits of [`Self::int64`] rather than truncating, so
    /// the result covers `[0, i32::MAX]`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn int32(&self) -> i32 {
        (self.int64() >> 32) as i32
    }

    /// Returns a uniform `u32` taken from the high 32 bits of
    /// [`Self::uint64`].
    #[allow(clippy::cast_possible_truncation)]
    pub fn uint32(&self) -> u32 {
        (self.uint64() >> 32) as u32
    }

    /// Returns a uniform non-negative `isize`.
    ///
    /// Draws an `i64`; on targets where it does not fit, it is reduced modulo
    /// `isize::MAX`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn int(&self) -> isize {
        let n = self.int64();
        isize::try_from(n).unwrap_or_else(|_| (n % isize::MAX as i64) as isize)
    }

    /// Returns a uniform `usize`.
    ///
    /// Draws a `u64`; on targets where it does not fit, it is reduced modulo
    /// `usize::MAX`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn uint(&self) -> usize {
        let n = self.uint64();
        usize::try_from(n).unwrap_or_else(|_| (n % usize::MAX as u64) as usize)
    }
}

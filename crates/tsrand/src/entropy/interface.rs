use crate::Scratch;

/// Upper limit on rejected candidates before a draw is treated as failed.
///
/// A healthy source rejects fewer than half of its candidates, so reaching
/// this limit means the source is returning degenerate bytes.
pub const MAX_REJECTIONS: usize = 64;

/// A trait for secure entropy sources that fill buffers with random bytes.
///
/// This abstraction allows you to plug in the platform CSPRNG or a mocked
/// source in tests. Failures are reported as `false`, never as a panic, so the
/// caller can fall back to a [`FallbackSource`].
///
/// # Example
/// ```
/// use tsrand::{EntropySource, Scratch};
///
/// struct Zeros;
/// impl EntropySource for Zeros {
///     fn try_fill(&self, dest: &mut [u8]) -> bool {
///         dest.fill(0);
///         true
///     }
/// }
///
/// let mut scratch = Scratch::default();
/// scratch.set_bound(10);
/// assert_eq!(Zeros.secure_draw(&mut scratch), Some(0));
/// ```
pub trait EntropySource {
    /// Fills `dest` with random bytes, returning `false` if the source is
    /// unavailable.
    fn try_fill(&self, dest: &mut [u8]) -> bool;

    /// Draws a uniform integer in `[0, scratch.bound())`.
    ///
    /// Reads the fewest whole bytes that can represent `bound - 1`, masks the
    /// unused high bits and rejects candidates that land outside the bound.
    /// Bounds of zero and one yield `Some(0)` without reading any entropy.
    ///
    /// Returns `None` if the source fails or keeps producing out-of-range
    /// candidates.
    fn secure_draw(&self, scratch: &mut Scratch) -> Option<u128> {
        let bound = scratch.bound();
        if bound <= 1 {
            return Some(0);
        }

        let bits = u128::BITS - (bound - 1).leading_zeros();
        let len = bits.div_ceil(8) as usize;
        let mask = u8::MAX >> (len as u32 * 8 - bits);

        for _ in 0..MAX_REJECTIONS {
            let buf = &mut scratch.bytes_mut()[..len];
            if !self.try_fill(buf) {
                return None;
            }
            buf[0] &= mask;
            let candidate = buf
                .iter()
                .fold(0u128, |acc, byte| (acc << 8) | u128::from(*byte));
            if candidate < bound {
                return Some(candidate);
            }
        }
        None
    }
}

impl<T: EntropySource + ?Sized> EntropySource for &T {
    fn try_fill(&self, dest: &mut [u8]) -> bool {
        (**self).try_fill(dest)
    }
}

/// A trait for the pseudo-random generator used when the secure source fails.
///
/// Implementations must be usable from many threads at once through `&self`.
pub trait FallbackSource {
    /// Returns a uniform integer in `[0, upper)`, or `0` when `upper <= 1`.
    fn bounded(&self, upper: u128) -> u128;
}

impl<T: FallbackSource + ?Sized> FallbackSource for &T {
    fn bounded(&self, upper: u128) -> u128 {
        (**self).bounded(upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutex::{Mutex, lock};

    /// Replays a fixed byte script, failing once it runs out.
    struct ScriptedEntropy {
        bytes: Mutex<Vec<u8>>,
    }

    impl ScriptedEntropy {
        fn new(mut bytes: Vec<u8>) -> Self {
            bytes.reverse();
            Self {
                bytes: Mutex::new(bytes),
            }
        }
    }

    impl EntropySource for ScriptedEntropy {
        fn try_fill(&self, dest: &mut [u8]) -> bool {
            let mut bytes = lock(&self.bytes);
            if bytes.len() < dest.len() {
                return false;
            }
            for slot in dest.iter_mut() {
                *slot = bytes.pop().unwrap();
            }
            true
        }
    }

    struct AllOnes;
    impl EntropySource for AllOnes {
        fn try_fill(&self, dest: &mut [u8]) -> bool {
            dest.fill(u8::MAX);
            true
        }
    }

    fn draw(source: &impl EntropySource, bound: u128) -> Option<u128> {
        let mut scratch = Scratch::default();
        scratch.set_bound(bound);
        source.secure_draw(&mut scratch)
    }

    #[test]
    fn trivial_bounds_read_nothing() {
        let source = ScriptedEntropy::new(vec![]);
        assert_eq!(draw(&source, 0), Some(0));
        assert_eq!(draw(&source, 1), Some(0));
    }

    #[test]
    fn reads_minimal_bytes_big_endian() {
        // 300 needs 9 bits: two bytes with the top 7 bits masked off.
        let source = ScriptedEntropy::new(vec![0xFE, 0x2A]);
        assert_eq!(draw(&source, 300), Some(0x02A));
    }

    #[test]
    fn rejects_out_of_range_candidates() {
        // bound 5 -> 3 bits; 0x07 and 0x05 are rejected, 0x04 accepted.
        let source = ScriptedEntropy::new(vec![0x07, 0xFD, 0x04]);
        assert_eq!(draw(&source, 5), Some(4));
    }

    #[test]
    fn exact_power_of_two_needs_no_rejection() {
        let source = ScriptedEntropy::new(vec![0xFF]);
        assert_eq!(draw(&source, 256), Some(255));
    }

    #[test]
    fn full_u64_bound_uses_eight_bytes() {
        let source = ScriptedEntropy::new(vec![0x01; 8]);
        assert_eq!(draw(&source, u128::from(u64::MAX)), Some(0x0101_0101_0101_0101));
    }

    #[test]
    fn source_failure_is_reported() {
        let source = ScriptedEntropy::new(vec![0x01]);
        assert_eq!(draw(&source, 1 << 20), None);
    }

    #[test]
    fn degenerate_source_gives_up() {
        assert_eq!(draw(&AllOnes, 5), None);
    }

    #[test]
    fn borrowed_source_delegates() {
        let source = ScriptedEntropy::new(vec![0x03]);
        assert_eq!(draw(&&source, 10), Some(3));
    }
}

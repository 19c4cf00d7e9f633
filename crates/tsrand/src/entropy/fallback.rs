use crate::FallbackSource;
use crate::mutex::{Mutex, lock};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// The process-wide fallback generator, built on first use.
static FALLBACK: OnceLock<FallbackRng> = OnceLock::new();

/// A pseudo-random generator used only when the secure source fails.
///
/// Wraps a `rand::rngs::StdRng` behind a mutex so one instance can serve
/// every thread. It is **not** suitable for security-sensitive values; it
/// exists so that draws keep working when the OS source does not.
#[derive(Debug)]
pub struct FallbackRng {
    rng: Mutex<StdRng>,
}

impl FallbackRng {
    /// Creates a generator from an explicit seed.
    ///
    /// Two generators built from the same seed produce the same sequence,
    /// which is what tests want and production never uses.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Creates a generator seeded from the current wall-clock time in
    /// nanoseconds.
    #[must_use]
    pub fn from_time() -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default();
        Self::from_seed(nanos)
    }
}

impl FallbackSource for FallbackRng {
    fn bounded(&self, upper: u128) -> u128 {
        if upper <= 1 {
            return 0;
        }
        lock(&self.rng).random_range(0..upper)
    }
}

/// Returns the process-wide [`FallbackRng`], constructing it on first call.
///
/// Construction happens exactly once even when many threads race on first
/// use; every caller observes the same fully built instance, which lives for
/// the rest of the process.
pub fn fallback_generator() -> &'static FallbackRng {
    FALLBACK.get_or_init(|| {
        #[cfg(feature = "tracing")]
        tracing::warn!("secure entropy unavailable; seeding time-based fallback generator");
        FallbackRng::from_time()
    })
}

/// A [`FallbackSource`] that routes to [`fallback_generator`].
///
/// This is a zero-sized handle: it does not hold the generator, so it never
/// forces construction until a draw actually falls back.
#[derive(Default, Clone, Copy, Debug)]
pub struct GlobalFallback;

impl FallbackSource for GlobalFallback {
    fn bounded(&self, upper: u128) -> u128 {
        fallback_generator().bounded(upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::scope;

    #[test]
    fn same_seed_same_sequence() {
        let a = FallbackRng::from_seed(42);
        let b = FallbackRng::from_seed(42);
        for _ in 0..16 {
            assert_eq!(a.bounded(1_000_000), b.bounded(1_000_000));
        }
    }

    #[test]
    fn bounded_stays_in_range() {
        let rng = FallbackRng::from_seed(7);
        assert_eq!(rng.bounded(0), 0);
        assert_eq!(rng.bounded(1), 0);
        for _ in 0..10_000 {
            assert!(rng.bounded(17) < 17);
        }
        for _ in 0..1_000 {
            assert!(rng.bounded(u128::from(u64::MAX)) < u128::from(u64::MAX));
        }
    }

    #[test]
    fn seeds_diverge() {
        let a = FallbackRng::from_seed(1);
        let b = FallbackRng::from_seed(2);
        let a: Vec<_> = (0..8).map(|_| a.bounded(u128::MAX)).collect();
        let b: Vec<_> = (0..8).map(|_| b.bounded(u128::MAX)).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn global_generator_is_built_once() {
        const THREADS: usize = 16;
        let addrs: Vec<usize> = scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| s.spawn(|| core::ptr::from_ref(fallback_generator()) as usize))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn global_handle_draws_in_range() {
        for _ in 0..1_000 {
            assert!(GlobalFallback.bounded(10) < 10);
        }
    }
}

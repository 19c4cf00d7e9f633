//! Reusable scratch values for bounded draws.
//!
//! Every bounded draw needs a place to hold its exclusive upper bound and the
//! raw entropy bytes it reads before they are assembled into a candidate. The
//! [`ScratchPool`] hands these out one owner at a time and takes them back
//! when the [`PooledScratch`] guard is dropped, so a scratch value is never
//! visible to two draws at once and is released on every exit path.

use crate::mutex::{Mutex, lock};
use core::ops::{Deref, DerefMut};

/// Number of idle scratch values a pool keeps by default.
pub const DEFAULT_POOL_CAPACITY: usize = 64;

/// Width in bytes of the widest bound a scratch value can hold.
pub const SCRATCH_BYTES: usize = core::mem::size_of::<u128>();

/// A wide integer workspace owned by exactly one draw at a time.
///
/// `bound` is the exclusive upper limit of the draw and `bytes` receives raw
/// entropy. Both are zero whenever the scratch value sits in a pool.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Scratch {
    bound: u128,
    bytes: [u8; SCRATCH_BYTES],
}

impl Scratch {
    /// Sets the exclusive upper bound for the next draw.
    pub fn set_bound(&mut self, bound: u128) {
        self.bound = bound;
    }

    /// Returns the exclusive upper bound.
    #[must_use]
    pub fn bound(&self) -> u128 {
        self.bound
    }

    /// Returns the entropy buffer.
    pub fn bytes_mut(&mut self) -> &mut [u8; SCRATCH_BYTES] {
        &mut self.bytes
    }

    /// Returns `true` when both the bound and the buffer are zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.bound == 0 && self.bytes.iter().all(|b| *b == 0)
    }

    /// Zeroes the bound and wipes any entropy left in the buffer.
    pub fn reset(&mut self) {
        self.bound = 0;
        self.bytes.fill(0);
    }
}

/// A thread-safe pool of [`Scratch`] values.
///
/// Handout is serialized by a mutex. The lock is held only long enough to
/// pop or push one entry, never across an entropy read.
#[derive(Debug)]
pub struct ScratchPool {
    idle: Mutex<Vec<Scratch>>,
    capacity: usize,
}

impl Default for ScratchPool {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_POOL_CAPACITY)
    }
}

impl ScratchPool {
    /// Creates a pool that retains up to `capacity` idle scratch values.
    ///
    /// A capacity of zero is valid: every acquisition then allocates a fresh
    /// value and every release drops it.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            idle: Mutex::new(Vec::with_capacity(capacity)),
            capacity,
        }
    }

    /// Takes a scratch value from the pool, creating one if none is idle.
    ///
    /// The returned guard dereferences to a zeroed [`Scratch`] and gives it
    /// back to the pool when dropped.
    pub fn acquire(&self) -> PooledScratch<'_> {
        let scratch = lock(&self.idle).pop().unwrap_or_default();
        debug_assert!(scratch.is_zero());
        PooledScratch {
            pool: self,
            scratch: Some(scratch),
        }
    }

    /// Returns the number of idle scratch values currently held.
    #[must_use]
    pub fn idle(&self) -> usize {
        lock(&self.idle).len()
    }

    /// Returns the maximum number of idle scratch values retained.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn release(&self, mut scratch: Scratch) {
        scratch.reset();
        let mut idle = lock(&self.idle);
        if idle.len() < self.capacity {
            idle.push(scratch);
        }
    }
}

/// Scoped ownership of one [`Scratch`] value.
///
/// Dropping the guard resets the value and returns it to its pool.
#[derive(Debug)]
pub struct PooledScratch<'a> {
    pool: &'a ScratchPool,
    scratch: Option<Scratch>,
}

impl Deref for PooledScratch<'_> {
    type Target = Scratch;

    fn deref(&self) -> &Scratch {
        // Only `drop` takes the value out.
        self.scratch.as_ref().unwrap_or_else(|| unreachable!())
    }
}

impl DerefMut for PooledScratch<'_> {
    fn deref_mut(&mut self) -> &mut Scratch {
        self.scratch.as_mut().unwrap_or_else(|| unreachable!())
    }
}

impl Drop for PooledScratch<'_> {
    fn drop(&mut self) {
        if let Some(scratch) = self.scratch.take() {
            self.pool.release(scratch);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::scope;

    #[test]
    fn acquire_creates_when_empty() {
        let pool = ScratchPool::default();
        assert_eq!(pool.idle(), 0);
        let scratch = pool.acquire();
        assert!(scratch.is_zero());
        drop(scratch);
        assert_eq!(pool.idle(), 1);
    }

    #[test]
    fn release_resets_scratch() {
        let pool = ScratchPool::default();
        {
            let mut scratch = pool.acquire();
            scratch.set_bound(u128::from(u64::MAX));
            scratch.bytes_mut().fill(0xAB);
        }
        let scratch = pool.acquire();
        assert!(scratch.is_zero());
    }

    #[test]
    fn release_happens_on_early_return() {
        fn bail_out(pool: &ScratchPool) -> Option<u128> {
            let mut scratch = pool.acquire();
            scratch.set_bound(7);
            Option::<()>::None?;
            Some(scratch.bound())
        }

        let pool = ScratchPool::default();
        assert_eq!(bail_out(&pool), None);
        assert_eq!(pool.idle(), 1);
    }

    #[test]
    fn release_happens_on_panic() {
        let pool = ScratchPool::default();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let mut scratch = pool.acquire();
            scratch.set_bound(3);
            panic!("draw failed");
        }));
        assert!(result.is_err());
        assert_eq!(pool.idle(), 1);
        assert!(pool.acquire().is_zero());
    }

    #[test]
    fn surplus_is_dropped_past_capacity() {
        let pool = ScratchPool::with_capacity(2);
        let a = pool.acquire();
        let b = pool.acquire();
        let c = pool.acquire();
        drop((a, b, c));
        assert_eq!(pool.idle(), 2);
        assert_eq!(pool.capacity(), 2);
    }

    #[test]
    fn zero_capacity_never_retains() {
        let pool = ScratchPool::with_capacity(0);
        drop(pool.acquire());
        assert_eq!(pool.idle(), 0);
    }

    #[test]
    fn concurrent_holders_never_share() {
        const THREADS: usize = 8;
        const ROUNDS: usize = 2_000;

        let pool = ScratchPool::with_capacity(THREADS);
        scope(|s| {
            for t in 0..THREADS {
                let pool = &pool;
                s.spawn(move || {
                    let marker = t as u128 + 1;
                    for _ in 0..ROUNDS {
                        let mut scratch = pool.acquire();
                        assert!(scratch.is_zero());
                        scratch.set_bound(marker);
                        std::thread::yield_now();
                        assert_eq!(scratch.bound(), marker);
                    }
                });
            }
        });
        assert!(pool.idle() <= THREADS);
    }
}

use crate::EntropySource;
use rand::{TryRngCore, rngs::OsRng};

/// An [`EntropySource`] backed by the operating system CSPRNG
/// (`rand::rngs::OsRng`).
///
/// The first read may block briefly if the OS entropy pool has not been
/// seeded yet, typically just after boot. Read failures are reported as
/// `false` rather than panicking.
///
/// This type is zero-sized and holds no state, so it may be freely shared
/// across threads.
#[derive(Default, Clone, Copy, Debug)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn try_fill(&self, dest: &mut [u8]) -> bool {
        OsRng
            .try_fill_bytes(dest)
            .inspect_err(|_err| {
                #[cfg(feature = "tracing")]
                tracing::trace!(error = %_err, len = dest.len(), "os entropy read failed");
            })
            .is_ok()
    }
}

//! UUID generation with a three-tier fallback.
//!
//! 1. A version 4 UUID built from 16 secure bytes.
//! 2. A version 1 UUID with a random node id and clock sequence.
//! 3. A v4-shaped string assembled character by character, which keeps
//!    working on the fallback source when the secure source is down.

use crate::charset::HEX;
use crate::{Charset, EntropySource, FallbackSource, Generator};
use std::sync::LazyLock;
#[cfg(feature = "tracing")]
use tracing::instrument;
use uuid::{Builder, Timestamp, Uuid, timestamp::context::Context};

/// Length of a hyphenated UUID string.
pub const UUID_LEN: usize = 36;

static VARIANT: LazyLock<Charset> = LazyLock::new(|| Charset::new("89ab"));

/// Which mechanism produced an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdTier {
    /// A standards-compliant version 4 UUID.
    Random,
    /// A standards-compliant version 1 UUID.
    TimeBased,
    /// A hand-assembled string in the version 4 layout.
    Assembled,
}

impl<E, F> Generator<E, F>
where
    E: EntropySource,
    F: FallbackSource,
{
    /// Returns a 36-character hyphenated UUID string.
    ///
    /// Never fails: see [`Self::uuid_with_tier`] for the fallback order.
    ///
    /// # Example
    /// ```
    /// use tsrand::Generator;
    ///
    /// let id = Generator::new().uuid();
    /// assert_eq!(id.len(), 36);
    /// assert_eq!(&id[14..15], "4");
    /// ```
    pub fn uuid(&self) -> String {
        self.uuid_with_tier().0
    }

    /// Returns a UUID string together with the tier that produced it.
    ///
    /// Tries, in order, a version 4 UUID from the secure source, a version 1
    /// UUID seeded from the secure source, and finally a hand-assembled
    /// `xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx` string with `y` in `{8,9,a,b}`.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn uuid_with_tier(&self) -> (String, IdTier) {
        if let Some(id) = self.random_uuid() {
            return (id.hyphenated().to_string(), IdTier::Random);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!("v4 uuid unavailable; trying v1");

        if let Some(id) = self.time_uuid() {
            return (id.hyphenated().to_string(), IdTier::TimeBased);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!("v1 uuid unavailable; assembling from fallback draws");

        (self.assembled_uuid(), IdTier::Assembled)
    }

    fn random_uuid(&self) -> Option<Uuid> {
        let mut bytes = [0u8; 16];
        self.entropy
            .try_fill(&mut bytes)
            .then(|| Builder::from_random_bytes(bytes).into_uuid())
    }

    fn time_uuid(&self) -> Option<Uuid> {
        let mut seed = [0u8; 8];
        if !self.entropy.try_fill(&mut seed) {
            return None;
        }
        let [n0, n1, n2, n3, n4, n5, c0, c1] = seed;
        // Random node ids set the multicast bit so they can't collide with a
        // real MAC address.
        let node_id = [n0 | 0x01, n1, n2, n3, n4, n5];
        let context = Context::new(u16::from_be_bytes([c0, c1]));
        Some(Uuid::new_v1(Timestamp::now(context), &node_id))
    }

    fn assembled_uuid(&self) -> String {
        let mut id = String::with_capacity(UUID_LEN);
        id.push_str(&self.string_from(&HEX, 8));
        id.push('-');
        id.push_str(&self.string_from(&HEX, 4));
        id.push_str("-4");
        id.push_str(&self.string_from(&HEX, 3));
        id.push('-');
        id.push_str(&self.string_from(&VARIANT, 1));
        id.push_str(&self.string_from(&HEX, 3));
        id.push('-');
        id.push_str(&self.string_from(&HEX, 12));
        id
    }
}

//! Composer builder and run loop.
//!
//! The [`Composer`] owns the whole run state: the action registry, the
//! packet buffer and the random source. [`Composer::compose`] splits the
//! argument list into groups and dispatches them strictly left to right,
//! stopping at the first failure.
//!
//! # Example
//!
//! ```
//! use sew::Composer;
//!
//! let mut composer = Composer::builder().seed(1).build();
//! composer
//!     .compose(&["mac", "bc", "^", "x", "88", "b5", "^", "pad", "8"])
//!     .unwrap();
//!
//! assert_eq!(composer.len(), 8);
//! let packet = composer.finish();
//! assert_eq!(&packet[..6], &[0xff; 6]);
//! ```

use bytes::Bytes;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::action::{split_groups, ActionRegistry, EncodeContext};
use crate::buffer::PacketBuffer;
use crate::error::Result;

/// Builder for configuring a [`Composer`].
#[derive(Debug, Clone, Default)]
pub struct ComposerBuilder {
    seed: Option<u64>,
    capacity: Option<usize>,
}

impl ComposerBuilder {
    /// Create a new composer builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the random source used by `mac random`.
    ///
    /// Without a seed the source is initialized from OS entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Same as [`seed`](Self::seed), but keeps entropy seeding for `None`.
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Initial buffer capacity in bytes.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Build the composer with an empty buffer.
    pub fn build(self) -> Composer {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let buffer = match self.capacity {
            Some(capacity) => PacketBuffer::with_capacity(capacity),
            None => PacketBuffer::new(),
        };

        Composer {
            registry: ActionRegistry::new(),
            buffer,
            rng,
        }
    }
}

/// Accumulates the bytes of every action applied to it.
#[derive(Debug)]
pub struct Composer {
    registry: ActionRegistry,
    buffer: PacketBuffer,
    rng: StdRng,
}

impl Composer {
    /// Create a composer seeded from OS entropy.
    pub fn new() -> Self {
        ComposerBuilder::new().build()
    }

    /// Create a new composer builder.
    pub fn builder() -> ComposerBuilder {
        ComposerBuilder::new()
    }

    /// Apply a single action group (`name operand...`).
    ///
    /// Returns the number of bytes appended.
    pub fn apply<S: AsRef<str>>(&mut self, group: &[S]) -> Result<usize> {
        let mut ctx = EncodeContext::new(&mut self.buffer, &mut self.rng);
        self.registry.dispatch(group, &mut ctx)
    }

    /// Apply every `^`-separated group of `args` in order.
    ///
    /// Stops at the first failing group. Bytes appended by earlier groups
    /// stay in the buffer, so callers that need all-or-nothing output must
    /// discard the composer on error.
    pub fn compose<S: AsRef<str>>(&mut self, args: &[S]) -> Result<()> {
        let mut actions = 0usize;
        for group in split_groups(args) {
            self.apply(group)?;
            actions += 1;
        }

        tracing::info!(actions, bytes = self.buffer.len(), "composed packet");
        Ok(())
    }

    /// Get the number of bytes composed so far.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if nothing has been composed.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// View the composed bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// Consume the composer, returning the composed bytes.
    pub fn finish(self) -> Bytes {
        self.buffer.freeze()
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

/// Compose `args` into a packet in one call.
///
/// All-or-nothing: on error no bytes are returned.
pub fn compose<S: AsRef<str>>(args: &[S], seed: Option<u64>) -> Result<Bytes> {
    let mut composer = Composer::builder().maybe_seed(seed).build();
    composer.compose(args)?;
    Ok(composer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SewError;

    #[test]
    fn test_compose_in_order() {
        let mut composer = Composer::builder().seed(0).build();
        composer
            .compose(&["hex", "01", "02", "03", "^", "pad", "4", "^", "z", "2", "^", "x", "ff"])
            .unwrap();

        assert_eq!(composer.as_bytes(), &[1, 2, 3, 0, 0, 0, 0xff]);
    }

    #[test]
    fn test_compose_nothing() {
        let mut composer = Composer::new();
        composer.compose::<&str>(&[]).unwrap();
        composer.compose(&["^", "^"]).unwrap();

        assert!(composer.is_empty());
        assert!(composer.finish().is_empty());
    }

    #[test]
    fn test_compose_stops_at_first_error() {
        let mut composer = Composer::builder().seed(0).build();
        let err = composer
            .compose(&["x", "01", "^", "vlan", "4096", "^", "x", "02"])
            .unwrap_err();

        assert!(
            matches!(err, SewError::MalformedExpression { ref action, .. } if action == "vlan")
        );
        // failed vlan wrote nothing, the third group never ran
        assert_eq!(composer.as_bytes(), &[0x01]);
    }

    #[test]
    fn test_compose_fn_is_all_or_nothing() {
        let result = compose(&["hex", "0a", "0b", "^", "bogus", "1", "2", "^"], Some(0));
        assert!(matches!(result, Err(SewError::UnknownAction { .. })));

        let packet = compose(&["hex", "0a", "0b", "^"], Some(0)).unwrap();
        assert_eq!(&packet[..], &[0x0a, 0x0b]);
    }

    #[test]
    fn test_apply_returns_appended() {
        let mut composer = Composer::builder().capacity(4).build();
        assert_eq!(composer.apply(&["mac", "broadcast"]).unwrap(), 6);
        assert_eq!(composer.apply(&["pad", "8"]).unwrap(), 2);
        assert_eq!(composer.apply(&["pad", "8"]).unwrap(), 0);
        assert_eq!(composer.len(), 8);
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let args = ["mac", "random", "^", "mac", "random", "^", "vlan", "7"];
        assert_eq!(compose(&args, Some(99)).unwrap(), compose(&args, Some(99)).unwrap());
    }
}

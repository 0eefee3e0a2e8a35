//! Action registry and dispatch.
//!
//! The registry is a fixed, compiled-in table. Several names may share one
//! encoder (`hex`/`x`, `zero`/`z`). Lookup is an exact name match and the
//! first entry in declaration order wins.

use std::fmt;

use rand::RngCore;

use super::common::{Hex, Pad, Zero};
use super::ethernet::{Mac, Vlan};
use crate::buffer::PacketBuffer;
use crate::error::{EncodeError, Result, SewError};

/// Result type for encoder functions.
pub type EncodeResult = std::result::Result<(), EncodeError>;

/// State an encoder may touch while appending its bytes.
pub struct EncodeContext<'a> {
    /// Output accumulated so far.
    pub buffer: &'a mut PacketBuffer,
    /// Source for `mac random`.
    pub rng: &'a mut dyn RngCore,
}

impl<'a> EncodeContext<'a> {
    pub fn new(buffer: &'a mut PacketBuffer, rng: &'a mut dyn RngCore) -> Self {
        Self { buffer, rng }
    }
}

/// Trait for action encoders.
///
/// Implementations validate every operand before touching the buffer, so a
/// failed call leaves the buffer unchanged.
pub trait Encoder: Send + Sync + 'static {
    /// Append this action's bytes for the given operands.
    fn encode(&self, operands: &[&str], ctx: &mut EncodeContext<'_>) -> EncodeResult;
}

/// Static entry of the registry.
pub struct ActionDescriptor {
    /// Name matched against the head token of a group.
    pub name: &'static str,
    /// Human-readable operand grammar, shown in diagnostics.
    pub usage: &'static str,
    /// Encoder invoked with the group's operands.
    pub encoder: &'static dyn Encoder,
}

impl fmt::Debug for ActionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionDescriptor")
            .field("name", &self.name)
            .field("usage", &self.usage)
            .finish_non_exhaustive()
    }
}

static ACTIONS: [ActionDescriptor; 7] = [
    // common
    ActionDescriptor {
        name: "hex",
        usage: "hex [<byte>...]",
        encoder: &Hex,
    },
    ActionDescriptor {
        name: "x",
        usage: "x [<byte>...]",
        encoder: &Hex,
    },
    ActionDescriptor {
        name: "pad",
        usage: "pad <len>",
        encoder: &Pad,
    },
    ActionDescriptor {
        name: "zero",
        usage: "zero <len>",
        encoder: &Zero,
    },
    ActionDescriptor {
        name: "z",
        usage: "z <len>",
        encoder: &Zero,
    },
    // ethernet
    ActionDescriptor {
        name: "mac",
        usage: "mac bc|broadcast|random|<xx:xx:xx:xx:xx:xx>",
        encoder: &Mac,
    },
    ActionDescriptor {
        name: "vlan",
        usage: "vlan <vid>",
        encoder: &Vlan,
    },
];

/// Registry mapping action names to encoders.
#[derive(Debug, Clone, Copy)]
pub struct ActionRegistry {
    actions: &'static [ActionDescriptor],
}

impl ActionRegistry {
    /// Registry with every built-in action.
    pub fn new() -> Self {
        Self { actions: &ACTIONS }
    }

    /// Get a descriptor by action name.
    pub fn get(&self, name: &str) -> Option<&'static ActionDescriptor> {
        self.actions.iter().find(|action| action.name == name)
    }

    /// Iterate descriptors in declaration order, aliases included.
    pub fn iter(&self) -> impl Iterator<Item = &'static ActionDescriptor> {
        self.actions.iter()
    }

    /// Dispatch one action group to its encoder.
    ///
    /// `group[0]` selects the action, the rest are its operands. Returns the
    /// number of bytes appended. An empty group appends nothing.
    ///
    /// # Errors
    ///
    /// - [`SewError::UnknownAction`] if no action has that name
    /// - [`SewError::MalformedExpression`] if the encoder rejects the operands
    pub fn dispatch<S: AsRef<str>>(
        &self,
        group: &[S],
        ctx: &mut EncodeContext<'_>,
    ) -> Result<usize> {
        let Some((head, operands)) = group.split_first() else {
            return Ok(0);
        };
        let name = head.as_ref();

        let action = self.get(name).ok_or_else(|| SewError::UnknownAction {
            name: name.to_string(),
            group: join_group(group),
        })?;

        let operands: Vec<&str> = operands.iter().map(|token| token.as_ref()).collect();
        let before = ctx.buffer.len();

        action
            .encoder
            .encode(&operands, ctx)
            .map_err(|source| SewError::MalformedExpression {
                action: action.name.to_string(),
                usage: action.usage,
                group: join_group(group),
                source,
            })?;

        let appended = ctx.buffer.len() - before;
        tracing::debug!(
            action = action.name,
            operands = operands.len(),
            appended,
            total = ctx.buffer.len(),
            "dispatched action"
        );
        Ok(appended)
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn join_group<S: AsRef<str>>(group: &[S]) -> String {
    group
        .iter()
        .map(|token| token.as_ref())
        .collect::<Vec<&str>>()
        .join(" ")
}

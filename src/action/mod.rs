//! Action module - the named operations that append bytes.
//!
//! Provides:
//! - [`ActionRegistry`] - fixed table mapping action names to encoders
//! - [`Encoder`] - the capability every action implements
//! - [`split_groups`] - splits the flat argument list on `^`
//!
//! # Example
//!
//! ```
//! use sew::action::{split_groups, ActionRegistry, EncodeContext};
//! use sew::buffer::PacketBuffer;
//! use rand::SeedableRng;
//!
//! let registry = ActionRegistry::new();
//! let mut buffer = PacketBuffer::new();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//!
//! let args = ["vlan", "100", "^", "x", "08", "00"];
//! for group in split_groups(&args) {
//!     let mut ctx = EncodeContext::new(&mut buffer, &mut rng);
//!     registry.dispatch(group, &mut ctx).unwrap();
//! }
//!
//! assert_eq!(buffer.as_bytes(), &[0x81, 0x00, 0x00, 0x64, 0x08, 0x00]);
//! ```

mod common;
mod ethernet;
mod group;
mod number;
mod registry;

pub use common::{Hex, Pad, Zero};
pub use ethernet::{parse_mac, Mac, Vlan, MAC_LEN, VID_MAX, VLAN_HLEN, VLAN_TPID};
pub use group::{split_groups, SEPARATOR};
pub use number::{parse_hex_byte, parse_integer};
pub use registry::{ActionDescriptor, ActionRegistry, EncodeContext, EncodeResult, Encoder};

use crate::error::EncodeError;

/// Return the only operand, or fail with the actual count.
pub(crate) fn single_operand<'a>(operands: &[&'a str]) -> Result<&'a str, EncodeError> {
    match operands {
        [operand] => Ok(operand),
        _ => Err(EncodeError::InvalidOperandCount {
            expected: 1,
            got: operands.len(),
        }),
    }
}

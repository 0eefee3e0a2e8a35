//! # sew
//!
//! Compose raw byte sequences from a list of small command-line actions.
//!
//! Typical use is stitching test network frames together in a shell:
//!
//! ```text
//! sew mac bc ^ mac random ^ vlan 10 ^ x 88 b5 ^ pad 60 > frame.bin
//! ```
//!
//! ## Architecture
//!
//! - **Grouper**: splits the argument list on `^` into action groups
//! - **Registry**: fixed table of actions (`hex`/`x`, `pad`, `zero`/`z`, `mac`, `vlan`)
//! - **Composer**: dispatches each group in order into one [`PacketBuffer`]
//!
//! ## Example
//!
//! ```
//! let packet = sew::compose(&["hex", "0a", "0b", "^", "zero", "2", "^", "vlan", "4095"], None)
//!     .unwrap();
//!
//! assert_eq!(&packet[..], &[0x0a, 0x0b, 0, 0, 0x81, 0x00, 0x0f, 0xff]);
//! ```

pub mod action;
pub mod buffer;
pub mod cli;
pub mod error;
pub mod output;

mod composer;

pub use action::ActionRegistry;
pub use buffer::PacketBuffer;
pub use composer::{compose, Composer, ComposerBuilder};
pub use error::{EncodeError, Result, SewError};

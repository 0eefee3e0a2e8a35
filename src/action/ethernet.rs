//! Ethernet actions: `mac` and `vlan`.
//!
//! ```text
//! 802.1Q tag
//! ┌───────────┬──────────┬──────────────┐
//! │ TPID      │ PCP/DEI  │ VID          │
//! │ 0x8100    │ 4 bits=0 │ 12 bits      │
//! └───────────┴──────────┴──────────────┘
//! ```
//!
//! All multi-byte fields are Big Endian.

use rand::RngCore;

use super::number::parse_integer;
use super::registry::{EncodeContext, EncodeResult, Encoder};
use super::single_operand;
use crate::error::EncodeError;

/// MAC address size in bytes.
pub const MAC_LEN: usize = 6;

/// VLAN tag size in bytes.
pub const VLAN_HLEN: usize = 4;

/// Tag protocol identifier for 802.1Q.
pub const VLAN_TPID: u16 = 0x8100;

/// Largest VLAN ID.
pub const VID_MAX: u16 = 0x0fff;

const MULTICAST_BIT: u8 = 0b0000_0001;
const LOCAL_BIT: u8 = 0b0000_0010;

/// `mac <address>` - six address bytes.
///
/// `<address>` is `bc`/`broadcast`, `random`, or `xx:xx:xx:xx:xx:xx`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mac;

impl Encoder for Mac {
    fn encode(&self, operands: &[&str], ctx: &mut EncodeContext<'_>) -> EncodeResult {
        let literal = single_operand(operands)?;

        let mac = match literal {
            "bc" | "broadcast" => [0xff; MAC_LEN],
            "random" => {
                let mut mac = [0u8; MAC_LEN];
                ctx.rng.fill_bytes(&mut mac);
                // unicast, locally administered
                mac[0] &= !MULTICAST_BIT;
                mac[0] |= LOCAL_BIT;
                mac
            }
            _ => parse_mac(literal)?,
        };

        ctx.buffer.extend(&mac);
        Ok(())
    }
}

/// Parse `xx:xx:xx:xx:xx:xx` (one or two hex digits per octet).
pub fn parse_mac(literal: &str) -> Result<[u8; MAC_LEN], EncodeError> {
    let invalid = || EncodeError::InvalidMacLiteral(literal.to_string());

    let mut mac = [0u8; MAC_LEN];
    let mut octets = literal.split(':');
    for byte in mac.iter_mut() {
        let octet = octets.next().ok_or_else(invalid)?;
        if !(1..=2).contains(&octet.len()) || !octet.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        *byte = u8::from_str_radix(octet, 16).map_err(|_| invalid())?;
    }

    if octets.next().is_some() {
        return Err(invalid());
    }
    Ok(mac)
}

/// `vlan <vid>` - 802.1Q tag with priority and DEI zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vlan;

impl Encoder for Vlan {
    fn encode(&self, operands: &[&str], ctx: &mut EncodeContext<'_>) -> EncodeResult {
        let literal = single_operand(operands)?;
        let vid = parse_integer(literal, "vid")?;
        let vid = u16::try_from(vid)
            .ok()
            .filter(|&vid| vid <= VID_MAX)
            .ok_or_else(|| EncodeError::numeric(literal, "vid"))?;

        let tag = ctx.buffer.reserve(VLAN_HLEN);
        tag[0..2].copy_from_slice(&VLAN_TPID.to_be_bytes());
        tag[2..4].copy_from_slice(&vid.to_be_bytes());
        Ok(())
    }
}

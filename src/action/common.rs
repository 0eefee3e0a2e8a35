//! Generic byte actions: `hex`, `pad` and `zero`.

use super::number::{parse_hex_byte, parse_integer};
use super::registry::{EncodeContext, EncodeResult, Encoder};
use super::single_operand;
use crate::buffer::MAX_LEN;
use crate::error::EncodeError;

/// `hex <byte>...` - one byte per base-16 operand.
///
/// No operands is valid and appends nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hex;

impl Encoder for Hex {
    fn encode(&self, operands: &[&str], ctx: &mut EncodeContext<'_>) -> EncodeResult {
        let bytes = operands
            .iter()
            .map(|literal| parse_hex_byte(literal))
            .collect::<Result<Vec<u8>, _>>()?;

        ctx.buffer.extend(&bytes);
        Ok(())
    }
}

/// `pad <len>` - zero-fill until the buffer length is a multiple of `len`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pad;

impl Encoder for Pad {
    fn encode(&self, operands: &[&str], ctx: &mut EncodeContext<'_>) -> EncodeResult {
        let literal = single_operand(operands)?;
        let align = to_len(literal, parse_integer(literal, "len")?, ctx.buffer.len())?;
        if align == 0 {
            return Err(EncodeError::numeric(literal, "len"));
        }

        let rem = ctx.buffer.len() % align;
        if rem != 0 {
            ctx.buffer.reserve(align - rem);
        }
        Ok(())
    }
}

/// `zero <len>` - append exactly `len` zero bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

impl Encoder for Zero {
    fn encode(&self, operands: &[&str], ctx: &mut EncodeContext<'_>) -> EncodeResult {
        let literal = single_operand(operands)?;
        let len = to_len(literal, parse_integer(literal, "len")?, ctx.buffer.len())?;

        ctx.buffer.reserve(len);
        Ok(())
    }
}

/// Reject lengths that could push the buffer past [`MAX_LEN`] from `current`.
fn to_len(literal: &str, value: u64, current: usize) -> Result<usize, EncodeError> {
    usize::try_from(value)
        .ok()
        .filter(|&len| current.checked_add(len).is_some_and(|end| end <= MAX_LEN))
        .ok_or_else(|| EncodeError::numeric(literal, "len"))
}

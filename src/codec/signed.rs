use tracing::trace;

use super::{CONTINUATION, GROUP_BITS, MAX_LEN, PAYLOAD_MASK, SIGN_BIT};
use crate::error::DecodeError;

/// Encode `value` as SLEB128 onto the end of `out`, returning the number of
/// bytes written.
pub fn append_signed(out: &mut Vec<u8>, mut value: i64) -> usize {
    let start = out.len();
    loop {
        let byte = (value as u8) & PAYLOAD_MASK;
        // arithmetic shift, the sign propagates
        value >>= GROUP_BITS;

        let sign_set = byte & SIGN_BIT != 0;
        if (value == 0 && !sign_set) || (value == -1 && sign_set) {
            out.push(byte);
            return out.len() - start;
        }
        out.push(byte | CONTINUATION);
    }
}

/// Append the SLEB128 encoding of `value` to `buf` and hand the buffer back.
pub fn encode_signed_append(mut buf: Vec<u8>, value: i64) -> Vec<u8> {
    append_signed(&mut buf, value);
    buf
}

/// Number of bytes [`append_signed`] writes for `value`.
pub fn signed_len(value: i64) -> usize {
    // significant bits plus one for the sign
    let magnitude = if value < 0 { !value } else { value };
    let bits = i64::BITS + 1 - magnitude.leading_zeros();
    bits.div_ceil(GROUP_BITS) as usize
}

/// Decode an SLEB128 value from the front of `input`.
///
/// Bytes after the terminating group are ignored. The final group's bit 6 is
/// sign-extended through the remaining high bits.
pub fn try_decode_signed(input: &[u8]) -> Result<(i64, usize), DecodeError> {
    let mut result = 0i64;
    let mut shift = 0u32;

    for (i, &byte) in input.iter().take(MAX_LEN).enumerate() {
        result |= i64::from(byte & PAYLOAD_MASK) << shift;
        shift += GROUP_BITS;

        if byte & CONTINUATION == 0 {
            if shift < i64::BITS && byte & SIGN_BIT != 0 {
                result |= !0i64 << shift;
            }
            return Ok((result, i + 1));
        }
    }

    if input.len() >= MAX_LEN {
        trace!("sleb128 still continuing after {} bytes", MAX_LEN);
        return Err(DecodeError::Overlong);
    }

    trace!("sleb128 truncated after {} bytes", input.len());
    Err(DecodeError::Truncated {
        consumed: input.len(),
    })
}

/// Decode an SLEB128 value, reporting failure as a byte count of 0.
pub fn decode_signed(input: &[u8]) -> (i64, u8) {
    match try_decode_signed(input) {
        Ok((value, len)) => (value, len as u8),
        Err(_) => (0, 0),
    }
}

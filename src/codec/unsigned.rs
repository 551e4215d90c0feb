use tracing::trace;

use super::{CONTINUATION, GROUP_BITS, MAX_LEN, PAYLOAD_MASK};
use crate::error::DecodeError;

/// Encode `value` as ULEB128 onto the end of `out`, returning the number of
/// bytes written.
pub fn append_unsigned(out: &mut Vec<u8>, mut value: u64) -> usize {
    let start = out.len();
    while value > u64::from(PAYLOAD_MASK) {
        out.push(((value as u8) & PAYLOAD_MASK) | CONTINUATION);
        value >>= GROUP_BITS;
    }
    out.push(value as u8);
    out.len() - start
}

/// Append the ULEB128 encoding of `value` to `buf` and hand the buffer back.
pub fn encode_unsigned_append(mut buf: Vec<u8>, value: u64) -> Vec<u8> {
    append_unsigned(&mut buf, value);
    buf
}

/// Number of bytes [`append_unsigned`] writes for `value`.
pub fn unsigned_len(value: u64) -> usize {
    let bits = (u64::BITS - value.leading_zeros()).max(1);
    bits.div_ceil(GROUP_BITS) as usize
}

/// Decode a ULEB128 value from the front of `input`.
///
/// Bytes after the terminating group are ignored. On success returns the
/// value and the number of bytes it occupied.
pub fn try_decode_unsigned(input: &[u8]) -> Result<(u64, usize), DecodeError> {
    let mut result = 0u64;
    let mut shift = 0u32;

    for (i, &byte) in input.iter().take(MAX_LEN).enumerate() {
        // bits of the tenth group above bit 63 fall off the end
        result |= u64::from(byte & PAYLOAD_MASK) << shift;

        if byte & CONTINUATION == 0 {
            return Ok((result, i + 1));
        }
        shift += GROUP_BITS;
    }

    if input.len() >= MAX_LEN {
        trace!("uleb128 still continuing after {} bytes", MAX_LEN);
        return Err(DecodeError::Overlong);
    }

    trace!("uleb128 truncated after {} bytes", input.len());
    Err(DecodeError::Truncated {
        consumed: input.len(),
    })
}

/// Decode a ULEB128 value, reporting failure as a byte count of 0.
pub fn decode_unsigned(input: &[u8]) -> (u64, u8) {
    match try_decode_unsigned(input) {
        Ok((value, len)) => (value, len as u8),
        Err(_) => (0, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(value: u64) -> Vec<u8> {
        encode_unsigned_append(Vec::new(), value)
    }

    #[test]
    fn encode_single_byte() {
        assert_eq!(encode(0), [0x00]);
        assert_eq!(encode(1), [0x01]);
        assert_eq!(encode(0x7f), [0x7f]);
    }

    #[test]
    fn encode_multi_byte() {
        assert_eq!(encode(0x80), [0x80, 0x01]);
        assert_eq!(encode(0xff), [0xff, 0x01]);
        assert_eq!(encode(16383), [0xff, 0x7f]);
        assert_eq!(encode(16384), [0x80, 0x80, 0x01]);
        assert_eq!(encode(624485), [0xe5, 0x8e, 0x26]);
    }

    #[test]
    fn encode_max() {
        let mut expected: Vec<u8> = vec![0xff; 9];
        expected.push(0x01);
        assert_eq!(encode(u64::MAX), expected);
    }

    #[test]
    fn append_keeps_prefix() {
        let buf = encode_unsigned_append(b"magic".to_vec(), 624485);
        assert_eq!(buf, [b'm', b'a', b'g', b'i', b'c', 0xe5, 0x8e, 0x26]);

        let mut out: Vec<u8> = vec![0xaa];
        assert_eq!(append_unsigned(&mut out, 0x80), 2);
        assert_eq!(out, [0xaa, 0x80, 0x01]);
    }

    #[test]
    fn len_matches_encoding() {
        for shift in 0..64 {
            let v = 1u64 << shift;
            for value in [v - 1, v, v | (v - 1)] {
                assert_eq!(unsigned_len(value), encode(value).len(), "value {value}");
            }
        }
        assert_eq!(unsigned_len(u64::MAX), MAX_LEN);
    }

    #[test]
    fn decode_values() {
        assert_eq!(decode_unsigned(&[0x00]), (0, 1));
        assert_eq!(decode_unsigned(&[0x7f]), (127, 1));
        assert_eq!(decode_unsigned(&[0x80, 0x01]), (128, 2));
        assert_eq!(decode_unsigned(&[0xe5, 0x8e, 0x26]), (624485, 3));
    }

    #[test]
    fn decode_ignores_trailing() {
        assert_eq!(decode_unsigned(&[0xe5, 0x8e, 0x26, b'a', b'b', b'c']), (624485, 3));
    }

    #[test]
    fn decode_truncated() {
        assert_eq!(decode_unsigned(&[]), (0, 0));
        assert_eq!(decode_unsigned(&[0xff]), (0, 0));
        assert_eq!(decode_unsigned(&[0x80, 0x80]), (0, 0));
        assert_eq!(
            try_decode_unsigned(&[0x80, 0x80]),
            Err(DecodeError::Truncated { consumed: 2 })
        );
        assert_eq!(
            try_decode_unsigned(&[]),
            Err(DecodeError::Truncated { consumed: 0 })
        );
    }

    #[test]
    fn decode_overlong() {
        let mut input: Vec<u8> = vec![0xff];
        input.extend([0x80; 9]);
        input.push(0x7f);
        assert_eq!(decode_unsigned(&input), (0, 0));
        assert_eq!(try_decode_unsigned(&input), Err(DecodeError::Overlong));

        // ten continuation bytes can never terminate in time
        assert_eq!(try_decode_unsigned(&[0x80; 10]), Err(DecodeError::Overlong));
    }

    #[test]
    fn decode_lenient_tenth_group() {
        let mut input: Vec<u8> = vec![0xff; 9];
        input.push(0x7f);
        assert_eq!(decode_unsigned(&input), (u64::MAX, 10));
    }

    #[test]
    fn round_trip_boundaries() {
        for shift in 0..64 {
            let v = 1u64 << shift;
            for value in [v - 1, v, v + 1, !v] {
                let encoded = encode(value);
                assert_eq!(decode_unsigned(&encoded), (value, encoded.len() as u8));
            }
        }
    }
}

//! LEB128 (Little Endian Base 128) integer codec.
//!
//! Every encoded byte carries 7 payload bits in its low bits and a
//! continuation flag in bit 7. Groups are written least significant first.

pub mod signed;
pub mod unsigned;

pub use signed::{
    append_signed, decode_signed, encode_signed_append, signed_len, try_decode_signed,
};
pub use unsigned::{
    append_unsigned, decode_unsigned, encode_unsigned_append, try_decode_unsigned, unsigned_len,
};

/// Longest possible encoding of a 64-bit value, signed or unsigned.
pub const MAX_LEN: usize = 10;

/// Bit 7: more groups follow
pub const CONTINUATION: u8 = 0x80;

/// Low 7 bits of every group
pub const PAYLOAD_MASK: u8 = 0x7f;

/// Bit 6 of a group, the sign of the final group in signed encodings
pub const SIGN_BIT: u8 = 0x40;

pub(crate) const GROUP_BITS: u32 = 7;

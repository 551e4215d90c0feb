//! LEB128 variable-length integer encoding.
//!
//! The sentinel functions ([`decode_unsigned`], [`decode_signed`]) report
//! failure as a byte count of 0. The `try_` variants return a
//! [`DecodeError`] telling truncated input apart from an over-long encoding.

pub mod codec;
pub mod error;
pub mod format;

pub use codec::{
    append_signed, append_unsigned, decode_signed, decode_unsigned, encode_signed_append,
    encode_unsigned_append, signed_len, try_decode_signed, try_decode_unsigned, unsigned_len,
    MAX_LEN,
};
pub use error::DecodeError;

use std::fmt;

/// Why a LEB128 decode failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Input ended before a group with a clear continuation flag.
    Truncated { consumed: usize },
    /// The tenth group still had its continuation flag set.
    Overlong,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Truncated { consumed } =>
                write!(f, "truncated leb128: input ended after {} bytes", consumed),
            DecodeError::Overlong =>
                write!(f, "leb128 encoding longer than {} bytes", crate::codec::MAX_LEN),
        }
    }
}

impl std::error::Error for DecodeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            DecodeError::Truncated { consumed: 2 }.to_string(),
            "truncated leb128: input ended after 2 bytes"
        );
        assert_eq!(
            DecodeError::Overlong.to_string(),
            "leb128 encoding longer than 10 bytes"
        );
    }

    #[test]
    fn converts_into_anyhow() {
        let err: anyhow::Error = DecodeError::Overlong.into();
        assert!(err.downcast_ref::<DecodeError>().is_some());
    }
}

//! Decode errors for Virm instructions built outside the type system.

use thiserror::Error;

/// Errors that occur when turning a raw instruction into a typed one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The tag byte does not name any instruction kind.
    #[error("unknown instruction tag: {0:#04x}")]
    UnknownTag(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unknown_tag() {
        assert_eq!(
            DecodeError::UnknownTag(0x02).to_string(),
            "unknown instruction tag: 0x02"
        );
    }

    #[test]
    fn display_unknown_tag_high_byte() {
        assert_eq!(
            DecodeError::UnknownTag(0xFF).to_string(),
            "unknown instruction tag: 0xff"
        );
    }
}

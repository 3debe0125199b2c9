use std::{error, fmt};

/// The error type for decoding and radix-conversion failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A symbol outside the codec's alphabet was found while decoding.
    ///
    /// `offset` is the distance from the end of the payload, counting the
    /// offending symbol itself; the checksum symbol reports offset 0.
    InvalidCharacter { ch: char, offset: usize },
    /// The checksum symbol does not match the decoded payload.
    InvalidChecksum,
    /// A character is not a digit in the requested base.
    InvalidDigitForBase { ch: char, base: u32 },
    /// Division or modulo by zero.
    DivisionByZero,
    /// The requested base is not supported (2..=36, or 256 for raw bytes).
    UnsupportedBase { base: u32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { ch, offset } => {
                write!(f, "invalid character '{}' at {}", ch, offset)
            }
            Self::InvalidChecksum => write!(f, "invalid checksum"),
            Self::InvalidDigitForBase { ch, base } => {
                write!(f, "not a digit in base {}: '{}'", base, ch)
            }
            Self::DivisionByZero => write!(f, "division or modulus by zero"),
            Self::UnsupportedBase { base } => {
                write!(f, "base must be in the range 2..=36 or 256, got {}", base)
            }
        }
    }
}

impl error::Error for Error {}

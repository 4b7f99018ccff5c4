//! Error types.

use core::fmt;
use octseq::builder::ShortBuf;

//------------ Error ---------------------------------------------------------

/// Encoding or decoding Punycode failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The input has more elements than can be counted in 32 bits.
    LongInput,

    /// One of the running values of the algorithm exceeded 32 bits.
    ///
    /// This can only happen for very long input that mixes code points far
    /// apart from each other or, when decoding, for maliciously crafted
    /// digits.
    Overflow,

    /// The input to the decoder is not valid Punycode.
    Invalid(InvalidPunycode),

    /// Writing to the output target failed.
    ///
    /// For octets builders this means the builder ran out of space. Errors
    /// of other formatting targets are reported as this variant, too.
    ShortBuf,
}

impl Error {
    /// Returns whether the error is due to input that isn’t Punycode.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Error::Invalid(_))
    }
}

//--- From

impl From<InvalidPunycode> for Error {
    fn from(err: InvalidPunycode) -> Self {
        Error::Invalid(err)
    }
}

impl From<ShortBuf> for Error {
    fn from(_: ShortBuf) -> Self {
        Error::ShortBuf
    }
}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Error::ShortBuf
    }
}

//--- Display and Error

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::LongInput => f.write_str("input too long"),
            Error::Overflow => f.write_str("arithmetic overflow"),
            Error::Invalid(err) => write!(f, "invalid Punycode: {}", err),
            Error::ShortBuf => ShortBuf.fmt(f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

//------------ InvalidPunycode -----------------------------------------------

/// The reason why a string isn’t valid Punycode.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvalidPunycode {
    /// The input contained the given octet which isn’t ASCII.
    NonAscii(u8),

    /// The given character appeared where a digit was expected.
    IllegalDigit(char),

    /// The input ended in the middle of an encoded delta.
    ShortInput,

    /// The decoded value isn’t a Unicode scalar value.
    BadCodePoint(u32),
}

//--- Display and Error

impl fmt::Display for InvalidPunycode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            InvalidPunycode::NonAscii(octet) => {
                write!(f, "non-ASCII octet 0x{:02x}", octet)
            }
            InvalidPunycode::IllegalDigit(ch) => {
                write!(f, "illegal digit '{}'", ch.escape_debug())
            }
            InvalidPunycode::ShortInput => f.write_str("incomplete input"),
            InvalidPunycode::BadCodePoint(value) => {
                write!(f, "invalid code point U+{:04X}", value)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidPunycode {}

//============ Testing =======================================================

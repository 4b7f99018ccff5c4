//! The Bootstring machinery shared by encoder and decoder.
//!
//! Punycode is the instance of the generic Bootstring algorithm described in
//! [RFC 3492] with the parameter values defined in section 5 of the RFC. This
//! module provides those parameters, the bias adaptation function, and the
//! encoding and decoding of the *generalized variable-length integers* that
//! make up the extended part of a Punycode string.
//!
//! All arithmetic on the running values of the algorithm happens on `u32`
//! and is checked. Any overflow results in [`Error::Overflow`] rather than a
//! wrapped value.
//!
//! [RFC 3492]: https://tools.ietf.org/html/rfc3492

use crate::error::Error;
#[cfg(feature = "std")]
use crate::error::InvalidPunycode;
use core::fmt;

//------------ Parameters ----------------------------------------------------

/// The number of distinct digit values.
pub const BASE: u32 = 36;

/// The lower bound of the threshold of a digit position.
pub const T_MIN: u32 = 1;

/// The upper bound of the threshold of a digit position.
pub const T_MAX: u32 = 26;

/// The skew applied during bias adaptation.
pub const SKEW: u32 = 38;

/// The damping applied to the very first delta.
pub const DAMP: u32 = 700;

/// The bias before the first delta has been processed.
pub const INITIAL_BIAS: u32 = 72;

/// The first code point that isn’t a basic code point.
pub const INITIAL_N: u32 = 0x80;

/// The octet separating the basic code points from the encoded deltas.
pub const DELIMITER: u8 = b'-';

//------------ Bias Adaptation -----------------------------------------------

/// Returns the bias to use after a delta has been processed.
///
/// The `delta` is the value just encoded or decoded, `num_points` is the
/// number of code points handled so far including the one this delta
/// belongs to, and `first_time` is set if this was the very first delta.
///
/// This is the function from section 6.1 of RFC 3492. With the fixed
/// Punycode parameters it can neither overflow nor fail.
pub fn adapt(delta: u32, num_points: u32, first_time: bool) -> u32 {
    let mut delta = if first_time { delta / DAMP } else { delta / 2 };
    delta += delta / num_points;
    let mut k = 0;
    while delta > ((BASE - T_MIN) * T_MAX) / 2 {
        delta /= BASE - T_MIN;
        k += BASE;
    }
    k + (((BASE - T_MIN + 1) * delta) / (delta + SKEW))
}

/// Returns the threshold for the digit position `k` under `bias`.
///
/// The result is always in the range from [`T_MIN`] to [`T_MAX`].
pub fn threshold(k: u32, bias: u32) -> u32 {
    if k <= bias {
        T_MIN
    } else if k >= bias + T_MAX {
        T_MAX
    } else {
        k - bias
    }
}

//------------ Digits --------------------------------------------------------

/// Returns the character for a digit value.
///
/// Values from 0 to 25 map to `'a'` to `'z'`, values from 26 to 35 to `'0'`
/// to `'9'`. Returns `None` for values outside the range.
pub fn digit_char(value: u32) -> Option<char> {
    ENCODE_ALPHABET
        .get(usize::try_from(value).ok()?)
        .map(|&ch| char::from(ch))
}

/// Returns the digit value for an octet of an encoded delta.
///
/// Only lowercase letters and decimal digits are digits. Returns `None` for
/// anything else.
pub fn digit_value(octet: u8) -> Option<u32> {
    match DECODE_ALPHABET.get(usize::from(octet)) {
        Some(&0xFF) | None => None,
        Some(&value) => Some(u32::from(value)),
    }
}

//------------ Checked Arithmetic --------------------------------------------

/// Adds two values or reports an overflow.
pub(crate) fn add(left: u32, right: u32) -> Result<u32, Error> {
    left.checked_add(right).ok_or(Error::Overflow)
}

/// Multiplies two values or reports an overflow.
pub(crate) fn mul(left: u32, right: u32) -> Result<u32, Error> {
    left.checked_mul(right).ok_or(Error::Overflow)
}

/// Converts the length of an input sequence into a code point count.
pub(crate) fn length(len: usize) -> Result<u32, Error> {
    u32::try_from(len).map_err(|_| Error::LongInput)
}

//------------ Generalized Variable-Length Integers --------------------------

/// Writes `value` as a generalized variable-length integer under `bias`.
///
/// This is the inner loop of the encoding procedure in section 6.3 of
/// RFC 3492.
pub(crate) fn encode_integer<Target: fmt::Write>(
    mut value: u32,
    bias: u32,
    target: &mut Target,
) -> fmt::Result {
    fn ch(digit: u32) -> char {
        char::from(ENCODE_ALPHABET[digit as usize])
    }

    let mut k = BASE;
    loop {
        let t = threshold(k, bias);
        if value < t {
            return target.write_char(ch(value));
        }
        target.write_char(ch(t + (value - t) % (BASE - t)))?;
        value = (value - t) / (BASE - t);
        k += BASE;
    }
}

/// Reads a generalized variable-length integer under `bias`.
///
/// The decoded value is added to `start` and the sum returned. Octets are
/// taken from `input` until the last digit of the integer has been read.
///
/// This is the inner loop of the decoding procedure in section 6.2 of
/// RFC 3492.
#[cfg(feature = "std")]
pub(crate) fn decode_integer<Input: Iterator<Item = u8>>(
    input: &mut Input,
    bias: u32,
    start: u32,
) -> Result<u32, Error> {
    let mut res = start;
    let mut weight = 1;
    let mut k = BASE;
    loop {
        let octet = input.next().ok_or(InvalidPunycode::ShortInput)?;
        let digit = digit_value(octet)
            .ok_or(InvalidPunycode::IllegalDigit(char::from(octet)))?;
        res = add(res, mul(digit, weight)?)?;
        let t = threshold(k, bias);
        if digit < t {
            return Ok(res);
        }
        weight = mul(weight, BASE - t)?;
        k += BASE;
    }
}

//------------ Constants -----------------------------------------------------

/// The digits in order of their value.
const ENCODE_ALPHABET: [u8; 36] = *b"abcdefghijklmnopqrstuvwxyz0123456789";

/// The alphabet used for decoding digits.
///
/// This maps encoding characters into their values. A value of 0xFF stands in
/// for illegal characters. We only provide the first 128 characters since
/// Punycode only uses ASCII.
const DECODE_ALPHABET: [u8; 128] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x00 .. 0x07
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x08 .. 0x0F
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x10 .. 0x17
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x18 .. 0x1F
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x20 .. 0x27
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x28 .. 0x2F
    0x1A, 0x1B, 0x1C, 0x1D, 0x1E, 0x1F, 0x20, 0x21, // 0x30 .. 0x37
    0x22, 0x23, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x38 .. 0x3F
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x40 .. 0x47
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x48 .. 0x4F
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x50 .. 0x57
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x58 .. 0x5F
    0xFF, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, // 0x60 .. 0x67
    0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, // 0x68 .. 0x6F
    0x0F, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, // 0x70 .. 0x77
    0x17, 0x18, 0x19, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x78 .. 0x7F
];

//============ Testing =======================================================

#[cfg(test)]
#[cfg(feature = "std")]
mod test {
    use super::*;
    use std::string::String;

    fn encode_integer_string(value: u32, bias: u32) -> String {
        let mut res = String::new();
        encode_integer(value, bias, &mut res).unwrap();
        res
    }

    fn decode_integer_str(s: &str, bias: u32) -> Result<u32, Error> {
        decode_integer(&mut s.bytes(), bias, 0)
    }

    #[test]
    fn adapt_values() {
        assert_eq!(adapt(0, 1, true), 0);
        assert_eq!(adapt(745, 6, true), 0);
        assert_eq!(adapt(100, 1, false), 26);
        assert_eq!(adapt(200, 5, false), 27);
        assert_eq!(adapt(1000, 2, false), 48);
        assert_eq!(adapt(910, 1, false), 50);

        // The largest deltas must not overflow.
        assert_eq!(adapt(u32::MAX, 1, true), 139);
        assert_eq!(adapt(u32::MAX, 1, false), 204);
    }

    #[test]
    fn threshold_clamps() {
        assert_eq!(threshold(36, 72), T_MIN);
        assert_eq!(threshold(72, 72), T_MIN);
        assert_eq!(threshold(73, 72), 1);
        assert_eq!(threshold(97, 72), 25);
        assert_eq!(threshold(98, 72), T_MAX);
        assert_eq!(threshold(108, 72), T_MAX);
        assert_eq!(threshold(36, 0), T_MAX);
        assert_eq!(threshold(36, 20), 16);
    }

    #[test]
    fn digits() {
        assert_eq!(digit_char(0), Some('a'));
        assert_eq!(digit_char(25), Some('z'));
        assert_eq!(digit_char(26), Some('0'));
        assert_eq!(digit_char(35), Some('9'));
        assert_eq!(digit_char(36), None);

        assert_eq!(digit_value(b'a'), Some(0));
        assert_eq!(digit_value(b'z'), Some(25));
        assert_eq!(digit_value(b'0'), Some(26));
        assert_eq!(digit_value(b'9'), Some(35));
        assert_eq!(digit_value(b'A'), None);
        assert_eq!(digit_value(b'-'), None);
        assert_eq!(digit_value(b'*'), None);
        assert_eq!(digit_value(0xC3), None);

        for value in 0..BASE {
            let ch = digit_char(value).unwrap();
            assert_eq!(digit_value(ch as u8), Some(value));
        }
    }

    #[test]
    fn checked_arithmetic() {
        assert_eq!(add(1, 2), Ok(3));
        assert_eq!(add(u32::MAX, 0), Ok(u32::MAX));
        assert_eq!(add(u32::MAX, 1), Err(Error::Overflow));
        assert_eq!(mul(0x10000, 0xFFFF), Ok(0xFFFF_0000));
        assert_eq!(mul(0x10000, 0x10000), Err(Error::Overflow));
        assert_eq!(length(0), Ok(0));
        assert_eq!(length(63), Ok(63));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn long_length() {
        assert_eq!(length(u32::MAX as usize), Ok(u32::MAX));
        assert_eq!(length(u32::MAX as usize + 1), Err(Error::LongInput));
    }

    #[test]
    fn encode_integers() {
        assert_eq!(encode_integer_string(0, 72), "a");
        assert_eq!(encode_integer_string(25, 72), "za");
        assert_eq!(encode_integer_string(26, 72), "0a");
        assert_eq!(encode_integer_string(745, 72), "kva");
        assert_eq!(encode_integer_string(35, 0), "9a");
        assert_eq!(encode_integer_string(1000, 0), "41h");
        assert_eq!(encode_integer_string(12345, 20), "z03d");
        assert_eq!(encode_integer_string(u32::MAX, 72), "k0902716a");
    }

    #[test]
    fn decode_integers() {
        assert_eq!(decode_integer_str("a", 72), Ok(0));
        assert_eq!(decode_integer_str("kva", 72), Ok(745));
        assert_eq!(decode_integer_str("z03d", 20), Ok(12345));
        assert_eq!(decode_integer_str("k0902716a", 72), Ok(u32::MAX));

        // The start value is added.
        assert_eq!(decode_integer(&mut "kva".bytes(), 72, 5), Ok(750));

        // Only the octets of the integer are consumed.
        let mut input = "kvaxyz".bytes();
        assert_eq!(decode_integer(&mut input, 72, 0), Ok(745));
        assert_eq!(input.next(), Some(b'x'));

        assert_eq!(
            decode_integer_str("", 72),
            Err(InvalidPunycode::ShortInput.into())
        );
        assert_eq!(
            decode_integer_str("kv", 72),
            Err(InvalidPunycode::ShortInput.into())
        );
        assert_eq!(
            decode_integer_str("k*", 72),
            Err(InvalidPunycode::IllegalDigit('*').into())
        );
        assert_eq!(decode_integer_str("99999999", 72), Err(Error::Overflow));
    }

    #[test]
    fn integer_symmetry() {
        let mut values: std::vec::Vec<u32> = (0..2000).collect();
        for shift in 11..29 {
            values.push(1 << shift);
            values.push((1 << shift) - 1);
        }
        values.extend([123_456_789, 0xFF_FFFF, 0x10_FFFF * 4]);

        for bias in 0..200 {
            for &value in &values {
                let encoded = encode_integer_string(value, bias);
                assert_eq!(
                    decode_integer_str(&encoded, bias),
                    Ok(value),
                    "value {} under bias {} encoded as {:?}",
                    value,
                    bias,
                    encoded
                );
            }
        }
    }
}

//! Decoding Punycode into Unicode text.
//!
//! The decoder implements the procedure of section 6.2 of [RFC 3492].
//! Everything before the last delimiter `'-'` is taken literally as the
//! basic code points. The digits following it are decoded into deltas, each
//! of which determines both a code point and the position it is inserted
//! at.
//!
//! The decoder is strict. Input that contains non-ASCII octets, characters
//! other than lowercase letters and digits after the delimiter, or digits
//! that end in the middle of a delta is rejected, as are deltas that would
//! produce something other than a Unicode scalar value. Note that this
//! includes uppercase digits.
//!
//! Because every decoded code point is inserted somewhere into the output
//! decoded so far, decoding takes time quadratic in the length of the
//! output in the worst case. For input of the size of a domain name label
//! this is of no concern.
//!
//! [RFC 3492]: https://tools.ietf.org/html/rfc3492

use crate::bootstring::{
    adapt, add, decode_integer, length, DELIMITER, INITIAL_BIAS, INITIAL_N,
};
use crate::error::{Error, InvalidPunycode};
use std::string::String;
use std::vec::Vec;
use tracing::trace;

//------------ Convenience Functions -----------------------------------------

/// Decodes a Punycode string into a sequence of characters.
pub fn decode_str(input: &str) -> Result<Vec<char>, Error> {
    decode(input.as_bytes())
}

/// Decodes a Punycode string and returns the result as a string.
pub fn decode_to_string(input: &str) -> Result<String, Error> {
    decode(input.as_bytes()).map(|chars| chars.into_iter().collect())
}

/// Decodes Punycode contained in an octets sequence into a string.
///
/// This is useful for labels taken directly from domain names in wire
/// format.
pub fn decode_octets<Octets>(input: &Octets) -> Result<String, Error>
where
    Octets: AsRef<[u8]> + ?Sized,
{
    decode(input.as_ref()).map(|chars| chars.into_iter().collect())
}

//------------ decode --------------------------------------------------------

/// Decodes Punycode into a sequence of characters.
///
/// The input is given as an octets slice since Punycode is pure ASCII. Any
/// octet outside the ASCII range results in an error.
pub fn decode(input: &[u8]) -> Result<Vec<char>, Error> {
    process(input).map_err(|err| {
        trace!(%err, len = input.len(), "failed to decode Punycode");
        err
    })
}

fn process(input: &[u8]) -> Result<Vec<char>, Error> {
    length(input.len())?;
    if let Some(&octet) = input.iter().find(|octet| !octet.is_ascii()) {
        return Err(InvalidPunycode::NonAscii(octet).into());
    }

    // A delimiter at the very start doesn’t separate anything. It then is
    // the first digit and will be rejected as such.
    let (mut output, digits) =
        match input.iter().rposition(|&octet| octet == DELIMITER) {
            Some(pos) if pos > 0 => (
                input[..pos].iter().copied().map(char::from).collect(),
                &input[pos + 1..],
            ),
            _ => (Vec::new(), input),
        };

    let mut n = INITIAL_N;
    let mut i = 0;
    let mut bias = INITIAL_BIAS;
    let mut digits = digits.iter().copied().peekable();

    while digits.peek().is_some() {
        let old_i = i;
        i = decode_integer(&mut digits, bias, i)?;

        let points = add(length(output.len())?, 1)?;
        bias = adapt(i - old_i, points, old_i == 0);
        n = add(n, i / points)?;
        i %= points;

        let ch = char::from_u32(n).ok_or(InvalidPunycode::BadCodePoint(n))?;
        output.insert(i as usize, ch);
        i += 1;
    }
    Ok(output)
}

//============ Testing =======================================================

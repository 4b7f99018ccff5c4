//! Encoding Unicode text into Punycode.
//!
//! The encoder implements the procedure of section 6.3 of [RFC 3492]. All
//! basic code points of the input are copied to the output in their
//! original order. If there were any, they are followed by the delimiter
//! `'-'`. The remaining code points are then encoded as a sequence of deltas
//! using base 36 digits.
//!
//! Since Punycode fundamentally works on Unicode code points, the core
//! function [`encode_into`] takes an iterator over `char`s and writes into
//! any [`fmt::Write`] target. The other functions of this module are
//! convenience wrappers for the more common input and output types.
//!
//! [RFC 3492]: https://tools.ietf.org/html/rfc3492

use crate::bootstring::{
    adapt, add, encode_integer, length, mul, DELIMITER, INITIAL_BIAS,
    INITIAL_N,
};
use crate::error::Error;
use core::fmt;
use octseq::builder::{
    EmptyBuilder, FreezeBuilder, FromBuilder, OctetsBuilder,
};
#[cfg(feature = "std")]
use std::string::String;
use tracing::trace;

//------------ Convenience Functions -----------------------------------------

/// Encodes a string into Punycode and returns it as an octets sequence.
///
/// The function can be used to create any octets type that can be built,
/// for instance a `Vec<u8>`. If the builder runs out of space, which can
/// only happen for fixed-size builders, the function fails with
/// [`Error::ShortBuf`]. The length of the input says little about the
/// length of the output, so the builder starts out empty.
pub fn encode<Octets>(input: &str) -> Result<Octets, Error>
where
    Octets: FromBuilder,
    <Octets as FromBuilder>::Builder: EmptyBuilder,
{
    let builder = Octets::Builder::empty();
    let mut target = OctetsTarget { builder };
    encode_into(input.chars(), &mut target)?;
    Ok(target.builder.freeze())
}

/// Encodes a string into Punycode and returns the result as a string.
#[cfg(feature = "std")]
pub fn encode_string(input: &str) -> Result<String, Error> {
    let mut res = String::with_capacity(input.len());
    encode_into(input.chars(), &mut res)?;
    Ok(res)
}

/// Encodes a sequence of characters into Punycode.
#[cfg(feature = "std")]
pub fn encode_chars(input: &[char]) -> Result<String, Error> {
    let mut res = String::with_capacity(input.len());
    encode_into(input.iter().copied(), &mut res)?;
    Ok(res)
}

//------------ encode_into ---------------------------------------------------

/// Encodes a sequence of characters into Punycode.
///
/// The encoded string is written to `target`. The iterator is walked
/// several times: once to determine its length and once for every distinct
/// non-basic code point plus once more, so it should be cheap to clone.
///
/// The input is checked for length before anything is written. If encoding
/// fails later on due to an arithmetic overflow, `target` may contain
/// partial output which the caller needs to discard.
///
/// Any failure to write to `target` is reported as [`Error::ShortBuf`],
/// since formatting targets don’t say why they failed.
pub fn encode_into<Input, Target>(
    input: Input,
    target: &mut Target,
) -> Result<(), Error>
where
    Input: IntoIterator<Item = char>,
    Input::IntoIter: Clone,
    Target: fmt::Write,
{
    let input = input.into_iter();
    process(input, target).map_err(|err| {
        trace!(%err, "failed to encode Punycode");
        err
    })
}

fn process<Input, Target>(
    input: Input,
    target: &mut Target,
) -> Result<(), Error>
where
    Input: Iterator<Item = char> + Clone,
    Target: fmt::Write,
{
    let input_len = length(input.clone().count())?;

    let mut basic_len = 0;
    for ch in input.clone().filter(char::is_ascii) {
        target.write_char(ch)?;
        basic_len += 1;
    }
    if basic_len > 0 {
        target.write_char(char::from(DELIMITER))?;
    }

    let mut n = INITIAL_N;
    let mut delta = 0u32;
    let mut bias = INITIAL_BIAS;
    let mut handled = basic_len;

    while handled < input_len {
        // All code points below n have been handled, so the unhandled ones
        // are exactly those not below n.
        let next = input.clone().map(u32::from).filter(|&ch| ch >= n).min();
        let m = match next {
            Some(m) => m,
            None => break,
        };
        delta = add(delta, mul(m - n, handled + 1)?)?;
        n = m;

        for ch in input.clone().map(u32::from) {
            if ch < n {
                delta = add(delta, 1)?;
            } else if ch == n {
                encode_integer(delta, bias, target)?;
                bias = adapt(delta, handled + 1, handled == basic_len);
                delta = 0;
                handled += 1;
            }
        }

        delta = add(delta, 1)?;
        n = add(n, 1)?;
    }
    Ok(())
}

//------------ OctetsTarget --------------------------------------------------

/// Adapts an octets builder to the formatting machinery.
///
/// Punycode is pure ASCII, so the octets appended are exactly the
/// characters written.
struct OctetsTarget<Builder> {
    builder: Builder,
}

impl<Builder: OctetsBuilder> fmt::Write for OctetsTarget<Builder> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.builder
            .append_slice(s.as_bytes())
            .map_err(|_| fmt::Error)
    }
}

//============ Testing =======================================================

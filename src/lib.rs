//! Punycode for Rust.
//!
//! This crate implements Punycode, the ASCII-compatible encoding of Unicode
//! text defined in [RFC 3492]. It is used to represent domain name labels
//! containing non-ASCII characters in the DNS which only allows a limited
//! set of ASCII characters in host names.
//!
//! The crate only provides the transformation of a single label in both
//! directions. Splitting domain names into labels, adding or stripping the
//! `xn--` prefix of internationalized labels, case folding and the various
//! mapping and validity rules of IDNA are left to the caller.
//!
//! ```
//! # #[cfg(feature = "std")]
//! # {
//! assert_eq!(punycode::encode_string("mañana").unwrap(), "maana-pta");
//! assert_eq!(punycode::decode_to_string("maana-pta").unwrap(), "mañana");
//! # }
//! ```
//!
//! # Modules
//!
//! * [bootstring] contains the parameters and building blocks shared by
//!   encoder and decoder,
//! * [encode] provides the encoder,
#![cfg_attr(feature = "std", doc = "* [decode] provides the decoder, and")]
#![cfg_attr(not(feature = "std"), doc = "* decode provides the decoder, and")]
//! * [error] defines the error type used by both.
//!
//! The most important functions are re-exported at the crate root.
//!
//! # Reference of Feature Flags
//!
//! The following is the complete list of the feature flags available.
//!
//! * `bytes`: Enables using the type `Bytes` from the
//!   [bytes](https://github.com/tokio-rs/bytes) crate as encoded octets
//!   sequences.
//! * `heapless`: enables the use of the `Vec` type from the
//!   [heapless](https://github.com/japaric/heapless) crate for building
//!   encoded octets sequences.
//! * `serde`: Enables the
#![cfg_attr(feature = "serde", doc = "  [serde]")]
#![cfg_attr(not(feature = "serde"), doc = "  serde")]
//!   module for serializing strings in their Punycode form. It requires
//!   the `std` feature.
//! * `std`: support for the Rust std library. This feature is enabled by
//!   default. Without it, only encoding into formatting targets and octets
//!   builders is available.
//!
//! [RFC 3492]: https://tools.ietf.org/html/rfc3492

#![no_std]
#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "std")]
#[allow(unused_imports)] // Import macros even if unused.
#[macro_use]
extern crate std;

pub mod bootstring;
#[cfg(feature = "std")]
pub mod decode;
pub mod encode;
pub mod error;
#[cfg(feature = "serde")]
pub mod serde;

#[cfg(feature = "std")]
pub use self::decode::{decode, decode_octets, decode_str, decode_to_string};
pub use self::encode::{encode, encode_into};
#[cfg(feature = "std")]
pub use self::encode::{encode_chars, encode_string};
pub use self::error::{Error, InvalidPunycode};

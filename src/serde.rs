//! Serialize and deserialize strings in their Punycode form.
//!
//! This module can be used with Serde’s `with` attribute. It will serialize
//! a string as its Punycode encoding and decode the Punycode again when
//! deserializing:
//!
//! ```
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Deserialize, Serialize)]
//! struct Label {
//!     #[serde(with = "punycode::serde")]
//!     text: String,
//! }
//! ```
//!
//! Errors during encoding or decoding are reported as custom errors of the
//! serializer or deserializer, respectively.

use core::fmt;
use serde::{de, ser};
use std::string::String;

pub fn serialize<Text, S>(
    text: &Text,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    Text: AsRef<str> + ?Sized,
    S: serde::Serializer,
{
    let encoded = crate::encode_string(text.as_ref())
        .map_err(<S::Error as ser::Error>::custom)?;
    serializer.serialize_str(&encoded)
}

pub fn deserialize<'de, D: serde::Deserializer<'de>>(
    deserializer: D,
) -> Result<String, D::Error> {
    struct Visitor;

    impl<'de> de::Visitor<'de> for Visitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a Punycode-encoded string")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            crate::decode_to_string(v).map_err(E::custom)
        }

        fn visit_bytes<E: de::Error>(
            self,
            v: &[u8],
        ) -> Result<Self::Value, E> {
            crate::decode_octets(v).map_err(E::custom)
        }
    }

    deserializer.deserialize_str(Visitor)
}

//============ Testing =======================================================

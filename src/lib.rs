#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
// bit-twiddling crate: digit/half-digit casts are pervasive and checked
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

//! Arbitrary-base encoding and decoding on top of an arbitrary-precision
//! unsigned integer.
//!
//! A [`BaseX`] codec converts between byte strings (or [`BigUint`] values)
//! and text in any alphabet of 2..=256 single-octet symbols. Presets cover
//! the usual suspects: base2 through base16, the base32 and base64 families
//! (including the RFC 4648 block-aligned variants), base36, the four base58
//! alphabets in circulation, base62 and base66.
//!
//! ```
//! use basex::{base58, base62, BigUint};
//!
//! assert_eq!(base58::BITCOIN.encode_bytes(b"Hello world!"), "2NEpo7TZRhna7vSvL");
//! assert_eq!(
//!     base58::BITCOIN.decode_to_bytes("2NEpo7TZRhna7vSvL").unwrap(),
//!     b"Hello world!"
//! );
//! assert_eq!(base62::STANDARD.encode(&BigUint::from(987_654_321u64)), "14q60P");
//! ```
//!
//! Custom alphabets work the same way, and construction is `const`:
//!
//! ```
//! use basex::{BaseX, Flags};
//!
//! const VOWELS: BaseX = BaseX::new(b"aeiou", b" ", Flags::NONE);
//! assert_eq!(VOWELS.encode(&42u64.into()), "eoi");
//! assert_eq!(VOWELS.decode_to_int("e o i").unwrap(), 42u64.into());
//! ```
//!
//! Decoding rejects text outside the alphabet with a typed [`Error`], and an
//! optional trailing XOR checksum symbol catches single-symbol corruption;
//! see [`BaseX::encode_with_checksum`].

mod alphabet;
mod codec;
mod error;
mod num;

pub use alphabet::{
    base11, base16, base2, base32, base36, base58, base62, base64, base66, base8,
};
pub use codec::{BaseX, Flags};
pub use error::Error;
pub use num::biguint::BigUint;

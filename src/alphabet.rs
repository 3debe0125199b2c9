//! Built-in alphabets. Each preset is a plain constant; the alphabets are
//! part of the wire surface and must not change.

use crate::codec::{BaseX, Flags};

const RFC4648_IGNORED: &[u8] = b"= \n\r\t";

pub mod base2 {
    use super::{BaseX, Flags};

    pub const STANDARD: BaseX = BaseX::new(b"01", b"", Flags::NONE);
}

pub mod base8 {
    use super::{BaseX, Flags};

    pub const STANDARD: BaseX = BaseX::new(b"01234567", b"", Flags::NONE);
}

pub mod base11 {
    use super::{BaseX, Flags};

    pub const STANDARD: BaseX = BaseX::new(b"0123456789a", b"", Flags::IGNORE_CASE);
}

pub mod base16 {
    use super::{BaseX, Flags, RFC4648_IGNORED};

    pub const STANDARD: BaseX = BaseX::new(b"0123456789abcdef", b"", Flags::IGNORE_CASE);
    pub const RFC4648: BaseX =
        BaseX::new(b"0123456789ABCDEF", RFC4648_IGNORED, Flags::IGNORE_CASE);
}

pub mod base32 {
    use super::{BaseX, Flags, RFC4648_IGNORED};

    pub const STANDARD: BaseX = BaseX::new(
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567",
        b"",
        Flags::IGNORE_CASE,
    );
    pub const HEX: BaseX = BaseX::new(
        b"0123456789ABCDEFGHIJKLMNOPQRSTUV",
        b"",
        Flags::IGNORE_CASE,
    );
    pub const RFC4648: BaseX = BaseX::new(
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567",
        RFC4648_IGNORED,
        Flags::IGNORE_CASE.union(Flags::BLOCK_PADDING),
    );
    pub const RFC4648_HEX: BaseX = BaseX::new(
        b"0123456789ABCDEFGHIJKLMNOPQRSTUV",
        RFC4648_IGNORED,
        Flags::IGNORE_CASE.union(Flags::BLOCK_PADDING),
    );
    /// Crockford's base32: no I, L, O or U.
    pub const CROCKFORD: BaseX = BaseX::new(
        b"0123456789ABCDEFGHJKMNPQRSTVWXYZ",
        b"",
        Flags::IGNORE_CASE,
    );
}

pub mod base36 {
    use super::{BaseX, Flags};

    pub const STANDARD: BaseX = BaseX::new(
        b"0123456789abcdefghijklmnopqrstuvwxyz",
        b"",
        Flags::IGNORE_CASE,
    );
}

pub mod base58 {
    use super::{BaseX, Flags};

    /// GMP's base-58 digit set (`mpz_get_str` order).
    pub const GMP: BaseX = BaseX::new(
        b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuv",
        b"",
        Flags::NONE,
    );
    /// Bitcoin's alphabet: no 0, O, I or l.
    pub const BITCOIN: BaseX = BaseX::new(
        b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz",
        b"",
        Flags::NONE,
    );
    pub const RIPPLE: BaseX = BaseX::new(
        b"rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz",
        b"",
        Flags::NONE,
    );
    pub const FLICKR: BaseX = BaseX::new(
        b"123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ",
        b"",
        Flags::NONE,
    );
    /// The Bitcoin alphabet is the de-facto standard base58.
    pub const STANDARD: BaseX = BITCOIN;
}

pub mod base62 {
    use super::{BaseX, Flags};

    pub const STANDARD: BaseX = BaseX::new(
        b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz",
        b"",
        Flags::NONE,
    );
    /// Lowercase before uppercase.
    pub const INVERTED: BaseX = BaseX::new(
        b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ",
        b"",
        Flags::NONE,
    );
}

pub mod base64 {
    use super::{BaseX, Flags, RFC4648_IGNORED};

    pub const STANDARD: BaseX = BaseX::new(
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
        b"",
        Flags::NONE,
    );
    pub const URL: BaseX = BaseX::new(
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_",
        b"",
        Flags::NONE,
    );
    pub const RFC4648: BaseX = BaseX::new(
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
        RFC4648_IGNORED,
        Flags::BLOCK_PADDING,
    );
    pub const RFC4648_URL: BaseX = BaseX::new(
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_",
        RFC4648_IGNORED,
        Flags::BLOCK_PADDING,
    );
}

pub mod base66 {
    use super::{BaseX, Flags};

    pub const STANDARD: BaseX = BaseX::new(
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_.!~",
        b"",
        Flags::NONE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_sizes() {
        assert_eq!(base2::STANDARD.base(), 2);
        assert_eq!(base8::STANDARD.base(), 8);
        assert_eq!(base11::STANDARD.base(), 11);
        assert_eq!(base16::STANDARD.base(), 16);
        assert_eq!(base16::RFC4648.base(), 16);
        assert_eq!(base32::STANDARD.base(), 32);
        assert_eq!(base32::HEX.base(), 32);
        assert_eq!(base32::RFC4648.base(), 32);
        assert_eq!(base32::RFC4648_HEX.base(), 32);
        assert_eq!(base32::CROCKFORD.base(), 32);
        assert_eq!(base36::STANDARD.base(), 36);
        assert_eq!(base58::GMP.base(), 58);
        assert_eq!(base58::BITCOIN.base(), 58);
        assert_eq!(base58::RIPPLE.base(), 58);
        assert_eq!(base58::FLICKR.base(), 58);
        assert_eq!(base62::STANDARD.base(), 62);
        assert_eq!(base62::INVERTED.base(), 62);
        assert_eq!(base64::STANDARD.base(), 64);
        assert_eq!(base64::URL.base(), 64);
        assert_eq!(base64::RFC4648.base(), 64);
        assert_eq!(base64::RFC4648_URL.base(), 64);
        assert_eq!(base66::STANDARD.base(), 66);
    }

    #[test]
    fn test_standard_base58_is_bitcoin() {
        assert_eq!(base58::STANDARD.alphabet(), base58::BITCOIN.alphabet());
    }

    #[test]
    fn test_flags() {
        assert!(base32::RFC4648.flags().ignore_case);
        assert!(base32::RFC4648.flags().block_padding);
        assert!(base64::RFC4648.flags().block_padding);
        assert!(!base64::RFC4648.flags().ignore_case);
        assert!(!base58::BITCOIN.flags().ignore_case);
    }
}

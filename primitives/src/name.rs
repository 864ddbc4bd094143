//! Base32 names packed into a `u64`.
//!
//! Names identify contract actions (their value is the action selector) and
//! are also used for account-like identifiers inside payloads. Up to 12
//! symbols from `.12345abcdefghijklmnopqrstuvwxyz` take 5 bits each starting
//! from the most significant bit; an optional 13th symbol from `.12345a-j`
//! fills the remaining low 4 bits. Trailing dots do not change the value.

use core::{fmt, str::FromStr};

use parity_scale_codec::{Decode, Encode};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Alphabet of a [`Name`], indexed by symbol value.
const CHARMAP: &[u8; 32] = b".12345abcdefghijklmnopqrstuvwxyz";

/// Maximum number of characters in a [`Name`].
pub const MAX_NAME_LENGTH: usize = 13;

/// Number of characters which are encoded with the full 5 bits.
const FULL_SYMBOLS: usize = 12;

/// Name packed into 64 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Encode, Decode)]
#[repr(transparent)]
pub struct Name(u64);

/// Error produced when a string can't be packed into a [`Name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, displaydoc::Display)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum NameError {
    /// name has {len} characters, at most 13 are allowed
    TooLong {
        /// Length of the rejected string in bytes
        len: usize,
    },
    /// character `{character}` at position {position} is not allowed in a name
    InvalidCharacter {
        /// Byte offset of the character
        position: usize,
        /// Offending character
        character: char,
    },
    /// 13th character `{character}` must be one of `.12345abcdefghij`
    InvalidLastCharacter {
        /// Offending character
        character: char,
    },
}

const fn char_symbol(c: u8) -> Option<u64> {
    match c {
        b'a'..=b'z' => Some((c - b'a') as u64 + 6),
        b'1'..=b'5' => Some((c - b'1') as u64 + 1),
        b'.' => Some(0),
        _ => None,
    }
}

const fn printable(c: u8) -> char {
    if c.is_ascii() {
        c as char
    } else {
        char::REPLACEMENT_CHARACTER
    }
}

impl Name {
    /// Name with value `0`, displayed as an empty string.
    pub const EMPTY: Self = Self(0);

    /// Pack `name`, failing at compile time when used in a const context.
    ///
    /// # Panics
    ///
    /// If `name` is not a valid name, see [`Self::try_new`].
    pub const fn new(name: &str) -> Self {
        match Self::try_new(name) {
            Ok(name) => name,
            Err(NameError::TooLong { .. }) => panic!("name is longer than 13 characters"),
            Err(NameError::InvalidCharacter { .. }) => panic!("name contains an invalid character"),
            Err(NameError::InvalidLastCharacter { .. }) => {
                panic!("13th character of a name must be one of `.12345abcdefghij`")
            }
        }
    }

    /// Pack `name`.
    ///
    /// # Errors
    ///
    /// - If `name` is longer than [`MAX_NAME_LENGTH`]
    /// - If `name` contains characters outside of `.12345abcdefghijklmnopqrstuvwxyz`
    /// - If the 13th character is outside of `.12345abcdefghij`
    pub const fn try_new(name: &str) -> Result<Self, NameError> {
        let bytes = name.as_bytes();
        if bytes.len() > MAX_NAME_LENGTH {
            return Err(NameError::TooLong { len: bytes.len() });
        }

        let mut value = 0_u64;
        let mut position = 0;
        while position < bytes.len() {
            let c = bytes[position];
            let Some(symbol) = char_symbol(c) else {
                return Err(NameError::InvalidCharacter {
                    position,
                    character: printable(c),
                });
            };

            if position < FULL_SYMBOLS {
                value |= symbol << (64 - 5 * (position + 1));
            } else if symbol > 0x0f {
                return Err(NameError::InvalidLastCharacter {
                    character: printable(c),
                });
            } else {
                value |= symbol;
            }
            position += 1;
        }

        Ok(Self(value))
    }

    /// Wrap an already packed value, e.g. a selector received from the host.
    pub const fn from_value(value: u64) -> Self {
        Self(value)
    }

    /// Packed value of the name.
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut chars = [b'.'; MAX_NAME_LENGTH];
        let mut rest = self.0;

        for (i, slot) in chars.iter_mut().rev().enumerate() {
            let (mask, width) = if i == 0 { (0x0f, 4) } else { (0x1f, 5) };
            *slot = CHARMAP[(rest & mask) as usize];
            rest >>= width;
        }

        let len = chars
            .iter()
            .rposition(|&c| c != b'.')
            .map_or(0, |last| last + 1);
        let name = core::str::from_utf8(&chars[..len]).map_err(|_| fmt::Error)?;
        f.write_str(name)
    }
}

impl FromStr for Name {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
    }
}

impl TryFrom<&str> for Name {
    type Error = NameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Name> for u64 {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl Serialize for Name {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NameVisitor;

        impl de::Visitor<'_> for NameVisitor {
            type Value = Name;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a name of at most 13 characters from `.12345a-z`")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Name::try_new(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(NameVisitor)
    }
}

#[cfg(test)]
mod tests {
    use parity_scale_codec::DecodeAll;

    use super::*;

    #[test]
    fn packs_known_names() {
        assert_eq!(Name::new("eosio").value(), 0x5530_EA00_0000_0000);
        assert_eq!(Name::new("eosio.token").value(), 0x5530_EA03_3482_A600);
        assert_eq!(Name::new(""), Name::EMPTY);
    }

    #[test]
    fn display_inverts_packing() {
        for name in ["hi", "check", "transfer", "eosio.token", "a1b2c3d4e5", "abcdefghijkl1"] {
            assert_eq!(Name::new(name).to_string(), name);
        }
    }

    #[test]
    fn trailing_dots_are_insignificant() {
        assert_eq!(Name::new("hi..."), Name::new("hi"));
        assert_eq!(Name::new("hi...").to_string(), "hi");
    }

    #[test]
    fn distinct_names_have_distinct_values() {
        let names = ["hi", "check", "transfer", "add", "h", "hi1", "ih"];
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                assert_ne!(Name::new(a), Name::new(b), "`{a}` and `{b}` collide");
            }
        }
    }

    #[test]
    fn rejects_invalid_names() {
        assert_eq!(
            "Hi".parse::<Name>(),
            Err(NameError::InvalidCharacter {
                position: 0,
                character: 'H'
            })
        );
        assert_eq!(
            Name::try_new("hello_world"),
            Err(NameError::InvalidCharacter {
                position: 5,
                character: '_'
            })
        );
        assert_eq!(
            Name::try_new("abcdefghijklmn"),
            Err(NameError::TooLong { len: 14 })
        );
        assert_eq!(
            Name::try_new("abcdefghijklz"),
            Err(NameError::InvalidLastCharacter { character: 'z' })
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            NameError::TooLong { len: 14 }.to_string(),
            "name has 14 characters, at most 13 are allowed"
        );
    }

    #[test]
    fn scale_encodes_as_u64() {
        let name = Name::new("alice");
        assert_eq!(name.encode(), name.value().to_le_bytes());
        assert_eq!(Name::decode_all(&mut &name.encode()[..]).unwrap(), name);
    }

    #[test]
    fn serde_uses_string_form() {
        let name = Name::new("alice");
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"alice\"");
        assert_eq!(serde_json::from_str::<Name>("\"alice\"").unwrap(), name);
        assert!(serde_json::from_str::<Name>("\"Alice\"").is_err());
    }
}

//! Register identity of an account or a contract.

use core::fmt;

use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// Identity under which contract code is registered on the chain.
///
/// The receiver of an action and the code that originated it are both
/// identified by a [`RegId`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Encode,
    Decode,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct RegId(u64);

impl RegId {
    /// Construct [`RegId`] from its raw value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw value passed across the host boundary.
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for RegId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<RegId> for u64 {
    fn from(id: RegId) -> Self {
        id.0
    }
}

impl fmt::Display for RegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

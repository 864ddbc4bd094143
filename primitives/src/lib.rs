//! Identifiers used by wasmlib contracts and the hosts running them.
//!
//! Both types are thin `u64` wrappers so that they can cross the WASM
//! boundary as plain integers, while still providing [`parity_scale_codec`]
//! `Encode`/`Decode` and `serde` implementations for payloads and configs.
#![cfg_attr(not(feature = "std"), no_std)]

pub mod name;
pub mod regid;

pub use name::{Name, NameError};
pub use regid::RegId;

/// Largest number of payload arguments a contract action can take.
pub const MAX_ACTION_ARITY: usize = 12;

//! API which simplifies writing of wasmlib smart contracts.
//!
//! A contract is a type implementing [`Contract`] whose actions are declared
//! with the [`contract`] attribute:
//!
//! ```
//! use wasmlib_contract::{prelude::*, MemoryHost, Dispatched};
//!
//! pub struct Hello {
//!     context: ActionContext,
//! }
//!
//! impl Contract for Hello {
//!     fn new(context: ActionContext) -> Self {
//!         Self { context }
//!     }
//! }
//!
//! #[contract]
//! impl Hello {
//!     #[action]
//!     pub fn add(&mut self, a: i64, b: i64) -> i64 {
//!         a + b
//!     }
//! }
//!
//! let me = RegId::new(1);
//! let host = MemoryHost::new(me, me).with_payload(&(2_i64, 3_i64));
//! let outcome = wasmlib_contract::apply::<Hello>(&host, me, me, Name::new("add"));
//! assert_eq!(outcome, Ok(Dispatched::Returned(5)));
//! ```
//!
//! When compiled to `wasm32` the attribute also exports the `apply` entry
//! point expected by the host.
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(unsafe_code)]

extern crate alloc;

pub mod buffer;
pub mod config;
pub mod context;
pub mod decode;
pub mod dispatch;
pub mod error;
pub mod host;
pub mod invoke;

pub use buffer::PayloadBuffer;
pub use config::{DispatchConfig, HookScope, TrailingBytes, UnknownAction};
pub use context::{ActionContext, Contract};
pub use decode::{decode_args, encode_args};
#[cfg(target_arch = "wasm32")]
pub use dispatch::{call_entrypoint, entrypoint};
pub use dispatch::{
    apply, call, return_value_or_sentinel, ActionEntry, Dispatch, DispatchMode, Dispatched,
    Handler, ReturnFn, SelectorTable, VoidFn,
};
pub use error::DispatchError;
#[cfg(target_arch = "wasm32")]
pub use host::WasmHost;
pub use host::{Host, MemoryHost};
pub use invoke::{execute_action, execute_action_with_return, invoke, ActionHandler};
pub use parity_scale_codec as codec;
pub use wasmlib_contract_derive::contract;
pub use wasmlib_primitives::{Name, NameError, RegId};

pub mod prelude {
    //! Common imports used by contracts

    pub use crate::{
        codec::{Decode, Encode},
        contract, ActionContext, Contract, DispatchConfig, Name, RegId,
    };
}

//! Macros for writing wasmlib contracts.

use manyhow::manyhow;
use proc_macro2::TokenStream;
use wasmlib_macro_utils::Emitter;

mod contract;

/// Generate the action dispatch of a contract from its `impl` block.
///
/// Every method marked with `#[action]` becomes an entry of the contract's
/// selector table. The selector is the [`Name`] of the method, or the name
/// given with `#[action(name = "...")]`. Action methods must take `&mut self`
/// followed by at most 12 owned arguments decoded from the payload, and return
/// either nothing or an `i64` which is handed back to the caller.
///
/// By default actions are only dispatched when the contract's own code is
/// executing (`code == self`). `#[contract(any)]` dispatches notifications
/// originated by other contracts too.
///
/// On `wasm32` the macro also exports `apply(receiver, code, action)` and a
/// `call_<action>` function for every action returning `i64`.
///
/// The type must implement `wasmlib_contract::Contract`.
///
/// # Examples
///
/// ```ignore
/// use wasmlib_contract::prelude::*;
///
/// pub struct Hello {
///     context: ActionContext,
/// }
///
/// impl Contract for Hello {
///     fn new(context: ActionContext) -> Self {
///         Self { context }
///     }
/// }
///
/// #[contract]
/// impl Hello {
///     #[action]
///     pub fn hi(&mut self, user: Name) {
///         todo!()
///     }
///
///     #[action(name = "check")]
///     pub fn check_user(&mut self, user: Name) {
///         todo!()
///     }
///
///     #[action]
///     pub fn add(&mut self, a: i64, b: i64) -> i64 {
///         a + b
///     }
/// }
/// ```
///
/// [`Name`]: wasmlib_primitives::Name
#[manyhow]
#[proc_macro_attribute]
pub fn contract(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut emitter = Emitter::new();

    let Some(args) = emitter.handle(contract::ContractArgs::parse(attr)) else {
        return emitter.finish_token_stream();
    };

    let Some(item) = emitter.handle(syn::parse2(item)) else {
        return emitter.finish_token_stream();
    };

    let result = contract::impl_contract(&mut emitter, &args, item);

    emitter.finish_token_stream_with(result)
}

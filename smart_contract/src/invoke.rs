//! Calling action handlers with decoded arguments.

use parity_scale_codec::Decode;
use tracing::trace;

use crate::{
    config::defaults::MAX_ACTION_ARITY, decode::decode_args, dispatch::Handler, host::Host,
    ActionContext, Contract, DispatchError, Dispatched, HookScope, PayloadBuffer,
};

/// Handler of an action of contract `C` taking the argument tuple `Args`.
///
/// Implemented for every `FnOnce(&mut C, A1, .., AN) -> R` with up to
/// [`MAX_ACTION_ARITY`] arguments, e.g. for the methods of the contract. The tuple is unpacked into
/// positional arguments.
pub trait ActionHandler<C, Args> {
    /// Value returned by the handler
    type Output;

    /// Run the handler on `contract`.
    fn call(self, contract: &mut C, args: Args) -> Self::Output;
}

macro_rules! impl_action_handler {
    ($($arg:ident),*) => {
        impl<C, F, R, $($arg),*> ActionHandler<C, ($($arg,)*)> for F
        where
            F: FnOnce(&mut C, $($arg),*) -> R,
        {
            type Output = R;

            #[allow(non_snake_case)]
            fn call(self, contract: &mut C, ($($arg,)*): ($($arg,)*)) -> R {
                self(contract, $($arg),*)
            }
        }
    };
}

impl_action_handler!();
impl_action_handler!(A1);
impl_action_handler!(A1, A2);
impl_action_handler!(A1, A2, A3);
impl_action_handler!(A1, A2, A3, A4);
impl_action_handler!(A1, A2, A3, A4, A5);
impl_action_handler!(A1, A2, A3, A4, A5, A6);
impl_action_handler!(A1, A2, A3, A4, A5, A6, A7);
impl_action_handler!(A1, A2, A3, A4, A5, A6, A7, A8);
impl_action_handler!(A1, A2, A3, A4, A5, A6, A7, A8, A9);
impl_action_handler!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10);
impl_action_handler!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11);
impl_action_handler!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12);

// `#[contract]` accepts actions with up to this many arguments.
const _: () = assert!(MAX_ACTION_ARITY == 12);

/// Execute an action returning nothing.
///
/// Decodes the arguments, constructs the contract and runs
/// [`Contract::pre_action`], the handler and [`Contract::post_action`] in this
/// order. A value returned by the handler is discarded. Nothing runs when the
/// payload can't be decoded.
///
/// # Errors
///
/// If the payload can't be decoded, see [`decode_args`].
pub fn execute_action<C, Args, F>(
    context: ActionContext,
    payload: &[u8],
    handler: F,
) -> Result<(), DispatchError>
where
    C: Contract,
    Args: Decode,
    F: ActionHandler<C, Args>,
{
    let args = decode_args::<Args>(payload, C::CONFIG.trailing_bytes)?;

    let mut contract = C::new(context);
    contract.pre_action();
    let _ = handler.call(&mut contract, args);
    contract.post_action();

    Ok(())
}

/// Execute an action returning a value.
///
/// Hooks only run when the contract enables them with
/// [`HookScope::AllActions`].
///
/// # Errors
///
/// If the payload can't be decoded, see [`decode_args`].
pub fn execute_action_with_return<C, Args, F>(
    context: ActionContext,
    payload: &[u8],
    handler: F,
) -> Result<i64, DispatchError>
where
    C: Contract,
    Args: Decode,
    F: ActionHandler<C, Args, Output = i64>,
{
    let args = decode_args::<Args>(payload, C::CONFIG.trailing_bytes)?;
    let hooks = C::CONFIG.hooks == HookScope::AllActions;

    let mut contract = C::new(context);
    if hooks {
        contract.pre_action();
    }
    let value = handler.call(&mut contract, args);
    if hooks {
        contract.post_action();
    }

    Ok(value)
}

/// Read the payload from `host` and run `handler` on it.
///
/// # Errors
///
/// - If the payload can't be read, see [`PayloadBuffer::read_from`]
/// - If the handler fails
pub fn invoke(
    host: &dyn Host,
    context: ActionContext,
    handler: &Handler,
) -> Result<Dispatched, DispatchError> {
    let payload = PayloadBuffer::read_from(host)?;
    trace!(
        action = %context.action(),
        len = payload.len(),
        spilled = payload.spilled(),
        "read action payload"
    );

    match *handler {
        Handler::Void(run) => run(context, &payload).map(|()| Dispatched::Completed),
        Handler::WithReturn(run) => run(context, &payload).map(Dispatched::Returned),
    }
}

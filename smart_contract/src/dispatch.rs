//! Selector tables and the entry point routing actions to their handlers.

use core::fmt;

use tracing::{debug, warn};
use wasmlib_primitives::{Name, RegId};

use crate::{
    config::defaults::RETURN_SENTINEL, host::Host, invoke::invoke, ActionContext, Contract,
    DispatchError, UnknownAction,
};

/// Decode the payload and execute an action returning nothing.
pub type VoidFn = fn(ActionContext, &[u8]) -> Result<(), DispatchError>;

/// Decode the payload and execute an action returning a value.
pub type ReturnFn = fn(ActionContext, &[u8]) -> Result<i64, DispatchError>;

/// Type-erased action handler stored in a [`SelectorTable`].
#[derive(Clone, Copy)]
pub enum Handler {
    /// Action returning nothing
    Void(VoidFn),
    /// Action returning an `i64` to the caller
    WithReturn(ReturnFn),
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Void(_) => f.write_str("Void"),
            Self::WithReturn(_) => f.write_str("WithReturn"),
        }
    }
}

/// Action of a contract: its selector and its handler.
#[derive(Debug, Clone, Copy)]
pub struct ActionEntry {
    name: Name,
    handler: Handler,
}

impl ActionEntry {
    /// Entry of an action returning nothing.
    pub const fn void(name: Name, run: VoidFn) -> Self {
        Self {
            name,
            handler: Handler::Void(run),
        }
    }

    /// Entry of an action returning a value.
    pub const fn with_return(name: Name, run: ReturnFn) -> Self {
        Self {
            name,
            handler: Handler::WithReturn(run),
        }
    }

    /// Selector of the action.
    pub const fn name(&self) -> Name {
        self.name
    }

    /// Handler of the action.
    pub const fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Whether the action returns a value to the caller.
    pub const fn returns_value(&self) -> bool {
        matches!(self.handler, Handler::WithReturn(_))
    }
}

/// Actions of a contract, keyed by selector.
///
/// Built in a `const` item, usually by the [`contract`](crate::contract)
/// attribute, and only read afterwards.
#[derive(Debug, Clone, Copy)]
pub struct SelectorTable {
    entries: &'static [ActionEntry],
}

impl SelectorTable {
    /// Construct the table.
    ///
    /// # Panics
    ///
    /// If two entries share a selector. In a `const` item this is a
    /// compile-time error.
    pub const fn new(entries: &'static [ActionEntry]) -> Self {
        let table = Self { entries };
        if table.first_collision().is_some() {
            panic!("two actions of the contract have the same selector");
        }
        table
    }

    /// First selector declared by more than one entry, if any.
    pub const fn first_collision(&self) -> Option<Name> {
        let mut i = 0;
        while i < self.entries.len() {
            let mut j = i + 1;
            while j < self.entries.len() {
                if self.entries[i].name.value() == self.entries[j].name.value() {
                    return Some(self.entries[i].name);
                }
                j += 1;
            }
            i += 1;
        }
        None
    }

    /// Entry of the action with selector `action`.
    pub fn find(&self, action: Name) -> Option<&'static ActionEntry> {
        let entries = self.entries;
        entries.iter().find(|entry| entry.name == action)
    }

    /// Selectors of the declared actions in declaration order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = Name> + 'static {
        let entries = self.entries;
        entries.iter().map(ActionEntry::name)
    }

    /// All entries in declaration order.
    pub const fn entries(&self) -> &'static [ActionEntry] {
        self.entries
    }

    /// Number of declared actions.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the contract declares no actions.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Which invocations reach the actions of a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DispatchMode {
    /// Only invocations originated by the receiver's own code
    #[default]
    Standard,
    /// Every invocation, including notifications sent by other contracts
    Any,
}

/// Contract with a selector table.
///
/// Implemented by the [`contract`](crate::contract) attribute.
pub trait Dispatch: Contract {
    /// Which invocations are dispatched.
    const MODE: DispatchMode;

    /// Actions of the contract.
    const ACTIONS: SelectorTable;
}

/// Outcome of a successful [`apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dispatched {
    /// Code other than the receiver's originated the action and the contract
    /// dispatches in [`DispatchMode::Standard`]
    NotForReceiver,
    /// The contract doesn't declare the action and ignores unknown actions
    Ignored(Name),
    /// An action returning nothing completed
    Completed,
    /// An action returned a value
    Returned(i64),
}

impl Dispatched {
    /// Value handed back to the caller, [`RETURN_SENTINEL`] unless an action
    /// returned one.
    pub const fn return_value(&self) -> i64 {
        match *self {
            Self::Returned(value) => value,
            Self::NotForReceiver | Self::Ignored(_) | Self::Completed => RETURN_SENTINEL,
        }
    }
}

/// Value handed back to the caller for the outcome of an invocation.
///
/// Failed invocations report [`RETURN_SENTINEL`].
pub fn return_value_or_sentinel(result: &Result<Dispatched, DispatchError>) -> i64 {
    result
        .as_ref()
        .map_or(RETURN_SENTINEL, Dispatched::return_value)
}

/// Route an action delivered to `receiver` by `code` to the handler declared
/// for `action` by contract `C`.
///
/// # Errors
///
/// - [`DispatchError::UnknownSelector`] if `C` doesn't declare `action` and rejects unknown actions
/// - If the payload can't be read or decoded, see [`invoke`]
pub fn apply<C: Dispatch>(
    host: &dyn Host,
    receiver: RegId,
    code: RegId,
    action: Name,
) -> Result<Dispatched, DispatchError> {
    let context = ActionContext::new(receiver, code, action);

    if C::MODE == DispatchMode::Standard && context.is_notification() {
        debug!(%receiver, %code, %action, "Skipping action not originated by the receiver");
        return Ok(Dispatched::NotForReceiver);
    }

    let Some(entry) = C::ACTIONS.find(action) else {
        return match C::CONFIG.unknown_action {
            UnknownAction::Ignore => {
                debug!(%receiver, %action, "Ignoring unknown action");
                Ok(Dispatched::Ignored(action))
            }
            UnknownAction::Reject => {
                warn!(%receiver, %action, "Rejecting unknown action");
                Err(DispatchError::UnknownSelector(action))
            }
        };
    };

    debug!(%receiver, %code, %action, "Dispatching action");
    let result = invoke(host, context, entry.handler());
    if let Err(error) = &result {
        warn!(%receiver, %action, %error, "Action failed");
    }
    result
}

/// Dispatch `action` with the identities of the current invocation and return
/// its value.
///
/// Returns [`RETURN_SENTINEL`] if no action produced a value, including when
/// the invocation failed.
pub fn call<C: Dispatch>(host: &dyn Host, action: Name) -> i64 {
    let (receiver, code) = host.current_identities();
    return_value_or_sentinel(&apply::<C>(host, receiver, code, action))
}

/// Body of the exported `apply` function of a contract.
///
/// Aborts the transaction if the action fails.
#[cfg(target_arch = "wasm32")]
pub fn entrypoint<C: Dispatch>(receiver: u64, code: u64, action: u64) {
    let result = apply::<C>(
        &crate::WasmHost,
        RegId::new(receiver),
        RegId::new(code),
        Name::from_value(action),
    );
    if let Err(error) = result {
        crate::host::abort(&error);
    }
}

/// Body of the exported `call_<action>` function of a contract.
#[cfg(target_arch = "wasm32")]
pub fn call_entrypoint<C: Dispatch>(action: Name) -> i64 {
    call::<C>(&crate::WasmHost, action)
}

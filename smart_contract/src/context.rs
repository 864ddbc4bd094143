//! Per-invocation execution context and the [`Contract`] trait.

use wasmlib_primitives::{Name, RegId};

use crate::DispatchConfig;

/// Identities an action is executed with.
///
/// Created right before an action handler is called and dropped right after
/// it returns, nothing is carried over between invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionContext {
    receiver: RegId,
    code: RegId,
    action: Name,
}

impl ActionContext {
    /// Construct [`Self`].
    pub const fn new(receiver: RegId, code: RegId, action: Name) -> Self {
        Self {
            receiver,
            code,
            action,
        }
    }

    /// Contract the action is delivered to (`self`).
    pub const fn receiver(&self) -> RegId {
        self.receiver
    }

    /// Contract whose code originated the action.
    pub const fn code(&self) -> RegId {
        self.code
    }

    /// Name of the dispatched action.
    pub const fn action(&self) -> Name {
        self.action
    }

    /// Whether the action was originated by a contract other than the receiver.
    pub const fn is_notification(&self) -> bool {
        self.receiver.value() != self.code.value()
    }
}

/// Contract whose actions are dispatched by [`apply`](crate::apply).
///
/// A fresh instance is constructed for every invocation. Implement the hooks
/// to run code around each action, e.g. to load and store contract tables.
pub trait Contract: Sized {
    /// Dispatch policies of the contract.
    const CONFIG: DispatchConfig = DispatchConfig::DEFAULT;

    /// Construct the contract for a single invocation.
    fn new(context: ActionContext) -> Self;

    /// Called after the payload was decoded, right before the action handler.
    fn pre_action(&mut self) {}

    /// Called right after the action handler returned.
    fn post_action(&mut self) {}
}

//! Dispatch policies of a contract.
//!
//! A contract selects its policies with [`Contract::CONFIG`](crate::Contract::CONFIG).
//! The configuration is also (de)serializable so that tooling running contracts
//! off-chain can load it from a file.

use serde::{Deserialize, Serialize};

/// What to do with an action whose selector the contract doesn't declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownAction {
    /// Return without running any contract code
    #[default]
    Ignore,
    /// Fail the invocation with
    /// [`DispatchError::UnknownSelector`](crate::DispatchError::UnknownSelector)
    Reject,
}

/// What to do with payload bytes left after the arguments were decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailingBytes {
    /// Accept the payload
    #[default]
    Ignore,
    /// Fail the invocation with
    /// [`DispatchError::TrailingBytes`](crate::DispatchError::TrailingBytes)
    Reject,
}

/// Which actions run [`Contract::pre_action`](crate::Contract::pre_action) and
/// [`Contract::post_action`](crate::Contract::post_action).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookScope {
    /// Only actions returning nothing
    #[default]
    VoidActions,
    /// Actions returning a value too
    AllActions,
}

/// Dispatch policies of a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DispatchConfig {
    /// Handling of undeclared selectors
    pub unknown_action: UnknownAction,
    /// Handling of unconsumed payload bytes
    pub trailing_bytes: TrailingBytes,
    /// Actions that run the invocation hooks
    pub hooks: HookScope,
}

impl DispatchConfig {
    /// Configuration used unless a contract overrides it.
    pub const DEFAULT: Self = Self {
        unknown_action: UnknownAction::Ignore,
        trailing_bytes: TrailingBytes::Ignore,
        hooks: HookScope::VoidActions,
    };

    /// Set [`Self::unknown_action`].
    #[must_use]
    pub const fn with_unknown_action(mut self, unknown_action: UnknownAction) -> Self {
        self.unknown_action = unknown_action;
        self
    }

    /// Set [`Self::trailing_bytes`].
    #[must_use]
    pub const fn with_trailing_bytes(mut self, trailing_bytes: TrailingBytes) -> Self {
        self.trailing_bytes = trailing_bytes;
        self
    }

    /// Set [`Self::hooks`].
    #[must_use]
    pub const fn with_hooks(mut self, hooks: HookScope) -> Self {
        self.hooks = hooks;
        self
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

pub mod defaults {
    //! Constants of the dispatch machinery.

    /// Payloads up to this size are read into an inline buffer, larger ones
    /// are allocated on the heap.
    pub const MAX_STACK_BUFFER_SIZE: usize = 512;

    /// Value reported to the caller of a value-returning entry point when no
    /// action produced a value.
    pub const RETURN_SENTINEL: i64 = -1;

    pub use wasmlib_primitives::MAX_ACTION_ARITY;
}

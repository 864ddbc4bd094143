//! Errors of a single action invocation.

use wasmlib_primitives::Name;

/// Reason an action could not be executed.
///
/// Every error is local to one invocation: the selector table is untouched and
/// nothing is retried. On `wasm32` the entry point reports the message to the
/// host, which aborts the enclosing transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, displaydoc::Display)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum DispatchError {
    /// payload of {len} bytes ended before `{args}` was decoded
    DecodeUnderrun {
        /// Argument list of the action
        args: &'static str,
        /// Length of the payload
        len: usize,
    },
    /// payload is not a valid encoding of `{args}`
    MalformedPayload {
        /// Argument list of the action
        args: &'static str,
    },
    /// {remaining} bytes are left in the payload after decoding the arguments
    TrailingBytes {
        /// Number of unconsumed bytes
        remaining: usize,
    },
    /// contract has no action `{0}`
    UnknownSelector(Name),
    /// failed to allocate {size} bytes for the action payload
    AllocationFailure {
        /// Payload size announced by the host
        size: usize,
    },
    /// host announced {expected} payload bytes but provided {actual}
    PayloadSizeMismatch {
        /// Payload size announced by the host
        expected: usize,
        /// Number of bytes the host wrote
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            DispatchError::DecodeUnderrun {
                args: "(u64,)",
                len: 3
            }
            .to_string(),
            "payload of 3 bytes ended before `(u64,)` was decoded"
        );
        assert_eq!(
            DispatchError::UnknownSelector(Name::new("transfer")).to_string(),
            "contract has no action `transfer`"
        );
        assert_eq!(
            DispatchError::PayloadSizeMismatch {
                expected: 600,
                actual: 10
            }
            .to_string(),
            "host announced 600 payload bytes but provided 10"
        );
    }
}

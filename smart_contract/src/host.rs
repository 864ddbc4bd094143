//! Access to the host executing the contract.

use alloc::vec::Vec;

use parity_scale_codec::Encode;
use wasmlib_primitives::RegId;

#[cfg(target_arch = "wasm32")]
pub use self::wasm::{abort, WasmHost};

/// Services the dispatcher needs from the host.
pub trait Host {
    /// Size of the payload of the current action in bytes.
    fn payload_size(&self) -> usize;

    /// Copy the payload of the current action into `buffer`.
    ///
    /// Returns the number of bytes written.
    fn read_payload(&self, buffer: &mut [u8]) -> usize;

    /// Identities of the current invocation as `(receiver, code)`.
    fn current_identities(&self) -> (RegId, RegId);
}

/// Host serving an in-memory payload.
///
/// Runs contracts outside of a VM, e.g. in tests or off-chain tooling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHost {
    receiver: RegId,
    code: RegId,
    payload: Vec<u8>,
}

impl MemoryHost {
    /// Construct a host with an empty payload.
    pub fn new(receiver: RegId, code: RegId) -> Self {
        Self {
            receiver,
            code,
            payload: Vec::new(),
        }
    }

    /// Use the encoding of `args` as the payload.
    #[must_use]
    pub fn with_payload<T: Encode>(mut self, args: &T) -> Self {
        self.payload = args.encode();
        self
    }

    /// Use `payload` verbatim.
    #[must_use]
    pub fn with_raw_payload(mut self, payload: impl Into<Vec<u8>>) -> Self {
        self.payload = payload.into();
        self
    }

    /// Payload served to the contract.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

impl Host for MemoryHost {
    fn payload_size(&self) -> usize {
        self.payload.len()
    }

    fn read_payload(&self, buffer: &mut [u8]) -> usize {
        let len = buffer.len().min(self.payload.len());
        buffer[..len].copy_from_slice(&self.payload[..len]);
        len
    }

    fn current_identities(&self) -> (RegId, RegId) {
        (self.receiver, self.code)
    }
}

/// NUL-terminated message in a fixed buffer, truncated when too long.
#[cfg(any(target_arch = "wasm32", test))]
struct AbortMessage {
    bytes: [u8; Self::CAPACITY],
    len: usize,
}

#[cfg(any(target_arch = "wasm32", test))]
impl AbortMessage {
    const CAPACITY: usize = 256;

    const fn new() -> Self {
        Self {
            bytes: [0; Self::CAPACITY],
            len: 0,
        }
    }

    /// Message bytes including the terminating NUL.
    fn as_bytes_with_nul(&self) -> &[u8] {
        &self.bytes[..=self.len]
    }
}

#[cfg(any(target_arch = "wasm32", test))]
impl core::fmt::Write for AbortMessage {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        // last byte is reserved for NUL
        let available = Self::CAPACITY - 1 - self.len;
        let len = s.len().min(available);
        let end = self.len + len;
        self.bytes[self.len..end].copy_from_slice(&s.as_bytes()[..len]);
        self.len += len;
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use core::fmt::Write as _;

    use wasmlib_primitives::RegId;

    use super::{AbortMessage, Host};
    use crate::DispatchError;

    mod ffi {
        #[link(wasm_import_module = "env")]
        extern "C" {
            /// Size of the payload of the current action
            pub(super) fn action_data_size() -> u32;

            /// Copy at most `len` payload bytes to `msg`, returning the number
            /// of bytes written
            pub(super) fn read_action_data(msg: *mut u8, len: u32) -> u32;

            /// Contract the current action is delivered to
            pub(super) fn current_receiver() -> u64;

            /// Contract whose code originated the current action
            pub(super) fn current_code() -> u64;

            /// Abort the transaction with the NUL-terminated message `msg`
            /// when `test` is `0`
            pub(super) fn wasm_assert(test: u32, msg: *const u8);
        }
    }

    /// Host of a contract compiled to WebAssembly.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct WasmHost;

    impl Host for WasmHost {
        fn payload_size(&self) -> usize {
            // Safety: host function without arguments
            unsafe { ffi::action_data_size() as usize }
        }

        fn read_payload(&self, buffer: &mut [u8]) -> usize {
            let len = u32::try_from(buffer.len()).unwrap_or(u32::MAX);
            // Safety: host writes at most `len` bytes into `buffer`
            unsafe { ffi::read_action_data(buffer.as_mut_ptr(), len) as usize }
        }

        fn current_identities(&self) -> (RegId, RegId) {
            // Safety: host functions without arguments
            unsafe {
                (
                    RegId::new(ffi::current_receiver()),
                    RegId::new(ffi::current_code()),
                )
            }
        }
    }

    /// Abort the current transaction, reporting `error` to the host.
    pub fn abort(error: &DispatchError) -> ! {
        let mut message = AbortMessage::new();
        let _ = write!(message, "{error}");

        // Safety: message is NUL-terminated and outlives the call
        unsafe { ffi::wasm_assert(0, message.as_bytes_with_nul().as_ptr()) };
        core::arch::wasm32::unreachable()
    }
}

#[cfg(test)]
mod tests {
    use core::fmt::Write as _;

    use wasmlib_primitives::Name;

    use super::*;

    #[test]
    fn memory_host_serves_encoded_payload() {
        let host =
            MemoryHost::new(RegId::new(1), RegId::new(2)).with_payload(&(Name::new("alice"),));

        assert_eq!(host.payload_size(), 8);
        assert_eq!(host.current_identities(), (RegId::new(1), RegId::new(2)));

        let mut buffer = [0; 8];
        assert_eq!(host.read_payload(&mut buffer), 8);
        assert_eq!(buffer, Name::new("alice").value().to_le_bytes());
    }

    #[test]
    fn memory_host_fills_at_most_the_buffer() {
        let host = MemoryHost::default().with_raw_payload([1_u8, 2, 3]);

        let mut buffer = [0; 2];
        assert_eq!(host.read_payload(&mut buffer), 2);
        assert_eq!(buffer, [1, 2]);
    }

    #[test]
    fn abort_message_is_nul_terminated() {
        let mut message = AbortMessage::new();
        write!(message, "contract has no action `{}`", Name::new("hi")).unwrap();

        assert_eq!(
            message.as_bytes_with_nul(),
            b"contract has no action `hi`\0"
        );
    }

    #[test]
    fn abort_message_is_truncated() {
        let mut message = AbortMessage::new();
        for _ in 0..100 {
            message.write_str("abcdef").unwrap();
        }

        let bytes = message.as_bytes_with_nul();
        assert_eq!(bytes.len(), AbortMessage::CAPACITY);
        assert_eq!(bytes.last(), Some(&0));
    }
}

//! Buffer holding the payload of one invocation.

use core::ops::Deref;

use smallvec::SmallVec;

use crate::{config::defaults::MAX_STACK_BUFFER_SIZE, host::Host, DispatchError};

/// Payload read from the host.
///
/// Payloads up to [`MAX_STACK_BUFFER_SIZE`] bytes are kept inline, larger ones
/// are allocated on the heap. Either way the memory is released when the
/// buffer is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadBuffer {
    bytes: SmallVec<[u8; MAX_STACK_BUFFER_SIZE]>,
}

impl PayloadBuffer {
    /// Read the payload of the current action from `host`.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::AllocationFailure`] if a heap buffer of the announced size
    ///   can't be allocated
    /// - [`DispatchError::PayloadSizeMismatch`] if the host writes fewer bytes than it announced
    pub fn read_from(host: &dyn Host) -> Result<Self, DispatchError> {
        let size = host.payload_size();

        let mut bytes = SmallVec::new();
        if size > MAX_STACK_BUFFER_SIZE {
            bytes
                .try_reserve_exact(size)
                .map_err(|_| DispatchError::AllocationFailure { size })?;
        }
        bytes.resize(size, 0);

        if size > 0 {
            let actual = host.read_payload(&mut bytes);
            if actual != size {
                return Err(DispatchError::PayloadSizeMismatch {
                    expected: size,
                    actual,
                });
            }
        }

        Ok(Self { bytes })
    }

    /// Whether the payload didn't fit inline and was allocated on the heap.
    pub fn spilled(&self) -> bool {
        self.bytes.spilled()
    }
}

impl Deref for PayloadBuffer {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.bytes
    }
}

impl AsRef<[u8]> for PayloadBuffer {
    fn as_ref(&self) -> &[u8] {
        self
    }
}

//! Decoding of action arguments from the payload.

use alloc::vec::Vec;
use core::any::type_name;

use parity_scale_codec::{Decode, Encode, Error as CodecError, Input};
use tracing::trace;

use crate::{DispatchError, TrailingBytes};

/// [`Input`] over a payload which records whether a read ran past its end.
///
/// No length hint is reported, so collections are decoded element by element
/// and a payload which is too short always fails inside [`Input::read`].
struct PayloadReader<'a> {
    rest: &'a [u8],
    underrun: bool,
}

impl<'a> PayloadReader<'a> {
    fn new(payload: &'a [u8]) -> Self {
        Self {
            rest: payload,
            underrun: false,
        }
    }
}

impl Input for PayloadReader<'_> {
    fn remaining_len(&mut self) -> Result<Option<usize>, CodecError> {
        Ok(None)
    }

    fn read(&mut self, into: &mut [u8]) -> Result<(), CodecError> {
        if into.len() > self.rest.len() {
            self.underrun = true;
            return Err("Not enough data to fill buffer".into());
        }

        let (head, tail) = self.rest.split_at(into.len());
        into.copy_from_slice(head);
        self.rest = tail;
        Ok(())
    }
}

/// Decode the argument tuple of an action from `payload`.
///
/// Elements are decoded left to right, an empty tuple decodes from an empty
/// payload.
///
/// # Errors
///
/// - [`DispatchError::DecodeUnderrun`] if the payload ends before every argument was decoded
/// - [`DispatchError::MalformedPayload`] if the bytes are not a valid encoding of the arguments
/// - [`DispatchError::TrailingBytes`] if bytes are left and `trailing` is [`TrailingBytes::Reject`]
pub fn decode_args<Args: Decode>(
    payload: &[u8],
    trailing: TrailingBytes,
) -> Result<Args, DispatchError> {
    let mut reader = PayloadReader::new(payload);

    let args = match Args::decode(&mut reader) {
        Ok(args) => args,
        Err(_) if reader.underrun => {
            return Err(DispatchError::DecodeUnderrun {
                args: type_name::<Args>(),
                len: payload.len(),
            })
        }
        Err(_) => {
            return Err(DispatchError::MalformedPayload {
                args: type_name::<Args>(),
            })
        }
    };

    let remaining = reader.rest.len();
    trace!(
        args = type_name::<Args>(),
        len = payload.len(),
        remaining,
        "decoded action arguments"
    );

    match trailing {
        TrailingBytes::Reject if remaining > 0 => Err(DispatchError::TrailingBytes { remaining }),
        TrailingBytes::Ignore | TrailingBytes::Reject => Ok(args),
    }
}

/// Encode action arguments into a payload accepted by [`decode_args`].
pub fn encode_args<Args: Encode>(args: &Args) -> Vec<u8> {
    args.encode()
}

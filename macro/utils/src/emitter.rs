//! Accumulator of macro diagnostics.

use drop_bomb::DropBomb;
use manyhow::ToTokensError;
use proc_macro2::TokenStream;

/// Collects errors while a macro keeps generating code, so that a single
/// expansion reports every problem instead of only the first one.
///
/// Must be consumed with one of the `finish*` methods, dropping it otherwise
/// panics to catch lost diagnostics.
pub struct Emitter {
    inner: manyhow::Emitter,
    bomb: DropBomb,
}

impl Emitter {
    /// Create an emitter with no errors.
    pub fn new() -> Self {
        Self {
            inner: manyhow::Emitter::new(),
            bomb: DropBomb::new("Emitter dropped without calling `finish*`"),
        }
    }

    /// Add an error to the emitter.
    pub fn emit<E: ToTokensError + 'static>(&mut self, err: E) {
        self.inner.emit(err);
    }

    /// Unwrap `result`, adding the error to the emitter when there is one.
    pub fn handle<E: ToTokensError + 'static, T>(&mut self, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.emit(err);
                None
            }
        }
    }

    /// Consume the emitter.
    ///
    /// # Errors
    ///
    /// If any error was emitted.
    pub fn finish(mut self) -> manyhow::Result<()> {
        self.bomb.defuse();
        self.inner.into_result()
    }

    /// Consume the emitter, returning only the accumulated errors as tokens.
    pub fn finish_token_stream(self) -> TokenStream {
        self.finish_token_stream_with(TokenStream::new())
    }

    /// Consume the emitter and append the accumulated errors to `tokens`.
    ///
    /// Generated code is kept next to the errors so that downstream
    /// diagnostics don't drown the actual problem.
    pub fn finish_token_stream_with(self, mut tokens: TokenStream) -> TokenStream {
        if let Err(err) = self.finish() {
            tokens.extend(err.into_token_stream());
        }
        tokens
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ToTokensError + 'static> Extend<E> for Emitter {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for err in iter {
            self.emit(err);
        }
    }
}

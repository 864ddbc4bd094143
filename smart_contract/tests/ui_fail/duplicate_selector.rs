//! Two actions can't share a selector.
#![allow(dead_code)]

use wasmlib_contract::prelude::*;

struct Hello;

impl Contract for Hello {
    fn new(_context: ActionContext) -> Self {
        Self
    }
}

#[contract]
impl Hello {
    #[action]
    fn hi(&mut self, _user: Name) {}

    #[action(name = "hi.")]
    fn greet(&mut self, _user: Name) {}
}

fn main() {}

//! Method names which don't fit into a `Name` need an explicit selector.
#![allow(dead_code)]

use wasmlib_contract::prelude::*;

struct Registry;

impl Contract for Registry {
    fn new(_context: ActionContext) -> Self {
        Self
    }
}

#[contract]
impl Registry {
    #[action]
    fn register_account(&mut self, _account: Name) {}

    #[action]
    fn check(&mut self, _account: Name) {}
}

fn main() {}

//! Actions borrow the contract mutably.
#![allow(dead_code)]

use wasmlib_contract::prelude::*;

struct Counter;

impl Contract for Counter {
    fn new(_context: ActionContext) -> Self {
        Self
    }
}

#[contract]
impl Counter {
    #[action]
    fn consume(self) {}

    #[action]
    fn reset(&mut self) {}
}

fn main() {}

//! Actions return either nothing or an `i64`.
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
    fn count(&mut self) -> u32 {
        0
    }

    #[action]
    fn reset(&mut self) {}
}

fn main() {}

//! Actions run to completion inside a single host call.
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
    async fn wait(&mut self) {}

    #[action]
    fn reset(&mut self) {}
}

fn main() {}

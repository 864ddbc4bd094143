//! Payloads decode into at most 12 arguments.
#![allow(dead_code)]

use wasmlib_contract::prelude::*;

struct Sums;

impl Contract for Sums {
    fn new(_context: ActionContext) -> Self {
        Self
    }
}

#[contract]
impl Sums {
    #[action]
    fn sum(
        &mut self,
        _a1: u8,
        _a2: u8,
        _a3: u8,
        _a4: u8,
        _a5: u8,
        _a6: u8,
        _a7: u8,
        _a8: u8,
        _a9: u8,
        _a10: u8,
        _a11: u8,
        _a12: u8,
        _a13: u8,
    ) {
    }

    #[action]
    fn reset(&mut self) {}
}

fn main() {}

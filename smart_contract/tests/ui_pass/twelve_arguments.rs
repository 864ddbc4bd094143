//! Action taking the largest supported number of arguments.
use wasmlib_contract::{prelude::*, Dispatch};

struct Wide;

impl Contract for Wide {
    fn new(_context: ActionContext) -> Self {
        Self
    }
}

#[contract]
impl Wide {
    #[action]
    #[allow(clippy::too_many_arguments)]
    fn wide(
        &mut self,
        _a1: u8,
        _a2: u16,
        _a3: u32,
        _a4: u64,
        _a5: i8,
        _a6: i16,
        _a7: i32,
        _a8: i64,
        _a9: bool,
        _a10: Name,
        _a11: Vec<u8>,
        _a12: (u8, u8),
    ) -> i64 {
        12
    }

    #[action]
    fn empty(&mut self) -> () {}
}

fn main() {
    assert!(Wide::ACTIONS.find(Name::new("wide")).unwrap().returns_value());
    assert!(!Wide::ACTIONS.find(Name::new("empty")).unwrap().returns_value());
}

//! Contract dispatching notifications from other contracts.
use wasmlib_contract::{prelude::*, Dispatch, DispatchMode};

struct Notified;

impl Contract for Notified {
    fn new(_context: ActionContext) -> Self {
        Self
    }
}

#[contract(any)]
impl Notified {
    #[action]
    fn transfer(&mut self, _from: Name, _to: Name, _amount: i64, _memo: String) {}
}

fn main() {
    assert_eq!(Notified::MODE, DispatchMode::Any);
    assert_eq!(Notified::ACTIONS.len(), 1);
}

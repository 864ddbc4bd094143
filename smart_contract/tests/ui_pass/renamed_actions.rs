//! Actions whose selector differs from the method name.
use wasmlib_contract::{prelude::*, Dispatch, DispatchMode};

struct Registry {
    context: ActionContext,
}

impl Contract for Registry {
    fn new(context: ActionContext) -> Self {
        Self { context }
    }
}

#[contract]
impl Registry {
    #[action(name = "check")]
    fn check_user(&mut self, user: Name) {
        let _ = (self.context, user);
    }

    #[action(name = "eosio.code")]
    fn code(&mut self) -> i64 {
        7
    }

    #[action]
    fn r#use(&mut self) {}

    /// Not an action.
    fn helper(&self) -> RegId {
        self.context.receiver()
    }
}

fn main() {
    assert_eq!(Registry::MODE, DispatchMode::Standard);
    assert!(Registry::ACTIONS
        .names()
        .eq([Name::new("check"), Name::new("eosio.code"), Name::new("use")]));

    let context = ActionContext::new(RegId::new(1), RegId::new(1), Name::new("check"));
    assert_eq!(Registry::new(context).helper(), RegId::new(1));
}

//! Order of the invocation hooks around action handlers.

use std::cell::RefCell;

use wasmlib_contract::{apply, call, prelude::*, DispatchError, Dispatched, HookScope, MemoryHost};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    New,
    Pre,
    Action(i64),
    Post,
    Drop,
}

thread_local! {
    static EVENTS: RefCell<Vec<Event>> = const { RefCell::new(Vec::new()) };
}

fn push(event: Event) {
    EVENTS.with(|events| events.borrow_mut().push(event));
}

fn events() -> Vec<Event> {
    EVENTS.with(|events| events.take())
}

fn count(events: &[Event], event: Event) -> usize {
    events.iter().filter(|&&e| e == event).count()
}

struct Counter {
    total: i64,
}

impl Contract for Counter {
    fn new(_context: ActionContext) -> Self {
        push(Event::New);
        Self { total: 0 }
    }

    fn pre_action(&mut self) {
        push(Event::Pre);
    }

    fn post_action(&mut self) {
        push(Event::Post);
    }
}

impl Drop for Counter {
    fn drop(&mut self) {
        push(Event::Drop);
    }
}

#[contract]
impl Counter {
    #[action]
    fn bump(&mut self, by: i64) {
        self.total += by;
        push(Event::Action(self.total));
    }

    #[action]
    fn peek(&mut self, by: i64) -> i64 {
        push(Event::Action(by));
        by
    }
}

/// Runs the hooks around value-returning actions too.
struct Audited;

impl Contract for Audited {
    const CONFIG: DispatchConfig = DispatchConfig::DEFAULT.with_hooks(HookScope::AllActions);

    fn new(_context: ActionContext) -> Self {
        push(Event::New);
        Self
    }

    fn pre_action(&mut self) {
        push(Event::Pre);
    }

    fn post_action(&mut self) {
        push(Event::Post);
    }
}

#[contract]
impl Audited {
    #[action]
    fn peek(&mut self, by: i64) -> i64 {
        push(Event::Action(by));
        by
    }
}

const ME: RegId = RegId::new(1);

#[test]
fn void_action_is_wrapped_by_hooks() {
    let host = MemoryHost::new(ME, ME).with_payload(&(3_i64,));

    assert_eq!(
        apply::<Counter>(&host, ME, ME, Name::new("bump")),
        Ok(Dispatched::Completed)
    );

    let events = events();
    assert_eq!(
        events,
        [
            Event::New,
            Event::Pre,
            Event::Action(3),
            Event::Post,
            Event::Drop
        ]
    );
    assert_eq!(count(&events, Event::Pre), 1);
    assert_eq!(count(&events, Event::Post), 1);
}

#[test]
fn every_invocation_gets_a_fresh_contract() {
    let host = MemoryHost::new(ME, ME).with_payload(&(3_i64,));

    apply::<Counter>(&host, ME, ME, Name::new("bump")).unwrap();
    apply::<Counter>(&host, ME, ME, Name::new("bump")).unwrap();

    let events = events();
    assert_eq!(count(&events, Event::New), 2);
    assert_eq!(count(&events, Event::Action(3)), 2);
    assert_eq!(count(&events, Event::Action(6)), 0);
}

#[test]
fn decode_failure_runs_no_hook() {
    let host = MemoryHost::new(ME, ME).with_raw_payload([1_u8, 2]);

    let result = apply::<Counter>(&host, ME, ME, Name::new("bump"));

    assert!(matches!(result, Err(DispatchError::DecodeUnderrun { len: 2, .. })));
    assert!(events().is_empty());
}

#[test]
fn value_action_skips_hooks_by_default() {
    let host = MemoryHost::new(ME, ME).with_payload(&(9_i64,));

    assert_eq!(call::<Counter>(&host, Name::new("peek")), 9);
    assert_eq!(events(), [Event::New, Event::Action(9), Event::Drop]);
}

#[test]
fn value_action_runs_hooks_when_enabled() {
    let host = MemoryHost::new(ME, ME).with_payload(&(9_i64,));

    assert_eq!(call::<Audited>(&host, Name::new("peek")), 9);
    assert_eq!(
        events(),
        [Event::New, Event::Pre, Event::Action(9), Event::Post]
    );
}

//! Signal lifecycle tests against an owning component.
//!
//! Exercises the intended usage shape: a component exposes a signal as a
//! field, owns shared state, and slots update that state through the owner
//! argument.

use sigkit_core::{shared, Shared, Signal, Slot};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

#[derive(Debug, Default)]
struct FeederState {
    last_fed: Option<String>,
}

struct Animal {
    state: Shared<FeederState>,
    on_fed: Signal<RefCell<FeederState>, String>,
    kind: &'static str,
}

impl Animal {
    fn new(kind: &'static str) -> Self {
        let state = shared(FeederState::default());
        Self {
            on_fed: Signal::with_owner("fed", Rc::clone(&state)),
            state,
            kind,
        }
    }

    fn feed(&self) -> sigkit_core::Result<()> {
        self.on_fed.emit(&[self.kind.to_string()], &BTreeMap::new())
    }
}

fn on_animal_fed() -> Slot<RefCell<FeederState>, String> {
    Rc::new(|owner, args, _kwargs| {
        let state = owner.expect("fed signal should be owned");
        state.borrow_mut().last_fed = Some(args[0].clone());
        Ok(())
    })
}

#[test]
fn feeding_notifies_the_owner_state() {
    let dog = Animal::new("dog");
    let slot = on_animal_fed();

    dog.on_fed.connect(&slot).unwrap();
    assert_eq!(dog.on_fed.count(), 1);

    dog.feed().unwrap();
    assert_eq!(dog.state.borrow().last_fed.as_deref(), Some("dog"));

    dog.on_fed.disconnect(&slot).unwrap();
    assert_eq!(dog.on_fed.count(), 0);

    // Nothing connected: feeding is a no-op
    dog.state.borrow_mut().last_fed = None;
    dog.feed().unwrap();
    assert!(dog.state.borrow().last_fed.is_none());
}

#[test]
fn each_owner_gets_its_own_registry() {
    let dog = Animal::new("dog");
    let cat = Animal::new("cat");
    let slot = on_animal_fed();

    dog.on_fed.connect(&slot).unwrap();
    cat.on_fed.connect(&slot).unwrap();

    cat.feed().unwrap();
    assert_eq!(cat.state.borrow().last_fed.as_deref(), Some("cat"));
    assert!(dog.state.borrow().last_fed.is_none());
}

#[test]
fn errors_convert_into_the_unified_error_type() {
    let signal: Signal<(), i64> = Signal::new("edit");
    let slot: Slot<(), i64> = Rc::new(|_, _, _| Ok(()));
    signal.connect(&slot).unwrap();

    let err: sigkit_core::Error = signal.connect(&slot).unwrap_err().into();
    assert!(err.is_signal_error());
    assert_eq!(err.to_string(), "duplicate binding on signal 'edit'");
}

//! Slot and binding types for the signal registry.

use std::collections::BTreeMap;
use std::rc::Rc;

/// Slot function invoked on emission.
///
/// Every slot receives the signal's owner (if any) as its first argument,
/// followed by the merged positional arguments and the merged named
/// arguments. Returning an error aborts the remaining slots of the current
/// emission pass.
///
/// `Rc` identity is what makes two registrations of "the same" function
/// distinguishable: connecting one clone of an `Rc` twice with identical
/// bound arguments is a duplicate, while two separately-built slots never
/// collide even if their bodies are textually identical.
pub type Slot<O, V> = Rc<dyn Fn(Option<&O>, &[V], &BTreeMap<String, V>) -> crate::Result<()>>;

/// Error types for signal registry operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignalError {
    /// The exact slot/argument triple is already registered
    #[error("duplicate binding on signal '{signal}'")]
    DuplicateBinding {
        /// Name of the signal that rejected the registration.
        signal: String,
    },
    /// No registered binding matches the slot/argument triple
    #[error("no matching binding on signal '{signal}'")]
    BindingNotFound {
        /// Name of the signal that was searched.
        signal: String,
    },
}

/// One subscription record: a slot plus its pre-bound arguments.
pub(crate) struct Binding<O, V> {
    pub(crate) slot: Slot<O, V>,
    pub(crate) bound_args: Vec<V>,
    pub(crate) bound_kwargs: BTreeMap<String, V>,
}

impl<O, V: PartialEq> Binding<O, V> {
    /// Check whether this binding matches the given triple.
    ///
    /// Slots compare by `Rc` identity, argument collections by value.
    pub(crate) fn matches(
        &self,
        slot: &Slot<O, V>,
        bound_args: &[V],
        bound_kwargs: &BTreeMap<String, V>,
    ) -> bool {
        Rc::ptr_eq(&self.slot, slot)
            && self.bound_args == bound_args
            && self.bound_kwargs == *bound_kwargs
    }
}

impl<O, V: Clone> Clone for Binding<O, V> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
            bound_args: self.bound_args.clone(),
            bound_kwargs: self.bound_kwargs.clone(),
        }
    }
}

impl<O, V: std::fmt::Debug> std::fmt::Debug for Binding<O, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("bound_args", &self.bound_args)
            .field("bound_kwargs", &self.bound_kwargs)
            .finish_non_exhaustive()
    }
}

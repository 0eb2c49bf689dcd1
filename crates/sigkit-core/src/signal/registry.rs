//! Signal implementation.
//!
//! Provides the core Signal struct: a named, owner-scoped registry of
//! slots invoked synchronously, in registration order, on emission.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::binding::{Binding, SignalError, Slot};

/// A named, owner-scoped event broadcaster.
///
/// `Signal` maintains an ordered registry of [`Slot`]s for one named event
/// and invokes them synchronously on [`emit`](Signal::emit). Each slot may
/// carry extra positional and named arguments fixed at connect time; these
/// are merged with the emit-time arguments before the call.
///
/// Signals are single-threaded: all operations take `&self` through
/// interior mutability and perform no locking. Multi-threaded use requires
/// external synchronization.
///
/// Typically a signal is stored as a field of the component it reports
/// for, with that component's shared state as the owner:
///
/// ```rust,ignore
/// struct Download {
///     state: Shared<DownloadState>,
///     on_progress: Signal<RefCell<DownloadState>, u64>,
/// }
/// ```
pub struct Signal<O, V> {
    /// Name of the signal. Immutable after construction.
    name: String,
    /// Object the signal reports for, passed first to every slot.
    owner: Option<Rc<O>>,
    /// Registered bindings, in registration order.
    bindings: RefCell<Vec<Binding<O, V>>>,
}

impl<O, V> Signal<O, V> {
    /// Create a new unowned signal with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: None,
            bindings: RefCell::new(Vec::new()),
        }
    }

    /// Create a new signal owned by `owner`
    ///
    /// The owner is passed as the first argument to every slot on emission.
    pub fn with_owner(name: impl Into<String>, owner: Rc<O>) -> Self {
        Self {
            name: name.into(),
            owner: Some(owner),
            bindings: RefCell::new(Vec::new()),
        }
    }

    /// Get the signal's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the signal's owner, if any
    pub fn owner(&self) -> Option<&O> {
        self.owner.as_deref()
    }

    /// Get the number of registered bindings
    pub fn count(&self) -> usize {
        self.bindings.borrow().len()
    }

    /// Check whether no bindings are registered
    pub fn is_empty(&self) -> bool {
        self.bindings.borrow().is_empty()
    }

    /// Get a human-readable description for diagnostics
    pub fn describe(&self) -> String {
        format!(
            "signal '{}' ({} bindings, {})",
            self.name,
            self.count(),
            if self.owner.is_some() {
                "owned"
            } else {
                "unowned"
            }
        )
    }
}

impl<O, V: Clone + PartialEq> Signal<O, V> {
    /// Connect a slot with no pre-bound arguments
    ///
    /// See [`connect_with`](Signal::connect_with).
    pub fn connect(&self, slot: &Slot<O, V>) -> Result<(), SignalError> {
        self.connect_with(slot, Vec::new(), BTreeMap::new())
    }

    /// Connect a slot, pre-binding extra arguments
    ///
    /// `bound_args` and `bound_kwargs` are stored with the slot and merged
    /// with the emit-time arguments on every emission (bound positional
    /// arguments first, emit-time named arguments winning key collisions).
    ///
    /// Returns [`SignalError::DuplicateBinding`] if the exact
    /// `(slot, bound_args, bound_kwargs)` triple is already registered;
    /// the registry is left unchanged in that case.
    pub fn connect_with(
        &self,
        slot: &Slot<O, V>,
        bound_args: Vec<V>,
        bound_kwargs: BTreeMap<String, V>,
    ) -> Result<(), SignalError> {
        let mut bindings = self.bindings.borrow_mut();
        if bindings
            .iter()
            .any(|b| b.matches(slot, &bound_args, &bound_kwargs))
        {
            return Err(SignalError::DuplicateBinding {
                signal: self.name.clone(),
            });
        }

        bindings.push(Binding {
            slot: Rc::clone(slot),
            bound_args,
            bound_kwargs,
        });
        tracing::debug!(signal = %self.name, count = bindings.len(), "binding added");
        Ok(())
    }

    /// Disconnect a slot that was connected with no pre-bound arguments
    ///
    /// See [`disconnect_with`](Signal::disconnect_with).
    pub fn disconnect(&self, slot: &Slot<O, V>) -> Result<(), SignalError> {
        self.disconnect_with(slot, &[], &BTreeMap::new())
    }

    /// Disconnect the binding matching the exact slot/argument triple
    ///
    /// The arguments must equal the ones passed at connect time. Returns
    /// [`SignalError::BindingNotFound`] if no binding matches; no other
    /// binding is ever removed.
    pub fn disconnect_with(
        &self,
        slot: &Slot<O, V>,
        bound_args: &[V],
        bound_kwargs: &BTreeMap<String, V>,
    ) -> Result<(), SignalError> {
        let mut bindings = self.bindings.borrow_mut();
        let position = bindings
            .iter()
            .position(|b| b.matches(slot, bound_args, bound_kwargs))
            .ok_or_else(|| SignalError::BindingNotFound {
                signal: self.name.clone(),
            })?;

        bindings.remove(position);
        tracing::debug!(signal = %self.name, count = bindings.len(), "binding removed");
        Ok(())
    }

    /// Emit the signal, invoking every registered slot in order
    ///
    /// Each slot is called with the owner first, then the slot's bound
    /// positional arguments followed by `args`, then the slot's bound named
    /// arguments overridden key-wise by `kwargs`.
    ///
    /// The binding list is snapshotted before the first call: slots may
    /// connect or disconnect bindings on this signal mid-emission, and the
    /// change takes effect on the next emission only.
    ///
    /// Dispatch is fail-fast: the first slot error aborts the remaining
    /// slots of this pass and is returned to the caller unchanged.
    pub fn emit(&self, args: &[V], kwargs: &BTreeMap<String, V>) -> crate::Result<()> {
        let snapshot: Vec<Binding<O, V>> = self.bindings.borrow().clone();

        for binding in &snapshot {
            let mut merged_args = binding.bound_args.clone();
            merged_args.extend_from_slice(args);

            let mut merged_kwargs = binding.bound_kwargs.clone();
            merged_kwargs.extend(kwargs.iter().map(|(k, v)| (k.clone(), v.clone())));

            (binding.slot)(self.owner.as_deref(), &merged_args, &merged_kwargs)?;
        }
        Ok(())
    }
}

impl<O, V> std::fmt::Display for Signal<O, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl<O, V> std::fmt::Debug for Signal<O, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("name", &self.name)
            .field("owned", &self.owner.is_some())
            .field("bindings", &self.bindings.borrow().len())
            .finish()
    }
}

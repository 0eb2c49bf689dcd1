//! # Signal Module
//!
//! Provides a named, owner-scoped broadcast mechanism for decoupled
//! communication between components.
//!
//! ## Overview
//!
//! A [`Signal`] is a synchronous callback registry for one named event:
//! - Callers connect slots, optionally pre-binding extra positional and
//!   named arguments
//! - Emission invokes every slot in registration order, on the emitting
//!   thread
//! - Each slot receives the signal's owner first, then the merged
//!   positional and named arguments
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sigkit_core::signal::{Signal, Slot};
//! use std::collections::BTreeMap;
//! use std::rc::Rc;
//!
//! let changed: Signal<(), i64> = Signal::new("changed");
//!
//! let slot: Slot<(), i64> = Rc::new(|_owner, args, _kwargs| {
//!     println!("changed: {:?}", args);
//!     Ok(())
//! });
//!
//! changed.connect(&slot)?;
//! changed.emit(&[42], &BTreeMap::new())?;
//! changed.disconnect(&slot)?;
//! ```

mod binding;
mod registry;

pub use binding::*;
pub use registry::*;

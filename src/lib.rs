//! # Sigkit
//!
//! A small general-purpose utility library offering:
//! - Named, owner-scoped signals with pre-bound callback arguments
//! - Byte-size parsing, formatting, and arithmetic
//! - Typed key/value mapping containers (mutable and read-only)
//! - Binary search over sorted slices
//! - A structured-logging bootstrap driven by an explicit configuration
//!
//! ## Architecture
//!
//! Sigkit is organized as a workspace:
//!
//! 1. **sigkit-core** - Signals, byte sizes, mappings, search, shared-type
//!    aliases, and the unified error type
//! 2. **sigkit** - Facade crate re-exporting the core surface and
//!    providing the logging bootstrap
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use sigkit::{init_logging, LoggingConfig, Signal, Slot};
//! use std::collections::BTreeMap;
//! use std::rc::Rc;
//!
//! init_logging(&LoggingConfig::from_env("SIGKIT_LEVEL"))?;
//!
//! let changed: Signal<(), i64> = Signal::new("changed");
//! let slot: Slot<(), i64> = Rc::new(|_owner, args, _kwargs| {
//!     tracing::info!("changed: {:?}", args);
//!     Ok(())
//! });
//! changed.connect(&slot)?;
//! changed.emit(&[42], &BTreeMap::new())?;
//! ```

pub mod logging;

pub use logging::{init_logging, Level, LoggingConfig};

pub use sigkit_core::{
    binary_search, shared, thread_safe, thread_safe_rw, AttrMap, Error, Filesize, FilesizeError,
    ReadonlyMap, Result, Shared, SharedHashMap, SharedOption, SharedVec, Signal, SignalError,
    SizeUnit, Slot, ThreadSafe, ThreadSafeRw,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

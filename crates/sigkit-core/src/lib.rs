//! # Sigkit Core
//!
//! Core types and utilities for Sigkit.
//! Provides the signal dispatch mechanism, byte-size parsing and
//! formatting, key/value mapping containers, and binary search.

pub mod error;
pub mod filesize;
pub mod mapping;
pub mod search;
pub mod signal;
pub mod types;

pub use error::{Error, Result};

pub use filesize::{Filesize, FilesizeError, SizeUnit};

pub use mapping::{AttrMap, ReadonlyMap};

pub use search::binary_search;

// Re-export the signal surface for convenience
pub use signal::{Signal, SignalError, Slot};

// Re-export type aliases for convenience
pub use types::{
    shared, thread_safe, thread_safe_rw, Shared, SharedHashMap, SharedOption, SharedVec,
    ThreadSafe, ThreadSafeRw,
};

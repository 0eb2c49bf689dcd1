//! Type aliases for commonly used shared-state types.
//!
//! Complex types like `Rc<RefCell<Option<T>>>` are hard to read at a
//! glance. These aliases name the sharing patterns the library expects:
//! the single-threaded `Rc<RefCell<T>>` family is the intended shape for
//! signal owners, and the `parking_lot`-backed family is for callers that
//! share the other utility types across threads (signals themselves are
//! single-threaded and need external coordination instead).

use parking_lot::{Mutex, RwLock};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// This is the intended owner type for [`Signal`](crate::Signal): the
/// owning component keeps one handle, the signal keeps another, and slots
/// receive `&RefCell<T>` to read or update the state.
pub type Shared<T> = Rc<RefCell<T>>;

/// An optional shared reference, for lazily-initialized shared state.
pub type SharedOption<T> = Rc<RefCell<Option<T>>>;

/// A shared vector for single-threaded collection management.
pub type SharedVec<T> = Rc<RefCell<Vec<T>>>;

/// A shared hash map for single-threaded key-value storage.
pub type SharedHashMap<K, V> = Rc<RefCell<HashMap<K, V>>>;

/// Create a new `Shared<T>` from a value.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// A thread-safe, mutex-protected wrapper for cross-thread sharing.
///
/// Uses `parking_lot::Mutex` for better performance than `std::sync::Mutex`.
pub type ThreadSafe<T> = Arc<Mutex<T>>;

/// A thread-safe reader-writer wrapper for read-heavy shared state.
pub type ThreadSafeRw<T> = Arc<RwLock<T>>;

/// Create a new `ThreadSafe<T>` from a value.
pub fn thread_safe<T>(value: T) -> ThreadSafe<T> {
    Arc::new(Mutex::new(value))
}

/// Create a new `ThreadSafeRw<T>` from a value.
pub fn thread_safe_rw<T>(value: T) -> ThreadSafeRw<T> {
    Arc::new(RwLock::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::AttrMap;

    #[test]
    fn test_shared_interior_mutability() {
        let state = shared(0i32);
        *state.borrow_mut() += 1;
        assert_eq!(*state.borrow(), 1);
    }

    #[test]
    fn test_thread_safe_map_across_threads() {
        let map: ThreadSafe<AttrMap> = thread_safe(AttrMap::new());

        let writer = Arc::clone(&map);
        let handle = std::thread::spawn(move || {
            writer.lock().set("from_thread", true);
        });
        handle.join().unwrap();

        assert_eq!(map.lock().get_bool("from_thread"), Some(true));
    }
}

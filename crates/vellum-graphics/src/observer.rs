use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::object::GraphicsObject;

/// Receives change notifications from a [`GraphicsObject`].
///
/// Fired after any mutation that affects the object's geometry or position.
/// Implementations must not assume the source is still a member of anything
/// by the time the callback runs.
pub trait GraphicsObserver: Send + Sync {
    fn graphic_changed(&self, changed: &dyn GraphicsObject);
}

/// Observer registrations held by a drawable.
///
/// Entries are weak: registering never keeps an observer alive, and dead
/// entries are pruned on the next notification. Identity is the observer's
/// address, so registering the same observer twice is a no-op.
#[derive(Default)]
pub struct ObserverSet {
    entries: Mutex<Vec<Weak<dyn GraphicsObserver>>>,
}

impl ObserverSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `observer`. Returns `false` if it was already registered.
    pub fn add(&self, observer: Weak<dyn GraphicsObserver>) -> bool {
        let mut entries = self.entries.lock();
        if entries.iter().any(|e| same_observer(e, &observer)) {
            return false;
        }
        entries.push(observer);
        true
    }

    /// Deregisters `observer`. Returns `false` if it was not registered.
    pub fn remove(&self, observer: &Weak<dyn GraphicsObserver>) -> bool {
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|e| !same_observer(e, observer));
        entries.len() != before
    }

    pub fn contains(&self, observer: &Weak<dyn GraphicsObserver>) -> bool {
        self.entries.lock().iter().any(|e| same_observer(e, observer))
    }

    /// Number of registered observers that are still alive.
    pub fn len(&self) -> usize {
        self.entries.lock().iter().filter(|e| e.strong_count() > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Calls every live observer with `source`.
    ///
    /// The registration lock is released before any callback runs, so
    /// observers may freely add or remove registrations on `source`.
    pub fn notify(&self, source: &dyn GraphicsObject) {
        let live: Vec<Arc<dyn GraphicsObserver>> = {
            let mut entries = self.entries.lock();
            entries.retain(|e| e.strong_count() > 0);
            entries.iter().filter_map(Weak::upgrade).collect()
        };

        log::trace!("notifying {} observer(s)", live.len());
        for observer in live {
            observer.graphic_changed(source);
        }
    }
}

impl core::fmt::Debug for ObserverSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ObserverSet").field("len", &self.len()).finish()
    }
}

#[inline]
fn same_observer(a: &Weak<dyn GraphicsObserver>, b: &Weak<dyn GraphicsObserver>) -> bool {
    core::ptr::addr_eq(a.as_ptr(), b.as_ptr())
}

//! Lifecycle guard for platform viewport observers.

/// A platform observer watching a single element.
pub trait ViewportObserver {
    fn observe(&self);
    fn disconnect(&self);
}

/// Starts observing on creation and disconnects exactly once, either when
/// released after a trigger-once reveal or when dropped on unmount.
pub struct ObservationHandle<O: ViewportObserver> {
    observer: O,
    active: bool,
}

impl<O: ViewportObserver> ObservationHandle<O> {
    pub fn start(observer: O) -> Self {
        observer.observe();
        ObservationHandle { observer, active: true }
    }

    pub fn release(&mut self) {
        if self.active {
            self.active = false;
            self.observer.disconnect();
        }
    }
}

impl<O: ViewportObserver> Drop for ObservationHandle<O> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::motion::visibility::{ObserveOptions, VisibilityTracker};

    #[derive(Default)]
    struct Ledger {
        created: Cell<usize>,
        disconnected: Cell<usize>,
    }

    struct CountingObserver(Rc<Ledger>);

    impl CountingObserver {
        fn new(ledger: &Rc<Ledger>) -> Self {
            ledger.created.set(ledger.created.get() + 1);
            CountingObserver(Rc::clone(ledger))
        }
    }

    impl ViewportObserver for CountingObserver {
        fn observe(&self) {}

        fn disconnect(&self) {
            self.0.disconnected.set(self.0.disconnected.get() + 1);
        }
    }

    #[test]
    fn unmount_disconnects_every_observer() {
        let ledger = Rc::new(Ledger::default());
        let handles: Vec<_> = (0..5)
            .map(|_| ObservationHandle::start(CountingObserver::new(&ledger)))
            .collect();
        assert_eq!(ledger.disconnected.get(), 0);

        drop(handles);
        assert_eq!(ledger.created.get(), 5);
        assert_eq!(ledger.disconnected.get(), ledger.created.get());
    }

    #[test]
    fn trigger_once_release_is_not_repeated_on_unmount() {
        let ledger = Rc::new(Ledger::default());
        let mut tracker = VisibilityTracker::new(&ObserveOptions::default());
        let mut handle = ObservationHandle::start(CountingObserver::new(&ledger));

        if tracker.observe(1.0, true).disconnect {
            handle.release();
        }
        assert_eq!(ledger.disconnected.get(), 1);
        handle.release();
        assert_eq!(ledger.disconnected.get(), 1);

        drop(handle);
        assert_eq!(ledger.disconnected.get(), 1);
        assert_eq!(ledger.created.get(), 1);
    }
}

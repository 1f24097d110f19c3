use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Set while a store call is in flight.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// `None` if already busy. The flag clears when the guard drops.
    pub fn enter(&self) -> Option<BusyGuard> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard(Arc::clone(&self.0)))
    }
}

#[must_use]
#[derive(Debug)]
pub struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_enter_is_refused_until_guard_drops() {
        let flag = BusyFlag::default();
        let guard = flag.enter().unwrap();
        assert!(flag.is_busy());
        assert!(flag.enter().is_none());

        drop(guard);
        assert!(!flag.is_busy());
        assert!(flag.enter().is_some());
    }
}

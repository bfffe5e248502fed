//! Page-level pointer capture.
//!
//! While a column drag is running, pointer moves and releases anywhere on the
//! screen belong to it, not to whatever sits under the pointer. The host asks
//! [`PointerCapture::is_captured`] to decide where to route those events.
//! Holding the capture is represented by a [`CaptureGuard`]; dropping or
//! releasing the guard unregisters it, exactly once.

use std::cell::RefCell;
use std::rc::Rc;

/// Shared page-level capture slot. Clones refer to the same slot.
#[derive(Debug, Clone, Default)]
pub struct PointerCapture {
    holder: Rc<RefCell<Option<String>>>,
}

impl PointerCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `owner` as the receiver of page-wide pointer events.
    ///
    /// Returns `None` if someone else already holds the capture.
    pub fn acquire(&self, owner: impl Into<String>) -> Option<CaptureGuard> {
        let mut holder = self.holder.borrow_mut();
        if let Some(current) = holder.as_deref() {
            log::debug!("[capture] already held by {}", current);
            return None;
        }
        let owner = owner.into();
        log::trace!("[capture] acquired by {}", owner);
        *holder = Some(owner);
        Some(CaptureGuard {
            holder: Rc::clone(&self.holder),
        })
    }

    pub fn is_captured(&self) -> bool {
        self.holder.borrow().is_some()
    }

    /// Current holder of the capture.
    pub fn owner(&self) -> Option<String> {
        self.holder.borrow().clone()
    }
}

/// Disposable registration returned by [`PointerCapture::acquire`].
#[derive(Debug)]
#[must_use = "dropping the guard releases the capture immediately"]
pub struct CaptureGuard {
    holder: Rc<RefCell<Option<String>>>,
}

impl CaptureGuard {
    /// Release the capture now.
    pub fn release(self) {}
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        if let Some(owner) = self.holder.borrow_mut().take() {
            log::trace!("[capture] released by {}", owner);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_is_refused_until_release() {
        let capture = PointerCapture::new();
        let guard = capture.acquire("a").unwrap();
        assert!(capture.acquire("b").is_none());
        assert_eq!(capture.owner().as_deref(), Some("a"));

        guard.release();
        assert!(!capture.is_captured());
        assert!(capture.acquire("b").is_some());
    }

    #[test]
    fn dropping_the_guard_releases() {
        let capture = PointerCapture::new();
        {
            let _guard = capture.acquire("a").unwrap();
            assert!(capture.clone().is_captured());
        }
        assert!(!capture.is_captured());
    }
}

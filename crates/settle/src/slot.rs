//! Stable wrapper identity across reactive re-renders
//!
//! Reactive frameworks re-run setup logic on every render. Rebuilding a
//! [`Debouncer`] each time would silently reset its in-flight timer, so the
//! owning component keeps one [`DebounceSlot`] and feeds it the (function,
//! delay) pair each render: the slot hands back the existing wrapper while
//! the inputs are unchanged and rebuilds only when they differ.

use std::time::Duration;

use tracing::debug;

use crate::debouncer::{DebounceFn, Debouncer};
use crate::error::DebounceError;

/// Memoization cell for a [`Debouncer`], keyed by function identity and delay.
///
/// Function identity is `Arc` pointer identity: pass clones of the same
/// [`DebounceFn`] to keep the wrapper (and any pending timer) alive across
/// renders. A freshly allocated closure counts as a changed input and
/// triggers a rebuild, the same way a non-memoized closure does in a
/// reactive UI framework.
pub struct DebounceSlot<A, R> {
    inner: Option<Debouncer<A, R>>,
}

impl<A, R> DebounceSlot<A, R>
where
    A: Send + 'static,
    R: Send + 'static,
{
    /// Return the wrapper for `(func, delay)`, building it if needed.
    ///
    /// Unchanged inputs return the existing wrapper untouched: an in-flight
    /// pending timer is neither reset nor duplicated. Changed inputs drop
    /// the old wrapper, which cancels its pending timer exactly once, and
    /// build a fresh one.
    pub fn obtain(
        &mut self,
        func: DebounceFn<A, R>,
        delay: Duration,
    ) -> Result<&mut Debouncer<A, R>, DebounceError> {
        let reuse = self
            .inner
            .as_ref()
            .is_some_and(|d| d.shares_func(&func) && d.delay() == delay);

        if !reuse {
            // Built before the old wrapper is touched, so a construction
            // error leaves the slot as it was.
            let debouncer = Debouncer::with_shared(func, delay)?;
            if self.inner.is_some() {
                debug!("debounce inputs changed, rebuilding wrapper");
            }
            // Replacing the old wrapper drops it, canceling its pending timer.
            return Ok(self.inner.insert(debouncer));
        }

        match self.inner.as_mut() {
            Some(debouncer) => Ok(debouncer),
            None => unreachable!("reuse implies a populated slot"),
        }
    }
}

impl<A, R> DebounceSlot<A, R> {
    /// Create an empty slot. Store one per owning component.
    pub const fn new() -> Self {
        Self { inner: None }
    }

    /// Lifecycle teardown: drop the wrapper, canceling any pending timer.
    ///
    /// Wire this to the host's unmount/cleanup callback. Idempotent; the
    /// slot can be fed again afterwards, which builds a fresh wrapper.
    pub fn dispose(&mut self) {
        self.inner = None;
    }

    /// Whether the current wrapper has an execution scheduled.
    pub fn is_pending(&self) -> bool {
        self.inner.as_ref().is_some_and(Debouncer::is_pending)
    }
}

impl<A, R> Default for DebounceSlot<A, R> {
    fn default() -> Self {
        Self::new()
    }
}

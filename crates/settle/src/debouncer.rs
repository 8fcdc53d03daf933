//! Core debouncing wrapper
//!
//! A [`Debouncer`] holds the wrapped function, its fixed delay, and at most
//! one pending-timer handle. Each call aborts the previous pending execution
//! and arms a fresh one, so within a burst only the last call ever fires.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::trace;

use crate::error::DebounceError;
use crate::future::DebounceFuture;

/// Shared handle to a wrapped synchronous function.
///
/// Functions of arity N pass their arguments as a single value (a tuple if
/// needed). Holding on to the `Arc` is what gives the function a stable
/// identity across reactive re-renders; see [`DebounceSlot`](crate::DebounceSlot).
pub type DebounceFn<A, R> = Arc<dyn Fn(A) -> R + Send + Sync>;

/// Debouncing wrapper around a synchronous function.
///
/// At most one execution is pending at any instant. The pending execution is
/// replaced by each new [`call`](Self::call) and canceled by
/// [`dispose`](Self::dispose); a canceled execution never invokes the
/// function and never resolves its future.
pub struct Debouncer<A, R> {
    func: DebounceFn<A, R>,
    delay: Duration,
    runtime: Handle,
    /// At most one live pending-timer handle per instance.
    pending: Option<JoinHandle<()>>,
}

impl<A, R> Debouncer<A, R>
where
    A: Send + 'static,
    R: Send + 'static,
{
    /// Wrap `func` with a debounce delay.
    ///
    /// A zero delay is legal and fires on the next timer tick. (`Duration`
    /// is unsigned, so a negative delay is unrepresentable.)
    ///
    /// Returns an error if called outside a tokio runtime: the debouncer
    /// captures the current runtime handle to schedule executions on.
    pub fn new<F>(func: F, delay: Duration) -> Result<Self, DebounceError>
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        Self::with_shared(Arc::new(func), delay)
    }

    /// Like [`new`](Self::new), but takes an already-shared function so the
    /// caller can keep a handle for identity comparison across re-renders.
    pub fn with_shared(func: DebounceFn<A, R>, delay: Duration) -> Result<Self, DebounceError> {
        let runtime = Handle::try_current()?;
        Ok(Self {
            func,
            delay,
            runtime,
            pending: None,
        })
    }

    /// Schedule a debounced invocation with `args`.
    ///
    /// Cancels any still-pending execution, arms a fresh timer, and returns
    /// this call's future synchronously. The future resolves with
    /// `func(args)` once `delay` elapses with no newer call; if a newer call
    /// arrives first, this future is abandoned and never resolves.
    ///
    /// A panic inside `func` unwinds the background task: the future is then
    /// abandoned like a superseded call, and the panic does not propagate to
    /// the caller.
    pub fn call(&mut self, args: A) -> DebounceFuture<R> {
        let (tx, rx) = oneshot::channel();

        if let Some(previous) = self.pending.take() {
            previous.abort();
            trace!("superseded pending debounced execution");
        }

        let func = Arc::clone(&self.func);
        let delay = self.delay;
        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            // The caller may have dropped the future; the result is simply
            // discarded in that case.
            let _ = tx.send(func(args));
        }));
        trace!("armed debounce timer for {:?}", delay);

        DebounceFuture::new(rx)
    }
}

impl<A, R> Debouncer<A, R> {
    /// Cancel any pending execution.
    ///
    /// The canceled call's future never resolves. Calling this with nothing
    /// pending is a no-op, and repeated calls are harmless. Wire this to the
    /// owning scope's teardown (component unmount, dependency change).
    pub fn dispose(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
            trace!("canceled pending debounced execution on dispose");
        }
    }

    /// The quiet-period threshold this wrapper was built with.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether an execution is scheduled and has not yet fired.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub(crate) fn shares_func(&self, func: &DebounceFn<A, R>) -> bool {
        Arc::ptr_eq(&self.func, func)
    }
}

impl<A, R> Drop for Debouncer<A, R> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<A, R> fmt::Debug for Debouncer<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("pending", &self.is_pending())
            .finish_non_exhaustive()
    }
}

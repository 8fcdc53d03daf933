//! Single-resolution future returned per debounced call

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;

/// The result of one [`Debouncer::call`](crate::Debouncer::call).
///
/// Resolves exactly once, with the wrapped function's return value, when the
/// delay elapses with no newer call — or never, if this call was superseded
/// or the debouncer was disposed. An abandoned future stays pending forever;
/// it is not rejected and carries no error. Await it directly only if it is
/// known to be the most recent call, or guard the await with a timeout.
pub struct DebounceFuture<R> {
    state: State<R>,
}

enum State<R> {
    /// Timer not yet fired; the receiver is live.
    Waiting(oneshot::Receiver<R>),
    /// Superseded or disposed; the value will never arrive.
    Abandoned,
    /// Value already delivered.
    Resolved,
}

impl<R> DebounceFuture<R> {
    pub(crate) fn new(rx: oneshot::Receiver<R>) -> Self {
        Self {
            state: State::Waiting(rx),
        }
    }

    /// Whether a poll has observed that this call was superseded or disposed.
    ///
    /// Abandonment is only detected by polling; a freshly canceled call still
    /// reports `false` until the future is polled once more.
    pub fn is_abandoned(&self) -> bool {
        matches!(self.state, State::Abandoned)
    }
}

impl<R> Future for DebounceFuture<R> {
    type Output = R;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<R> {
        let this = self.get_mut();
        match &mut this.state {
            State::Waiting(rx) => match Pin::new(rx).poll(cx) {
                Poll::Ready(Ok(value)) => {
                    this.state = State::Resolved;
                    Poll::Ready(value)
                }
                // Sender dropped: the scheduled execution was canceled.
                // Park forever instead of erroring; see crate docs.
                Poll::Ready(Err(_)) => {
                    this.state = State::Abandoned;
                    Poll::Pending
                }
                Poll::Pending => Poll::Pending,
            },
            State::Abandoned | State::Resolved => Poll::Pending,
        }
    }
}

impl<R> std::fmt::Debug for DebounceFuture<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match self.state {
            State::Waiting(_) => "waiting",
            State::Abandoned => "abandoned",
            State::Resolved => "resolved",
        };
        f.debug_struct("DebounceFuture").field("state", &state).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::{pin_mut, poll};

    #[tokio::test]
    async fn resolves_with_sent_value() {
        let (tx, rx) = oneshot::channel();
        let fut = DebounceFuture::new(rx);

        tx.send(7).unwrap();
        assert_eq!(fut.await, 7);
    }

    #[tokio::test]
    async fn dropped_sender_parks_forever() {
        let (tx, rx) = oneshot::channel::<u32>();
        drop(tx);

        let fut = DebounceFuture::new(rx);
        pin_mut!(fut);

        assert!(poll!(&mut fut).is_pending());
        assert!(fut.is_abandoned());

        // Subsequent polls must stay pending without touching the closed
        // channel again.
        assert!(poll!(&mut fut).is_pending());
        assert!(poll!(&mut fut).is_pending());
    }

    #[tokio::test]
    async fn pending_until_value_arrives() {
        let (tx, rx) = oneshot::channel();
        let fut = DebounceFuture::new(rx);
        pin_mut!(fut);

        assert!(poll!(&mut fut).is_pending());
        assert!(!fut.is_abandoned());

        tx.send("done").unwrap();
        assert_eq!(fut.await, "done");
    }
}

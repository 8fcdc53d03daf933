//! Trailing-edge debouncing for reactive UIs
//!
//! This crate provides a single utility: a debouncing wrapper around a
//! synchronous function, with:
//! - Burst coalescing (last call wins, earlier calls are superseded)
//! - Per-instance delay, fixed at construction
//! - Lifecycle-bound teardown that cancels any pending execution
//! - Stable wrapper identity across reactive re-renders via [`DebounceSlot`]
//!
//! A [`Debouncer`] schedules at most one pending execution at a time. Each
//! call to [`Debouncer::call`] re-arms the timer and returns a
//! [`DebounceFuture`] that resolves with the wrapped function's return value
//! once the quiet period elapses.
//!
//! # Abandoned futures
//!
//! A call that is superseded by a newer call within the delay window, or
//! canceled by [`Debouncer::dispose`], produces a future that **never
//! resolves**. It is not rejected and carries no error; it simply stays
//! pending forever. Callers that await a debounced result must either await
//! only the most recent call's future or guard the await with a timeout.
//! This mirrors the behavior of the debounce-hook pattern this crate is
//! modeled on and is deliberate.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use settle::Debouncer;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), settle::DebounceError> {
//!     let mut search = Debouncer::new(
//!         |query: String| query.len(),
//!         Duration::from_millis(50),
//!     )?;
//!
//!     // Only the last call inside the delay window fires.
//!     let _stale = search.call("rus".to_string());
//!     let fresh = search.call("rust".to_string());
//!
//!     assert_eq!(fresh.await, 4);
//!     search.dispose();
//!     Ok(())
//! }
//! ```

pub mod debouncer;
pub mod error;
pub mod future;
pub mod slot;

pub use debouncer::{DebounceFn, Debouncer};
pub use error::DebounceError;
pub use future::DebounceFuture;
pub use slot::DebounceSlot;

//! Error types for debouncer construction

use thiserror::Error;
use tokio::runtime::TryCurrentError;

/// Errors surfaced synchronously at construction.
///
/// Supersession and disposal are not errors: both leave the affected call's
/// future permanently unresolved (see the crate docs).
#[derive(Debug, Error)]
pub enum DebounceError {
    /// The constructor was called outside a tokio runtime. The debouncer
    /// needs a reactor to schedule its delayed executions on.
    #[error("debouncer created outside a tokio runtime context")]
    NoRuntime(#[from] TryCurrentError),
}

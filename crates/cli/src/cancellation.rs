//! CLI cancellation utilities.
//!
//! Responsibilities:
//! - Provide a lightweight cancellation token that can be cloned and passed
//!   through command handlers and the backup runner.
//! - Define a single, recognizable `Cancelled` error used to signal user-initiated
//!   cancellation (Ctrl+C/SIGINT) through `anyhow::Result`.
//! - Provide the `cancellable!` macro racing a future against the token.
//!
//! Does NOT handle:
//! - Installing signal handlers (done in `main`).
//! - Exit code selection (see `error::ExitCode::Interrupted`).
//!
//! Invariants:
//! - Once cancelled, token remains cancelled forever.

use std::fmt;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tokio::sync::Notify;

/// Cancellation token usable across async tasks.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl CancellationToken {
    /// Create a new, non-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel token (idempotent).
    pub fn cancel(&self) {
        let was_cancelled = self.cancelled.swap(true, Ordering::SeqCst);
        if !was_cancelled {
            self.notify.notify_waiters();
        }
    }

    /// True if cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Await cancellation.
    ///
    /// The `notified()` future is created before the flag is checked so a
    /// concurrent `cancel()` cannot be missed.
    pub async fn cancelled(&self) {
        let notified = self.notify.notified();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }
}

/// Marker error used to indicate user-driven cancellation.
#[derive(Debug, Clone, Copy)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cancelled")
    }
}

impl std::error::Error for Cancelled {}

/// Returns true if this anyhow error represents a cancellation.
pub fn is_cancelled_error(err: &anyhow::Error) -> bool {
    err.is::<Cancelled>()
}

/// Print standard cancellation message to stderr.
pub fn print_cancelled_message() {
    eprintln!("^C\nOperation cancelled by user");
}

/// Await a client future unless the token fires first.
///
/// Evaluates to `anyhow::Result<T>`: the future's error converted with `?`
/// semantics, or [`Cancelled`] when the token wins the race.
macro_rules! cancellable {
    ($fut:expr, $cancel:expr) => {{
        tokio::select! {
            res = $fut => res.map_err(anyhow::Error::from),
            _ = $cancel.cancelled() => Err(anyhow::Error::new($crate::cancellation::Cancelled)),
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_cancel_wakes_waiters() {
        let token = CancellationToken::new();
        let waiter = token.clone();
        let handle = tokio::spawn(async move { waiter.cancelled().await });

        token.cancel();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("waiter should wake")
            .unwrap();
        assert!(token.is_cancelled());
    }

    #[tokio::test]
    async fn test_cancelled_returns_immediately_once_cancelled() {
        let token = CancellationToken::new();
        token.cancel();
        token.cancel();
        tokio::time::timeout(Duration::from_millis(100), token.cancelled())
            .await
            .expect("already cancelled token should not block");
    }

    #[tokio::test]
    async fn test_cancellable_macro_prefers_cancellation() {
        let token = CancellationToken::new();
        token.cancel();

        let result: anyhow::Result<()> = cancellable!(
            async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok::<(), std::io::Error>(())
            },
            token
        );

        let err = result.unwrap_err();
        assert!(is_cancelled_error(&err));
    }

    #[tokio::test]
    async fn test_cancellable_macro_passes_result_through() {
        let token = CancellationToken::new();
        let result: anyhow::Result<u8> =
            cancellable!(async { Ok::<u8, std::io::Error>(7) }, token);
        assert_eq!(result.unwrap(), 7);
    }
}

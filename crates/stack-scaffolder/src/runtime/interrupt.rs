//! Routing Ctrl+C to the external command that is currently running
//!
//! The binary's signal handler calls [`Interrupt::interrupt`]. While a command is in
//! flight the signal cancels only that command, which then fails like any other
//! best-effort step. Outside of a command the handler falls back to exiting.

use std::sync::{Arc, Mutex, MutexGuard};
use tokio_util::sync::CancellationToken;

/// Shared handle between the signal handler and [`SystemRunner`](super::SystemRunner)
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    current: Arc<Mutex<Option<CancellationToken>>>,
}

impl Interrupt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the running command, if any.
    ///
    /// Returns `false` when no command was running, so the caller can exit instead.
    pub fn interrupt(&self) -> bool {
        match self.slot().as_ref() {
            Some(token) => {
                token.cancel();
                true
            }
            None => false,
        }
    }

    /// Whether a command is currently registered
    pub fn is_armed(&self) -> bool {
        self.slot().is_some()
    }

    /// Register a command; it stays interruptible until the guard is dropped.
    pub(crate) fn arm(&self) -> ArmedCommand {
        let token = CancellationToken::new();
        *self.slot() = Some(token.clone());
        ArmedCommand {
            interrupt: self.clone(),
            token,
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<CancellationToken>> {
        self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// A command registered with an [`Interrupt`]
pub(crate) struct ArmedCommand {
    interrupt: Interrupt,
    token: CancellationToken,
}

impl ArmedCommand {
    pub(crate) async fn cancelled(&self) {
        self.token.cancelled().await
    }
}

impl Drop for ArmedCommand {
    fn drop(&mut self) {
        *self.interrupt.slot() = None;
    }
}

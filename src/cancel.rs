use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

/// Shared flag that governs a whole collection batch.
///
/// Clones observe the same flag, so a signal handler can hold one clone while the
/// collector's workers poll another.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_canceled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Cancel this token on Ctrl-C, and on SIGTERM/SIGHUP where supported.
    ///
    /// Only one handler can be installed per process.
    ///
    /// # Errors
    /// Returns an error if a handler is already installed or the signal
    /// cannot be hooked.
    pub fn cancel_on_signal(&self) -> Result<(), ctrlc::Error> {
        let token = self.clone();
        ctrlc::set_handler(move || {
            debug!("termination signal received");
            token.cancel();
        })
    }
}

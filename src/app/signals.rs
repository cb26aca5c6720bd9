//! OS signal handling
//!
//! Signal listeners run as tokio tasks and only raise a pending flag. The
//! clock loop drains the flag at the top of each tick, so render state is
//! never touched from the listener side.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;

/// Pending signal events shared between listeners and the clock loop
#[derive(Debug, Clone, Default)]
pub struct SignalFlags {
    terminate: Arc<AtomicBool>,
}

impl SignalFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the clock loop to stop at its next tick
    pub fn request_terminate(&self) {
        self.terminate.store(true, Ordering::SeqCst);
    }

    /// Consume a pending termination request
    pub fn take_terminate(&self) -> bool {
        self.terminate.swap(false, Ordering::SeqCst)
    }

    /// Install SIGINT/SIGTERM listeners on the current tokio runtime
    #[cfg(unix)]
    pub fn listen(&self) -> Result<()> {
        use anyhow::Context;
        use tokio::signal::unix::{signal, SignalKind};

        for (kind, name) in [
            (SignalKind::interrupt(), "SIGINT"),
            (SignalKind::terminate(), "SIGTERM"),
        ] {
            let mut stream = signal(kind)
                .with_context(|| format!("Failed to install {} handler", name))?;
            let flags = self.clone();
            tokio::spawn(async move {
                while stream.recv().await.is_some() {
                    tracing::info!("Received {}, stopping", name);
                    flags.request_terminate();
                }
            });
        }
        Ok(())
    }

    /// Install a Ctrl+C listener on the current tokio runtime
    #[cfg(not(unix))]
    pub fn listen(&self) -> Result<()> {
        let flags = self.clone();
        tokio::spawn(async move {
            while tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Received Ctrl+C, stopping");
                flags.request_terminate();
            }
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_terminate_consumes_flag() {
        let flags = SignalFlags::new();
        assert!(!flags.take_terminate());
        flags.request_terminate();
        assert!(flags.take_terminate());
        assert!(!flags.take_terminate());
    }

    #[test]
    fn test_clones_share_state() {
        let flags = SignalFlags::new();
        let listener = flags.clone();
        listener.request_terminate();
        assert!(flags.take_terminate());
    }

    #[tokio::test]
    async fn test_listen_installs_handlers() {
        let flags = SignalFlags::new();
        assert!(flags.listen().is_ok());
    }
}

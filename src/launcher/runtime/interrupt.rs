//! Operator interrupt (Ctrl-C) listener scoped to the server wait.
use std::io;

/// Once armed, SIGINT no longer terminates the launcher; it resolves [`triggered`].
///
/// [`triggered`]: InterruptListener::triggered
pub struct InterruptListener {
    #[cfg(unix)]
    signal: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl InterruptListener {
    /// Install the handler immediately so an interrupt arriving right after spawn is not lost.
    pub fn arm() -> io::Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};

        let signal = signal(SignalKind::interrupt())?;
        Ok(Self { signal })
    }

    pub async fn triggered(mut self) {
        if self.signal.recv().await.is_none() {
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
impl InterruptListener {
    pub fn arm() -> io::Result<Self> {
        Ok(Self {})
    }

    pub async fn triggered(self) {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

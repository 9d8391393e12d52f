//! Shutdown coordination for the prober.
//!
//! `Shutdown` owns the trigger side; each long-running task holds a
//! `ShutdownListener`. A listener stays fired once it has seen the trigger,
//! so the scheduler can await it from several `select!` points.

use tokio::sync::broadcast;

use crate::lifecycle::signals;

pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    pub fn listener(&self) -> ShutdownListener {
        ShutdownListener {
            rx: self.tx.subscribe(),
            fired: false,
        }
    }

    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Fire on the first SIGINT/SIGTERM. Listeners must be taken before
    /// the signal can arrive.
    pub fn trigger_on_signals(&self) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            signals::wait_for_termination().await;
            let _ = tx.send(());
        });
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ShutdownListener {
    rx: broadcast::Receiver<()>,
    fired: bool,
}

impl ShutdownListener {
    /// Resolve once shutdown was triggered or the coordinator was dropped.
    pub async fn wait(&mut self) {
        if !self.fired {
            // Closed and Lagged both mean the trigger already happened.
            let _ = self.rx.recv().await;
            self.fired = true;
        }
    }

    pub fn is_fired(&self) -> bool {
        self.fired
    }
}

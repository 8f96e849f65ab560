use crate::services::CatalogService;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::oneshot;

/// Outcome of a single liveness probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Ok,
    Ko,
    Timeout,
}

impl Verdict {
    pub fn is_ok(self) -> bool {
        matches!(self, Verdict::Ok)
    }
}

/// One-shot verdict slot shared by the ping task and the budget timer.
///
/// Both completion sources race; whichever loses finds the sender already
/// taken and `complete` becomes a silent no-op. At most one verdict is ever
/// written per probe.
struct Completion {
    slot: Mutex<Option<oneshot::Sender<Verdict>>>,
}

impl Completion {
    fn new(tx: oneshot::Sender<Verdict>) -> Self {
        Self {
            slot: Mutex::new(Some(tx)),
        }
    }

    fn complete(&self, verdict: Verdict) {
        let mut slot = match self.slot.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(tx) = slot.take() {
            // The receiver may already be gone if the probe was abandoned.
            let _ = tx.send(verdict);
        }
    }
}

/// Drives the facade's `ping` under a bounded time budget and produces a
/// single pass/fail verdict per invocation.
#[derive(Clone)]
pub struct HealthAggregator {
    budget: Duration,
}

impl HealthAggregator {
    pub fn new(budget: Duration) -> Self {
        Self { budget }
    }

    pub async fn check(&self, service: Arc<dyn CatalogService>) -> Verdict {
        let (tx, rx) = oneshot::channel();
        let completion = Arc::new(Completion::new(tx));

        let ping = Arc::clone(&completion);
        tokio::spawn(async move {
            match service.ping().await {
                Ok(_) => ping.complete(Verdict::Ok),
                Err(cause) => {
                    tracing::warn!(%cause, "liveness ping failed");
                    ping.complete(Verdict::Ko);
                }
            }
        });

        let timer = Arc::clone(&completion);
        let budget = self.budget;
        tokio::spawn(async move {
            tokio::time::sleep(budget).await;
            timer.complete(Verdict::Timeout);
        });

        // The timer task guarantees a verdict arrives by the budget; a
        // recv error would mean both senders vanished, which reads as a
        // timed-out probe.
        rx.await.unwrap_or(Verdict::Timeout)
    }
}

use crate::domain::model::{CallFailure, Merchant, Outcome, ProductRequest};
use crate::domain::ports::OfferCaller;
use futures::future::join_all;
use std::collections::HashSet;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::time::timeout;

/// Fan-out limits consumed at construction. `max_in_flight` bounds the
/// concurrent outbound calls, `queue_capacity` bounds how many more may
/// wait for a slot; anything beyond both is rejected without a call.
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    pub max_in_flight: usize,
    pub queue_capacity: usize,
    pub call_timeout: Duration,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            max_in_flight: 8,
            queue_capacity: 32,
            call_timeout: Duration::from_secs(10),
        }
    }
}

/// Scatter-gather over merchant endpoints: one offer call per merchant,
/// all concurrent, full-barrier join. Individual failures are data, never
/// errors, so the dispatch itself cannot fail.
pub struct Dispatcher<C: OfferCaller> {
    caller: C,
    // admission = execution slots + queue slots; shared across requests
    admission: Semaphore,
    execution: Semaphore,
    call_timeout: Duration,
}

impl<C: OfferCaller> Dispatcher<C> {
    pub fn new(caller: C, config: DispatcherConfig) -> Self {
        Self {
            caller,
            admission: Semaphore::new(config.max_in_flight + config.queue_capacity),
            execution: Semaphore::new(config.max_in_flight),
            call_timeout: config.call_timeout,
        }
    }

    /// Sends `request` to every distinct merchant concurrently and waits for
    /// all of them. Returns exactly one outcome per distinct merchant, in
    /// the deduplicated input order.
    pub async fn dispatch(&self, request: &ProductRequest, merchants: &[Merchant]) -> Vec<Outcome> {
        let mut seen = HashSet::new();
        let targets: Vec<&Merchant> = merchants.iter().filter(|m| seen.insert(*m)).collect();

        if targets.is_empty() {
            tracing::debug!("Product request {} has no merchants to contact", request.id);
            return Vec::new();
        }

        tracing::debug!(
            "Dispatching product request {} to {} merchants",
            request.id,
            targets.len()
        );

        let calls = targets.into_iter().map(|merchant| self.bounded_call(request, merchant));
        let outcomes = join_all(calls).await;

        tracing::debug!(
            "All merchant calls for product request {} completed ({} outcomes)",
            request.id,
            outcomes.len()
        );

        outcomes
    }

    async fn bounded_call(&self, request: &ProductRequest, merchant: &Merchant) -> Outcome {
        // Fail fast when both the execution slots and the wait queue are full.
        let _admitted = match self.admission.try_acquire() {
            Ok(permit) => permit,
            Err(_) => {
                tracing::warn!(
                    "Rejecting call to merchant {}: dispatch queue full",
                    merchant.api_url
                );
                return Outcome::Failed(CallFailure::Rejected);
            }
        };

        let _slot = match self.execution.acquire().await {
            Ok(permit) => permit,
            // acquire only errors if the semaphore is closed, which never happens here
            Err(_) => return Outcome::Failed(CallFailure::Rejected),
        };

        match timeout(self.call_timeout, self.caller.call(request, merchant)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                tracing::warn!(
                    "Call to merchant {} timed out after {:?}",
                    merchant.api_url,
                    self.call_timeout
                );
                Outcome::Failed(CallFailure::Timeout(self.call_timeout))
            }
        }
    }
}

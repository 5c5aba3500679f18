use crate::http_client::{HttpClient, HyperHttpClient};
use futures::future::join_all;
use log::debug;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio::time::timeout;

/// Outcome of one stress batch. Each slot holds the response body of a
/// request that completed within the timeout, or `None` for one that did
/// not.
#[derive(Debug)]
pub struct StressReport {
    results: Vec<Option<Vec<u8>>>,
}

impl StressReport {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn completed(&self) -> usize {
        self.results.iter().filter(|result| result.is_some()).count()
    }

    pub fn absent(&self) -> usize {
        self.total() - self.completed()
    }

    pub fn all_completed(&self) -> bool {
        self.results.iter().all(|result| result.is_some())
    }

    pub fn results(&self) -> &[Option<Vec<u8>>] {
        &self.results
    }
}

/// Issues a fixed number of concurrent GET requests for one URL over a
/// single shared transport and gathers every outcome.
#[derive(Debug)]
pub struct StressRunner {
    amount: usize,
    timeout: Duration,
    transport: Arc<dyn HttpClient + Send + Sync>,
}

impl StressRunner {
    pub fn new(amount: usize, timeout: Duration) -> Self {
        Self {
            amount,
            timeout,
            transport: Arc::new(HyperHttpClient::new()),
        }
    }

    /// Use the given transport instead of the default hyper client.
    pub fn with_transport(mut self, transport: Arc<dyn HttpClient + Send + Sync>) -> Self {
        self.transport = transport;
        self
    }

    /// Dispatch all requests concurrently and await every completion. A
    /// request that exceeds the timeout yields an absent slot; any other
    /// failure is folded into the same marker rather than failing the
    /// batch.
    pub async fn run(&self, url: &str) -> StressReport {
        let requests = (0..self.amount).map(|_| self.single_get(url));

        StressReport {
            results: join_all(requests).await,
        }
    }

    /// Blocking entry point for non-async callers; owns its runtime.
    pub fn run_blocking(&self, url: &str) -> StressReport {
        Runtime::new()
            .expect("couldn't create a tokio runtime")
            .block_on(self.run(url))
    }

    async fn single_get(&self, url: &str) -> Option<Vec<u8>> {
        match timeout(self.timeout, self.transport.get(url)).await {
            Ok(Ok(body)) => Some(body),
            Ok(Err(e)) => {
                debug!("stress request failed, marking it as timed out: {}", e);
                None
            }
            Err(_) => {
                debug!("stress request timed out after {:?}", self.timeout);
                None
            }
        }
    }
}

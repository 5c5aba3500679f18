use crate::error::Error;
use async_trait::async_trait;
use hyper::{body, client::HttpConnector, Client, Uri};
use hyper_tls::HttpsConnector;
use std::fmt::Debug;
use tokio::sync::Semaphore;

// Cap on concurrently open sockets; larger batches queue on the semaphore
// instead of exhausting file descriptors.
const MAX_IN_FLIGHT_REQUESTS: usize = 100;

/// Transport used by the stress runner. One instance is shared across a
/// whole batch, so the implementation owns whatever connection pooling it
/// needs.
#[async_trait]
pub trait HttpClient: Debug {
    async fn get(&self, url: &str) -> Result<Vec<u8>, Error>;
}

/// HTTP transport backed by a single shared hyper connection pool.
#[derive(Debug)]
pub struct HyperHttpClient {
    client: Client<HttpsConnector<HttpConnector>>,
    permits: Semaphore,
}

impl HyperHttpClient {
    pub fn new() -> Self {
        Self {
            client: Client::builder().build(HttpsConnector::new()),
            permits: Semaphore::new(MAX_IN_FLIGHT_REQUESTS),
        }
    }
}

#[async_trait]
impl HttpClient for HyperHttpClient {
    async fn get(&self, url: &str) -> Result<Vec<u8>, Error> {
        let uri: Uri = url.parse().map_err(|_| Error::ParseUriError)?;

        let _permit = self
            .permits
            .acquire()
            .await
            .expect("the request semaphore is never closed");

        let response = self.client.get(uri).await?;
        let bytes = body::to_bytes(response.into_body()).await?;

        Ok(bytes.to_vec())
    }
}

impl Default for HyperHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

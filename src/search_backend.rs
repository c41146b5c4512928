use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use thiserror::Error;

use crate::data_models::Method;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("search backend request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("search backend returned a body that is not JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid search backend address: {0}")]
    Address(#[from] url::ParseError),
}

/// The search API this site fronts. Returns the raw JSON body so callers can
/// tell well-formed answers from unexpected ones.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn query(&self, method: Method, keyword: &str, page: u32) -> Result<Value, BackendError>;
}

pub struct HttpSearchBackend {
    client: Client,
    query_url: Url,
}

impl HttpSearchBackend {
    pub fn new(host: &str, port: u16) -> Result<Self, BackendError> {
        Self::with_client(Client::new(), host, port)
    }

    pub fn with_client(client: Client, host: &str, port: u16) -> Result<Self, BackendError> {
        let query_url = Url::parse(&format!("http://{host}:{port}/query"))?;
        Ok(Self { client, query_url })
    }

    pub fn query_url(&self) -> &Url {
        &self.query_url
    }
}

#[async_trait]
impl SearchBackend for HttpSearchBackend {
    async fn query(&self, method: Method, keyword: &str, page: u32) -> Result<Value, BackendError> {
        log::info!("querying search backend: method={method} keyword={keyword:?} page={page}");

        let page = page.to_string();
        // Logical failures come back as 400 with a JSON body, so the status is not checked.
        let response = self
            .client
            .get(self.query_url.clone())
            .query(&[
                ("method", method.as_str()),
                ("keyword", keyword),
                ("page", page.as_str()),
            ])
            .send()
            .await?;

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

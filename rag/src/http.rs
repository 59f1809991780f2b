use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::from_str;
use tracing::debug;

use crate::config::Config;
use crate::error::RagError;

/// Blocking client for an Azure OpenAI resource. Holds the deployment names so the
/// embedding and chat calls only need a request body.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    endpoint: String,
    api_version: String,
    pub(crate) chat_deployment: String,
    pub(crate) embedding_deployment: String,
}

impl ApiClient {
    pub fn new(cfg: &Config) -> Result<Self, RagError> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(cfg.api_key.trim()).map_err(|_| RagError::InvalidApiKey)?;
        headers.insert("api-key", key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(cfg.http_timeout)
            .default_headers(headers)
            .build()
            .map_err(RagError::Client)?;

        Ok(Self {
            client,
            endpoint: cfg.endpoint.clone(),
            api_version: cfg.api_version.clone(),
            chat_deployment: cfg.chat_deployment.clone(),
            embedding_deployment: cfg.embedding_deployment.clone(),
        })
    }

    pub(crate) fn deployment_url(&self, deployment: &str, operation: &str) -> String {
        format!(
            "{}/openai/deployments/{}/{}?api-version={}",
            self.endpoint, deployment, operation, self.api_version
        )
    }

    pub(crate) fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, RagError> {
        debug!(url, "POST");
        let resp = self
            .client
            .post(url)
            .json(body)
            .send()
            .map_err(|source| RagError::Transport {
                url: url.to_string(),
                source,
            })?;
        let status = resp.status();
        let text = resp.text().unwrap_or_default();
        if !status.is_success() {
            return Err(RagError::Http {
                url: url.to_string(),
                status: status.as_u16(),
                body: text,
            });
        }
        from_str::<T>(&text).map_err(|e| RagError::Decode {
            url: url.to_string(),
            reason: format!("{} | {}", e, text),
        })
    }
}

// src/provider/http.rs
use std::time::Duration;

use async_trait::async_trait;
use metrics::counter;
use reqwest::{Client, Url};

use super::{Endpoint, ProviderError, RecipeProvider};

pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// TheMealDB over HTTP. One attempt per call; no retries.
#[derive(Clone)]
pub struct HttpProvider {
    base: String,
    client: Client,
}

impl HttpProvider {
    pub fn new(base_url: &str) -> Result<Self, ProviderError> {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: &str, client: Client) -> Result<Self, ProviderError> {
        let base = base_url.trim().trim_end_matches('/').to_string();
        // validate once so every later join is infallible in practice
        Url::parse(&base).map_err(|e| ProviderError::InvalidUrl(format!("{base}: {e}")))?;
        Ok(Self { base, client })
    }

    /// Build a client honoring optional timeout / user agent. Without a
    /// timeout the transport's own defaults apply.
    pub fn build(
        base_url: &str,
        timeout: Option<Duration>,
        user_agent: Option<&str>,
    ) -> Result<Self, ProviderError> {
        let mut builder = Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        if let Some(ua) = user_agent {
            builder = builder.user_agent(ua.to_string());
        }
        let client = builder.build().map_err(|e| ProviderError::Transport {
            endpoint: "<client>".to_string(),
            source: e,
        })?;
        Self::with_client(base_url, client)
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    pub fn url_for(&self, endpoint: &Endpoint) -> Result<Url, ProviderError> {
        let raw = format!("{}/{}", self.base, endpoint.path());
        let mut url =
            Url::parse(&raw).map_err(|e| ProviderError::InvalidUrl(format!("{raw}: {e}")))?;
        let (k, v) = endpoint.query();
        url.query_pairs_mut().append_pair(k, &v);
        Ok(url)
    }
}

#[async_trait]
impl RecipeProvider for HttpProvider {
    async fn get(&self, endpoint: &Endpoint) -> Result<String, ProviderError> {
        let url = self.url_for(endpoint)?;
        counter!("provider_requests_total", "path" => endpoint.path()).increment(1);
        tracing::debug!(provider = self.name(), %endpoint, "provider request");

        let resp = match self.client.get(url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(error = ?e, provider = self.name(), %endpoint, "provider http error");
                counter!("provider_errors_total", "path" => endpoint.path()).increment(1);
                return Err(ProviderError::Transport {
                    endpoint: endpoint.to_string(),
                    source: e,
                });
            }
        };

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(provider = self.name(), %endpoint, status = status.as_u16(), "provider non-2xx");
            counter!("provider_errors_total", "path" => endpoint.path()).increment(1);
            return Err(ProviderError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        resp.text().await.map_err(|e| {
            counter!("provider_errors_total", "path" => endpoint.path()).increment(1);
            ProviderError::Transport {
                endpoint: endpoint.to_string(),
                source: e,
            }
        })
    }

    fn name(&self) -> &'static str {
        "TheMealDB"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_keeps_api_version_segment_and_encodes_query() {
        let p = HttpProvider::new(DEFAULT_BASE_URL).unwrap();
        let url = p.url_for(&Endpoint::SearchByName("mac & cheese".into())).unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.themealdb.com/api/json/v1/1/search.php?s=mac+%26+cheese"
        );
    }

    #[test]
    fn trailing_slash_in_base_is_tolerated() {
        let p = HttpProvider::new("http://127.0.0.1:9/api/").unwrap();
        let url = p.url_for(&Endpoint::LookupById("1".into())).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9/api/lookup.php?i=1");
    }

    #[test]
    fn garbage_base_is_rejected() {
        assert!(matches!(
            HttpProvider::new("not a url"),
            Err(ProviderError::InvalidUrl(_))
        ));
    }
}

// src/provider/mod.rs
pub mod http;

use std::fmt;

pub use http::HttpProvider;

/// One call against the recipe provider. Each endpoint takes exactly one
/// query pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    LookupById(String),
    FilterByCategory(String),
    FilterByArea(String),
    SearchByName(String),
    SearchByFirstLetter(char),
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::LookupById(_) => "lookup.php",
            Endpoint::FilterByCategory(_) | Endpoint::FilterByArea(_) => "filter.php",
            Endpoint::SearchByName(_) | Endpoint::SearchByFirstLetter(_) => "search.php",
        }
    }

    pub fn query(&self) -> (&'static str, String) {
        match self {
            Endpoint::LookupById(id) => ("i", id.clone()),
            Endpoint::FilterByCategory(c) => ("c", c.clone()),
            Endpoint::FilterByArea(a) => ("a", a.clone()),
            Endpoint::SearchByName(s) => ("s", s.clone()),
            Endpoint::SearchByFirstLetter(l) => ("f", l.to_string()),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (k, v) = self.query();
        write!(f, "{}?{}={}", self.path(), k, v)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("provider returned HTTP {status} for {endpoint}")]
    Status { endpoint: String, status: u16 },
    #[error("invalid provider url: {0}")]
    InvalidUrl(String),
}

/// Raw transport to the recipe provider. Returns the response body as text;
/// interpreting it is the gateway's job.
#[async_trait::async_trait]
pub trait RecipeProvider: Send + Sync {
    async fn get(&self, endpoint: &Endpoint) -> Result<String, ProviderError>;
    fn name(&self) -> &'static str;
}

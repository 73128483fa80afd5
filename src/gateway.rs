// src/gateway.rs
//! Recipe fetch gateway: turns a [`QueryIntent`] (or a recipe id) into
//! provider calls and normalizes the answers.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

use metrics::counter;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::intent::QueryIntent;
use crate::model::{MealsEnvelope, RecipeDetail, RecipeSummary};
use crate::provider::{Endpoint, ProviderError, RecipeProvider};

/// Letters queried, in order, when no filter is given.
pub const ALPHABET: std::ops::RangeInclusive<char> = 'a'..='z';

/// The two user-visible failure kinds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("nothing found")]
    NotFound,
    #[error("could not retrieve data: {0}")]
    Transport(String),
}

/// Which page is asking; picks the wording of [`FetchError::message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Listing,
    Detail,
}

impl FetchError {
    pub fn message(&self, scope: Scope) -> &'static str {
        match (self, scope) {
            (FetchError::NotFound, Scope::Listing) => "No recipes found for the selected filter.",
            (FetchError::Transport(_), Scope::Listing) => "Error retrieving recipes.",
            (FetchError::NotFound, Scope::Detail) => "Recipe not found.",
            (FetchError::Transport(_), Scope::Detail) => "Error retrieving recipe details.",
        }
    }

    /// Stable machine-readable tag for the JSON API.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::NotFound => "not_found",
            FetchError::Transport(_) => "transport",
        }
    }
}

impl From<ProviderError> for FetchError {
    fn from(e: ProviderError) -> Self {
        FetchError::Transport(e.to_string())
    }
}

/// What to do when one of the per-letter calls fails during a browse-all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LetterFailurePolicy {
    /// Abort the remaining letters and report a transport error.
    #[default]
    FailFast,
    /// Skip the failed letter and keep going.
    BestEffort,
}

impl FromStr for LetterFailurePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail-fast" | "failfast" => Ok(Self::FailFast),
            "best-effort" | "besteffort" => Ok(Self::BestEffort),
            other => anyhow::bail!("unknown letter failure policy: {other}"),
        }
    }
}

#[derive(Clone)]
pub struct RecipeGateway {
    provider: Arc<dyn RecipeProvider>,
    policy: LetterFailurePolicy,
}

impl RecipeGateway {
    pub fn new(provider: Arc<dyn RecipeProvider>) -> Self {
        Self {
            provider,
            policy: LetterFailurePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: LetterFailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> LetterFailurePolicy {
        self.policy
    }

    /// Resolve an intent into summaries. Non-`All` intents make exactly one
    /// provider call; `All` walks the alphabet.
    pub async fn fetch_recipes(
        &self,
        intent: &QueryIntent,
    ) -> Result<Vec<RecipeSummary>, FetchError> {
        let endpoint = match intent {
            QueryIntent::Category(c) => Endpoint::FilterByCategory(c.clone()),
            QueryIntent::Area(a) => Endpoint::FilterByArea(a.clone()),
            QueryIntent::Search(s) => Endpoint::SearchByName(s.clone()),
            QueryIntent::All => return self.fetch_all().await,
        };

        let envelope = self.call(&endpoint).await?;
        let items = match envelope.meals {
            Some(Value::Array(items)) => items,
            _ => return Err(FetchError::NotFound),
        };
        let out = items
            .into_iter()
            .map(serde_json::from_value::<RecipeSummary>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                tracing::warn!(error = %e, %endpoint, "malformed summary in provider response");
                FetchError::NotFound
            })?;

        tracing::info!(%endpoint, count = out.len(), "recipes fetched");
        Ok(out)
    }

    async fn fetch_all(&self) -> Result<Vec<RecipeSummary>, FetchError> {
        let mut combined = Vec::new();
        let mut failed = 0usize;

        for letter in ALPHABET {
            let endpoint = Endpoint::SearchByFirstLetter(letter);
            match self.call(&endpoint).await {
                Ok(envelope) => {
                    // letters with no recipes come back as `null`
                    if let Some(Value::Array(items)) = envelope.meals {
                        for item in items {
                            match serde_json::from_value::<RecipeSummary>(item) {
                                Ok(s) => combined.push(s),
                                Err(e) => {
                                    tracing::warn!(error = %e, %letter, "skipping malformed summary")
                                }
                            }
                        }
                    }
                }
                Err(e) => match self.policy {
                    LetterFailurePolicy::FailFast => {
                        tracing::warn!(error = %e, %letter, "letter fetch failed; aborting browse-all");
                        return Err(e);
                    }
                    LetterFailurePolicy::BestEffort => {
                        tracing::warn!(error = %e, %letter, "letter fetch failed; skipping");
                        failed += 1;
                    }
                },
            }
        }

        if failed == ALPHABET.count() {
            return Err(FetchError::Transport("every letter failed".to_string()));
        }

        let before = combined.len();
        let out = dedup_keep_last(combined);
        counter!("gateway_dedup_total").increment((before - out.len()) as u64);
        tracing::info!(count = out.len(), duplicates = before - out.len(), failed, "browse-all fetched");
        Ok(out)
    }

    /// Exactly one `lookup.php` call.
    pub async fn fetch_recipe_detail(&self, id: &str) -> Result<RecipeDetail, FetchError> {
        let endpoint = Endpoint::LookupById(id.to_string());
        let envelope = self.call(&endpoint).await?;

        let first = match envelope.meals {
            None | Some(Value::Null) => return Err(FetchError::NotFound),
            Some(Value::Array(items)) => match items.into_iter().next() {
                Some(first) => first,
                None => return Err(FetchError::NotFound),
            },
            Some(other) => {
                return Err(FetchError::Transport(format!(
                    "unexpected `meals` shape: {}",
                    json_type(&other)
                )))
            }
        };

        serde_json::from_value::<RecipeDetail>(first).map_err(|e| {
            tracing::warn!(error = %e, %id, "malformed recipe detail");
            FetchError::Transport(format!("malformed recipe detail: {e}"))
        })
    }

    /// Transport + JSON envelope. Both failure modes count as transport.
    async fn call(&self, endpoint: &Endpoint) -> Result<MealsEnvelope, FetchError> {
        let body = self.provider.get(endpoint).await?;
        serde_json::from_str::<MealsEnvelope>(&body).map_err(|e| {
            tracing::warn!(error = %e, provider = self.provider.name(), %endpoint, "unparseable provider payload");
            counter!("provider_errors_total", "path" => endpoint.path()).increment(1);
            FetchError::Transport(format!("unparseable payload from {endpoint}: {e}"))
        })
    }
}

/// One entry per id. The record kept is the last one seen, placed where its
/// id first appeared.
pub fn dedup_keep_last(items: Vec<RecipeSummary>) -> Vec<RecipeSummary> {
    let mut index: HashMap<String, usize> = HashMap::with_capacity(items.len());
    let mut out: Vec<RecipeSummary> = Vec::with_capacity(items.len());
    for item in items {
        let seen = index.get(&item.id).copied();
        match seen {
            Some(at) => out[at] = item,
            None => {
                index.insert(item.id.clone(), out.len());
                out.push(item);
            }
        }
    }
    out
}

fn json_type(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

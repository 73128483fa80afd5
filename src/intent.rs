// src/intent.rs
//! Query intent: the one filter mode a listing request resolves to.

use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Resolved listing filter. Exactly one mode applies per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "value", rename_all = "lowercase")]
pub enum QueryIntent {
    Category(String),
    Area(String),
    Search(String),
    All,
}

impl QueryIntent {
    /// Canonical listing URL for this intent, e.g. `/recipes?area=Greek`.
    pub fn to_query(&self) -> String {
        self.to_query_with_page(None)
    }

    /// Listing URL that also pins a page number.
    pub fn to_query_with_page(&self, page: Option<usize>) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::with_capacity(2);
        match self {
            QueryIntent::Category(c) => pairs.push(("category", c.clone())),
            QueryIntent::Area(a) => pairs.push(("area", a.clone())),
            QueryIntent::Search(s) => pairs.push(("search", s.clone())),
            QueryIntent::All => {}
        }
        if let Some(p) = page {
            pairs.push(("page", p.to_string()));
        }
        encode_path("/recipes", &pairs)
    }

    /// Label/value pair for the listing banner; `None` for `All`.
    pub fn banner(&self) -> Option<(&'static str, &str)> {
        match self {
            QueryIntent::Category(c) => Some(("Category", c.as_str())),
            QueryIntent::Area(a) => Some(("Area", a.as_str())),
            QueryIntent::Search(s) => Some(("Search", s.as_str())),
            QueryIntent::All => None,
        }
    }
}

/// Raw listing query string. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingParams {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    // kept as text so `?page=abc` degrades to page 1 instead of a 400
    #[serde(default)]
    pub page: Option<String>,
}

impl ListingParams {
    /// Precedence: category > area > search > all. A parameter counts only
    /// when non-blank; the untrimmed value is what goes to the provider.
    pub fn intent(&self) -> QueryIntent {
        if let Some(c) = present(&self.category) {
            return QueryIntent::Category(c.to_string());
        }
        if let Some(a) = present(&self.area) {
            return QueryIntent::Area(a.to_string());
        }
        if let Some(s) = present(&self.search) {
            return QueryIntent::Search(s.to_string());
        }
        QueryIntent::All
    }

    /// Requested 1-based page; anything unparsable means page 1.
    pub fn page(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<usize>().ok())
            .unwrap_or(1)
    }
}

fn present(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.trim().is_empty())
}

/// Build `path?k=v&...` with form-urlencoded values.
pub(crate) fn encode_path(path: &str, pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return path.to_string();
    }
    // Url needs an absolute base; only path + query survive.
    let mut url = match Url::parse("http://gustix.local") {
        Ok(u) => u,
        Err(_) => return path.to_string(),
    };
    url.set_path(path);
    {
        let mut q = url.query_pairs_mut();
        for (k, v) in pairs {
            q.append_pair(k, v);
        }
    }
    match url.query() {
        Some(q) => format!("{}?{}", url.path(), q),
        None => url.path().to_string(),
    }
}

// tests/common/mod.rs
//
// Recording in-memory RecipeProvider shared by the integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use gustix::provider::{Endpoint, ProviderError, RecipeProvider};

enum Reply {
    Body(String),
    Fail,
}

/// Answers configured per endpoint; anything else gets `{"meals":null}`.
pub struct FakeProvider {
    replies: Mutex<HashMap<String, Reply>>,
    delays: Mutex<HashMap<String, Duration>>,
    calls: Mutex<Vec<Endpoint>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(HashMap::new()),
            delays: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn reply(self, endpoint: Endpoint, body: impl Into<String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), Reply::Body(body.into()));
        self
    }

    pub fn fail(self, endpoint: Endpoint) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), Reply::Fail);
        self
    }

    pub fn delay(self, endpoint: Endpoint, d: Duration) -> Self {
        self.delays.lock().unwrap().insert(endpoint.to_string(), d);
        self
    }

    pub fn calls(&self) -> Vec<Endpoint> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecipeProvider for FakeProvider {
    async fn get(&self, endpoint: &Endpoint) -> Result<String, ProviderError> {
        self.calls.lock().unwrap().push(endpoint.clone());
        let key = endpoint.to_string();

        let delay = self.delays.lock().unwrap().get(&key).copied();
        if let Some(d) = delay {
            tokio::time::sleep(d).await;
        }

        let replies = self.replies.lock().unwrap();
        match replies.get(&key) {
            Some(Reply::Body(b)) => Ok(b.clone()),
            Some(Reply::Fail) => Err(ProviderError::Status {
                endpoint: key,
                status: 503,
            }),
            None => Ok(r#"{"meals":null}"#.to_string()),
        }
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

/// Summary as the provider's search endpoints return it.
pub fn summary(id: &str, name: &str, area: &str, category: &str) -> Value {
    json!({
        "idMeal": id,
        "strMeal": name,
        "strMealThumb": format!("https://img.example/{id}.jpg"),
        "strArea": area,
        "strCategory": category,
    })
}

/// Summary as `filter.php` returns it (no area/category).
pub fn filter_summary(id: &str, name: &str) -> Value {
    json!({
        "idMeal": id,
        "strMeal": name,
        "strMealThumb": format!("https://img.example/{id}.jpg"),
    })
}

pub fn meals(items: Vec<Value>) -> String {
    json!({ "meals": items }).to_string()
}

/// `n` filter-style summaries with ids `prefix0..prefix{n-1}`.
pub fn many(prefix: &str, n: usize) -> String {
    meals(
        (0..n)
            .map(|i| filter_summary(&format!("{prefix}{i}"), &format!("Dish {i}")))
            .collect(),
    )
}

/// Detail record with the given ingredient slots populated (1-based).
pub fn detail(id: &str, populated: &[usize], video: Option<&str>) -> String {
    let mut m = serde_json::Map::new();
    m.insert("idMeal".into(), json!(id));
    m.insert("strMeal".into(), json!("Test Dish"));
    m.insert("strMealThumb".into(), json!("https://img.example/test.jpg"));
    m.insert("strInstructions".into(), json!("Mix.\nBake."));
    m.insert("strArea".into(), json!("Greek"));
    m.insert("strCategory".into(), json!("Dessert"));
    m.insert("strSource".into(), json!(null));
    m.insert("strYoutube".into(), json!(video.unwrap_or("")));
    for n in 1..=20 {
        let (ing, meas) = if populated.contains(&n) {
            (json!(format!("ingredient {n}")), json!(format!("{n} g")))
        } else if n % 2 == 0 {
            (json!("   "), json!(" "))
        } else {
            (json!(""), json!(null))
        };
        m.insert(format!("strIngredient{n}"), ing);
        m.insert(format!("strMeasure{n}"), meas);
    }
    json!({ "meals": [Value::Object(m)] }).to_string()
}

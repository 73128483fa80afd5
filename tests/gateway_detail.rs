// tests/gateway_detail.rs

mod common;

use std::sync::Arc;

use common::{detail, FakeProvider};
use gustix::detail::video_embed;
use gustix::gateway::{FetchError, RecipeGateway, Scope};
use gustix::provider::Endpoint;

fn lookup(id: &str) -> Endpoint {
    Endpoint::LookupById(id.to_string())
}

#[tokio::test]
async fn ingredients_follow_populated_slots_in_order() {
    let fake = Arc::new(FakeProvider::new().reply(lookup("7"), detail("7", &[1, 2, 5], None)));
    let gw = RecipeGateway::new(fake.clone());

    let d = gw.fetch_recipe_detail("7").await.unwrap();
    let ingredients = d.ingredients();
    let names: Vec<&str> = ingredients.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["ingredient 1", "ingredient 2", "ingredient 5"]);
    assert_eq!(ingredients[2].measure, "5 g");
    assert_eq!(fake.calls(), vec![lookup("7")], "exactly one lookup call");
}

#[tokio::test]
async fn absent_video_yields_no_embed() {
    let fake = Arc::new(FakeProvider::new().reply(lookup("7"), detail("7", &[1], None)));
    let d = RecipeGateway::new(fake).fetch_recipe_detail("7").await.unwrap();
    assert_eq!(d.video, None);
    assert_eq!(video_embed(d.video.as_deref()), Ok(None));
    assert_eq!(d.source, None);
}

#[tokio::test]
async fn video_url_yields_embed_id() {
    let fake = Arc::new(FakeProvider::new().reply(
        lookup("7"),
        detail("7", &[1], Some("https://example.com/watch?v=abcd1234")),
    ));
    let d = RecipeGateway::new(fake).fetch_recipe_detail("7").await.unwrap();
    let v = video_embed(d.video.as_deref()).unwrap().unwrap();
    assert_eq!(v.id, "abcd1234");
}

#[tokio::test]
async fn empty_meals_is_not_found() {
    let fake = Arc::new(
        FakeProvider::new()
            .reply(lookup("1"), r#"{"meals":[]}"#)
            .reply(lookup("2"), r#"{"meals":null}"#),
    );
    let gw = RecipeGateway::new(fake);
    for id in ["1", "2"] {
        let err = gw.fetch_recipe_detail(id).await.unwrap_err();
        assert_eq!(err, FetchError::NotFound);
        assert_eq!(err.message(Scope::Detail), "Recipe not found.");
    }
}

#[tokio::test]
async fn transport_failure_is_transport_not_not_found() {
    let fake = Arc::new(FakeProvider::new().fail(lookup("1")).reply(lookup("2"), "{oops"));
    let gw = RecipeGateway::new(fake);
    for id in ["1", "2"] {
        let err = gw.fetch_recipe_detail(id).await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)), "got {err:?}");
        assert_eq!(err.message(Scope::Detail), "Error retrieving recipe details.");
    }
}

use resource_framework::fake_api::FakeApi;
use resource_framework::{ActorClient, ApiContext};
use serde_json::json;
use talkie_client::clients::WeekClient;
use talkie_client::model::{WeekDraft, WeekId};
use talkie_client::week_actor;

fn spawn_weeks(api: &FakeApi) -> WeekClient {
    let (actor, client) = week_actor::new();
    tokio::spawn(actor.run(ApiContext::new(api.base_url(), Some("abc".into()))));
    client
}

#[tokio::test]
async fn weeks_are_listed_from_all_route() {
    let api = FakeApi::start().await.unwrap();
    api.respond("GET", "/weeks/all", 200, json!([{ "_id": "w1" }, { "_id": "w2" }]));
    let client = spawn_weeks(&api);

    let weeks = client.fetch_all().await.unwrap();

    assert_eq!(weeks.len(), 2);
    assert_eq!(api.count("GET", "/weeks/all"), 1);
    assert_eq!(api.count("GET", "/weeks"), 0);
}

#[tokio::test]
async fn failed_listing_uses_week_message() {
    let api = FakeApi::start().await.unwrap();
    api.respond("GET", "/weeks/all", 500, json!({ "message": "boom" }));
    let client = spawn_weeks(&api);

    let err = client.fetch_all().await.unwrap_err();

    assert_eq!(err.message(), "Failed to fetch weeks");
    let state = client.state();
    assert_eq!(state.error.as_deref(), Some("Failed to fetch weeks"));
    assert!(!state.loading);
}

#[tokio::test]
async fn create_posts_draft_and_refreshes_once() {
    let api = FakeApi::start().await.unwrap();
    api.respond("POST", "/weeks", 201, json!({ "_id": "w3", "title": "Week 3" }));
    api.respond("GET", "/weeks/all", 200, json!([{ "_id": "w3", "title": "Week 3" }]));
    let client = spawn_weeks(&api);

    let week = client
        .create_week(WeekDraft::new().with("title", "Week 3"))
        .await
        .unwrap();

    assert_eq!(week.title(), Some("Week 3"));
    assert_eq!(api.requests()[0].body, Some(json!({ "title": "Week 3" })));
    assert_eq!(api.count("GET", "/weeks/all"), 1);
    assert_eq!(client.state().success.as_deref(), Some("Week created successfully!"));
}

#[tokio::test]
async fn update_refreshes_and_surfaces_server_message() {
    let api = FakeApi::start().await.unwrap();
    api.respond("PUT", "/weeks/w1", 200, json!({ "_id": "w1", "title": "One" }));
    api.respond("GET", "/weeks/all", 200, json!([{ "_id": "w1", "title": "One" }]));
    let client = spawn_weeks(&api);

    client
        .update_week(WeekId::from("w1"), WeekDraft::new().with("title", "One"))
        .await
        .unwrap();
    assert_eq!(api.count("GET", "/weeks/all"), 1);

    api.respond("PUT", "/weeks/w1", 422, json!({ "message": "title taken" }));
    let err = client
        .update_week(WeekId::from("w1"), WeekDraft::new().with("title", "Two"))
        .await
        .unwrap_err();

    assert_eq!(err.message(), "title taken");
    assert_eq!(client.state().error.as_deref(), Some("title taken"));
    assert_eq!(client.state().success, None);
    assert_eq!(api.count("GET", "/weeks/all"), 1);
}

#[tokio::test]
async fn delete_refreshes_weeks_once() {
    let api = FakeApi::start().await.unwrap();
    api.respond("DELETE", "/weeks/w1", 200, json!({}));
    api.respond("GET", "/weeks/all", 200, json!([]));
    let client = spawn_weeks(&api);

    client.delete(WeekId::from("w1")).await.unwrap();

    assert_eq!(api.count("GET", "/weeks/all"), 1);
    assert_eq!(client.state().success.as_deref(), Some("Week deleted successfully!"));
}

#[tokio::test]
async fn get_week_by_id() {
    let api = FakeApi::start().await.unwrap();
    api.respond("GET", "/weeks/w9", 200, json!({ "_id": "w9" }));
    let client = spawn_weeks(&api);

    let week = client.fetch_by_id(WeekId::from("w9")).await.unwrap();
    assert_eq!(client.state().selected, Some(week));
}

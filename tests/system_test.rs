use resource_framework::fake_api::FakeApi;
use resource_framework::ActorClient;
use serde_json::json;
use talkie_client::config::{ClientConfig, ConfigError};
use talkie_client::lesson_actor::LessonError;
use talkie_client::lifecycle::{SystemError, TalkieSystem};
use talkie_client::model::LessonCreate;
use talkie_client::token_store::MemoryTokenStore;

fn config_for(api: &FakeApi, prefetch: bool) -> ClientConfig {
    ClientConfig {
        base_url: api.base_url().to_string(),
        prefetch,
        ..Default::default()
    }
}

/// Full end-to-end test: start, prefetch, mutate, shut down.
#[tokio::test]
async fn start_prefetches_both_collections() {
    let api = FakeApi::start().await.unwrap();
    api.respond("GET", "/lessons", 200, json!([{ "_id": "l1" }]));
    api.respond("GET", "/weeks/all", 200, json!([{ "_id": "w1" }, { "_id": "w2" }]));
    let store = MemoryTokenStore::new().with("token", "abc");

    let system = TalkieSystem::start(&config_for(&api, true), &store)
        .await
        .expect("system should start");

    assert!(system.has_token());
    assert_eq!(api.count("GET", "/lessons"), 1);
    assert_eq!(api.count("GET", "/weeks/all"), 1);
    assert_eq!(system.lesson_client.state().items.len(), 1);
    assert_eq!(system.week_client.state().items.len(), 2);
    assert!(api
        .requests()
        .iter()
        .all(|r| r.authorization.as_deref() == Some("Bearer abc")));

    api.respond("POST", "/lessons", 201, json!({ "_id": "l2", "title": "New" }));
    api.respond("GET", "/lessons", 200, json!([{ "_id": "l1" }, { "_id": "l2" }]));
    system
        .lesson_client
        .create_lesson(LessonCreate::new("New"))
        .await
        .unwrap();
    assert_eq!(api.count("GET", "/lessons"), 2);
    assert_eq!(system.lesson_client.state().items.len(), 2);

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn prefetch_failure_is_not_fatal() {
    let api = FakeApi::start().await.unwrap();
    api.respond("GET", "/lessons", 500, json!({}));
    api.respond("GET", "/weeks/all", 200, json!([]));
    let store = MemoryTokenStore::new().with("token", "abc");

    let system = TalkieSystem::start(&config_for(&api, true), &store)
        .await
        .unwrap();

    assert_eq!(
        system.lesson_client.state().error.as_deref(),
        Some("Failed to fetch lessons")
    );
    assert_eq!(system.week_client.state().error, None);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn prefetch_can_be_disabled() {
    let api = FakeApi::start().await.unwrap();
    let store = MemoryTokenStore::new().with("token", "abc");

    let system = TalkieSystem::start(&config_for(&api, false), &store)
        .await
        .unwrap();

    assert!(api.requests().is_empty());
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn custom_token_key_is_used() {
    let api = FakeApi::start().await.unwrap();
    api.respond("GET", "/lessons", 200, json!([]));
    let store = MemoryTokenStore::new().with("authToken", "xyz");
    let config = ClientConfig {
        token_key: "authToken".into(),
        ..config_for(&api, false)
    };

    let system = TalkieSystem::start(&config, &store).await.unwrap();
    system.lesson_client.fetch_all().await.unwrap();

    assert_eq!(api.requests()[0].authorization.as_deref(), Some("Bearer xyz"));
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn without_token_nothing_is_sent() {
    let api = FakeApi::start().await.unwrap();
    let store = MemoryTokenStore::new();

    let system = TalkieSystem::start(&config_for(&api, true), &store)
        .await
        .unwrap();

    assert!(!system.has_token());
    let err = system.lesson_client.fetch_all().await.unwrap_err();
    assert_eq!(err, LessonError::Unauthenticated);
    assert!(api.requests().is_empty());

    system.shutdown().await.unwrap();
}

/// Overlapping calls from many tasks are serialized by the actor.
#[tokio::test]
async fn concurrent_callers_settle_cleanly() {
    let api = FakeApi::start().await.unwrap();
    api.respond("GET", "/lessons", 200, json!([{ "_id": "l1" }]));
    api.respond("POST", "/lessons", 201, json!({ "_id": "l2" }));
    let store = MemoryTokenStore::new().with("token", "abc");
    let system = TalkieSystem::start(&config_for(&api, false), &store)
        .await
        .unwrap();

    let mut handles = vec![];
    for i in 0..10 {
        let client = system.lesson_client.clone();
        handles.push(tokio::spawn(async move {
            if i % 2 == 0 {
                client.fetch_all().await.map(|_| ())
            } else {
                client
                    .create_lesson(LessonCreate::new(format!("Lesson {i}")))
                    .await
                    .map(|_| ())
            }
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }

    // Five fetches plus one refresh per create.
    assert_eq!(api.count("GET", "/lessons"), 10);
    assert_eq!(api.count("POST", "/lessons"), 5);
    let state = system.lesson_client.state();
    assert!(!state.loading);
    assert_eq!(state.error, None);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn hand_built_invalid_config_is_rejected() {
    let api = FakeApi::start().await.unwrap();
    let store = MemoryTokenStore::new().with("token", "abc");

    let zero_buffer = ClientConfig {
        channel_buffer: 0,
        ..config_for(&api, false)
    };
    let err = TalkieSystem::start(&zero_buffer, &store).await.err().unwrap();
    assert!(matches!(err, SystemError::Config(ConfigError::Invalid(_))));

    let zero_timeout = ClientConfig {
        request_timeout_secs: 0,
        ..config_for(&api, false)
    };
    assert!(TalkieSystem::start(&zero_timeout, &store).await.is_err());
    assert!(api.requests().is_empty());
}

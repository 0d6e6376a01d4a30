#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use futures::future::join_all;
    use rocket::http::{ContentType, Status};
    use rocket::local::asynchronous::Client;
    use serde_json::{json, Value};
    use tracing_subscriber::EnvFilter;
    use shared::models::LikeCounts;
    use crate::{
        build_rocket,
        cache::cache_policy,
        config::{StoreConfig, KV_TOKEN_VAR, KV_URL_VAR},
        kv::{parse_count, parse_mget, KvReply},
        routes::AppState,
        store::{key_for, CounterStore, MemoryStore, StoreError},
    };

    struct FailingStore;

    #[rocket::async_trait]
    impl CounterStore for FailingStore {
        async fn get(&self, _ids: &[String]) -> Result<LikeCounts, StoreError> {
            Err(StoreError::Backend("WRONGPASS invalid token".into()))
        }

        async fn increment(&self, _id: &str) -> Result<u64, StoreError> {
            Err(StoreError::Backend("WRONGPASS invalid token".into()))
        }

        fn backend_name(&self) -> &'static str {
            "failing"
        }

        fn is_shared(&self) -> bool {
            true
        }
    }

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    async fn client() -> Client {
        init_tracing();
        Client::tracked(build_rocket(AppState::new(Box::new(MemoryStore::new()))))
            .await
            .expect("valid rocket instance")
    }

    async fn get_json(client: &Client, uri: &str) -> Value {
        let response = client.get(uri).dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        response.into_json::<Value>().await.expect("json body")
    }

    async fn like(client: &Client, body: &str) -> (Status, Value) {
        let response = client
            .post("/api/likes")
            .header(ContentType::JSON)
            .body(body.to_string())
            .dispatch()
            .await;
        let status = response.status();
        (status, response.into_json::<Value>().await.expect("json body"))
    }

    #[rocket::async_test]
    async fn test_empty_ids_returns_empty_mapping() {
        let client = client().await;
        assert_eq!(get_json(&client, "/api/likes").await, json!({}));
        assert_eq!(get_json(&client, "/api/likes?ids=").await, json!({}));
        assert_eq!(get_json(&client, "/api/likes?ids=,%20,").await, json!({}));
    }

    #[rocket::async_test]
    async fn test_unknown_ids_read_as_zero() {
        let client = client().await;
        assert_eq!(
            get_json(&client, "/api/likes?ids=classic,%20geometric%20,,classic").await,
            json!({"classic": 0, "geometric": 0})
        );
    }

    #[rocket::async_test]
    async fn test_like_scenario() {
        let client = client().await;
        assert_eq!(get_json(&client, "/api/likes?ids=classic,minimal").await, json!({"classic": 0, "minimal": 0}));

        let (status, body) = like(&client, r#"{"id":"classic"}"#).await;
        assert_eq!(status, Status::Ok);
        assert_eq!(body, json!({"id": "classic", "count": 1}));

        assert_eq!(get_json(&client, "/api/likes?ids=classic,minimal").await, json!({"classic": 1, "minimal": 0}));

        let (_, body) = like(&client, r#"{"id":"classic"}"#).await;
        assert_eq!(body["count"], 2);
        assert_eq!(get_json(&client, "/api/likes?ids=minimal,classic").await, json!({"classic": 2, "minimal": 0}));
    }

    #[rocket::async_test]
    async fn test_missing_id_is_rejected_without_side_effects() {
        let client = client().await;
        like(&client, r#"{"id":"classic"}"#).await;

        for body in [r#"{}"#, r#"{"id":""}"#, r#"{"id":null}"#, "{not json", ""] {
            let (status, error) = like(&client, body).await;
            assert_eq!(status, Status::BadRequest, "body: {body}");
            assert_eq!(error, json!({"error": "id required"}));
        }

        assert_eq!(get_json(&client, "/api/likes?ids=classic").await, json!({"classic": 1}));
    }

    #[rocket::async_test]
    async fn test_unreadable_body_is_a_missing_id() {
        let client = client().await;
        let response = client
            .post("/api/likes")
            .header(ContentType::JSON)
            .body(vec![0xff, 0xfe, b'{'])
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::BadRequest);
        assert_eq!(response.into_json::<Value>().await, Some(json!({"error": "id required"})));
    }

    #[rocket::async_test]
    async fn test_large_body_with_id_increments() {
        let client = client().await;
        let body = format!(r#"{{"id":"classic","pad":"{}"}}"#, "x".repeat(9 * 1024));
        let (status, reply) = like(&client, &body).await;
        assert_eq!(status, Status::Ok);
        assert_eq!(reply, json!({"id": "classic", "count": 1}));

        let oversized = format!(r#"{{"id":"classic","pad":"{}"}}"#, "x".repeat(128 * 1024));
        let (status, reply) = like(&client, &oversized).await;
        assert_eq!(status, Status::BadRequest);
        assert_eq!(reply, json!({"error": "id required"}));
        assert_eq!(get_json(&client, "/api/likes?ids=classic").await, json!({"classic": 1}));
    }

    #[rocket::async_test]
    async fn test_numeric_id_is_coerced() {
        let client = client().await;
        let (status, body) = like(&client, r#"{"id":7}"#).await;
        assert_eq!(status, Status::Ok);
        assert_eq!(body, json!({"id": "7", "count": 1}));
        assert_eq!(get_json(&client, "/api/likes?ids=7").await, json!({"7": 1}));

        let (_, body) = like(&client, r#"{"id":7.0}"#).await;
        assert_eq!(body, json!({"id": "7", "count": 2}));
    }

    #[rocket::async_test]
    async fn test_body_without_content_type_still_validated() {
        let client = client().await;
        let response = client.post("/api/likes").body(r#"{"id":"minimal"}"#).dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.into_json::<Value>().await, Some(json!({"id": "minimal", "count": 1})));
    }

    #[rocket::async_test]
    async fn test_concurrent_likes_are_not_lost() {
        let client = client().await;
        let requests = (0..50).map(|_| like(&client, r#"{"id":"geometric"}"#));
        let results = join_all(requests).await;
        assert!(results.iter().all(|(status, _)| *status == Status::Ok));

        let mut counts: Vec<u64> = results.iter().filter_map(|(_, body)| body["count"].as_u64()).collect();
        counts.sort_unstable();
        assert_eq!(counts, (1..=50).collect::<Vec<_>>());
        assert_eq!(get_json(&client, "/api/likes?ids=geometric").await, json!({"geometric": 50}));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_memory_store_parallel_increments() {
        let store = Arc::new(MemoryStore::new());
        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move {
                    for _ in 0..125 {
                        store.increment("calligraphy").await.expect("increment");
                    }
                })
            })
            .collect();
        for task in join_all(tasks).await {
            task.expect("task completed");
        }

        let counts = store.get(&["calligraphy".to_string(), "classic".to_string()]).await.unwrap();
        assert_eq!(counts.get("calligraphy"), Some(&1000));
        assert_eq!(counts.get("classic"), Some(&0));
    }

    #[rocket::async_test]
    async fn test_preflight_and_cors_headers() {
        let client = client().await;
        let response = client.options("/api/likes").dispatch().await;
        assert_eq!(response.status(), Status::Ok);

        let headers = response.headers();
        assert_eq!(headers.get_one("Access-Control-Allow-Origin"), Some("*"));
        assert_eq!(headers.get_one("Access-Control-Allow-Methods"), Some("GET,POST,OPTIONS"));
        assert_eq!(headers.get_one("Access-Control-Allow-Headers"), Some("Content-Type"));
        assert!(response.into_string().await.unwrap_or_default().is_empty());

        let (status, _) = like(&client, "{}").await;
        assert_eq!(status, Status::BadRequest);
        let response = client.post("/api/likes").body("{}").dispatch().await;
        assert_eq!(response.headers().get_one("Access-Control-Allow-Origin"), Some("*"));
    }

    #[rocket::async_test]
    async fn test_api_responses_are_not_cached() {
        let client = client().await;
        let response = client.get("/api/likes?ids=classic").dispatch().await;
        assert_eq!(response.headers().get_one("Cache-Control"), Some("no-store, max-age=0"));

        let response = client.post("/api/likes").body(r#"{"id":"classic"}"#).dispatch().await;
        assert_eq!(response.headers().get_one("Cache-Control"), Some("no-store, max-age=0"));
    }

    #[rocket::async_test]
    async fn test_debug_flag_reports_backend() {
        let client = client().await;
        assert_eq!(get_json(&client, "/api/likes?ids=classic&debug=1").await, json!({"classic": 0, "_kv": false}));
        assert_eq!(get_json(&client, "/api/likes?ids=classic&debug=").await, json!({"classic": 0}));

        like(&client, r#"{"id":"_kv"}"#).await;
        let response = client.get("/api/likes?ids=_kv,classic&debug=1").dispatch().await;
        assert_eq!(response.into_string().await.as_deref(), Some(r#"{"classic":0,"_kv":false}"#));
        assert_eq!(get_json(&client, "/api/likes?ids=_kv").await, json!({"_kv": 1}));
    }

    #[rocket::async_test]
    async fn test_unknown_api_route() {
        let client = client().await;
        let response = client.post("/api/votes").body("{}").dispatch().await;
        assert_eq!(response.status(), Status::NotFound);
        let body = response.into_json::<Value>().await.expect("json body");
        assert_eq!(body["status"], 404);
    }

    #[rocket::async_test]
    async fn test_store_failure_maps_to_server_error() {
        init_tracing();
        let client = Client::tracked(build_rocket(AppState::new(Box::new(FailingStore))))
            .await
            .expect("valid rocket instance");

        let response = client.get("/api/likes?ids=classic").dispatch().await;
        assert_eq!(response.status(), Status::InternalServerError);
        let body = response.into_json::<Value>().await.expect("json body");
        assert!(!body["error"].as_str().unwrap_or_default().contains("WRONGPASS"));

        let (status, body) = like(&client, r#"{"id":"classic"}"#).await;
        assert_eq!(status, Status::InternalServerError);
        assert!(body["error"].is_string());

        let (status, _) = like(&client, r#"{}"#).await;
        assert_eq!(status, Status::BadRequest);
    }

    #[test]
    fn test_store_config_selection() {
        let both = |key: &str| match key {
            KV_URL_VAR => Some("https://kv.example.com".to_string()),
            KV_TOKEN_VAR => Some("secret".to_string()),
            _ => None,
        };
        assert_eq!(
            StoreConfig::from_lookup(both),
            StoreConfig::Kv { url: "https://kv.example.com".into(), token: "secret".into() }
        );

        let url_only = |key: &str| (key == KV_URL_VAR).then(|| "https://kv.example.com".to_string());
        assert_eq!(StoreConfig::from_lookup(url_only), StoreConfig::Memory);

        let blank_token = |key: &str| Some(if key == KV_URL_VAR { "https://kv.example.com" } else { "  " }.to_string());
        assert_eq!(StoreConfig::from_lookup(blank_token), StoreConfig::Memory);

        assert_eq!(StoreConfig::from_lookup(|_| None), StoreConfig::Memory);
    }

    #[test]
    fn test_kv_reply_decoding() {
        let ids = vec!["classic".to_string(), "minimal".to_string(), "geometric".to_string()];
        let counts = parse_mget(&ids, &json!(["3", null, 12])).unwrap();
        assert_eq!(counts.get("classic"), Some(&3));
        assert_eq!(counts.get("minimal"), Some(&0));
        assert_eq!(counts.get("geometric"), Some(&12));

        assert!(matches!(parse_mget(&ids, &json!(["1"])), Err(StoreError::UnexpectedReply(_))));
        assert!(matches!(parse_mget(&ids, &json!("1")), Err(StoreError::UnexpectedReply(_))));
        assert!(matches!(parse_count(&json!("abc")), Err(StoreError::UnexpectedReply(_))));
        assert!(matches!(parse_count(&json!(-1)), Err(StoreError::UnexpectedReply(_))));
        assert_eq!(parse_count(&json!(5)).unwrap(), 5);

        let ok: KvReply = serde_json::from_value(json!({"result": 4})).unwrap();
        assert_eq!(ok.into_result().unwrap(), json!(4));
        let err: KvReply = serde_json::from_value(json!({"error": "WRONGPASS"})).unwrap();
        assert!(matches!(err.into_result(), Err(StoreError::Backend(msg)) if msg == "WRONGPASS"));
    }

    #[test]
    fn test_cache_policy() {
        assert_eq!(cache_policy("/api/likes"), Some("no-store, max-age=0"));
        assert_eq!(cache_policy("/designs/classic.webp"), Some("public, max-age=31536000, immutable"));
        assert_eq!(cache_policy("/media/Hero.MP4"), Some("public, max-age=31536000, immutable"));
        assert_eq!(cache_policy("/index.html"), None);
        assert_eq!(cache_policy("/v1.2/page"), None);
        assert_eq!(cache_policy("/"), None);
    }

    #[test]
    fn test_key_template() {
        assert_eq!(key_for("classic"), "design:classic:likes");
    }
}

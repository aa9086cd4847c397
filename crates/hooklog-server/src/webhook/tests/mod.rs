
use actix_web::{http::StatusCode, test, web::Data};
use hooklog_config::Config;
use hooklog_core::CoreModule;
use hooklog_database_interface::{DatabaseError, DbService, MockDbService};
use hooklog_database_memory::MemoryDb;
use hooklog_models::{EventAction, EventTime};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use self::fixtures::{
    ISSUES_OPENED_DATA, PULL_REQUEST_MERGED_DATA, PULL_REQUEST_OPENED_DATA, PUSH_EVENT_DATA,
};
use crate::{
    constants::GITHUB_EVENT_HEADER,
    server::{build_actix_app, AppContext},
};

fn test_context(db_service: Box<dyn DbService>) -> Data<AppContext> {
    Data::new(AppContext::new_with_adapters(
        Config::from_env_no_version(),
        CoreModule::builder().build(),
        db_service,
    ))
}

fn webhook_request(event_type: Option<&str>, body: &str) -> test::TestRequest {
    let mut request = test::TestRequest::post()
        .uri("/webhook/receiver")
        .set_payload(body.to_owned());

    if let Some(event_type) = event_type {
        request = request.insert_header((GITHUB_EVENT_HEADER, event_type));
    }

    request
}

fn time(hours: &str, minutes: &str, days: &str) -> Option<EventTime> {
    Some(EventTime {
        hours: hours.into(),
        minutes: minutes.into(),
        days: days.into(),
    })
}

fn failing_store() -> DatabaseError {
    DatabaseError::ImplementationError {
        source: "connection refused".into(),
    }
}

#[actix_rt::test]
async fn receive_push_event() {
    let ctx = test_context(Box::new(MemoryDb::new()));
    let app = test::init_service(build_actix_app(ctx.clone())).await;

    let resp = test::call_service(
        &app,
        webhook_request(Some("push"), PUSH_EVENT_DATA).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({}));

    let records = ctx.db_service.event_records_all().await.unwrap();
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.request_id, "0d1a26e67d8f5eaf1f6ba5c57fc3c7d91ac0fd1c");
    assert_eq!(record.author, "octocat");
    assert_eq!(record.action, EventAction::Push);
    assert_eq!(record.from_branch, Some("octo-org/feature-x".into()));
    assert_eq!(record.to_branch, "main");
    assert_eq!(record.timestamp, Some("2024-05-07T09:05:00+02:00".into()));
    assert_eq!(record.time, time("9", "5", "7"));
}

#[actix_rt::test]
async fn receive_pull_request_events() {
    let ctx = test_context(Box::new(MemoryDb::new()));
    let app = test::init_service(build_actix_app(ctx.clone())).await;

    for data in [PULL_REQUEST_OPENED_DATA, PULL_REQUEST_MERGED_DATA] {
        let resp = test::call_service(
            &app,
            webhook_request(Some("pull_request"), data).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let opened = ctx.db_service.event_records_get_expect(1).await.unwrap();
    assert_eq!(opened.request_id, "ec26c3e57ca3a959ca5aad62de7213c562f8c821");
    assert_eq!(opened.author, "monalisa");
    assert_eq!(opened.action, EventAction::PullRequest);
    assert_eq!(opened.from_branch, Some("feature-y".into()));
    assert_eq!(opened.to_branch, "main");
    assert_eq!(opened.time, time("14", "10", "8"));

    let merged = ctx.db_service.event_records_get_expect(2).await.unwrap();
    assert_eq!(merged.author, "octocat");
    assert_eq!(merged.action, EventAction::PullRequestMerged);
    assert_eq!(merged.timestamp, Some("2024-05-09T16:42:00Z".into()));
    assert_eq!(merged.time, time("16", "42", "9"));
}

#[actix_rt::test]
async fn receive_other_event() {
    let ctx = test_context(Box::new(MemoryDb::new()));
    let app = test::init_service(build_actix_app(ctx.clone())).await;

    let resp = test::call_service(
        &app,
        webhook_request(Some("issues"), ISSUES_OPENED_DATA).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let record = ctx.db_service.event_records_get_expect(1).await.unwrap();
    assert_eq!(record.action, EventAction::Other("issues".into()));
    assert_eq!(record.author, "hubot");
    assert_eq!(record.request_id, "");
    assert_eq!(record.to_branch, "");
    assert_eq!(record.from_branch, None);
    assert_eq!(record.timestamp, None);
    assert_eq!(record.time, None);
}

#[actix_rt::test]
async fn receive_without_event_header() {
    let ctx = test_context(Box::new(MemoryDb::new()));
    let app = test::init_service(build_actix_app(ctx.clone())).await;

    let resp = test::call_service(&app, webhook_request(None, PUSH_EVENT_DATA).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let record = ctx.db_service.event_records_get_expect(1).await.unwrap();
    assert_eq!(record.action, EventAction::Other(String::new()));
    assert_eq!(record.to_branch, "");
}

#[actix_rt::test]
async fn receive_invalid_json() {
    let ctx = test_context(Box::new(MemoryDb::new()));
    let app = test::init_service(build_actix_app(ctx.clone())).await;

    let resp = test::call_service(
        &app,
        webhook_request(Some("push"), "{not json").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().is_some());

    assert_eq!(ctx.db_service.event_records_count(None).await.unwrap(), 0);
}

#[actix_rt::test]
async fn receive_store_failure() {
    let mut db_service = MockDbService::new();
    db_service
        .expect_event_records_create()
        .once()
        .returning(|_| Err(failing_store()));

    let ctx = test_context(Box::new(db_service));
    let app = test::init_service(build_actix_app(ctx)).await;

    let resp = test::call_service(
        &app,
        webhook_request(Some("push"), PUSH_EVENT_DATA).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({"error": "Database error: connection refused"})
    );
}

#[actix_rt::test]
async fn data_empty() {
    let ctx = test_context(Box::new(MemoryDb::new()));
    let app = test::init_service(build_actix_app(ctx)).await;

    let req = test::TestRequest::get().uri("/webhook/data").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!({
            "webhooks": [],
            "stats": {
                "total": 0,
                "pushes": 0,
                "pull_requests": 0,
                "pull_request_merged": 0
            }
        })
    );
}

#[actix_rt::test]
async fn data_newest_first_with_stats() {
    let ctx = test_context(Box::new(MemoryDb::new()));
    let app = test::init_service(build_actix_app(ctx)).await;

    for (event_type, data) in [
        ("push", PUSH_EVENT_DATA),
        ("issues", ISSUES_OPENED_DATA),
        ("pull_request", PULL_REQUEST_OPENED_DATA),
        ("pull_request", PULL_REQUEST_MERGED_DATA),
        ("push", PUSH_EVENT_DATA),
    ] {
        let resp = test::call_service(
            &app,
            webhook_request(Some(event_type), data).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get().uri("/webhook/data").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body["stats"],
        json!({
            "total": 5,
            "pushes": 2,
            "pull_requests": 1,
            "pull_request_merged": 1
        })
    );

    let ids: Vec<_> = body["webhooks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![4, 3, 5, 1, 2]);

    assert_eq!(
        body["webhooks"][0],
        json!({
            "id": 4,
            "request_id": "ec26c3e57ca3a959ca5aad62de7213c562f8c821",
            "author": "octocat",
            "action": "pull_request_merged",
            "from_branch": "feature-y",
            "to_branch": "main",
            "timestamp": "2024-05-09T16:42:00Z",
            "time": {"hours": "16", "minutes": "42", "days": "9"}
        })
    );
}

#[actix_rt::test]
async fn data_store_failure() {
    let mut db_service = MockDbService::new();
    db_service
        .expect_event_records_all()
        .once()
        .returning(|| Err(failing_store()));

    let ctx = test_context(Box::new(db_service));
    let app = test::init_service(build_actix_app(ctx)).await;

    let req = test::TestRequest::get().uri("/webhook/data").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().is_some());
}

#[actix_rt::test]
async fn webhook_scope_allows_cross_origin() {
    let ctx = test_context(Box::new(MemoryDb::new()));
    let app = test::init_service(build_actix_app(ctx)).await;

    let req = test::TestRequest::get()
        .uri("/webhook/data")
        .insert_header(("Origin", "http://localhost:3000"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp
        .headers()
        .contains_key("access-control-allow-origin"));
}

#[actix_rt::test]
async fn health_and_index() {
    let ctx = test_context(Box::new(MemoryDb::new()));
    let app = test::init_service(build_actix_app(ctx)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"database": true}));

    let req = test::TestRequest::get().uri("/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"message": "Welcome on hooklog!"}));
}

#[actix_rt::test]
async fn health_database_down() {
    let mut db_service = MockDbService::new();
    db_service
        .expect_health_check()
        .once()
        .returning(|| Err(failing_store()));

    let ctx = test_context(Box::new(db_service));
    let app = test::init_service(build_actix_app(ctx)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"database": false}));
}

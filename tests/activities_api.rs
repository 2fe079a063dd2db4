use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use activity_board::prelude::*;
use activity_board::server::MemoryStorage;
use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde::Serialize;
use tower::ServiceExt;

#[derive(Debug, Clone, Serialize)]
struct Record {
    id: u32,
    name: String,
}

struct StubService {
    result: Result<Vec<Record>, String>,
    calls: AtomicUsize,
}

impl StubService {
    fn returning(records: Vec<Record>) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(records),
            calls: AtomicUsize::new(0),
        })
    }

    fn failing(reason: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Err(reason.to_string()),
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl ActivityService for StubService {
    type Activity = Record;

    async fn get_activities(&self) -> Result<Vec<Record>, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone().map_err(ServiceError::Unavailable)
    }
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|value| value.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_empty_list_is_returned_as_empty_array() {
    let service = StubService::returning(vec![]);

    let (status, content_type, body) =
        get(create_activity_route(service.clone()), ACTIVITIES_PATH).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn test_records_are_serialized_verbatim() {
    let service = StubService::returning(vec![Record {
        id: 1,
        name: "A".to_string(),
    }]);

    let (status, _, body) = get(create_activity_route(service.clone()), "/api/activities").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"[{"id":1,"name":"A"}]"#);
}

#[tokio::test]
async fn test_failure_returns_generic_message() {
    let service = StubService::failing("connection reset by 10.1.2.3");

    let (status, content_type, body) =
        get(create_activity_route(service.clone()), ACTIVITIES_PATH).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(
        body,
        r#"{"message":"Aktiviteler alınırken bir hata oluştu."}"#
    );
    assert!(!body.contains("10.1.2.3"));
}

#[tokio::test]
async fn test_service_is_called_once_per_request() {
    let ok = StubService::returning(vec![]);
    let failing = StubService::failing("timeout");

    get(create_activity_route(ok.clone()), ACTIVITIES_PATH).await;
    get(create_activity_route(ok.clone()), ACTIVITIES_PATH).await;
    get(create_activity_route(failing.clone()), ACTIVITIES_PATH).await;

    assert_eq!(ok.calls.load(Ordering::SeqCst), 2);
    assert_eq!(failing.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_memory_storage_behind_route() {
    let storage = MemoryStorage::with_activities(vec![
        Activity::new("1", "Hiking").with_status(ActivityStatus::InProgress),
        Activity::new("2", "Chess").with_description("Weekly club"),
    ])
    .unwrap();

    let (status, _, body) = get(create_activity_route(Arc::new(storage)), ACTIVITIES_PATH).await;

    assert_eq!(status, StatusCode::OK);
    let activities: Vec<Activity> = serde_json::from_str(&body).unwrap();
    assert_eq!(activities.len(), 2);
    assert_eq!(activities[0].status, ActivityStatus::InProgress);
    assert_eq!(activities[1].description.as_deref(), Some("Weekly club"));
}

#[tokio::test]
async fn test_unknown_path_is_not_handled() {
    let service = StubService::returning(vec![]);

    let (status, _, _) = get(create_activity_route(service.clone()), "/api/activity").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(service.calls.load(Ordering::SeqCst), 0);
}

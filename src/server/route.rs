use crate::model::ACTIVITIES_PATH;
use crate::server::activity_handler::list_activities;
use crate::server::ActivityService;
use axum::{routing::get, Router};
use std::sync::Arc;

pub fn create_activity_route<S>(service: Arc<S>) -> Router
where
    S: ActivityService + 'static,
{
    Router::new()
        .route(ACTIVITIES_PATH, get(list_activities::<S>))
        .with_state(service)
}

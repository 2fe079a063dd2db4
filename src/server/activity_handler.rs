use crate::server::{ActivityService, ApiError};
use axum::extract::State;
use axum::Json;
use std::sync::Arc;
use tracing::{error, instrument};

/// `GET /api/activities`
///
/// Asks the service once and returns its records unchanged. A failure is
/// logged once and answered with a 500 carrying a generic message.
#[instrument(skip_all)]
pub async fn list_activities<S>(
    State(service): State<Arc<S>>,
) -> Result<Json<Vec<S::Activity>>, ApiError>
where
    S: ActivityService + 'static,
{
    match service.get_activities().await {
        Ok(activities) => Ok(Json(activities)),
        Err(e) => {
            error!(error = %e, "Failed to fetch activities");
            Err(ApiError::from(e))
        }
    }
}

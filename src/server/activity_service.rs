use crate::server::ServiceError;
use async_trait::async_trait;
use serde::Serialize;

/// Capability the activity endpoint delegates to.
///
/// Ordering and contents of the returned records belong to the
/// implementation; the endpoint serializes them as they are.
#[async_trait]
pub trait ActivityService: Send + Sync {
    type Activity: Serialize + Send;

    async fn get_activities(&self) -> Result<Vec<Self::Activity>, ServiceError>;
}

use crate::model::Identifiable;
use crate::server::{ActivityService, ServiceError};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use std::sync::{Arc, RwLock};
use tracing::{debug, error, instrument};

/// In-memory activity store, kept in insertion order.
pub struct MemoryStorage<T> {
    activities: Arc<RwLock<Vec<T>>>,
}

impl<T> Default for MemoryStorage<T>
where
    T: Identifiable + Clone + Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MemoryStorage<T>
where
    T: Identifiable + Clone + Send + Sync,
{
    pub fn new() -> Self {
        Self {
            activities: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn with_activities(activities: impl IntoIterator<Item = T>) -> Result<Self, ServiceError> {
        let storage = Self::new();
        for activity in activities {
            storage.add_activity(activity)?;
        }
        Ok(storage)
    }

    /// Loads a JSON array of activities from `path`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ServiceError>
    where
        T: DeserializeOwned,
    {
        let path = path.as_ref();
        debug!(?path, "Loading activities");
        let content = std::fs::read_to_string(path)?;
        let activities: Vec<T> = serde_json::from_str(&content)?;
        Self::with_activities(activities)
    }

    /// Inserts `activity` unless one with the same identifier is present.
    /// Returns whether it was inserted.
    #[instrument(skip(self, activity), fields(id = activity.identifier()))]
    pub fn add_activity(&self, activity: T) -> Result<bool, ServiceError> {
        match self.activities.write() {
            Ok(mut activities) => {
                if activities
                    .iter()
                    .any(|a| a.identifier() == activity.identifier())
                {
                    debug!("Activity already present");
                    return Ok(false);
                }
                activities.push(activity);
                Ok(true)
            }
            Err(e) => {
                error!(?e, "Failed to add activity");
                Err(ServiceError::Storage(e.to_string()))
            }
        }
    }

    pub fn len(&self) -> Result<usize, ServiceError> {
        self.activities
            .read()
            .map(|activities| activities.len())
            .map_err(|e| ServiceError::Storage(e.to_string()))
    }

    pub fn is_empty(&self) -> Result<bool, ServiceError> {
        Ok(self.len()? == 0)
    }
}

#[async_trait]
impl<T> ActivityService for MemoryStorage<T>
where
    T: Identifiable + Clone + Serialize + Send + Sync,
{
    type Activity = T;

    /// Emits no events of its own; the caller decides what to log.
    #[instrument(skip(self))]
    async fn get_activities(&self) -> Result<Vec<T>, ServiceError> {
        self.activities
            .read()
            .map(|activities| (*activities).clone())
            .map_err(|e| ServiceError::Storage(e.to_string()))
    }
}

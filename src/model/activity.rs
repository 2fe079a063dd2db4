use crate::model::Identifiable;
use crate::model::Named;
use serde::{Deserialize, Serialize};

/// Path the activity list is served under.
pub const ACTIVITIES_PATH: &str = "/api/activities";

pub type ActivityId = String;

#[derive(Default, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityStatus {
    #[default]
    NotStarted,
    InProgress,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub status: ActivityStatus,
}

impl Activity {
    pub fn new(id: impl Into<ActivityId>, name: impl Into<String>) -> Self {
        Activity {
            id: id.into(),
            name: name.into(),
            description: None,
            status: ActivityStatus::NotStarted,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_status(mut self, status: ActivityStatus) -> Self {
        self.status = status;
        self
    }
}

impl Identifiable for Activity {
    fn identifier(&self) -> &str {
        &self.id
    }
}

impl Named for Activity {
    fn name(&self) -> &str {
        &self.name
    }
}

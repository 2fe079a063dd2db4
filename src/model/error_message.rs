use serde::{Deserialize, Serialize};

/// Message returned to clients when the activity list cannot be retrieved.
pub const ACTIVITIES_FETCH_FAILED: &str = "Aktiviteler alınırken bir hata oluştu.";

/// JSON body of every error response: `{"message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn activities_fetch_failed() -> Self {
        Self::new(ACTIVITIES_FETCH_FAILED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_message_object() {
        let body = serde_json::to_string(&ErrorMessage::activities_fetch_failed()).unwrap();
        assert_eq!(
            body,
            r#"{"message":"Aktiviteler alınırken bir hata oluştu."}"#
        );
    }
}

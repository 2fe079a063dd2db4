use crate::model::{Activity, ErrorMessage, ACTIVITIES_FETCH_FAILED, ACTIVITIES_PATH};
use gloo_net::http::Request;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(#[from] gloo_net::Error),

    #[error("Server responded with {status}: {message}")]
    Server { status: u16, message: String },
}

impl ClientError {
    /// Text safe to show to the user.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Server { message, .. } => message.clone(),
            ClientError::Transport(_) => ACTIVITIES_FETCH_FAILED.to_string(),
        }
    }
}

/// Reads the activity list from the HTTP API.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActivityClient {
    base_url: String,
}

impl ActivityClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Uses `API_BASE_URL` from build time, or the page's own origin.
    pub fn from_env() -> Self {
        Self::new(option_env!("API_BASE_URL").unwrap_or_default())
    }

    pub fn activities_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), ACTIVITIES_PATH)
    }

    pub async fn get_activities(&self) -> Result<Vec<Activity>, ClientError> {
        let response = Request::get(&self.activities_url()).send().await?;

        if response.ok() {
            return Ok(response.json::<Vec<Activity>>().await?);
        }

        let status = response.status();
        let message = response
            .json::<ErrorMessage>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| ACTIVITIES_FETCH_FAILED.to_string());
        Err(ClientError::Server { status, message })
    }
}

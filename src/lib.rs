#[cfg(feature = "yew")]
pub mod client;
#[cfg(feature = "yew")]
pub mod components;
#[cfg(feature = "yew")]
pub mod hooks;
pub mod model;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;

pub mod prelude {
    #[cfg(feature = "yew")]
    pub use crate::client::{ActivityClient, ClientError};
    #[cfg(feature = "yew")]
    pub use crate::components::*;
    #[cfg(feature = "yew")]
    pub use crate::hooks::{use_activities, FetchState};
    pub use crate::model::Activity;
    pub use crate::model::ActivityId;
    pub use crate::model::ActivityStatus;
    pub use crate::model::ErrorMessage;
    pub use crate::model::Identifiable;
    pub use crate::model::Named;
    pub use crate::model::ACTIVITIES_FETCH_FAILED;
    pub use crate::model::ACTIVITIES_PATH;
    #[cfg(feature = "server")]
    pub use crate::server::{create_activity_route, ActivityService, ApiError, ServiceError};
}

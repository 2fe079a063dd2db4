mod activity;
mod error_message;
mod identifiable;
mod named;

pub use activity::{Activity, ActivityId, ActivityStatus, ACTIVITIES_PATH};
pub use error_message::{ErrorMessage, ACTIVITIES_FETCH_FAILED};
pub use identifiable::Identifiable;
pub use named::Named;

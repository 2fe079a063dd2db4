mod activity_handler;
mod activity_service;
mod error;
mod memory_storage;
pub mod route;
pub mod telemetry;
#[cfg(test)]
mod test_support;

pub use activity_handler::list_activities;
pub use activity_service::ActivityService;
pub use error::{ApiError, ServiceError};
pub use memory_storage::MemoryStorage;
pub use route::create_activity_route;

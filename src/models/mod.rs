mod health;
mod response;
mod state;

pub use health::{DbStatus, HealthStatus, ServiceStatus};
pub use response::ApiResponse;
pub use state::AppState;

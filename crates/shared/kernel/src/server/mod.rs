pub mod body;
pub mod error;
pub mod health;
pub mod response;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use response::ApiJson;
pub use state::ApiState;

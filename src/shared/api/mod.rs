pub mod multipart;
pub mod response;

pub use response::{ApiError, ApiResponse};

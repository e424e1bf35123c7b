pub mod error;
pub mod links;
pub mod months;
pub mod toggle;

pub use error::{ContentError, RepoError};

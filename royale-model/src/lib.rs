//! Royale API data representations.

pub mod card;
pub mod error;
pub mod request;
pub mod response;

pub use error::{ApiError, InvalidArgument};

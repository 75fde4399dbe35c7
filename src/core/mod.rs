pub mod error;
pub mod http;
pub mod numeric;

pub use error::{AppError, Result};

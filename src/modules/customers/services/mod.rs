pub mod customer_api;

pub use customer_api::{CustomerApi, CustomerRecord};

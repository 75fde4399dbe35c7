//! Ledgerline ERP Client Library
//!
//! Client-side drafting and submission for the Ledgerline ERP backend:
//! customers, inventory catalog, order documents, and accounting vouchers.
//! All business persistence lives behind the backend's REST API; this crate
//! owns the in-memory drafts, the derived-total computations, and the HTTP
//! calls that carry them across.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::customers;
pub use modules::inventory;
pub use modules::orders;
pub use modules::vouchers;

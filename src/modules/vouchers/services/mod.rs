pub mod draft;
pub mod submission;
pub mod totals;
pub mod voucher_api;

pub use draft::{DraftPhase, DraftSession};
pub use submission::{voucher_payload, EntryPayload, ItemPayload, VoucherPayload};
pub use totals::{voucher_totals, VoucherTotals};
pub use voucher_api::{VoucherApi, VoucherBackend, VoucherRecord};

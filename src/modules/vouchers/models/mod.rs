pub mod forms;
pub mod line_item;
pub mod voucher;

pub use forms::{EntryForm, LineItemForm};
pub use line_item::{GstRate, LineItem};
pub use voucher::{DispatchDetails, Entry, EntryType, VoucherDraft, VoucherType};

pub mod delivery_order;
pub mod other_cost;
pub mod purchase_order;
pub mod records;
pub mod status;

pub use delivery_order::{DeliveryOrderDraft, SalesDocumentKind};
pub use other_cost::OtherCost;
pub use purchase_order::PurchaseOrderDraft;
pub use records::{GoodsReceiptNote, OrderRecord};
pub use status::ApprovalStatus;

pub mod order_api;
pub mod submission;
pub mod totals;

pub use order_api::OrderApi;
pub use submission::{
    delivery_order_payload, purchase_order_payload, DeliveryOrderPayload, OtherCostPayload,
    PurchaseOrderPayload,
};
pub use totals::{delivery_order_totals, purchase_order_totals, OrderTotals};

//! Work Orders Module
//!
//! Repair and maintenance tasks tracked from request to closure. Each order
//! carries a sequential `WO-` code, moves through a fixed status lifecycle,
//! and can collect comments and file attachments along the way. Completing
//! an order against an asset records the work on that asset through the
//! assets client.

// Public exports
pub mod contract;
pub use contract::{
    client::WorkOrdersApi, error::WorkOrdersError, Priority, WorkOrder, WorkOrderAttachment,
    WorkOrderComment, WorkOrderListFilter, WorkOrderStatus,
};

pub mod module;
pub use module::WorkOrdersModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;

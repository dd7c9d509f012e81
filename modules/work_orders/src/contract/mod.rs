//! Public contract for the work orders module

pub mod client;
pub mod error;
pub mod model;

pub use client::WorkOrdersApi;
pub use error::WorkOrdersError;
pub use model::{
    NewAttachment, NewComment, NewWorkOrder, Priority, UpdateWorkOrder, WorkOrder,
    WorkOrderAttachment, WorkOrderComment, WorkOrderListFilter, WorkOrderStatus,
};

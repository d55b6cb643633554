//! Acquisitions purchase-order model (the downstream ordering system's schema).
//!
//! This crate only describes data: orders, lines, their sub-records and the
//! canonical enumerations with their wire labels. It performs no IO.

pub mod enums;
pub mod line;
pub mod order;
pub mod template;

pub use enums::{
    CreateInventory, DiscountType, DistributionType, OrderFormat, OrderType, RefNumberType,
    Source, WorkflowStatus,
};
pub use line::{
    Contributor, Cost, Details, Eresource, FundDistribution, Location, Physical, PoLine,
    ProductIdentifier, ReferenceNumberItem, VendorDetail,
};
pub use order::{CloseReason, CustomFields, Ongoing, PurchaseOrder, Tags};
pub use template::{OrderTemplate, TemplatePair};

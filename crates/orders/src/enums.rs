//! Canonical enumerations of the acquisitions schema.
//!
//! Labels are the exact strings the ordering system accepts.

use mosaic_core::{Presence, labeled_enum};

labeled_enum! {
    /// Purchase line format; decides which cost quantities are meaningful.
    pub enum OrderFormat {
        ElectronicResource => "Electronic Resource",
        PEMix => "P/E Mix",
        Other => "Other",
        PhysicalResource => "Physical Resource",
    }
}

labeled_enum! {
    pub enum OrderType {
        OneTime => "One-Time",
        Ongoing => "Ongoing",
    }
}

labeled_enum! {
    pub enum WorkflowStatus {
        Pending => "Pending",
        Open => "Open",
        Closed => "Closed",
    }
}

labeled_enum! {
    /// Origin of a purchase line record.
    pub enum Source {
        User => "User",
        Api => "API",
        Edi => "EDI",
        Marc => "MARC",
        EbsconetIntegration => "EBSCONET",
    }
}

labeled_enum! {
    pub enum RefNumberType {
        VendorContinuationReferenceNumber => "Vendor continuation reference number",
        VendorOrderReferenceNumber => "Vendor order reference number",
        VendorSubscriptionReferenceNumber => "Vendor subscription reference number",
        VendorInternalNumber => "Vendor internal number",
        VendorTitleNumber => "Vendor title number",
    }
}

labeled_enum! {
    pub enum DistributionType {
        Amount => "amount",
        Percentage => "percentage",
    }
}

labeled_enum! {
    /// Inventory records created when the line is opened.
    pub enum CreateInventory {
        InstanceHoldingItem => "Instance, Holding, Item",
        InstanceHolding => "Instance, Holding",
        Instance => "Instance",
        NoInventory => "None",
    }
}

labeled_enum! {
    pub enum DiscountType {
        Amount => "amount",
        Percentage => "percentage",
    }
}

macro_rules! present_when_set {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Presence for $t {
                fn is_present(&self) -> bool {
                    true
                }
            }
        )+
    };
}

present_when_set!(
    OrderFormat,
    OrderType,
    WorkflowStatus,
    Source,
    RefNumberType,
    DistributionType,
    CreateInventory,
    DiscountType,
);

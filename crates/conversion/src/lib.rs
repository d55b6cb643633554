//! `mosaic-conversion`: merges a mosaic order request onto an order template and
//! validates the result.
//!
//! The engine is pure: no IO, no shared mutable state. Template lookup and order
//! submission live in `mosaic-infra`.

pub mod codes;
pub mod currency;
pub mod electronic;
pub mod line_fields;
pub mod order;
pub mod physical;
pub mod po_line;
pub mod request;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;

pub use order::OrderConverter;
pub use po_line::PoLineConverter;
pub use request::{
    CustomFieldEntityType, MosaicContributor, MosaicCustomField, MosaicDetails, MosaicEresource,
    MosaicFundDistribution, MosaicLocation, MosaicOrder, MosaicOrderRequest, MosaicPhysical,
    MosaicProductId, MosaicReferenceNumber,
};
pub use validation::{
    MosaicValidation, RequiredFieldViolation, ValidationStatus, validate_order, validate_po_line,
    validation_status,
};

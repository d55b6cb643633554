//! Fixtures shared by the converter tests.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use mosaic_core::{IdGenerator, OrderId};
use mosaic_orders::{
    Contributor, Cost, OrderFormat, OrderType, PoLine, PurchaseOrder, ReferenceNumberItem,
    RefNumberType, TemplatePair, VendorDetail, WorkflowStatus,
};

use crate::request::{MosaicOrder, MosaicReferenceNumber};

/// Deterministic ids: 1, 2, 3, ...
#[derive(Debug, Default)]
pub(crate) struct SequentialIds(AtomicU64);

impl IdGenerator for SequentialIds {
    fn next_uuid(&self) -> Uuid {
        Uuid::from_u128(u128::from(self.0.fetch_add(1, Ordering::Relaxed) + 1))
    }
}

pub(crate) const TEMPLATE_ID: &str = "2e1bbcf9-dbef-45d6-b496-cff85a0a6d80";

pub(crate) fn sample_template_line() -> PoLine {
    PoLine {
        title_or_package: Some("Template title".to_string()),
        order_format: Some(OrderFormat::PhysicalResource),
        acquisition_method: Some("purchase-at-vendor-system".to_string()),
        contributors: vec![Contributor {
            contributor: "Template Author".to_string(),
            contributor_name_type_id: "personal".to_string(),
        }],
        cost: Some(Cost {
            list_unit_price: Some(1.0),
            currency: Some("USD".to_string()),
            quantity_physical: Some(1),
            quantity_electronic: Some(0),
            ..Cost::default()
        }),
        vendor_detail: Some(VendorDetail {
            reference_numbers: vec![ReferenceNumberItem {
                ref_number: "template-ref".to_string(),
                ref_number_type: RefNumberType::VendorOrderReferenceNumber,
            }],
            ..VendorDetail::default()
        }),
        ..PoLine::default()
    }
}

pub(crate) fn sample_template_pair() -> TemplatePair {
    let order = PurchaseOrder {
        id: TEMPLATE_ID.parse::<OrderId>().ok(),
        order_type: Some(OrderType::OneTime),
        vendor: Some("template-vendor".to_string()),
        bill_to: Some("template-bill-to".to_string()),
        workflow_status: Some(WorkflowStatus::Pending),
        acq_unit_ids: vec!["template-unit".to_string()],
        notes: vec!["template note".to_string()],
        ..PurchaseOrder::default()
    };
    TemplatePair::new(order, sample_template_line()).expect("sample template has an id")
}

/// A request that, merged onto the sample template, passes validation.
pub(crate) fn sample_request() -> MosaicOrder {
    MosaicOrder {
        title: Some("Dune".to_string()),
        format: Some(OrderFormat::PhysicalResource),
        list_unit_price: Some(12.5),
        currency: Some("USD".to_string()),
        quantity_physical: Some(2),
        vendor: Some("vendor-1".to_string()),
        reference_numbers: vec![MosaicReferenceNumber {
            ref_number: "mosaic-ref-1".to_string(),
            ref_number_type: RefNumberType::VendorOrderReferenceNumber,
        }],
        ..MosaicOrder::default()
    }
}

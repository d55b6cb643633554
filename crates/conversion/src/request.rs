//! The simplified "mosaic order" request.
//!
//! Every field is optional. An absent (or blank / empty) field means "keep the
//! template's value".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use mosaic_core::{OrderId, labeled_enum};
use mosaic_orders::{CreateInventory, DistributionType, OrderFormat, RefNumberType, WorkflowStatus};

use crate::codes;

/// Envelope posted by the caller: an optional template id plus the order itself.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MosaicOrderRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_template_id: Option<String>,
    pub mosaic_order: MosaicOrder,
}

labeled_enum! {
    /// Record type a request custom field belongs to.
    pub enum CustomFieldEntityType {
        PurchaseOrder => "PURCHASE_ORDER",
        PoLine => "PO_LINE",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MosaicCustomField {
    pub ref_id: String,
    pub entity_type: CustomFieldEntityType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<JsonValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MosaicContributor {
    pub contributor: String,
    pub contributor_name_type_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MosaicProductId {
    pub product_id: String,
    pub product_id_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MosaicDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_acknowledged: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_bindery_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiving_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_from: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_to: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_interval: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub product_ids: Vec<MosaicProductId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MosaicReferenceNumber {
    pub ref_number: String,
    pub ref_number_type: RefNumberType,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MosaicLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holding_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_physical: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_electronic: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MosaicFundDistribution {
    pub fund_id: String,
    pub distribution_type: DistributionType,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expense_class_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MosaicPhysical {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_inventory: Option<CreateInventory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_supplier: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MosaicEresource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_inventory: Option<CreateInventory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_limit: Option<String>,
}

/// Override set for one order and its single line.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MosaicOrder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<OrderId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Informational only; contributors carry the line's authorship.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contributors: Vec<MosaicContributor>,
    #[serde(
        default,
        with = "codes::format_code",
        skip_serializing_if = "Option::is_none"
    )]
    pub format: Option<OrderFormat>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_unit_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_unit_price_electronic: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_physical: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_electronic: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bill_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship_to: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub acq_unit_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_fields: Vec<MosaicCustomField>,
    #[serde(
        default,
        with = "codes::workflow_status_code",
        skip_serializing_if = "Option::is_none"
    )]
    pub workflow_status: Option<WorkflowStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<MosaicDetails>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reference_numbers: Vec<MosaicReferenceNumber>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<MosaicLocation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fund_distribution: Vec<MosaicFundDistribution>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical: Option<MosaicPhysical>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eresource: Option<MosaicEresource>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requester_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub po_line_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renewal_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acquisition_method: Option<String>,

    // Flat sub-object fields from the earlier request schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_type_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_supplier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_limit: Option<String>,
}

//! Purchase order line and its sub-records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use mosaic_core::{OrderId, PoLineId};

use crate::enums::{
    CreateInventory, DiscountType, DistributionType, OrderFormat, RefNumberType, Source,
};
use crate::order::{CustomFields, Tags};

/// Pricing and quantities of a line.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cost {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_unit_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_unit_price_electronic: Option<f64>,
    /// ISO 4217 code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_physical: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_electronic: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<DiscountType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub po_line_estimated_price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contributor {
    pub contributor: String,
    pub contributor_name_type_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductIdentifier {
    pub product_id: String,
    pub product_id_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<String>,
}

/// Acknowledgement, subscription and product-identifier details.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Details {
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
    pub product_ids: Vec<ProductIdentifier>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceNumberItem {
    pub ref_number: String,
    pub ref_number_type: RefNumberType,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_account: Option<String>,
    #[serde(default)]
    pub reference_numbers: Vec<ReferenceNumberItem>,
}

/// Where copies are received, and how many of each kind.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
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
pub struct FundDistribution {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encumbrance: Option<String>,
    pub fund_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expense_class_id: Option<String>,
    pub distribution_type: DistributionType,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Physical {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_inventory: Option<CreateInventory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_supplier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_due: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_receipt_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<String>,
}

/// Electronic resource ("eresource") details.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Eresource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activation_due: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_inventory: Option<CreateInventory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_activation: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_limit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_type: Option<String>,
}

/// Purchase order line.
///
/// Every field is optional on the wire: a template line may leave any of them unset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoLine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PoLineId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkin_items: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agreement_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acquisition_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automatic_export: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation_restriction: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation_restriction_note: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub claims: Vec<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claiming_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claiming_interval: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contributors: Vec<Contributor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<Cost>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Details>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donor: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub donor_organization_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eresource: Option<Eresource>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fund_distribution: Vec<FundDistribution>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_package: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<Location>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub search_location_ids: Vec<String>,
    #[serde(
        default,
        rename = "lastEDIExportDate",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_edi_export_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_format: Option<OrderFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_po_line_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical: Option<Physical>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub po_line_description: Option<String>,
    /// Assigned by the ordering system when the order is persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub po_line_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_order_id: Option<OrderId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renewal_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requester: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rush: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_or_package: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_detail: Option<VendorDetail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<CustomFields>,
}

impl PoLine {
    /// Reference numbers of the vendor detail, empty when there is no vendor detail.
    pub fn reference_numbers(&self) -> &[ReferenceNumberItem] {
        self.vendor_detail
            .as_ref()
            .map(|v| v.reference_numbers.as_slice())
            .unwrap_or(&[])
    }
}

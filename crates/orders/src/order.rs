use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use mosaic_core::OrderId;

use crate::enums::{OrderType, WorkflowStatus};
use crate::line::PoLine;

/// Free-form custom field values keyed by the field's reference id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomFields(BTreeMap<String, JsonValue>);

impl CustomFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, ref_id: &str) -> Option<&JsonValue> {
        self.0.get(ref_id)
    }

    pub fn insert(&mut self, ref_id: impl Into<String>, value: JsonValue) {
        self.0.insert(ref_id.into(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(String, JsonValue)> for CustomFields {
    fn from_iter<I: IntoIterator<Item = (String, JsonValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tags {
    #[serde(default)]
    pub tag_list: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseReason {
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Renewal settings of an ongoing order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ongoing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_subscription: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_renewal: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renewal_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_period: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Composite purchase order: order-level fields plus its lines.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<OrderId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bill_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_reason: Option<CloseReason>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_ordered: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_po: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub po_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub po_number_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub po_number_suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_type: Option<OrderType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub re_encumber: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ongoing: Option<Ongoing>,
    /// Id of the template this order was created from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<OrderId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_credited: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_estimated_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_encumbered: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_expended: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_items: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_status: Option<WorkflowStatus>,
    #[serde(default, alias = "compositePoLines", skip_serializing_if = "Vec::is_empty")]
    pub po_lines: Vec<PoLine>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub acq_unit_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_pol_number: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<CustomFields>,
}

impl PurchaseOrder {
    pub fn first_line(&self) -> Option<&PoLine> {
        self.po_lines.first()
    }

    /// Number assigned to the first line by the ordering system, if any.
    pub fn first_line_number(&self) -> Option<&str> {
        self.first_line()?.po_line_number.as_deref()
    }
}

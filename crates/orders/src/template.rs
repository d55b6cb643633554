//! Order templates and the (order, line) pair the merge engine starts from.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use mosaic_core::{DomainError, DomainResult, OrderId};

use crate::line::PoLine;
use crate::order::PurchaseOrder;

/// A stored order template as the ordering system returns it: one flat JSON
/// document carrying both order-level and line-level fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderTemplate(Map<String, JsonValue>);

impl OrderTemplate {
    pub fn from_map(fields: Map<String, JsonValue>) -> Self {
        Self(fields)
    }

    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(JsonValue::as_str)
    }

    pub fn get(&self, field: &str) -> Option<&JsonValue> {
        self.0.get(field)
    }

    pub fn set(&mut self, field: impl Into<String>, value: JsonValue) {
        self.0.insert(field.into(), value);
    }

    pub fn into_value(self) -> JsonValue {
        JsonValue::Object(self.0)
    }
}

/// Template order paired with its template line.
///
/// Invariant: the template order always has an identity; it becomes the `template`
/// reference of every order built from this pair.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplatePair {
    template_id: OrderId,
    order: PurchaseOrder,
    line: PoLine,
}

impl TemplatePair {
    pub fn new(order: PurchaseOrder, line: PoLine) -> DomainResult<Self> {
        let template_id = order
            .id
            .ok_or_else(|| DomainError::invariant("order template must have an id"))?;
        Ok(Self {
            template_id,
            order,
            line,
        })
    }

    /// Read both halves of the pair from one template document.
    ///
    /// Returns `Ok(None)` when the document carries no id, which the ordering
    /// system uses to signal a missing template.
    pub fn from_template(template: &OrderTemplate) -> DomainResult<Option<Self>> {
        let value = JsonValue::Object(template.0.clone());
        let order: PurchaseOrder = serde_json::from_value(value.clone())
            .map_err(|e| DomainError::validation(format!("malformed order template: {e}")))?;
        if order.id.is_none() {
            return Ok(None);
        }
        let line: PoLine = serde_json::from_value(value)
            .map_err(|e| DomainError::validation(format!("malformed order template line: {e}")))?;
        Self::new(order, line).map(Some)
    }

    pub fn template_id(&self) -> OrderId {
        self.template_id
    }

    pub fn order(&self) -> &PurchaseOrder {
        &self.order
    }

    pub fn line(&self) -> &PoLine {
        &self.line
    }
}

//! Order-level conversion: template pair + request -> merged purchase order.

use std::sync::Arc;

use tracing::{debug, info};

use mosaic_core::{IdGenerator, OrderId, OverlayExt, UuidV7Generator, replace_if_present};
use mosaic_orders::{OrderType, PurchaseOrder, TemplatePair};

use crate::line_fields::project_custom_fields;
use crate::po_line::PoLineConverter;
use crate::request::{CustomFieldEntityType, MosaicOrder};

/// Merges a request onto a template pair.
///
/// Both inputs are read-only; every call builds a fresh order. The converter holds
/// no mutable state, so one instance may serve concurrent requests.
#[derive(Debug, Clone)]
pub struct OrderConverter {
    ids: Arc<dyn IdGenerator>,
    po_lines: PoLineConverter,
}

impl Default for OrderConverter {
    fn default() -> Self {
        Self::new(Arc::new(UuidV7Generator))
    }
}

impl OrderConverter {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        let po_lines = PoLineConverter::new(Arc::clone(&ids));
        Self { ids, po_lines }
    }

    /// Seed an order from the template pair, then apply the request's overrides.
    ///
    /// The result always carries exactly one line.
    pub fn convert(&self, request: &MosaicOrder, templates: &TemplatePair) -> PurchaseOrder {
        info!(
            template_id = %templates.template_id(),
            title = ?request.title,
            "converting mosaic order"
        );
        let order = self.create_from_template(templates);
        self.apply_overrides(order, request)
    }

    /// Copy the template order under a new identity, with one line copied from the
    /// template line.
    pub fn create_from_template(&self, templates: &TemplatePair) -> PurchaseOrder {
        let template = templates.order();
        debug!(template_id = %templates.template_id(), "creating order from template");

        PurchaseOrder {
            id: Some(OrderId::from_uuid(self.ids.next_uuid())),
            template: Some(templates.template_id()),
            order_type: template.order_type.or(Some(OrderType::OneTime)),
            po_number: None,
            po_lines: vec![self.po_lines.create_from_template(templates.line())],
            ..template.clone()
        }
    }

    /// Apply order-level overrides, then delegate line-level overrides.
    pub fn apply_overrides(&self, order: PurchaseOrder, request: &MosaicOrder) -> PurchaseOrder {
        let custom_fields = project_custom_fields(request, CustomFieldEntityType::PurchaseOrder);
        let custom_fields = if custom_fields.is_empty() {
            order.custom_fields
        } else {
            Some(custom_fields)
        };

        let order = PurchaseOrder {
            id: order.id.overlay(request.id),
            assigned_to: order.assigned_to.overlay(request.assigned_to.clone()),
            vendor: order.vendor.overlay(request.vendor.clone()),
            workflow_status: order.workflow_status.overlay(request.workflow_status),
            bill_to: order.bill_to.overlay(request.bill_to.clone()),
            ship_to: order.ship_to.overlay(request.ship_to.clone()),
            acq_unit_ids: replace_if_present(order.acq_unit_ids, request.acq_unit_ids.clone()),
            custom_fields,
            ..order
        };
        debug!(order_id = ?order.id, vendor = ?order.vendor, "applied order overrides");

        self.po_lines.apply_overrides(order, request)
    }
}

//! Purchase line creation and override application.

use std::sync::Arc;

use tracing::debug;

use mosaic_core::{IdGenerator, OverlayExt, PoLineId, replace_if_present};
use mosaic_orders::{PoLine, PurchaseOrder, Source};

use crate::electronic::merge_eresource;
use crate::line_fields::{
    merge_contributors, merge_cost, merge_details, merge_flat_resource_fields,
    merge_fund_distribution, merge_line_custom_fields, merge_locations, merge_vendor_detail,
};
use crate::physical::merge_physical;
use crate::request::MosaicOrder;

/// One field-scoped merge step, in application order.
type LineMerge = fn(PoLine, &MosaicOrder) -> PoLine;

/// Builds the single purchase line of a converted order.
#[derive(Debug, Clone)]
pub struct PoLineConverter {
    ids: Arc<dyn IdGenerator>,
}

impl PoLineConverter {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }

    /// Copy a template line under a new identity.
    ///
    /// The copy is marked as API-sourced and drops the line number and order
    /// reference, which the ordering system assigns on submission.
    pub fn create_from_template(&self, template: &PoLine) -> PoLine {
        PoLine {
            id: Some(PoLineId::from_uuid(self.ids.next_uuid())),
            source: Some(Source::Api),
            po_line_number: None,
            purchase_order_id: None,
            ..template.clone()
        }
    }

    /// Apply the request's line-level overrides to the order's line.
    ///
    /// Also replaces the order-level notes, which the request carries beside the
    /// line fields. The returned order holds exactly one line.
    pub fn apply_overrides(&self, order: PurchaseOrder, request: &MosaicOrder) -> PurchaseOrder {
        let mut order = order;
        let line = order.po_lines.drain(..).next().unwrap_or_default();

        let line = apply_descriptive_fields(line, request);
        debug!(title = ?line.title_or_package, "applied descriptive overrides");

        let steps: [LineMerge; 10] = [
            merge_cost,
            merge_contributors,
            merge_details,
            merge_vendor_detail,
            merge_locations,
            merge_fund_distribution,
            merge_flat_resource_fields,
            merge_physical,
            merge_eresource,
            merge_line_custom_fields,
        ];
        let line = steps
            .into_iter()
            .fold(line, |line, merge| merge(line, request));
        debug!(
            order_format = ?line.order_format,
            locations = line.locations.len(),
            funds = line.fund_distribution.len(),
            "applied po line overrides"
        );

        PurchaseOrder {
            notes: replace_if_present(order.notes, request.notes.clone()),
            po_lines: vec![line],
            ..order
        }
    }
}

fn apply_descriptive_fields(line: PoLine, request: &MosaicOrder) -> PoLine {
    PoLine {
        title_or_package: line.title_or_package.overlay(request.title.clone()),
        publication_date: line.publication_date.overlay(request.publication_date.clone()),
        edition: line.edition.overlay(request.edition.clone()),
        requester: line.requester.overlay(request.requester_name.clone()),
        selector: line.selector.overlay(request.selector_name.clone()),
        po_line_description: line
            .po_line_description
            .overlay(request.po_line_description.clone()),
        renewal_note: line.renewal_note.overlay(request.renewal_note.clone()),
        acquisition_method: line
            .acquisition_method
            .overlay(request.acquisition_method.clone()),
        ..line
    }
}

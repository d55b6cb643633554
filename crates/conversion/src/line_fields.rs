//! Field-scoped mergers for the purchase line.
//!
//! Each merger takes the line by value and returns the merged line, touching only
//! the fields it owns. They are independent of each other; the PoLine converter
//! decides the order they run in.

use tracing::debug;

use mosaic_core::{OverlayExt, replace_if_present};
use mosaic_orders::{
    Contributor, Cost, CustomFields, Details, Eresource, FundDistribution, Location, OrderFormat,
    Physical, PoLine, ProductIdentifier, ReferenceNumberItem, VendorDetail,
};

use crate::request::{CustomFieldEntityType, MosaicOrder};

/// Format-driven cost merge.
///
/// Runs only when the request carries a physical or electronic list price. The
/// request format picks the branch:
/// - `ELECTRONIC` with an electronic price: electronic price and quantity from the
///   request, physical quantity forced to 0, line becomes an electronic resource;
/// - `P_E_MIX`: both prices and quantities from the request;
/// - anything else: physical price and quantity from the request, electronic
///   quantity forced to 0, line becomes a physical resource.
///
/// A non-blank request currency replaces the cost currency in every branch.
pub fn merge_cost(line: PoLine, request: &MosaicOrder) -> PoLine {
    if request.list_unit_price.is_none() && request.list_unit_price_electronic.is_none() {
        return line;
    }
    let base = line.cost.clone().unwrap_or_default();

    let (cost, order_format) = match request.format {
        Some(OrderFormat::ElectronicResource) if request.list_unit_price_electronic.is_some() => (
            Cost {
                list_unit_price_electronic: request.list_unit_price_electronic,
                quantity_electronic: request.quantity_electronic,
                quantity_physical: Some(0),
                ..base
            },
            OrderFormat::ElectronicResource,
        ),
        Some(OrderFormat::PEMix) => (
            Cost {
                list_unit_price: request.list_unit_price,
                list_unit_price_electronic: request.list_unit_price_electronic,
                quantity_physical: request.quantity_physical,
                quantity_electronic: request.quantity_electronic,
                ..base
            },
            OrderFormat::PEMix,
        ),
        _ => (
            Cost {
                list_unit_price: request.list_unit_price,
                quantity_physical: request.quantity_physical,
                quantity_electronic: Some(0),
                ..base
            },
            OrderFormat::PhysicalResource,
        ),
    };

    let cost = Cost {
        currency: cost.currency.overlay(request.currency.clone()),
        ..cost
    };
    debug!(order_format = %order_format, currency = ?cost.currency, "merged po line cost");

    PoLine {
        cost: Some(cost),
        order_format: Some(order_format),
        ..line
    }
}

/// Replace the contributor list wholesale when the request has any.
pub fn merge_contributors(line: PoLine, request: &MosaicOrder) -> PoLine {
    let contributors = request
        .contributors
        .iter()
        .map(|c| Contributor {
            contributor: c.contributor.clone(),
            contributor_name_type_id: c.contributor_name_type_id.clone(),
        })
        .collect();

    PoLine {
        contributors: replace_if_present(line.contributors, contributors),
        ..line
    }
}

/// Replace the details wholesale when the request has a details object.
pub fn merge_details(line: PoLine, request: &MosaicOrder) -> PoLine {
    let Some(incoming) = request.details.as_ref() else {
        return line;
    };

    let details = Details {
        is_acknowledged: incoming.is_acknowledged,
        is_bindery_active: incoming.is_bindery_active,
        receiving_note: incoming.receiving_note.clone(),
        subscription_from: incoming.subscription_from,
        subscription_to: incoming.subscription_to,
        subscription_interval: incoming.subscription_interval,
        product_ids: incoming
            .product_ids
            .iter()
            .map(|p| ProductIdentifier {
                product_id: p.product_id.clone(),
                product_id_type: p.product_id_type.clone(),
                qualifier: None,
            })
            .collect(),
    };

    PoLine {
        details: Some(details),
        ..line
    }
}

/// Rebuild the vendor detail from the request's reference numbers.
///
/// Triggered by a non-blank request vendor. The template's vendor detail,
/// reference numbers included, is discarded.
pub fn merge_vendor_detail(line: PoLine, request: &MosaicOrder) -> PoLine {
    if !request.vendor.as_deref().is_some_and(|v| !v.trim().is_empty()) {
        return line;
    }

    let reference_numbers = request
        .reference_numbers
        .iter()
        .map(|r| ReferenceNumberItem {
            ref_number: r.ref_number.clone(),
            ref_number_type: r.ref_number_type,
        })
        .collect::<Vec<_>>();
    debug!(count = reference_numbers.len(), "replaced vendor reference numbers");

    PoLine {
        vendor_detail: Some(VendorDetail {
            reference_numbers,
            ..VendorDetail::default()
        }),
        ..line
    }
}

pub fn merge_locations(line: PoLine, request: &MosaicOrder) -> PoLine {
    let locations = request
        .locations
        .iter()
        .map(|l| Location {
            location_id: l.location_id.clone(),
            holding_id: l.holding_id.clone(),
            tenant_id: l.tenant_id.clone(),
            quantity: l.quantity,
            quantity_physical: l.quantity_physical,
            quantity_electronic: l.quantity_electronic,
        })
        .collect();

    PoLine {
        locations: replace_if_present(line.locations, locations),
        ..line
    }
}

pub fn merge_fund_distribution(line: PoLine, request: &MosaicOrder) -> PoLine {
    let funds = request
        .fund_distribution
        .iter()
        .map(|f| FundDistribution {
            code: None,
            encumbrance: None,
            fund_id: f.fund_id.clone(),
            expense_class_id: f.expense_class_id.clone(),
            distribution_type: f.distribution_type,
            value: f.value,
        })
        .collect();

    PoLine {
        fund_distribution: replace_if_present(line.fund_distribution, funds),
        ..line
    }
}

/// Apply the flat `materialTypeId` / `materialSupplier` / `accessProvider` /
/// `userLimit` request fields onto the physical and e-resource details.
pub fn merge_flat_resource_fields(line: PoLine, request: &MosaicOrder) -> PoLine {
    let mut line = line;

    if request.material_type_id.as_deref().is_some_and(|v| !v.trim().is_empty()) {
        let base = line.physical.take().unwrap_or_default();
        line.physical = Some(Physical {
            material_type: base.material_type.overlay(request.material_type_id.clone()),
            material_supplier: base.material_supplier.overlay(request.material_supplier.clone()),
            ..base
        });
    }

    let touches_eresource = [&request.access_provider, &request.user_limit]
        .into_iter()
        .any(|v| v.as_deref().is_some_and(|v| !v.trim().is_empty()));
    if touches_eresource {
        let base = line.eresource.take().unwrap_or_default();
        line.eresource = Some(Eresource {
            access_provider: base.access_provider.overlay(request.access_provider.clone()),
            user_limit: base.user_limit.overlay(request.user_limit.clone()),
            ..base
        });
    }

    line
}

/// Project request custom fields registered for `entity_type` into a map keyed by
/// reference id. Entries without a value are skipped.
pub fn project_custom_fields(
    request: &MosaicOrder,
    entity_type: CustomFieldEntityType,
) -> CustomFields {
    request
        .custom_fields
        .iter()
        .filter(|f| f.entity_type == entity_type)
        .filter_map(|f| match &f.value {
            Some(value) if !value.is_null() => Some((f.ref_id.clone(), value.clone())),
            _ => None,
        })
        .collect()
}

/// Replace the line's custom fields with the request's PO-line custom fields, if any.
pub fn merge_line_custom_fields(line: PoLine, request: &MosaicOrder) -> PoLine {
    let projected = project_custom_fields(request, CustomFieldEntityType::PoLine);
    if projected.is_empty() {
        return line;
    }
    PoLine {
        custom_fields: Some(projected),
        ..line
    }
}

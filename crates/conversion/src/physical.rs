//! Physical resource sub-mapper.

use mosaic_core::OverlayExt;
use mosaic_orders::{Physical, PoLine};

use crate::request::MosaicOrder;

/// Merge the request's `physical` object onto the line's physical details.
///
/// No-op when the request has no `physical` object. Otherwise starts from the
/// line's existing details (or empty ones) and only replaces the fields the
/// request supplies.
pub fn merge_physical(line: PoLine, request: &MosaicOrder) -> PoLine {
    let Some(incoming) = request.physical.as_ref() else {
        return line;
    };
    let base = line.physical.clone().unwrap_or_default();

    let physical = Physical {
        create_inventory: base.create_inventory.overlay(incoming.create_inventory),
        material_type: base.material_type.overlay(incoming.material_type.clone()),
        material_supplier: base
            .material_supplier
            .overlay(incoming.material_supplier.clone()),
        ..base
    };

    PoLine {
        physical: Some(physical),
        ..line
    }
}

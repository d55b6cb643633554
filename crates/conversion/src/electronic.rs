//! Electronic resource sub-mapper.

use mosaic_core::OverlayExt;
use mosaic_orders::{Eresource, PoLine};

use crate::request::MosaicOrder;

/// Merge the request's `eresource` object onto the line's e-resource details.
///
/// Same rules as the physical mapper: absent object is a no-op, unsupplied fields
/// keep their current value.
pub fn merge_eresource(line: PoLine, request: &MosaicOrder) -> PoLine {
    let Some(incoming) = request.eresource.as_ref() else {
        return line;
    };
    let base = line.eresource.clone().unwrap_or_default();

    let eresource = Eresource {
        create_inventory: base.create_inventory.overlay(incoming.create_inventory),
        material_type: base.material_type.overlay(incoming.material_type.clone()),
        access_provider: base
            .access_provider
            .overlay(incoming.access_provider.clone()),
        user_limit: base.user_limit.overlay(incoming.user_limit.clone()),
        ..base
    };

    PoLine {
        eresource: Some(eresource),
        ..line
    }
}

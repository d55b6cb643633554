//! Request-dialect codes for enumerations the request spells differently.
//!
//! The request names formats and workflow statuses with upper-case codes
//! (`ELECTRONIC`, `P_E_MIX`, `OPEN`); the ordering system uses labels
//! (`Electronic Resource`, `P/E Mix`, `Open`). Both map onto the single canonical
//! enumeration from `mosaic-orders`. The request deserializer accepts either
//! spelling; anything else is an explicit error.

use core::str::FromStr;

use mosaic_core::{CodeTable, DomainError};
use mosaic_orders::{OrderFormat, WorkflowStatus};

pub const FORMAT_CODES: CodeTable<OrderFormat> = CodeTable::new(
    "mosaic format",
    &[
        (OrderFormat::PhysicalResource, "PHYSICAL"),
        (OrderFormat::ElectronicResource, "ELECTRONIC"),
        (OrderFormat::PEMix, "P_E_MIX"),
        (OrderFormat::Other, "OTHER"),
    ],
);

pub const WORKFLOW_STATUS_CODES: CodeTable<WorkflowStatus> = CodeTable::new(
    "mosaic workflow status",
    &[
        (WorkflowStatus::Pending, "PENDING"),
        (WorkflowStatus::Open, "OPEN"),
        (WorkflowStatus::Closed, "CLOSED"),
    ],
);

/// Parse a request code, falling back to the canonical label.
pub fn parse_request_code<T>(table: &CodeTable<T>, raw: &str) -> Result<T, DomainError>
where
    T: Copy + PartialEq + FromStr<Err = DomainError>,
{
    table
        .parse(raw)
        .or_else(|_| raw.parse::<T>())
        .map_err(|_| DomainError::invalid_value(table.kind(), raw))
}

macro_rules! optional_code_serde {
    ($module:ident, $t:ty, $table:expr) => {
        pub mod $module {
            use serde::{Deserialize, Deserializer, Serializer};

            use super::*;

            pub fn serialize<S>(value: &Option<$t>, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                match (*value).and_then(|v| $table.code(v)) {
                    Some(code) => serializer.serialize_str(code),
                    None => serializer.serialize_none(),
                }
            }

            pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<$t>, D::Error>
            where
                D: Deserializer<'de>,
            {
                let raw = Option::<String>::deserialize(deserializer)?;
                raw.map(|r| parse_request_code(&$table, &r))
                    .transpose()
                    .map_err(serde::de::Error::custom)
            }
        }
    };
}

optional_code_serde!(format_code, OrderFormat, FORMAT_CODES);
optional_code_serde!(workflow_status_code, WorkflowStatus, WORKFLOW_STATUS_CODES);

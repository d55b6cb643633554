//! Required-field gate for merged orders.
//!
//! Rules run in a fixed order and stop at the first violation. Each violation
//! names the offending field so the caller can fix the request.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use mosaic_core::{DomainError, labeled_enum};
use mosaic_orders::{Cost, OrderFormat, PoLine, PurchaseOrder};

use crate::currency::is_iso_4217;

/// A required-field rule the merged line does not satisfy.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RequiredFieldViolation {
    #[error("cost is empty, it must be overridden from the request")]
    CostMissing,

    #[error("cost.currency is empty, it must be overridden from the request")]
    CurrencyMissing,

    #[error(
        "cost.currency '{0}' is not a recognized ISO 4217 code, it must be overridden from the request"
    )]
    CurrencyUnrecognized(String),

    #[error("cost.quantityPhysical must be greater than 0, it must be overridden from the request")]
    QuantityPhysical,

    #[error("cost.listUnitPrice must be greater than 0, it must be overridden from the request")]
    ListUnitPrice,

    #[error(
        "cost.quantityElectronic must be greater than 0, it must be overridden from the request"
    )]
    QuantityElectronic,

    #[error(
        "cost.listUnitPriceElectronic must be greater than 0, it must be overridden from the request"
    )]
    ListUnitPriceElectronic,

    #[error(
        "cost.quantityPhysical and cost.quantityElectronic must both be greater than 0, they must be overridden from the request"
    )]
    MixedQuantities,

    #[error(
        "cost.listUnitPrice and cost.listUnitPriceElectronic must both be greater than 0, they must be overridden from the request"
    )]
    MixedPrices,

    #[error("titleOrPackage is empty, it must be overridden from the request")]
    TitleMissing,

    #[error(
        "vendorDetail.referenceNumbers is empty, vendor detail with at least one reference number must be overridden from the request"
    )]
    VendorReferenceNumbersMissing,

    #[error("compositePoLines is empty, the order must carry exactly one po line")]
    PoLineMissing,
}

impl From<RequiredFieldViolation> for DomainError {
    fn from(value: RequiredFieldViolation) -> Self {
        DomainError::validation(value.to_string())
    }
}

/// Validate a merged line.
pub fn validate_po_line(line: &PoLine) -> Result<(), RequiredFieldViolation> {
    check_po_line(line).inspect_err(|violation| {
        warn!(
            title = ?line.title_or_package,
            order_format = ?line.order_format,
            %violation,
            "merged po line failed validation"
        );
    })
}

/// Validate a merged order: it must carry a line, and that line must pass
/// [`validate_po_line`].
pub fn validate_order(order: &PurchaseOrder) -> Result<(), RequiredFieldViolation> {
    let line = order
        .first_line()
        .ok_or(RequiredFieldViolation::PoLineMissing)?;
    validate_po_line(line)
}

fn check_po_line(line: &PoLine) -> Result<(), RequiredFieldViolation> {
    let cost = line
        .cost
        .as_ref()
        .ok_or(RequiredFieldViolation::CostMissing)?;
    check_currency(cost)?;
    check_format_cost(line.order_format, cost)?;

    if !line
        .title_or_package
        .as_deref()
        .is_some_and(|t| !t.trim().is_empty())
    {
        return Err(RequiredFieldViolation::TitleMissing);
    }

    if line.reference_numbers().is_empty() {
        return Err(RequiredFieldViolation::VendorReferenceNumbersMissing);
    }

    Ok(())
}

fn check_currency(cost: &Cost) -> Result<(), RequiredFieldViolation> {
    match cost.currency.as_deref() {
        None => Err(RequiredFieldViolation::CurrencyMissing),
        Some(code) if code.trim().is_empty() => Err(RequiredFieldViolation::CurrencyMissing),
        Some(code) if !is_iso_4217(code) => {
            Err(RequiredFieldViolation::CurrencyUnrecognized(code.to_string()))
        }
        Some(_) => Ok(()),
    }
}

fn check_format_cost(
    format: Option<OrderFormat>,
    cost: &Cost,
) -> Result<(), RequiredFieldViolation> {
    let positive_qty = |q: Option<i32>| q.is_some_and(|q| q > 0);
    let positive_price = |p: Option<f64>| p.is_some_and(|p| p > 0.0);

    match format {
        Some(OrderFormat::PhysicalResource) => {
            if !positive_qty(cost.quantity_physical) {
                return Err(RequiredFieldViolation::QuantityPhysical);
            }
            if !positive_price(cost.list_unit_price) {
                return Err(RequiredFieldViolation::ListUnitPrice);
            }
        }
        Some(OrderFormat::ElectronicResource) => {
            if !positive_qty(cost.quantity_electronic) {
                return Err(RequiredFieldViolation::QuantityElectronic);
            }
            if !positive_price(cost.list_unit_price_electronic) {
                return Err(RequiredFieldViolation::ListUnitPriceElectronic);
            }
        }
        Some(OrderFormat::PEMix) => {
            if !(positive_qty(cost.quantity_physical) && positive_qty(cost.quantity_electronic)) {
                return Err(RequiredFieldViolation::MixedQuantities);
            }
            if !(positive_price(cost.list_unit_price)
                && positive_price(cost.list_unit_price_electronic))
            {
                return Err(RequiredFieldViolation::MixedPrices);
            }
        }
        Some(OrderFormat::Other) | None => {}
    }
    Ok(())
}

labeled_enum! {
    /// Readiness of the conversion engine.
    pub enum ValidationStatus {
        Success => "SUCCESS",
    }
}

/// Readiness-probe payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MosaicValidation {
    pub status: ValidationStatus,
}

/// The engine is stateless, so it is always ready.
pub fn validation_status() -> MosaicValidation {
    MosaicValidation {
        status: ValidationStatus::Success,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_orders::{ReferenceNumberItem, RefNumberType, VendorDetail};

    fn valid_line() -> PoLine {
        PoLine {
            title_or_package: Some("Dune".to_string()),
            order_format: Some(OrderFormat::PhysicalResource),
            cost: Some(Cost {
                list_unit_price: Some(10.0),
                currency: Some("USD".to_string()),
                quantity_physical: Some(1),
                quantity_electronic: Some(0),
                ..Cost::default()
            }),
            vendor_detail: Some(VendorDetail {
                reference_numbers: vec![ReferenceNumberItem {
                    ref_number: "ref-1".to_string(),
                    ref_number_type: RefNumberType::VendorOrderReferenceNumber,
                }],
                ..VendorDetail::default()
            }),
            ..PoLine::default()
        }
    }

    fn with_cost(f: impl FnOnce(&mut Cost)) -> PoLine {
        let mut line = valid_line();
        if let Some(cost) = line.cost.as_mut() {
            f(cost);
        }
        line
    }

    #[test]
    fn valid_physical_line_passes() {
        assert_eq!(validate_po_line(&valid_line()), Ok(()));
    }

    #[test]
    fn missing_cost_fails_first() {
        let line = PoLine {
            cost: None,
            ..valid_line()
        };
        let err = validate_po_line(&line).unwrap_err();
        assert_eq!(err, RequiredFieldViolation::CostMissing);
        assert!(err.to_string().contains("overridden from the request"));
    }

    #[test]
    fn cost_check_precedes_title_check() {
        let line = PoLine {
            cost: None,
            title_or_package: Some("  ".to_string()),
            ..valid_line()
        };
        assert_eq!(validate_po_line(&line), Err(RequiredFieldViolation::CostMissing));
    }

    #[test]
    fn blank_currency_fails() {
        let line = with_cost(|c| c.currency = Some(" ".to_string()));
        assert_eq!(validate_po_line(&line), Err(RequiredFieldViolation::CurrencyMissing));
    }

    #[test]
    fn unknown_currency_fails() {
        let line = with_cost(|c| c.currency = Some("XYZ".to_string()));
        assert_eq!(
            validate_po_line(&line),
            Err(RequiredFieldViolation::CurrencyUnrecognized("XYZ".to_string()))
        );
    }

    #[test]
    fn padded_currency_is_not_trimmed() {
        let line = with_cost(|c| c.currency = Some(" EUR ".to_string()));
        assert_eq!(
            validate_po_line(&line),
            Err(RequiredFieldViolation::CurrencyUnrecognized(" EUR ".to_string()))
        );
    }

    #[test]
    fn physical_zero_quantity_names_quantity_physical() {
        let line = with_cost(|c| c.quantity_physical = Some(0));
        let err = validate_po_line(&line).unwrap_err();
        assert_eq!(err, RequiredFieldViolation::QuantityPhysical);
        assert!(err.to_string().contains("quantityPhysical"));
    }

    #[test]
    fn physical_missing_price_names_list_unit_price() {
        let line = with_cost(|c| c.list_unit_price = None);
        assert_eq!(validate_po_line(&line), Err(RequiredFieldViolation::ListUnitPrice));
    }

    #[test]
    fn electronic_rules_check_electronic_pair() {
        let line = PoLine {
            order_format: Some(OrderFormat::ElectronicResource),
            ..with_cost(|c| {
                c.quantity_electronic = Some(2);
                c.list_unit_price_electronic = Some(0.0);
            })
        };
        assert_eq!(
            validate_po_line(&line),
            Err(RequiredFieldViolation::ListUnitPriceElectronic)
        );

        let line = PoLine {
            order_format: Some(OrderFormat::ElectronicResource),
            ..valid_line()
        };
        assert_eq!(
            validate_po_line(&line),
            Err(RequiredFieldViolation::QuantityElectronic)
        );
    }

    #[test]
    fn mixed_format_reports_pairs() {
        let mixed = |f: fn(&mut Cost)| PoLine {
            order_format: Some(OrderFormat::PEMix),
            ..with_cost(|c| {
                c.quantity_electronic = Some(1);
                c.list_unit_price_electronic = Some(4.0);
                f(c);
            })
        };

        assert_eq!(validate_po_line(&mixed(|_| {})), Ok(()));
        assert_eq!(
            validate_po_line(&mixed(|c| c.quantity_electronic = Some(0))),
            Err(RequiredFieldViolation::MixedQuantities)
        );
        assert_eq!(
            validate_po_line(&mixed(|c| c.list_unit_price = Some(-1.0))),
            Err(RequiredFieldViolation::MixedPrices)
        );
    }

    #[test]
    fn other_or_unset_format_skips_quantity_rules() {
        for format in [Some(OrderFormat::Other), None] {
            let line = PoLine {
                order_format: format,
                ..with_cost(|c| {
                    c.quantity_physical = Some(0);
                    c.list_unit_price = None;
                })
            };
            assert_eq!(validate_po_line(&line), Ok(()));
        }
    }

    #[test]
    fn blank_title_fails() {
        let line = PoLine {
            title_or_package: None,
            ..valid_line()
        };
        assert_eq!(validate_po_line(&line), Err(RequiredFieldViolation::TitleMissing));
    }

    #[test]
    fn empty_reference_numbers_fail() {
        let line = PoLine {
            vendor_detail: Some(VendorDetail::default()),
            ..valid_line()
        };
        let err = validate_po_line(&line).unwrap_err();
        assert_eq!(err, RequiredFieldViolation::VendorReferenceNumbersMissing);
        assert!(err.to_string().contains("referenceNumbers"));
    }

    #[test]
    fn missing_vendor_detail_reports_same_violation() {
        let line = PoLine {
            vendor_detail: None,
            ..valid_line()
        };
        assert_eq!(
            validate_po_line(&line),
            Err(RequiredFieldViolation::VendorReferenceNumbersMissing)
        );
    }

    #[test]
    fn order_without_lines_fails() {
        assert_eq!(
            validate_order(&PurchaseOrder::default()),
            Err(RequiredFieldViolation::PoLineMissing)
        );
    }

    #[test]
    fn violation_converts_to_domain_validation_error() {
        let err: DomainError = RequiredFieldViolation::TitleMissing.into();
        assert!(matches!(err, DomainError::Validation(msg) if msg.starts_with("titleOrPackage")));
    }

    #[test]
    fn status_serializes_as_success() {
        let value = serde_json::to_value(validation_status()).unwrap();
        assert_eq!(value, serde_json::json!({ "status": "SUCCESS" }));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_format() -> impl Strategy<Value = Option<OrderFormat>> {
            prop_oneof![
                Just(None),
                Just(Some(OrderFormat::PhysicalResource)),
                Just(Some(OrderFormat::ElectronicResource)),
                Just(Some(OrderFormat::PEMix)),
                Just(Some(OrderFormat::Other)),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig { cases: 128, ..ProptestConfig::default() })]

            #[test]
            fn validation_is_deterministic(
                format in arb_format(),
                qty_p in proptest::option::of(-2i32..5),
                qty_e in proptest::option::of(-2i32..5),
                price in proptest::option::of(-5.0f64..50.0),
                price_e in proptest::option::of(-5.0f64..50.0),
                currency in prop_oneof![Just("USD"), Just(""), Just("ZZZ")],
                title in prop_oneof![Just(None), Just(Some("Title".to_string())), Just(Some(" ".to_string()))],
            ) {
                let line = PoLine {
                    order_format: format,
                    title_or_package: title,
                    cost: Some(Cost {
                        quantity_physical: qty_p,
                        quantity_electronic: qty_e,
                        list_unit_price: price,
                        list_unit_price_electronic: price_e,
                        currency: Some(currency.to_string()),
                        ..Cost::default()
                    }),
                    ..valid_line()
                };

                let first = validate_po_line(&line).map_err(|e| e.to_string());
                let second = validate_po_line(&line).map_err(|e| e.to_string());
                prop_assert_eq!(first, second);
            }

            #[test]
            fn missing_cost_always_reported_first(title in ".*", format in arb_format()) {
                let line = PoLine {
                    cost: None,
                    title_or_package: Some(title),
                    order_format: format,
                    vendor_detail: None,
                    ..PoLine::default()
                };
                prop_assert_eq!(validate_po_line(&line), Err(RequiredFieldViolation::CostMissing));
            }
        }
    }
}

//! End-to-end tests of order creation.
//!
//! Tests: bootstrap → template resolution → conversion → validation → submission
//!
//! Verifies:
//! - A valid request yields the line number assigned by the ordering system
//! - Invalid merged orders are never submitted
//! - Template and configuration lookups stay tenant-scoped
//! - Remote failures propagate unchanged

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use serde_json::json;

    use mosaic_conversion::{MosaicOrder, MosaicOrderRequest, OrderConverter, RequiredFieldViolation};
    use mosaic_core::{OrderId, TenantId};
    use mosaic_orders::{OrderFormat, OrderTemplate, PurchaseOrder, Source};

    use crate::bootstrap::{TemplateInitService, TenantBootstrap};
    use crate::clients::{InMemoryOrdersClient, InMemoryOrganizationsClient, OrdersClient};
    use crate::config::MosaicSettings;
    use crate::configuration::ConfigurationService;
    use crate::error::{ClientError, ErrorCode, ServiceError};
    use crate::orders_service::OrdersService;
    use crate::templates::TemplateResolver;

    const CUSTOM_TEMPLATE_ID: &str = "0196b1d2-0000-7000-8000-00000000abcd";

    struct Harness {
        service: OrdersService,
        orders: Arc<InMemoryOrdersClient>,
        tenant: TenantId,
    }

    async fn harness_with(submit: Option<Arc<dyn OrdersClient>>) -> Harness {
        let settings = MosaicSettings::default();
        let orders = Arc::new(InMemoryOrdersClient::new());
        let organizations = Arc::new(InMemoryOrganizationsClient::new());
        let configuration = ConfigurationService::default();
        let resolver = TemplateResolver::new(orders.clone(), configuration.clone());

        let init = TemplateInitService::new(
            settings.clone(),
            resolver.clone(),
            orders.clone(),
            organizations,
        );
        let tenant = TenantId::new();
        TenantBootstrap::new(settings, configuration, init)
            .on_tenant_enabled(tenant)
            .await
            .unwrap();

        let in_memory: Arc<dyn OrdersClient> = orders.clone();
        let submit = submit.unwrap_or(in_memory);
        let service = OrdersService::new(resolver, OrderConverter::default(), submit);
        Harness {
            service,
            orders,
            tenant,
        }
    }

    async fn harness() -> Harness {
        harness_with(None).await
    }

    fn valid_request() -> MosaicOrderRequest {
        serde_json::from_value(json!({
            "mosaicOrder": {
                "title": "Dune",
                "format": "PHYSICAL",
                "listUnitPrice": 12.5,
                "currency": "EUR",
                "quantityPhysical": 2,
                "vendor": "b5b2d7e2-0000-7000-8000-000000000001",
                "referenceNumbers": [
                    { "refNumber": "mosaic-1", "refNumberType": "Vendor order reference number" }
                ],
                "notes": ["ordered via mosaic"]
            }
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn valid_request_returns_assigned_line_number() {
        let h = harness().await;

        let number = h.service.create_order(h.tenant, valid_request()).await.unwrap();

        assert_eq!(number, "10000-1");
        let stored = h.orders.orders(h.tenant);
        assert_eq!(stored.len(), 1);
        let order = &stored[0];
        assert_eq!(order.template, Some(MosaicSettings::default().default_template_id));
        assert_eq!(order.notes, vec!["ordered via mosaic".to_string()]);
        assert_eq!(order.vendor.as_deref(), Some("b5b2d7e2-0000-7000-8000-000000000001"));

        let line = &order.po_lines[0];
        assert_eq!(line.source, Some(Source::Api));
        assert_eq!(line.title_or_package.as_deref(), Some("Dune"));
        assert_eq!(line.order_format, Some(OrderFormat::PhysicalResource));
        let cost = line.cost.as_ref().unwrap();
        assert_eq!(cost.currency.as_deref(), Some("EUR"));
        assert_eq!(cost.quantity_physical, Some(2));
        assert_eq!(cost.quantity_electronic, Some(0));
    }

    #[tokio::test]
    async fn invalid_merged_order_is_never_submitted() {
        let h = harness().await;
        let mut request = valid_request();
        request.mosaic_order.title = None;

        let err = h.service.create_order(h.tenant, request).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Validation(RequiredFieldViolation::TitleMissing)
        ));
        assert_eq!(err.code(), ErrorCode::ValidationError);
        assert!(h.orders.orders(h.tenant).is_empty());
    }

    #[tokio::test]
    async fn default_template_requires_vendor_reference_numbers() {
        let h = harness().await;
        let request = MosaicOrderRequest {
            order_template_id: None,
            mosaic_order: MosaicOrder {
                reference_numbers: Vec::new(),
                ..valid_request().mosaic_order
            },
        };

        let err = h.service.create_order(h.tenant, request).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Validation(RequiredFieldViolation::VendorReferenceNumbersMissing)
        ));
    }

    #[tokio::test]
    async fn requested_template_is_used() {
        let h = harness().await;
        let template: OrderTemplate = serde_json::from_value(json!({
            "id": CUSTOM_TEMPLATE_ID,
            "orderType": "Ongoing",
            "orderFormat": "Electronic Resource",
            "titleOrPackage": "Template journal",
            "cost": { "currency": "USD", "listUnitPriceElectronic": 30.0, "quantityElectronic": 1 },
            "vendorDetail": {
                "referenceNumbers": [
                    { "refNumber": "t-1", "refNumberType": "Vendor subscription reference number" }
                ]
            }
        }))
        .unwrap();
        h.orders.create_order_template(h.tenant, template).await.unwrap();

        let request = MosaicOrderRequest {
            order_template_id: Some(CUSTOM_TEMPLATE_ID.to_string()),
            mosaic_order: MosaicOrder::default(),
        };
        h.service.create_order(h.tenant, request).await.unwrap();

        let order = &h.orders.orders(h.tenant)[0];
        assert_eq!(order.template, CUSTOM_TEMPLATE_ID.parse::<OrderId>().ok());
        assert_eq!(order.po_lines[0].title_or_package.as_deref(), Some("Template journal"));
    }

    #[tokio::test]
    async fn unknown_template_is_not_found() {
        let h = harness().await;
        let request = MosaicOrderRequest {
            order_template_id: Some(CUSTOM_TEMPLATE_ID.to_string()),
            ..valid_request()
        };

        let err = h.service.create_order(h.tenant, request).await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(_)));
        assert!(h.orders.orders(h.tenant).is_empty());
    }

    #[tokio::test]
    async fn unprovisioned_tenant_has_no_default_template() {
        let h = harness().await;
        let err = h
            .service
            .create_order(TenantId::new(), valid_request())
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::NotFoundError);
    }

    /// Fails every submission.
    struct RejectingOrdersClient;

    #[async_trait]
    impl OrdersClient for RejectingOrdersClient {
        async fn create_order(
            &self,
            _tenant_id: TenantId,
            _order: PurchaseOrder,
        ) -> Result<PurchaseOrder, ClientError> {
            Err(ClientError::Server("orders unavailable".to_string()))
        }

        async fn get_order_template(
            &self,
            _tenant_id: TenantId,
            _template_id: OrderId,
        ) -> Result<Option<OrderTemplate>, ClientError> {
            Ok(None)
        }

        async fn create_order_template(
            &self,
            _tenant_id: TenantId,
            template: OrderTemplate,
        ) -> Result<OrderTemplate, ClientError> {
            Ok(template)
        }
    }

    #[tokio::test]
    async fn remote_failure_propagates_unchanged() {
        let h = harness_with(Some(Arc::new(RejectingOrdersClient))).await;

        let err = h.service.create_order(h.tenant, valid_request()).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Remote(ClientError::Server(ref msg)) if msg == "orders unavailable"
        ));
        assert_eq!(err.code(), ErrorCode::InternalError);
    }
}

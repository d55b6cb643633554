//! Order creation: resolve template, merge, validate, submit.

use std::sync::Arc;

use tracing::{info, warn};

use mosaic_conversion::{MosaicOrderRequest, OrderConverter, validate_order};
use mosaic_core::TenantId;

use crate::clients::OrdersClient;
use crate::error::{ClientError, ServiceError, ServiceResult};
use crate::templates::TemplateResolver;

#[derive(Clone)]
pub struct OrdersService {
    templates: TemplateResolver,
    converter: OrderConverter,
    orders: Arc<dyn OrdersClient>,
}

impl OrdersService {
    pub fn new(
        templates: TemplateResolver,
        converter: OrderConverter,
        orders: Arc<dyn OrdersClient>,
    ) -> Self {
        Self {
            templates,
            converter,
            orders,
        }
    }

    /// Create an order from a mosaic request and return the line number the
    /// ordering system assigned to its line.
    ///
    /// An order that fails validation is never submitted.
    pub async fn create_order(
        &self,
        tenant_id: TenantId,
        request: MosaicOrderRequest,
    ) -> ServiceResult<String> {
        let MosaicOrderRequest {
            order_template_id,
            mosaic_order,
        } = request;
        info!(
            %tenant_id,
            title = ?mosaic_order.title,
            requested_template_id = ?order_template_id,
            "creating mosaic order"
        );

        let templates = self
            .templates
            .resolve(tenant_id, order_template_id.as_deref())
            .await?;
        let order = self.converter.convert(&mosaic_order, &templates);
        validate_order(&order)?;

        let created = self.orders.create_order(tenant_id, order).await?;
        match created.first_line_number() {
            Some(number) => {
                info!(%tenant_id, order_id = ?created.id, po_line_number = number, "created mosaic order");
                Ok(number.to_string())
            }
            None => {
                warn!(%tenant_id, order_id = ?created.id, "created order has no po line number");
                Err(ServiceError::Remote(ClientError::Server(
                    "created order has no po line number".to_string(),
                )))
            }
        }
    }
}

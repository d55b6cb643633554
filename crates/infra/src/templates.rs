//! Order template resolution.

use std::sync::Arc;

use tracing::{info, warn};

use mosaic_core::{OrderId, TenantId};
use mosaic_orders::TemplatePair;

use crate::clients::OrdersClient;
use crate::configuration::ConfigurationService;
use crate::error::{ServiceError, ServiceResult};

pub const ORDER_TEMPLATE: &str = "order template";

/// Finds the template pair a request should be merged onto.
#[derive(Clone)]
pub struct TemplateResolver {
    orders: Arc<dyn OrdersClient>,
    configuration: ConfigurationService,
}

impl TemplateResolver {
    pub fn new(orders: Arc<dyn OrdersClient>, configuration: ConfigurationService) -> Self {
        Self {
            orders,
            configuration,
        }
    }

    /// Resolve the request's template id, or the tenant's default when the request
    /// names none.
    pub async fn resolve(
        &self,
        tenant_id: TenantId,
        requested_id: Option<&str>,
    ) -> ServiceResult<TemplatePair> {
        let template_id = match requested_id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(raw) => raw.parse::<OrderId>()?,
            None => self.configuration.default_template_id(tenant_id)?,
        };

        match self.find_by_id(tenant_id, template_id).await? {
            Some(pair) => {
                info!(%tenant_id, %template_id, "resolved order template");
                Ok(pair)
            }
            None => {
                warn!(%tenant_id, %template_id, "no order template found for mosaic order");
                Err(ServiceError::NotFound(ORDER_TEMPLATE))
            }
        }
    }

    /// Load a template and split it into its order and line halves.
    ///
    /// A stored document without an `id` counts as missing.
    pub async fn find_by_id(
        &self,
        tenant_id: TenantId,
        template_id: OrderId,
    ) -> ServiceResult<Option<TemplatePair>> {
        let Some(template) = self.orders.get_order_template(tenant_id, template_id).await? else {
            return Ok(None);
        };
        Ok(TemplatePair::from_template(&template)?)
    }
}

//! Tenant provisioning: the default order template and its vendor organization.

use std::sync::Arc;

use serde_json::Value as JsonValue;
use tracing::{error, info};

use mosaic_core::{OrganizationId, TenantId};
use mosaic_orders::OrderTemplate;

use crate::clients::{Organization, OrdersClient, OrganizationsClient};
use crate::config::MosaicSettings;
use crate::configuration::ConfigurationService;
use crate::error::{ServiceError, ServiceResult};
use crate::templates::TemplateResolver;

const DEFAULT_ORDER_TEMPLATE: &str = include_str!("../resources/default_order_template.json");
const DEFAULT_ORGANIZATION: &str = include_str!("../resources/default_mosaic_organization.json");

/// Template field that references the vendor organization.
const VENDOR_TEMPLATE_FIELD: &str = "vendor";

/// What [`TemplateInitService::create_default_template_if_needed`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateInit {
    AlreadyPresent,
    Created { vendor: OrganizationId },
}

/// Creates the packaged default order template when a tenant lacks it.
#[derive(Clone)]
pub struct TemplateInitService {
    settings: MosaicSettings,
    templates: TemplateResolver,
    orders: Arc<dyn OrdersClient>,
    organizations: Arc<dyn OrganizationsClient>,
}

impl TemplateInitService {
    pub fn new(
        settings: MosaicSettings,
        templates: TemplateResolver,
        orders: Arc<dyn OrdersClient>,
        organizations: Arc<dyn OrganizationsClient>,
    ) -> Self {
        Self {
            settings,
            templates,
            orders,
            organizations,
        }
    }

    pub async fn create_default_template_if_needed(
        &self,
        tenant_id: TenantId,
    ) -> ServiceResult<TemplateInit> {
        let template_id = self.settings.default_template_id;
        if self.templates.find_by_id(tenant_id, template_id).await?.is_some() {
            info!(%tenant_id, %template_id, "default order template already exists, skipping creation");
            return Ok(TemplateInit::AlreadyPresent);
        }

        let mut template: OrderTemplate = parse_seed(DEFAULT_ORDER_TEMPLATE, "order template")?;
        let vendor = self.vendor_organization(tenant_id).await?;

        template.set("id", JsonValue::String(template_id.to_string()));
        template.set(VENDOR_TEMPLATE_FIELD, JsonValue::String(vendor.to_string()));
        self.orders.create_order_template(tenant_id, template).await?;

        info!(%tenant_id, %template_id, %vendor, "created default order template");
        Ok(TemplateInit::Created { vendor })
    }

    /// The organization registered under the configured code, created from the seed
    /// when the code does not match exactly one organization.
    async fn vendor_organization(&self, tenant_id: TenantId) -> ServiceResult<OrganizationId> {
        let code = self.settings.organization_code.as_str();
        let mut found = self.organizations.find_by_code(tenant_id, code).await?;
        if found.len() == 1 {
            if let Some(id) = found.pop().and_then(|o| o.id) {
                return Ok(id);
            }
        }

        let seed: Organization = parse_seed(DEFAULT_ORGANIZATION, "organization")?;
        let created = self
            .organizations
            .create_organization(
                tenant_id,
                Organization {
                    code: code.to_string(),
                    ..seed
                },
            )
            .await?;
        info!(%tenant_id, code, "created vendor organization");

        created.id.ok_or_else(|| {
            ServiceError::TemplateInitialization("created organization has no id".to_string())
        })
    }
}

fn parse_seed<T: serde::de::DeserializeOwned>(raw: &str, what: &str) -> ServiceResult<T> {
    serde_json::from_str(raw).map_err(|e| {
        error!(seed = what, error = %e, "failed to read packaged seed data");
        ServiceError::TemplateInitialization(format!("invalid default {what}: {e}"))
    })
}

/// Runs when a tenant is enabled: seeds the configuration record, then the default
/// template.
#[derive(Clone)]
pub struct TenantBootstrap {
    settings: MosaicSettings,
    configuration: ConfigurationService,
    templates: TemplateInitService,
}

impl TenantBootstrap {
    pub fn new(
        settings: MosaicSettings,
        configuration: ConfigurationService,
        templates: TemplateInitService,
    ) -> Self {
        Self {
            settings,
            configuration,
            templates,
        }
    }

    pub async fn on_tenant_enabled(&self, tenant_id: TenantId) -> ServiceResult<TemplateInit> {
        self.configuration
            .initialize(tenant_id, self.settings.default_template_id)?;
        self.templates.create_default_template_if_needed(tenant_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{InMemoryOrdersClient, InMemoryOrganizationsClient};
    use serde_json::Map;

    #[test]
    fn packaged_seeds_parse() {
        let template: OrderTemplate = parse_seed(DEFAULT_ORDER_TEMPLATE, "order template").unwrap();
        assert!(mosaic_orders::TemplatePair::from_template(&template).unwrap().is_some());

        let organization: Organization = parse_seed(DEFAULT_ORGANIZATION, "organization").unwrap();
        assert_eq!(organization.code, "MOSAIC");
    }

    #[test]
    fn malformed_seed_is_an_initialization_error() {
        let err = parse_seed::<Organization>("{", "organization").unwrap_err();
        assert!(matches!(err, ServiceError::TemplateInitialization(_)));
    }

    struct Fixture {
        service: TemplateInitService,
        orders: Arc<InMemoryOrdersClient>,
        organizations: Arc<InMemoryOrganizationsClient>,
        tenant: TenantId,
    }

    fn fixture() -> Fixture {
        let settings = MosaicSettings::default();
        let orders = Arc::new(InMemoryOrdersClient::new());
        let organizations = Arc::new(InMemoryOrganizationsClient::new());
        let resolver = TemplateResolver::new(orders.clone(), ConfigurationService::default());
        let service =
            TemplateInitService::new(settings, resolver, orders.clone(), organizations.clone());
        Fixture {
            service,
            orders,
            organizations,
            tenant: TenantId::new(),
        }
    }

    #[tokio::test]
    async fn creates_template_and_organization_once() {
        let f = fixture();

        let first = f.service.create_default_template_if_needed(f.tenant).await.unwrap();
        let second = f.service.create_default_template_if_needed(f.tenant).await.unwrap();

        let vendor = match first {
            TemplateInit::Created { vendor } => vendor,
            other => panic!("expected the template to be created, got {other:?}"),
        };
        assert_eq!(second, TemplateInit::AlreadyPresent);

        let stored = f
            .orders
            .get_order_template(f.tenant, MosaicSettings::default().default_template_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            stored.get(VENDOR_TEMPLATE_FIELD),
            Some(&JsonValue::String(vendor.to_string()))
        );
        assert_eq!(f.organizations.find_by_code(f.tenant, "MOSAIC").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn reuses_existing_organization() {
        let f = fixture();
        let existing = f
            .organizations
            .create_organization(
                f.tenant,
                Organization {
                    id: None,
                    name: "Existing".to_string(),
                    code: "MOSAIC".to_string(),
                    status: None,
                    is_vendor: Some(true),
                    other: Map::new(),
                },
            )
            .await
            .unwrap();

        let outcome = f.service.create_default_template_if_needed(f.tenant).await.unwrap();

        assert_eq!(
            outcome,
            TemplateInit::Created {
                vendor: existing.id.unwrap()
            }
        );
    }

    #[tokio::test]
    async fn bootstrap_seeds_configuration_and_template() {
        let f = fixture();
        let configuration = ConfigurationService::default();
        let bootstrap = TenantBootstrap::new(
            MosaicSettings::default(),
            configuration.clone(),
            f.service.clone(),
        );

        bootstrap.on_tenant_enabled(f.tenant).await.unwrap();

        assert_eq!(
            configuration.default_template_id(f.tenant).unwrap(),
            MosaicSettings::default().default_template_id
        );
    }
}

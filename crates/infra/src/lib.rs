//! Infrastructure around the merge engine: settings, per-tenant configuration,
//! remote collaborators, template resolution, tenant bootstrap and the
//! order-creation service.

pub mod bootstrap;
pub mod clients;
pub mod config;
pub mod configuration;
pub mod error;
pub mod orders_service;
pub mod store;
pub mod templates;

mod integration_tests;

pub use bootstrap::{TemplateInit, TemplateInitService, TenantBootstrap};
pub use clients::{
    InMemoryOrdersClient, InMemoryOrganizationsClient, Organization, OrdersClient,
    OrganizationsClient,
};
pub use config::MosaicSettings;
pub use configuration::{ConfigurationService, MosaicConfiguration};
pub use error::{ClientError, ErrorCode, Errors, ServiceError, ServiceResult};
pub use orders_service::OrdersService;
pub use store::{InMemoryTenantStore, StoreError, TenantStore};
pub use templates::TemplateResolver;

//! Per-tenant mosaic configuration: the default order template id.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use mosaic_core::{OrderId, TenantId};

use crate::error::{ServiceError, ServiceResult};
use crate::store::{InMemoryTenantStore, TenantStore};

const RESOURCE: &str = "mosaic configuration";

/// Caller-facing configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MosaicConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub default_template_id: String,
}

/// Stored configuration record. One per tenant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationRecord {
    pub id: Uuid,
    pub default_template_id: OrderId,
}

impl From<ConfigurationRecord> for MosaicConfiguration {
    fn from(record: ConfigurationRecord) -> Self {
        Self {
            id: Some(record.id),
            default_template_id: record.default_template_id.to_string(),
        }
    }
}

/// Key of the single configuration record of a tenant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ConfigurationKey;

pub type ConfigurationStore = Arc<dyn TenantStore<ConfigurationKey, ConfigurationRecord>>;

/// CRUD over the tenant's configuration record.
#[derive(Clone)]
pub struct ConfigurationService {
    store: ConfigurationStore,
}

impl Default for ConfigurationService {
    fn default() -> Self {
        Self::new(Arc::new(
            InMemoryTenantStore::<ConfigurationKey, ConfigurationRecord>::new(),
        ))
    }
}

impl ConfigurationService {
    pub fn new(store: ConfigurationStore) -> Self {
        Self { store }
    }

    pub fn get(&self, tenant_id: TenantId) -> ServiceResult<MosaicConfiguration> {
        self.record(tenant_id).map(Into::into)
    }

    /// The tenant's default template id.
    pub fn default_template_id(&self, tenant_id: TenantId) -> ServiceResult<OrderId> {
        Ok(self.record(tenant_id)?.default_template_id)
    }

    /// Create the record. Fails if the tenant already has one.
    pub fn save(
        &self,
        tenant_id: TenantId,
        configuration: MosaicConfiguration,
    ) -> ServiceResult<MosaicConfiguration> {
        let record = ConfigurationRecord {
            id: configuration.id.unwrap_or_else(Uuid::now_v7),
            default_template_id: configuration.default_template_id.parse()?,
        };
        if !self
            .store
            .insert_if_absent(tenant_id, ConfigurationKey, record.clone())?
        {
            return Err(ServiceError::AlreadyExists(RESOURCE));
        }
        info!(%tenant_id, default_template_id = %record.default_template_id, "saved mosaic configuration");
        Ok(record.into())
    }

    /// Replace the default template id of the existing record.
    pub fn update(&self, tenant_id: TenantId, configuration: MosaicConfiguration) -> ServiceResult<()> {
        let existing = self.record(tenant_id)?;
        let default_template_id = configuration.default_template_id.parse()?;
        self.store.upsert(
            tenant_id,
            ConfigurationKey,
            ConfigurationRecord {
                default_template_id,
                ..existing
            },
        )?;
        info!(%tenant_id, %default_template_id, "updated mosaic configuration");
        Ok(())
    }

    pub fn delete(&self, tenant_id: TenantId) -> ServiceResult<()> {
        self.store
            .remove(tenant_id, &ConfigurationKey)
            .map(|_| ())
            .ok_or(ServiceError::NotFound(RESOURCE))
    }

    /// Seed the record with `default_template_id` unless one exists. Returns whether
    /// a record was created.
    pub fn initialize(
        &self,
        tenant_id: TenantId,
        default_template_id: OrderId,
    ) -> ServiceResult<bool> {
        let created = self.store.insert_if_absent(
            tenant_id,
            ConfigurationKey,
            ConfigurationRecord {
                id: Uuid::now_v7(),
                default_template_id,
            },
        )?;
        if created {
            info!(%tenant_id, %default_template_id, "seeded mosaic configuration");
        }
        Ok(created)
    }

    fn record(&self, tenant_id: TenantId) -> ServiceResult<ConfigurationRecord> {
        self.store
            .get(tenant_id, &ConfigurationKey)
            .ok_or(ServiceError::NotFound(RESOURCE))
    }
}

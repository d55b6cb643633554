//! Remote collaborators: the ordering system and the organizations system.
//!
//! The traits describe what the services need from each system. The in-memory
//! adapters behave like the remote systems closely enough for tests and local runs:
//! they assign identities and numbers and reject duplicates.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use tracing::debug;

use mosaic_core::{OrderId, OrganizationId, TenantId};
use mosaic_orders::{OrderTemplate, PurchaseOrder};

use crate::error::ClientError;
use crate::store::{InMemoryTenantStore, TenantStore};

/// Vendor organization as stored by the organizations system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<OrganizationId>,
    pub name: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_vendor: Option<bool>,
    /// Fields this service does not interpret, passed through unchanged.
    #[serde(flatten)]
    pub other: Map<String, JsonValue>,
}

/// Ordering system.
#[async_trait]
pub trait OrdersClient: Send + Sync {
    /// Persist an order. The returned order carries the assigned numbers.
    async fn create_order(
        &self,
        tenant_id: TenantId,
        order: PurchaseOrder,
    ) -> Result<PurchaseOrder, ClientError>;

    /// Fetch a stored order template; `None` when no template has this id.
    async fn get_order_template(
        &self,
        tenant_id: TenantId,
        template_id: OrderId,
    ) -> Result<Option<OrderTemplate>, ClientError>;

    async fn create_order_template(
        &self,
        tenant_id: TenantId,
        template: OrderTemplate,
    ) -> Result<OrderTemplate, ClientError>;
}

/// Organizations system.
#[async_trait]
pub trait OrganizationsClient: Send + Sync {
    async fn find_by_code(
        &self,
        tenant_id: TenantId,
        code: &str,
    ) -> Result<Vec<Organization>, ClientError>;

    async fn create_organization(
        &self,
        tenant_id: TenantId,
        organization: Organization,
    ) -> Result<Organization, ClientError>;
}

const FIRST_PO_NUMBER: u64 = 10000;

/// In-memory ordering system.
#[derive(Debug)]
pub struct InMemoryOrdersClient {
    orders: InMemoryTenantStore<OrderId, PurchaseOrder>,
    templates: InMemoryTenantStore<OrderId, OrderTemplate>,
    next_po_number: AtomicU64,
}

impl Default for InMemoryOrdersClient {
    fn default() -> Self {
        Self {
            orders: InMemoryTenantStore::new(),
            templates: InMemoryTenantStore::new(),
            next_po_number: AtomicU64::new(FIRST_PO_NUMBER),
        }
    }
}

impl InMemoryOrdersClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_order(&self, tenant_id: TenantId, order_id: OrderId) -> Option<PurchaseOrder> {
        self.orders.get(tenant_id, &order_id)
    }

    pub fn orders(&self, tenant_id: TenantId) -> Vec<PurchaseOrder> {
        self.orders.list(tenant_id)
    }
}

#[async_trait]
impl OrdersClient for InMemoryOrdersClient {
    async fn create_order(
        &self,
        tenant_id: TenantId,
        order: PurchaseOrder,
    ) -> Result<PurchaseOrder, ClientError> {
        let order_id = order.id.unwrap_or_else(OrderId::new);
        let po_number = self
            .next_po_number
            .fetch_add(1, Ordering::Relaxed)
            .to_string();

        let po_lines = order
            .po_lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| mosaic_orders::PoLine {
                po_line_number: Some(format!("{po_number}-{}", i + 1)),
                purchase_order_id: Some(order_id),
                ..line
            })
            .collect();
        let stored = PurchaseOrder {
            id: Some(order_id),
            po_number: Some(po_number),
            po_lines,
            ..order
        };

        if !self
            .orders
            .insert_if_absent(tenant_id, order_id, stored.clone())
            .map_err(|e| ClientError::Server(e.to_string()))?
        {
            return Err(ClientError::Unprocessable(format!(
                "order {order_id} already exists"
            )));
        }
        debug!(%tenant_id, %order_id, po_number = ?stored.po_number, "stored order");
        Ok(stored)
    }

    async fn get_order_template(
        &self,
        tenant_id: TenantId,
        template_id: OrderId,
    ) -> Result<Option<OrderTemplate>, ClientError> {
        Ok(self.templates.get(tenant_id, &template_id))
    }

    async fn create_order_template(
        &self,
        tenant_id: TenantId,
        template: OrderTemplate,
    ) -> Result<OrderTemplate, ClientError> {
        let template_id = template
            .id()
            .ok_or_else(|| ClientError::BadRequest("order template has no id".to_string()))?
            .parse::<OrderId>()
            .map_err(|e| ClientError::BadRequest(e.to_string()))?;

        if !self
            .templates
            .insert_if_absent(tenant_id, template_id, template.clone())
            .map_err(|e| ClientError::Server(e.to_string()))?
        {
            return Err(ClientError::Unprocessable(format!(
                "order template {template_id} already exists"
            )));
        }
        debug!(%tenant_id, %template_id, "stored order template");
        Ok(template)
    }
}

/// In-memory organizations system.
#[derive(Debug, Default)]
pub struct InMemoryOrganizationsClient {
    organizations: InMemoryTenantStore<OrganizationId, Organization>,
}

impl InMemoryOrganizationsClient {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrganizationsClient for InMemoryOrganizationsClient {
    async fn find_by_code(
        &self,
        tenant_id: TenantId,
        code: &str,
    ) -> Result<Vec<Organization>, ClientError> {
        Ok(self
            .organizations
            .list(tenant_id)
            .into_iter()
            .filter(|o| o.code == code)
            .collect())
    }

    async fn create_organization(
        &self,
        tenant_id: TenantId,
        organization: Organization,
    ) -> Result<Organization, ClientError> {
        let id = organization.id.unwrap_or_else(OrganizationId::new);
        let stored = Organization {
            id: Some(id),
            ..organization
        };
        if !self
            .organizations
            .insert_if_absent(tenant_id, id, stored.clone())
            .map_err(|e| ClientError::Server(e.to_string()))?
        {
            return Err(ClientError::Unprocessable(format!(
                "organization {id} already exists"
            )));
        }
        Ok(stored)
    }
}

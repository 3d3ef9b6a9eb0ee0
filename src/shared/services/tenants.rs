use crate::domain::models::{CreateTenant, Tenant, UpdateTenant};
use crate::infrastructure::{HttpClient, api_path};
use crate::shared::errors::ApiError;

/// `/tenants` (admin only on the backend)
#[derive(Debug, Clone)]
pub struct TenantService {
    client: HttpClient,
}

impl TenantService {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Tenant>, ApiError> {
        self.client.get("/tenants").await
    }

    pub async fn get(&self, tenant_id: &str) -> Result<Tenant, ApiError> {
        self.client.get(&api_path(&["tenants", tenant_id])).await
    }

    pub async fn create(&self, dto: &CreateTenant) -> Result<Tenant, ApiError> {
        self.client.post("/tenants", dto).await
    }

    pub async fn update(&self, tenant_id: &str, dto: &UpdateTenant) -> Result<Tenant, ApiError> {
        self.client.patch(&api_path(&["tenants", tenant_id]), dto).await
    }

    pub async fn delete(&self, tenant_id: &str) -> Result<(), ApiError> {
        self.client.delete(&api_path(&["tenants", tenant_id])).await
    }
}

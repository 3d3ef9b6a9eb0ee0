use crate::domain::models::{CreatePromptAsset, PromptAsset, UpdatePromptAsset};
use crate::infrastructure::{HttpClient, api_path};
use crate::shared::errors::ApiError;

/// `/projects/{projectId}/assets`
#[derive(Debug, Clone)]
pub struct AssetService {
    client: HttpClient,
}

impl AssetService {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, project_id: &str) -> Result<Vec<PromptAsset>, ApiError> {
        self.client.get(&api_path(&["projects", project_id, "assets"])).await
    }

    pub async fn get(&self, project_id: &str, asset_key: &str) -> Result<PromptAsset, ApiError> {
        self.client
            .get(&api_path(&["projects", project_id, "assets", asset_key]))
            .await
    }

    pub async fn create(&self, project_id: &str, dto: &CreatePromptAsset) -> Result<PromptAsset, ApiError> {
        self.client
            .post(&api_path(&["projects", project_id, "assets"]), dto)
            .await
    }

    pub async fn update(
        &self,
        project_id: &str,
        asset_key: &str,
        dto: &UpdatePromptAsset,
    ) -> Result<PromptAsset, ApiError> {
        self.client
            .patch(&api_path(&["projects", project_id, "assets", asset_key]), dto)
            .await
    }

    pub async fn delete(&self, project_id: &str, asset_key: &str) -> Result<(), ApiError> {
        self.client
            .delete(&api_path(&["projects", project_id, "assets", asset_key]))
            .await
    }
}

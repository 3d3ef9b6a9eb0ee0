use crate::domain::models::{CreateRegion, Region, UpdateRegion};
use crate::infrastructure::{HttpClient, api_path};
use crate::shared::errors::ApiError;

/// `/projects/{projectId}/regions`, keyed by language code
#[derive(Debug, Clone)]
pub struct RegionService {
    client: HttpClient,
}

impl RegionService {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, project_id: &str) -> Result<Vec<Region>, ApiError> {
        self.client.get(&api_path(&["projects", project_id, "regions"])).await
    }

    pub async fn get(&self, project_id: &str, language_code: &str) -> Result<Region, ApiError> {
        self.client
            .get(&api_path(&["projects", project_id, "regions", language_code]))
            .await
    }

    pub async fn create(&self, project_id: &str, dto: &CreateRegion) -> Result<Region, ApiError> {
        self.client
            .post(&api_path(&["projects", project_id, "regions"]), dto)
            .await
    }

    pub async fn update(&self, project_id: &str, language_code: &str, dto: &UpdateRegion) -> Result<Region, ApiError> {
        self.client
            .patch(&api_path(&["projects", project_id, "regions", language_code]), dto)
            .await
    }

    pub async fn delete(&self, project_id: &str, language_code: &str) -> Result<(), ApiError> {
        self.client
            .delete(&api_path(&["projects", project_id, "regions", language_code]))
            .await
    }
}

use crate::domain::models::{AiModel, CreateAiModel, UpdateAiModel};
use crate::infrastructure::{HttpClient, api_path};
use crate::shared::errors::ApiError;

/// `/projects/{projectId}/aimodels`
#[derive(Debug, Clone)]
pub struct AiModelService {
    client: HttpClient,
}

impl AiModelService {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, project_id: &str) -> Result<Vec<AiModel>, ApiError> {
        self.client.get(&api_path(&["projects", project_id, "aimodels"])).await
    }

    pub async fn get(&self, project_id: &str, model_id: &str) -> Result<AiModel, ApiError> {
        self.client
            .get(&api_path(&["projects", project_id, "aimodels", model_id]))
            .await
    }

    pub async fn create(&self, project_id: &str, dto: &CreateAiModel) -> Result<AiModel, ApiError> {
        self.client
            .post(&api_path(&["projects", project_id, "aimodels"]), dto)
            .await
    }

    pub async fn update(&self, project_id: &str, model_id: &str, dto: &UpdateAiModel) -> Result<AiModel, ApiError> {
        self.client
            .patch(&api_path(&["projects", project_id, "aimodels", model_id]), dto)
            .await
    }

    pub async fn delete(&self, project_id: &str, model_id: &str) -> Result<(), ApiError> {
        self.client
            .delete(&api_path(&["projects", project_id, "aimodels", model_id]))
            .await
    }
}

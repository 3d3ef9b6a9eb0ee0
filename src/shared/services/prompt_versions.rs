use crate::domain::models::{CreatePromptVersion, PromptVersion, UpdatePromptVersion};
use crate::infrastructure::{HttpClient, api_path};
use crate::shared::errors::ApiError;

/// `/projects/{projectId}/prompts/{promptId}/versions`
#[derive(Debug, Clone)]
pub struct PromptVersionService {
    client: HttpClient,
}

fn versions_path(project_id: &str, prompt_id: &str) -> String {
    api_path(&["projects", project_id, "prompts", prompt_id, "versions"])
}

fn version_path(project_id: &str, prompt_id: &str, version_tag: &str) -> String {
    api_path(&["projects", project_id, "prompts", prompt_id, "versions", version_tag])
}

impl PromptVersionService {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, project_id: &str, prompt_id: &str) -> Result<Vec<PromptVersion>, ApiError> {
        self.client.get(&versions_path(project_id, prompt_id)).await
    }

    pub async fn get(&self, project_id: &str, prompt_id: &str, version_tag: &str) -> Result<PromptVersion, ApiError> {
        self.client.get(&version_path(project_id, prompt_id, version_tag)).await
    }

    pub async fn create(
        &self,
        project_id: &str,
        prompt_id: &str,
        dto: &CreatePromptVersion,
    ) -> Result<PromptVersion, ApiError> {
        self.client.post(&versions_path(project_id, prompt_id), dto).await
    }

    pub async fn update(
        &self,
        project_id: &str,
        prompt_id: &str,
        version_tag: &str,
        dto: &UpdatePromptVersion,
    ) -> Result<PromptVersion, ApiError> {
        self.client
            .patch(&version_path(project_id, prompt_id, version_tag), dto)
            .await
    }

    pub async fn delete(&self, project_id: &str, prompt_id: &str, version_tag: &str) -> Result<(), ApiError> {
        self.client.delete(&version_path(project_id, prompt_id, version_tag)).await
    }
}

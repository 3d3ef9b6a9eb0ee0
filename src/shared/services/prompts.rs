use crate::domain::models::{CreatePrompt, Prompt, UpdatePrompt};
use crate::infrastructure::{HttpClient, api_path};
use crate::shared::errors::ApiError;

/// `/projects/{projectId}/prompts`
#[derive(Debug, Clone)]
pub struct PromptService {
    client: HttpClient,
}

impl PromptService {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, project_id: &str) -> Result<Vec<Prompt>, ApiError> {
        self.client.get(&api_path(&["projects", project_id, "prompts"])).await
    }

    pub async fn get(&self, project_id: &str, prompt_id: &str) -> Result<Prompt, ApiError> {
        self.client
            .get(&api_path(&["projects", project_id, "prompts", prompt_id]))
            .await
    }

    pub async fn create(&self, project_id: &str, dto: &CreatePrompt) -> Result<Prompt, ApiError> {
        self.client
            .post(&api_path(&["projects", project_id, "prompts"]), dto)
            .await
    }

    pub async fn update(&self, project_id: &str, prompt_id: &str, dto: &UpdatePrompt) -> Result<Prompt, ApiError> {
        self.client
            .patch(&api_path(&["projects", project_id, "prompts", prompt_id]), dto)
            .await
    }

    pub async fn delete(&self, project_id: &str, prompt_id: &str) -> Result<(), ApiError> {
        self.client
            .delete(&api_path(&["projects", project_id, "prompts", prompt_id]))
            .await
    }
}

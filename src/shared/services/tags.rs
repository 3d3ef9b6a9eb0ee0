use crate::domain::models::{CreateTag, Tag, UpdateTag};
use crate::infrastructure::{HttpClient, api_path};
use crate::shared::errors::ApiError;

/// `/projects/{projectId}/tags`
#[derive(Debug, Clone)]
pub struct TagService {
    client: HttpClient,
}

impl TagService {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, project_id: &str) -> Result<Vec<Tag>, ApiError> {
        self.client.get(&api_path(&["projects", project_id, "tags"])).await
    }

    pub async fn get(&self, project_id: &str, tag_id: &str) -> Result<Tag, ApiError> {
        self.client.get(&api_path(&["projects", project_id, "tags", tag_id])).await
    }

    pub async fn create(&self, project_id: &str, dto: &CreateTag) -> Result<Tag, ApiError> {
        self.client.post(&api_path(&["projects", project_id, "tags"]), dto).await
    }

    pub async fn update(&self, project_id: &str, tag_id: &str, dto: &UpdateTag) -> Result<Tag, ApiError> {
        self.client
            .patch(&api_path(&["projects", project_id, "tags", tag_id]), dto)
            .await
    }

    pub async fn delete(&self, project_id: &str, tag_id: &str) -> Result<(), ApiError> {
        self.client.delete(&api_path(&["projects", project_id, "tags", tag_id])).await
    }
}

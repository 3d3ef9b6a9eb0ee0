use crate::domain::models::{CreatePromptTranslation, PromptTranslation, UpdatePromptTranslation};
use crate::infrastructure::{HttpClient, api_path};
use crate::shared::errors::ApiError;

/// Identifies one prompt version
#[derive(Debug, Clone, Copy)]
pub struct VersionRef<'a> {
    pub project_id: &'a str,
    pub prompt_id: &'a str,
    pub version_tag: &'a str,
}

impl VersionRef<'_> {
    fn translations(&self) -> String {
        api_path(&[
            "projects",
            self.project_id,
            "prompts",
            self.prompt_id,
            "versions",
            self.version_tag,
            "translations",
        ])
    }

    fn translation(&self, language_code: &str) -> String {
        format!("{}{}", self.translations(), api_path(&[language_code]))
    }
}

/// `/projects/{projectId}/prompts/{promptId}/versions/{versionTag}/translations`
#[derive(Debug, Clone)]
pub struct TranslationService {
    client: HttpClient,
}

impl TranslationService {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, version: VersionRef<'_>) -> Result<Vec<PromptTranslation>, ApiError> {
        self.client.get(&version.translations()).await
    }

    pub async fn get(&self, version: VersionRef<'_>, language_code: &str) -> Result<PromptTranslation, ApiError> {
        self.client.get(&version.translation(language_code)).await
    }

    pub async fn create(
        &self,
        version: VersionRef<'_>,
        dto: &CreatePromptTranslation,
    ) -> Result<PromptTranslation, ApiError> {
        self.client.post(&version.translations(), dto).await
    }

    pub async fn update(
        &self,
        version: VersionRef<'_>,
        language_code: &str,
        dto: &UpdatePromptTranslation,
    ) -> Result<PromptTranslation, ApiError> {
        self.client.patch(&version.translation(language_code), dto).await
    }

    pub async fn delete(&self, version: VersionRef<'_>, language_code: &str) -> Result<(), ApiError> {
        self.client.delete(&version.translation(language_code)).await
    }
}

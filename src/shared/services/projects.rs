use crate::domain::models::{CreateProject, Project, PromptAsset, Prompt, UpdateProject};
use crate::infrastructure::{HttpClient, api_path};
use crate::shared::errors::ApiError;

/// `/projects`
#[derive(Debug, Clone)]
pub struct ProjectService {
    client: HttpClient,
}

/// A project with the collections its detail page needs
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectOverview {
    pub project: Project,
    pub prompts: Vec<Prompt>,
    pub assets: Vec<PromptAsset>,
}

impl ProjectService {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Project>, ApiError> {
        self.client.get("/projects").await
    }

    pub async fn get(&self, project_id: &str) -> Result<Project, ApiError> {
        self.client.get(&api_path(&["projects", project_id])).await
    }

    pub async fn create(&self, dto: &CreateProject) -> Result<Project, ApiError> {
        self.client.post("/projects", dto).await
    }

    pub async fn update(&self, project_id: &str, dto: &UpdateProject) -> Result<Project, ApiError> {
        self.client.patch(&api_path(&["projects", project_id]), dto).await
    }

    pub async fn delete(&self, project_id: &str) -> Result<(), ApiError> {
        self.client.delete(&api_path(&["projects", project_id])).await
    }

    /// Load the project, its prompts and its assets concurrently.
    ///
    /// Resolves only once all three calls have succeeded; the first failure
    /// fails the whole overview.
    pub async fn overview(&self, project_id: &str) -> Result<ProjectOverview, ApiError> {
        let prompts_path = api_path(&["projects", project_id, "prompts"]);
        let assets_path = api_path(&["projects", project_id, "assets"]);

        let (project, prompts, assets) = futures::try_join!(
            self.get(project_id),
            self.client.get::<Vec<Prompt>>(&prompts_path),
            self.client.get::<Vec<PromptAsset>>(&assets_path),
        )?;

        Ok(ProjectOverview { project, prompts, assets })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http::testing::RecordingTransport;
    use crate::infrastructure::http::{ApiRequest, Method, RawResponse, Transport};
    use crate::infrastructure::MemoryTokenStore;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};

    /// Minimal stand-in for the backend's `/projects` collection
    #[derive(Default)]
    struct ProjectsBackend {
        rows: Mutex<Vec<Value>>,
    }

    #[async_trait]
    impl Transport for ProjectsBackend {
        async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
            let mut rows = self.rows.lock().unwrap();
            match request.method {
                Method::Post => {
                    let mut row: Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
                    if row.get("id").is_none() {
                        row["id"] = Value::String(format!("project-{}", rows.len() + 1));
                    }
                    rows.push(row.clone());
                    Ok(RawResponse { status: 201, body: row.to_string() })
                }
                Method::Get => Ok(RawResponse {
                    status: 200,
                    body: Value::Array(rows.clone()).to_string(),
                }),
                _ => Ok(RawResponse { status: 405, body: String::new() }),
            }
        }
    }

    fn service(transport: Arc<dyn Transport>) -> ProjectService {
        ProjectService::new(HttpClient::new(
            "http://backend.test",
            transport,
            Arc::new(MemoryTokenStore::with_token("t")),
        ))
    }

    #[tokio::test]
    async fn test_created_project_comes_back_in_list() {
        let service = service(Arc::new(ProjectsBackend::default()));
        let dto = CreateProject {
            id: None,
            name: "Checkout copy".to_string(),
            description: Some("Prompts for the checkout flow".to_string()),
        };

        let created = service.create(&dto).await.unwrap();
        let listed = service.list().await.unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], created);
        assert_eq!(listed[0].name, dto.name);
        assert_eq!(listed[0].description, dto.description);
    }

    #[tokio::test]
    async fn test_crud_paths() {
        let transport = RecordingTransport::new();
        transport.respond_always(200, r#"{"id":"my proj","name":"Demo"}"#);
        let service = service(Arc::new(transport.clone()));

        service.get("my proj").await.unwrap();
        service.update("my proj", &UpdateProject::default()).await.unwrap();
        service.delete("my proj").await.unwrap();

        let sent = transport.requests();
        assert_eq!(sent[0].url, "http://backend.test/projects/my%20proj");
        assert_eq!(sent[1].method, Method::Patch);
        assert_eq!(sent[2].method, Method::Delete);
    }

    #[tokio::test]
    async fn test_overview_waits_for_all_three_calls() {
        let transport = RecordingTransport::new();
        transport.respond(200, r#"{"id":"p1","name":"Demo"}"#);
        transport.respond(200, r#"[{"id":"welcome","name":"Welcome","projectId":"p1"}]"#);
        transport.respond(200, r#"[{"key":"brand","name":"Brand","projectId":"p1"}]"#);
        let service = service(Arc::new(transport.clone()));

        let overview = service.overview("p1").await.unwrap();

        assert_eq!(overview.project.id, "p1");
        assert_eq!(overview.prompts[0].id, "welcome");
        assert_eq!(overview.assets[0].key, "brand");
        assert!(overview.assets[0].enabled);
        assert_eq!(transport.call_count(), 3);
    }

    #[tokio::test]
    async fn test_overview_fails_when_one_call_fails() {
        let transport = RecordingTransport::new();
        transport.respond(200, r#"{"id":"p1","name":"Demo"}"#);
        transport.respond(403, r#"{"message":"Forbidden"}"#);
        transport.respond(200, "[]");
        let service = service(Arc::new(transport));

        let err = service.overview("p1").await.unwrap_err();
        assert_eq!(err.status(), Some(403));
    }
}

use crate::domain::models::{CreateUser, UpdateUser, User};
use crate::infrastructure::{HttpClient, api_path};
use crate::shared::errors::ApiError;

/// `/users`
#[derive(Debug, Clone)]
pub struct UserService {
    client: HttpClient,
}

impl UserService {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<User>, ApiError> {
        self.client.get("/users").await
    }

    pub async fn get(&self, user_id: &str) -> Result<User, ApiError> {
        self.client.get(&api_path(&["users", user_id])).await
    }

    pub async fn create(&self, dto: &CreateUser) -> Result<User, ApiError> {
        self.client.post("/users", dto).await
    }

    pub async fn update(&self, user_id: &str, dto: &UpdateUser) -> Result<User, ApiError> {
        self.client.patch(&api_path(&["users", user_id]), dto).await
    }

    pub async fn delete(&self, user_id: &str) -> Result<(), ApiError> {
        self.client.delete(&api_path(&["users", user_id])).await
    }
}

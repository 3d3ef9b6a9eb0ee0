use crate::domain::models::{LoginRequest, LoginResponse, RegisterRequest, User, UserProfile};
use crate::infrastructure::HttpClient;
use crate::shared::errors::ApiError;

/// `/auth`
#[derive(Debug, Clone)]
pub struct AuthService {
    client: HttpClient,
}

impl AuthService {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.client.post("/auth/login", credentials).await
    }

    pub async fn register(&self, dto: &RegisterRequest) -> Result<User, ApiError> {
        self.client.post("/auth/register", dto).await
    }

    pub async fn profile(&self) -> Result<UserProfile, ApiError> {
        self.client.get("/auth/profile").await
    }
}

// Domain models (backend DTOs)
// Pure Rust, no framework dependencies

pub mod project;
pub mod prompt;
pub mod prompt_version;
pub mod translation;
pub mod asset;
pub mod tag;
pub mod region;
pub mod tenant;
pub mod user;
pub mod ai_model;
pub mod auth;
pub mod health;

pub use project::{CreateProject, Project, UpdateProject};
pub use prompt::{CreatePrompt, Prompt, UpdatePrompt};
pub use prompt_version::{CreatePromptVersion, PromptVersion, UpdatePromptVersion};
pub use translation::{CreatePromptTranslation, PromptTranslation, UpdatePromptTranslation};
pub use asset::{CreatePromptAsset, PromptAsset, UpdatePromptAsset};
pub use tag::{CreateTag, Tag, UpdateTag};
pub use region::{CreateRegion, Region, UpdateRegion};
pub use tenant::{CreateTenant, Tenant, UpdateTenant};
pub use user::{CreateUser, UpdateUser, User, UserProfile};
pub use ai_model::{AiModel, CreateAiModel, UpdateAiModel};
pub use auth::{LoginRequest, LoginResponse, RegisterRequest};
pub use health::{DependencyStatus, HealthReport};

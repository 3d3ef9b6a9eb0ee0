// Resource services: one module per backend resource.
// Each call is a single round trip through the HttpClient; errors are
// returned untouched for the UI to present.
pub mod auth;
pub mod projects;
pub mod prompts;
pub mod prompt_versions;
pub mod translations;
pub mod assets;
pub mod tags;
pub mod regions;
pub mod tenants;
pub mod users;
pub mod ai_models;

pub use auth::AuthService;
pub use projects::{ProjectOverview, ProjectService};
pub use prompts::PromptService;
pub use prompt_versions::PromptVersionService;
pub use translations::{TranslationService, VersionRef};
pub use assets::AssetService;
pub use tags::TagService;
pub use regions::RegionService;
pub use tenants::TenantService;
pub use users::UserService;
pub use ai_models::AiModelService;

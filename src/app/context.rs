//! Services shared through the component tree
//!
//! Built once by `App` and provided as Dioxus context; components reach them
//! through `use_services()`.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::domain::services::{AuthSession, BrowserNavigator, HealthMonitor, Navigator};
use crate::infrastructure::http::Transport;
use crate::infrastructure::{default_transport, BrowserTokenStore, HttpClient, TokenStore};
use crate::shared::errors::ApiError;
use crate::shared::notifications::NotificationBridge;
use crate::shared::services::{
    AiModelService, AssetService, AuthService, ProjectService, PromptService, PromptVersionService, RegionService,
    TagService, TenantService, TranslationService, UserService,
};

#[derive(Clone)]
pub struct AppServices {
    pub config: Arc<AppConfig>,
    pub client: HttpClient,
    pub session: AuthSession,
    pub health: HealthMonitor,
    pub notifications: NotificationBridge,
}

impl AppServices {
    /// Wire everything for the browser: Web Storage tokens, the platform
    /// transport and full-page navigation
    pub fn from_config(config: AppConfig) -> Self {
        Self::new(
            config,
            default_transport(),
            Arc::new(BrowserTokenStore),
            Arc::new(BrowserNavigator),
        )
    }

    pub fn new(
        config: AppConfig,
        transport: Arc<dyn Transport>,
        tokens: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let client = HttpClient::new(config.api_base_url.clone(), transport, tokens.clone())
            .with_custom_key(config.custom_key.clone());
        let session = AuthSession::new(AuthService::new(client.clone()), tokens, navigator);
        let health = HealthMonitor::new(client.clone(), config.health_interval);
        let notifications = NotificationBridge::with_window(config.notification_dedup_window);

        Self {
            config: Arc::new(config),
            client,
            session,
            health,
            notifications,
        }
    }

    /// Present a failed call: a 401 ends the session, anything else becomes
    /// an error notification
    pub fn report_error(&self, error: &ApiError) {
        if !self.session.observe_error(error) {
            self.notifications.error(error.user_message());
        }
    }

    /// Pass a result through, reporting the error on the way
    pub fn reporting<T>(&self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        if let Err(e) = &result {
            self.report_error(e);
        }
        result
    }

    pub fn projects(&self) -> ProjectService {
        ProjectService::new(self.client.clone())
    }

    pub fn prompts(&self) -> PromptService {
        PromptService::new(self.client.clone())
    }

    pub fn prompt_versions(&self) -> PromptVersionService {
        PromptVersionService::new(self.client.clone())
    }

    pub fn translations(&self) -> TranslationService {
        TranslationService::new(self.client.clone())
    }

    pub fn assets(&self) -> AssetService {
        AssetService::new(self.client.clone())
    }

    pub fn tags(&self) -> TagService {
        TagService::new(self.client.clone())
    }

    pub fn regions(&self) -> RegionService {
        RegionService::new(self.client.clone())
    }

    pub fn tenants(&self) -> TenantService {
        TenantService::new(self.client.clone())
    }

    pub fn users(&self) -> UserService {
        UserService::new(self.client.clone())
    }

    pub fn ai_models(&self) -> AiModelService {
        AiModelService::new(self.client.clone())
    }
}

impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.config, &other.config)
    }
}

//! Services module
//!
//! This module contains the client's business logic services and the
//! collaborator interfaces they depend on

pub mod account;
pub mod api;
pub mod client;
pub mod notification;
pub mod participation;

// Re-export commonly used services
pub use account::AccountService;
pub use api::{EventApi, LoggingNavigator, Navigator, NoopNavigator, NotificationApi, UserApi};
pub use client::ApiClient;
pub use notification::NotificationTriage;
pub use participation::{resolve_membership, DerivedMembership, JoinAffordance, JoinOutcome, ParticipationService};

use std::sync::Arc;

use crate::config::settings::Settings;
use crate::utils::errors::{ApiResult, Result};

/// Service factory wiring every service to one shared API client
#[derive(Clone)]
pub struct ServiceFactory {
    pub client: Arc<ApiClient>,
    pub participation_service: ParticipationService,
    pub account_service: AccountService,
    settings: Settings,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: Settings, navigator: Arc<dyn Navigator>) -> Result<Self> {
        let client = Arc::new(ApiClient::new(&settings.api)?);
        Ok(Self::with_client(client, settings, navigator))
    }

    /// Build services over an existing client
    pub fn with_client(client: Arc<ApiClient>, settings: Settings, navigator: Arc<dyn Navigator>) -> Self {
        let participation_service =
            ParticipationService::new(client.clone(), client.clone(), navigator.clone())
                .with_refresh_after_join(settings.features.refresh_after_join);
        let account_service = AccountService::new(client.clone(), navigator);

        Self {
            client,
            participation_service,
            account_service,
            settings,
        }
    }

    /// Fetch notifications into a new triage for a notification view
    pub async fn notification_triage(&self) -> ApiResult<NotificationTriage> {
        let triage = NotificationTriage::load(self.client.clone()).await?;
        Ok(triage.with_snippet_length(self.settings.features.snippet_length))
    }
}

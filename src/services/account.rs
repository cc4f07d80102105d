//! Account service
//!
//! Loads the profile page data. A missing session routes to login.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::models::Profile;
use crate::utils::errors::ApiResult;
use super::api::{Navigator, UserApi};

#[derive(Clone)]
pub struct AccountService {
    users: Arc<dyn UserApi>,
    navigator: Arc<dyn Navigator>,
}

impl AccountService {
    pub fn new(users: Arc<dyn UserApi>, navigator: Arc<dyn Navigator>) -> Self {
        Self { users, navigator }
    }

    /// Fetch the profile; authentication failures send the user to login
    pub async fn load_profile(&self) -> ApiResult<Profile> {
        match self.users.fetch_profile().await {
            Ok(profile) => {
                debug!(
                    username = %profile.username,
                    upcoming = profile.upcoming_events.len(),
                    past = profile.past_events.len(),
                    "Profile loaded"
                );
                Ok(profile)
            }
            Err(e) => {
                if e.is_authentication() {
                    self.navigator.navigate_to_login();
                } else {
                    warn!(error = %e, "Failed to load profile");
                }
                Err(e)
            }
        }
    }
}

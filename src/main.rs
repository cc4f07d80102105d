//! VolunteerHub client
//!
//! Command-line entry point: opens a session, loads the event board and the
//! notification inbox, and logs what a user would see.

use std::sync::Arc;

use tracing::{info, warn};

use VolunteerHub::{
    config::Settings,
    services::{JoinAffordance, LoggingNavigator, ServiceFactory},
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}", VolunteerHub::info());
    info!(base_url = %settings.api.base_url, "Connecting to platform API");

    let services = ServiceFactory::new(settings.clone(), Arc::new(LoggingNavigator))?;

    let mut opened_session = false;
    if let (Some(email), Some(password)) = (&settings.session.email, &settings.session.password) {
        match services.client.login(email, password).await {
            Ok(user) => {
                info!(user = ?user.username, "Logged in");
                opened_session = true;
            }
            Err(e) => warn!(error = %e, "Login failed, continuing anonymously"),
        }
    }

    let board = services.participation_service.load_board().await?;
    info!(events = board.events().len(), authenticated = board.current_user().is_some(), "Event board loaded");

    for (event, membership) in board.memberships() {
        let action = match membership.join_affordance() {
            JoinAffordance::Hidden => "closed",
            JoinAffordance::Organizer => "organizer",
            JoinAffordance::AlreadyParticipant => "participant",
            JoinAffordance::LoginRequired => "login to join",
            JoinAffordance::Available => "join",
        };
        let image = event
            .image_url
            .as_deref()
            .filter(|path| !path.trim().is_empty())
            .map(|path| services.client.image_url(path));
        info!(
            event_id = ?event.token(),
            title = %event.title,
            status = event.status.as_str(),
            action = action,
            image = ?image,
            "Event"
        );
    }

    if board.current_user().is_none() {
        info!("Not signed in, skipping notifications");
        return Ok(());
    }

    show_notifications(&services).await?;

    if opened_session {
        if let Err(e) = services.client.logout().await {
            warn!(error = %e, "Logout failed");
        }
    }

    Ok(())
}

/// Log the inbox the way the notification list renders it
async fn show_notifications(services: &ServiceFactory) -> anyhow::Result<()> {
    let triage = services.notification_triage().await?;
    info!(
        total = triage.state().notifications().len(),
        unread = triage.unread_count(),
        "Notifications loaded"
    );
    for notification in triage.visible_notifications() {
        info!(
            event = %notification.event.title,
            from = %triage.sender_label(notification),
            read = notification.read,
            "{}",
            triage.snippet(notification)
        );
    }

    Ok(())
}

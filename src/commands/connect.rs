//! Connection options shared by every command that talks to the service.

use anyhow::{Context, Result};
use clap::Args;
use futures::future;
use secrecy::SecretString;
use tracing::debug;

use crate::api::HttpReservationClient;
use crate::config::AppConfig;
use crate::engine::Session;

#[derive(Args, Clone, Debug)]
pub struct ConnectArgs {
    /// Reservation service URL (default: from config)
    #[arg(long, env = "SEATMAP_URL")]
    pub url: Option<String>,

    /// Bearer token (default: from config)
    #[arg(long, env = "SEATMAP_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

impl ConnectArgs {
    /// Build a session from config plus command-line overrides. Nothing is
    /// fetched yet.
    pub fn session(&self, config: &AppConfig) -> Result<Session<HttpReservationClient>> {
        let plan = config.floor_plan()?;

        let base_url = self.url.as_deref().unwrap_or(&config.base_url);
        let token = self
            .token
            .clone()
            .filter(|t| !t.is_empty())
            .map(SecretString::from)
            .or_else(|| config.auth_token_secret());

        let client = HttpReservationClient::new(base_url, token)
            .with_context(|| format!("Invalid service URL: {}", base_url))?;
        debug!(url = %client.base_url(), "connecting");

        Ok(Session::new(client, plan, config.session_settings()?))
    }

    /// Open a session, resolve the signed-in user and load the first snapshot.
    pub async fn connect(&self) -> Result<Session<HttpReservationClient>> {
        let config = AppConfig::load()?;
        let session = self.session(&config)?;

        let (_, snapshot) = future::join(session.load_current_user(), session.refresh()).await;
        snapshot.with_context(|| {
            format!("Could not load seats from {}", session.api().base_url())
        })?;

        Ok(session)
    }
}

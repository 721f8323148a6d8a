//! Config command - manage local configuration.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::api::HttpReservationClient;
use crate::config::AppConfig;

#[derive(Args)]
pub struct ConfigCmd {
    #[command(subcommand)]
    pub command: ConfigSubCmd,
}

#[derive(Subcommand)]
pub enum ConfigSubCmd {
    /// Set the reservation service URL (default: http://127.0.0.1:8000)
    SetUrl(SetUrlCmd),

    /// Set the bearer token sent with every request
    SetToken(SetTokenCmd),

    /// Set the name used on bookings when the service has none
    SetName(SetNameCmd),

    /// Show current configuration
    Show,
}

#[derive(Args)]
pub struct SetUrlCmd {
    /// Service base URL (e.g., https://desks.example.com/api)
    pub url: String,
}

#[derive(Args)]
pub struct SetTokenCmd {
    /// Token issued by the reservation service
    pub token: String,
}

#[derive(Args)]
pub struct SetNameCmd {
    /// Display name
    pub name: String,
}

impl ConfigCmd {
    pub async fn run(&self) -> Result<()> {
        match &self.command {
            ConfigSubCmd::SetUrl(cmd) => {
                HttpReservationClient::new(&cmd.url, None)
                    .with_context(|| format!("Invalid URL: {}", cmd.url))?;
                let mut config = AppConfig::load()?;
                config.base_url = cmd.url.clone();
                config.save()?;
                println!("Base URL set to: {}", cmd.url);
            }
            ConfigSubCmd::SetToken(cmd) => {
                let mut config = AppConfig::load()?;
                config.auth_token = Some(cmd.token.clone());
                config.save()?;
                println!("Token saved.");
            }
            ConfigSubCmd::SetName(cmd) => {
                let mut config = AppConfig::load()?;
                config.display_name = cmd.name.clone();
                config.save()?;
                println!("Display name set to: {}", cmd.name);
            }
            ConfigSubCmd::Show => {
                let config = AppConfig::load()?;
                let plan = config.floor_plan()?;
                println!("Config: {}", AppConfig::config_path()?.display());
                println!();
                println!("base_url:        {}", config.base_url);
                println!(
                    "auth_token:      {}",
                    if config.has_auth_token() { "(set)" } else { "(not set)" }
                );
                println!("display_name:    {}", config.display_name);
                println!("poll_interval:   {}ms", config.poll_interval_ms);
                println!("booking:         {}m", config.booking_duration_minutes);
                println!("stale_selection: {:?}", config.stale_selection);
                println!(
                    "floor:           {} ({} tables, {} seats, zones {:?})",
                    if config.floor.is_some() { "custom" } else { "built-in" },
                    plan.clusters().len(),
                    plan.capacity(),
                    plan.zones().bounds()
                );
            }
        }
        Ok(())
    }
}

//! Whoami command - show who the service thinks you are.

use anyhow::Result;
use clap::Args;

use super::connect::ConnectArgs;
use crate::config::AppConfig;

#[derive(Args)]
pub struct WhoamiCmd {
    #[command(flatten)]
    pub connect: ConnectArgs,
}

impl WhoamiCmd {
    pub async fn run(&self) -> Result<()> {
        let config = AppConfig::load()?;
        let session = self.connect.session(&config)?;

        match session.load_current_user().await {
            Some(me) => {
                println!("id:   {}", me.identifier());
                println!("name: {}", me.name.as_deref().unwrap_or(&config.display_name));
            }
            None => {
                println!("Not signed in. Bookings will be made as '{}'.", config.display_name);
                println!("Set a token with `seats config set-token <token>`.");
            }
        }

        Ok(())
    }
}

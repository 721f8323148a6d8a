//! Release command - check out of a seat you hold.

use anyhow::{Context, Result};
use clap::Args;

use super::connect::ConnectArgs;
use super::render;
use crate::types::SeatId;

#[derive(Args)]
pub struct ReleaseCmd {
    #[command(flatten)]
    pub connect: ConnectArgs,

    /// Seat number
    pub seat: SeatId,
}

impl ReleaseCmd {
    pub async fn run(&self) -> Result<()> {
        let session = self.connect.connect().await?;
        if session.current_user().await.is_none() {
            println!("Not signed in: the service can't tell which seats are yours.");
        }

        session.select(self.seat).await?;
        let result = session.release().await;
        if let Some(notice) = session.notification().await {
            println!("{}", render::notification_line(&notice));
        }

        result.context("Checkout failed")?;
        Ok(())
    }
}

//! Find command - find who is sitting where.

use anyhow::Result;
use clap::Args;

use super::connect::ConnectArgs;
use super::render;

#[derive(Args)]
pub struct FindCmd {
    #[command(flatten)]
    pub connect: ConnectArgs,

    /// Name or id of the colleague (case-insensitive, partial match)
    pub query: String,
}

impl FindCmd {
    pub async fn run(&self) -> Result<()> {
        if self.query.trim().is_empty() {
            println!("Nothing to search for.");
            return Ok(());
        }

        let session = self.connect.connect().await?;
        let hits = session.search(&self.query).await;

        if hits.is_empty() {
            println!("No bookings match '{}'.", self.query.trim());
            return Ok(());
        }

        for seat in &hits {
            let zone = session.plan().zone_of(seat.id);
            println!("{}", render::seat_line(seat, zone, Some(session.time_left(seat))));
        }

        Ok(())
    }
}

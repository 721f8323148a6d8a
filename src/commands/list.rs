//! List command - list seats and their booking state.

use anyhow::{Context, Result};
use clap::Args;

use super::connect::ConnectArgs;
use super::render;
use crate::types::{Seat, SeatStatus};

#[derive(Args)]
pub struct ListCmd {
    #[command(flatten)]
    pub connect: ConnectArgs,

    /// Filter by status
    #[arg(long, short = 's', value_enum)]
    pub status: Option<SeatStatus>,

    /// Print the seats as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListCmd {
    pub async fn run(&self) -> Result<()> {
        let session = self.connect.connect().await?;

        let seats: Vec<Seat> = session
            .seats()
            .await
            .into_iter()
            .filter(|s| self.status.is_none_or(|status| s.status == status))
            .collect();

        if self.json {
            let json = serde_json::to_string_pretty(&seats).context("Failed to serialize seats")?;
            println!("{}", json);
            return Ok(());
        }

        if seats.is_empty() {
            match self.status {
                Some(status) => println!("No {} seats.", status),
                None => println!("The service reported no seats."),
            }
            return Ok(());
        }

        for seat in &seats {
            let zone = session.plan().zone_of(seat.id);
            let left = seat.is_occupied().then(|| session.time_left(seat));
            println!("{}", render::seat_line(seat, zone, left));
        }

        let free = seats.iter().filter(|s| s.is_available()).count();
        println!("\n{} seats, {} available", seats.len(), free);

        Ok(())
    }
}

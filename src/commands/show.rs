//! Show command - details of a single seat.

use anyhow::Result;
use clap::Args;

use super::connect::ConnectArgs;
use crate::types::SeatId;

#[derive(Args)]
pub struct ShowCmd {
    #[command(flatten)]
    pub connect: ConnectArgs,

    /// Seat number
    pub seat: SeatId,
}

impl ShowCmd {
    pub async fn run(&self) -> Result<()> {
        let session = self.connect.connect().await?;
        let selection = session.select(self.seat).await?;
        let seat = selection.seat();
        let plan = session.plan();

        println!("Seat #{}", seat.id);
        println!("  status:   {}", seat.status);
        println!("  zone:     {}", plan.zone_of(seat.id));

        match plan.place_seat(seat.id) {
            Some(placed) => println!(
                "  table:    {} {}-{}",
                placed.kind,
                plan.clusters()[placed.cluster].first_id,
                plan.clusters()[placed.cluster].last_id()
            ),
            None => println!("  table:    (not on the map)"),
        }

        if let Some(price) = seat.price {
            println!("  price:    {:.2}", price);
        }

        if seat.is_occupied() {
            if let Some(name) = seat.holder_name() {
                println!("  holder:   {}", name);
            }
            if let Some(ref by) = seat.booked_by {
                println!("  id:       {}", by);
            }
            if let Some(ref details) = seat.booking_details {
                println!("  slot:     {} {}", details.date, details.time_slot);
            }
            if let Some(at) = seat.booking_time {
                println!("  booked:   {}", at.format("%Y-%m-%d %H:%M UTC"));
            }
            println!("  checkout: {}", session.time_left(seat));
        }

        if let Some(access) = session.access().await {
            println!("\nThis seat is {}.", access);
        }

        Ok(())
    }
}

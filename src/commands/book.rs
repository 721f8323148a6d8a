//! Book command - reserve a seat for a lunch slot.

use anyhow::{Context, Result};
use clap::Args;

use super::connect::ConnectArgs;
use super::render;
use crate::api::ReservationApi;
use crate::engine::Session;
use crate::types::{BookingSlot, DateChoice, SeatId, TIME_SLOTS};

/// Date and time slot options for a booking.
#[derive(Args, Clone, Debug)]
pub struct SlotArgs {
    /// Day of the booking
    #[arg(long, short = 'd', value_enum, default_value_t = DateChoice::Today)]
    pub date: DateChoice,

    /// Time slot: 12:00 PM, 12:30 PM, 1:00 PM or 1:30 PM
    #[arg(long, short = 't', default_value = TIME_SLOTS[0])]
    pub slot: String,
}

impl SlotArgs {
    pub fn resolve(&self) -> Result<BookingSlot> {
        let today = chrono::Local::now().date_naive();
        let date = self.date.resolve(today)?;
        Ok(BookingSlot::new(date, &self.slot)?)
    }
}

#[derive(Args)]
pub struct BookCmd {
    #[command(flatten)]
    pub connect: ConnectArgs,

    /// Seat number
    pub seat: SeatId,

    #[command(flatten)]
    pub slot: SlotArgs,
}

impl BookCmd {
    pub async fn run(&self) -> Result<()> {
        let slot = self.slot.resolve()?;
        let session = self.connect.connect().await?;

        session.select(self.seat).await?;
        book_selected(&session, &slot).await
    }
}

/// Book whatever the session has selected and report the outcome.
pub(super) async fn book_selected<A: ReservationApi>(session: &Session<A>, slot: &BookingSlot) -> Result<()> {
    let result = session.book(slot).await;
    if let Some(notice) = session.notification().await {
        println!("{}", render::notification_line(&notice));
    }

    let seat_id = result.context("Booking failed")?;
    println!(
        "Seat #{} is yours on {} at {}.",
        seat_id,
        slot.date_string(),
        slot.time_slot
    );
    Ok(())
}

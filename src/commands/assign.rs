//! Assign command - pick a random free seat, optionally booking it.

use anyhow::Result;
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::book::{book_selected, SlotArgs};
use super::connect::ConnectArgs;
use super::render;
use crate::engine::SessionError;

#[derive(Args)]
pub struct AssignCmd {
    #[command(flatten)]
    pub connect: ConnectArgs,

    /// Book the picked seat straight away
    #[arg(long)]
    pub book: bool,

    /// Seed for a repeatable pick
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub slot: SlotArgs,
}

impl AssignCmd {
    pub async fn run(&self) -> Result<()> {
        let slot = if self.book { Some(self.slot.resolve()?) } else { None };
        let session = self.connect.connect().await?;

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let picked = session.auto_assign(&mut rng).await;
        if let Some(notice) = session.notification().await {
            println!("{}", render::notification_line(&notice));
        }

        let selection = match picked {
            Ok(selection) => selection,
            // nothing free is an answer, not a failure
            Err(SessionError::NoAvailableSeats) => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        let zone = session.plan().zone_of(selection.id());
        println!("{}", render::seat_line(selection.seat(), zone, None));

        if let Some(slot) = slot {
            book_selected(&session, &slot).await?;
        } else {
            println!("\nRun `seats book {}` to reserve it.", selection.id());
        }

        Ok(())
    }
}

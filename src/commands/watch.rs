//! Watch command - follow seat changes live.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use tokio::sync::mpsc;

use super::connect::ConnectArgs;
use super::render;
use crate::config::AppConfig;
use crate::engine::{PollEvent, Poller};

#[derive(Args)]
pub struct WatchCmd {
    #[command(flatten)]
    pub connect: ConnectArgs,

    /// Poll interval in milliseconds (default: from config)
    #[arg(long, short = 'i')]
    pub interval_ms: Option<u64>,

    /// Only report changes to seats booked by someone matching this
    #[arg(long, short = 'q')]
    pub query: Option<String>,
}

impl WatchCmd {
    pub async fn run(&self) -> Result<()> {
        let config = AppConfig::load()?;
        let session = Arc::new(self.connect.session(&config)?);
        session.load_current_user().await;

        let period = self
            .interval_ms
            .map(|ms| Duration::from_millis(ms.max(1)))
            .unwrap_or_else(|| config.poll_interval());

        println!(
            "Watching {} every {}ms...",
            session.api().base_url(),
            period.as_millis()
        );
        println!("Press Ctrl+C to stop.\n");

        let (tx, mut rx) = mpsc::channel(16);
        let poller = Poller::start(Arc::clone(&session), period, tx);
        let mut first = true;

        loop {
            tokio::select! {
                event = rx.recv() => {
                    let Some(event) = event else { break };
                    match event {
                        PollEvent::Refreshed(report) => {
                            if first {
                                let free = session.seats().await.iter().filter(|s| s.is_available()).count();
                                println!("{} seats, {} available", report.seats, free);
                                first = false;
                                continue;
                            }

                            for id in report.changed {
                                let Some(seat) = session.seat(id).await else {
                                    println!("#{:<3} removed", id);
                                    continue;
                                };
                                if let Some(ref query) = self.query {
                                    if !crate::engine::matches(&seat, query) {
                                        continue;
                                    }
                                }
                                let zone = session.plan().zone_of(id);
                                let left = seat.is_occupied().then(|| session.time_left(&seat));
                                println!("{}", render::seat_line(&seat, zone, left));
                            }
                        }
                        PollEvent::Failed(message) => eprintln!("Poll failed: {}", message),
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    println!("\nStopping watch.");
                    break;
                }
            }
        }

        poller.stop().await;
        Ok(())
    }
}

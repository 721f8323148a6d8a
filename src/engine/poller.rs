//! Periodic snapshot refresh.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::reconcile::ReconcileReport;
use super::session::Session;
use crate::api::ReservationApi;

/// Default time between polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// Outcome of one poll.
#[derive(Debug, Clone, PartialEq)]
pub enum PollEvent {
    Refreshed(ReconcileReport),
    /// The fetch failed; the session still shows the previous table.
    Failed(String),
}

/// Background task that refreshes a session on a fixed period.
///
/// The first poll runs immediately. A slow fetch delays the next tick rather
/// than stacking polls. Stops on [`Poller::stop`], on drop, or once the event
/// receiver is gone.
pub struct Poller {
    token: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl Poller {
    pub fn start<A>(session: Arc<Session<A>>, period: Duration, events: mpsc::Sender<PollEvent>) -> Self
    where
        A: ReservationApi + 'static,
    {
        let token = CancellationToken::new();
        let cancelled = token.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            info!(period_ms = period.as_millis() as u64, "seat polling started");

            loop {
                tokio::select! {
                    biased;
                    _ = cancelled.cancelled() => break,
                    _ = ticker.tick() => {}
                }

                let event = match session.refresh().await {
                    Ok(report) => PollEvent::Refreshed(report),
                    Err(e) => PollEvent::Failed(e.to_string()),
                };

                if events.send(event).await.is_err() {
                    debug!("poll receiver dropped");
                    break;
                }
            }

            info!("seat polling stopped");
        });

        Self {
            token,
            handle: Some(handle),
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Cancel the loop and wait for it to finish.
    pub async fn stop(mut self) {
        self.token.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

//! A user's session against the reservation service.
//!
//! The session owns the seat table, the selection, the current user and the
//! notification slot. All mutation goes through one async mutex, so polls and
//! user actions are applied one at a time. Booking and release never touch
//! local state directly: they ask the service, then resync from a fresh
//! snapshot.

use std::sync::Arc;

use chrono::Duration;
use rand::Rng;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::access::{seat_access, SeatAccess};
use super::assign;
use super::clock::{Clock, SystemClock};
use super::error::{Mutation, SessionError};
use super::expiry::{self, TimeLeft, DEFAULT_BOOKING_MINUTES};
use super::notify::{millis, Notification, NotificationDelays, NotificationKind, Notifications};
use super::reconcile::{ReconcileReport, Selection, SnapshotReconciler, StaleSelectionPolicy};
use super::search;
use super::view::{self, FloorSeat};
use crate::api::ReservationApi;
use crate::floor::FloorPlan;
use crate::types::{BookingRequest, BookingSlot, CurrentUser, Seat, SeatId};

/// Tunables for a session.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    /// Name sent with bookings when the service doesn't know the user's.
    pub display_name: String,
    pub booking_duration: Duration,
    pub delays: NotificationDelays,
    pub stale_selection: StaleSelectionPolicy,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            display_name: "Employee".to_string(),
            booking_duration: Duration::minutes(DEFAULT_BOOKING_MINUTES),
            delays: NotificationDelays::default(),
            stale_selection: StaleSelectionPolicy::default(),
        }
    }
}

#[derive(Debug)]
struct SessionState {
    board: SnapshotReconciler,
    me: Option<CurrentUser>,
    notices: Notifications,
}

pub struct Session<A> {
    api: A,
    plan: FloorPlan,
    settings: SessionSettings,
    clock: Arc<dyn Clock>,
    state: Mutex<SessionState>,
    // snapshots are ingested in the order they were requested
    refresh_gate: Mutex<()>,
}

impl<A: ReservationApi> Session<A> {
    pub fn new(api: A, plan: FloorPlan, settings: SessionSettings) -> Self {
        let state = SessionState {
            board: SnapshotReconciler::new(settings.stale_selection),
            me: None,
            notices: Notifications::default(),
        };

        Self {
            api,
            plan,
            settings,
            clock: Arc::new(SystemClock),
            state: Mutex::new(state),
            refresh_gate: Mutex::new(()),
        }
    }

    /// Replace the wall clock.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn plan(&self) -> &FloorPlan {
        &self.plan
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    // ========================================================================
    // Service round-trips
    // ========================================================================

    /// Ask the service who is signed in. A failure counts as nobody.
    pub async fn load_current_user(&self) -> Option<CurrentUser> {
        let me = match self.api.fetch_current_user().await {
            Ok(me) => me,
            Err(e) => {
                warn!(error = %e, "could not resolve current user");
                None
            }
        };

        if let Some(ref me) = me {
            debug!(user = me.identifier(), "signed in");
        }
        self.state.lock().await.me = me.clone();
        me
    }

    /// Fetch a full snapshot and reconcile it.
    ///
    /// On failure the previous table and selection stay as they were and an
    /// error notification is raised.
    pub async fn refresh(&self) -> Result<ReconcileReport, SessionError> {
        let _gate = self.refresh_gate.lock().await;

        match self.api.fetch_seats().await {
            Ok(records) => {
                let mut state = self.state.lock().await;
                Ok(state.board.ingest(records))
            }
            Err(e) => {
                warn!(error = %e, "seat snapshot fetch failed");
                self.notify(
                    NotificationKind::Error,
                    "Failed to fetch seats".to_string(),
                    self.settings.delays.fetch_error_ms,
                )
                .await;
                Err(SessionError::TransientFetch(e))
            }
        }
    }

    /// Book the selected seat.
    pub async fn book(&self, slot: &BookingSlot) -> Result<SeatId, SessionError> {
        let request = {
            let state = self.state.lock().await;
            let selection = state.board.selection().ok_or(SessionError::NoSelection)?;
            let access = seat_access(selection, state.me.as_ref());
            if !access.can_book() {
                return Err(SessionError::ActionUnavailable {
                    mutation: Mutation::Book,
                    seat_id: selection.id(),
                    access,
                });
            }

            BookingRequest {
                seat_id: selection.id(),
                name: state
                    .me
                    .as_ref()
                    .and_then(|me| me.name.clone())
                    .unwrap_or_else(|| self.settings.display_name.clone()),
                date: slot.date_string(),
                time_slot: slot.time_slot.clone(),
                w3_id: state.me.as_ref().map(|me| me.w3_id.clone()),
            }
        };

        let seat_id = request.seat_id;
        let ttl = self.settings.delays.booking_ms;

        match self.api.book(&request).await {
            Ok(()) => {
                info!(seat_id, date = %request.date, slot = %request.time_slot, "seat booked");
                self.notify(NotificationKind::Success, format!("Seat {} Reserved", seat_id), ttl)
                    .await;
                self.resync().await;
                Ok(seat_id)
            }
            Err(source) => {
                warn!(seat_id, error = %source, "booking rejected");
                self.notify(NotificationKind::Error, "Booking Failed".to_string(), ttl)
                    .await;
                Err(SessionError::MutationRejected {
                    mutation: Mutation::Book,
                    seat_id,
                    source,
                })
            }
        }
    }

    /// Release the selected seat. Only the booking holder may do this.
    pub async fn release(&self) -> Result<SeatId, SessionError> {
        let seat_id = {
            let state = self.state.lock().await;
            let selection = state.board.selection().ok_or(SessionError::NoSelection)?;
            let access = seat_access(selection, state.me.as_ref());
            if !access.can_release() {
                return Err(SessionError::ActionUnavailable {
                    mutation: Mutation::Release,
                    seat_id: selection.id(),
                    access,
                });
            }
            selection.id()
        };

        let ttl = self.settings.delays.release_ms;

        match self.api.release(seat_id).await {
            Ok(()) => {
                info!(seat_id, "seat released");
                self.notify(
                    NotificationKind::Success,
                    format!("Checked out of Seat {}", seat_id),
                    ttl,
                )
                .await;
                self.resync().await;
                Ok(seat_id)
            }
            Err(source) => {
                warn!(seat_id, error = %source, "release rejected");
                self.notify(NotificationKind::Error, "Checkout Failed".to_string(), ttl)
                    .await;
                Err(SessionError::MutationRejected {
                    mutation: Mutation::Release,
                    seat_id,
                    source,
                })
            }
        }
    }

    async fn resync(&self) {
        // refresh raises its own notification on failure
        if let Err(e) = self.refresh().await {
            debug!(error = %e, "resync after mutation failed");
        }
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Select a seat by number.
    pub async fn select(&self, id: SeatId) -> Result<Selection, SessionError> {
        let mut state = self.state.lock().await;
        state
            .board
            .select(id)
            .cloned()
            .ok_or(SessionError::UnknownSeat(id))
    }

    pub async fn selection(&self) -> Option<Selection> {
        self.state.lock().await.board.selection().cloned()
    }

    /// What the current user may do with the selection.
    pub async fn access(&self) -> Option<SeatAccess> {
        let state = self.state.lock().await;
        state
            .board
            .selection()
            .map(|selection| seat_access(selection, state.me.as_ref()))
    }

    /// Select a random available seat.
    ///
    /// When nothing is free the selection is left alone and
    /// [`SessionError::NoAvailableSeats`] is returned.
    pub async fn auto_assign<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Selection, SessionError> {
        let mut state = self.state.lock().await;
        let now = self.clock.now();
        let ttl = millis(self.settings.delays.assign_ms);

        let Some(id) = assign::pick_random(state.board.table().iter(), rng).map(|s| s.id) else {
            info!("auto-assign found no available seats");
            state
                .notices
                .raise(NotificationKind::Error, "No seats available!", now, ttl);
            return Err(SessionError::NoAvailableSeats);
        };

        let selection = state
            .board
            .select(id)
            .cloned()
            .ok_or(SessionError::UnknownSeat(id))?;
        state
            .notices
            .raise(NotificationKind::Success, format!("Auto-assigned Seat #{}", id), now, ttl);
        info!(seat_id = id, "auto-assigned seat");
        Ok(selection)
    }

    // ========================================================================
    // Read side
    // ========================================================================

    pub async fn current_user(&self) -> Option<CurrentUser> {
        self.state.lock().await.me.clone()
    }

    pub async fn is_loaded(&self) -> bool {
        self.state.lock().await.board.table().is_loaded()
    }

    /// All seats in the table, by id.
    pub async fn seats(&self) -> Vec<Seat> {
        self.state.lock().await.board.table().iter().cloned().collect()
    }

    pub async fn seat(&self, id: SeatId) -> Option<Seat> {
        self.state.lock().await.board.table().get(id).cloned()
    }

    /// Seats booked by someone matching `query`.
    pub async fn search(&self, query: &str) -> Vec<Seat> {
        self.state
            .lock()
            .await
            .board
            .table()
            .iter()
            .filter(|seat| search::matches(seat, query))
            .cloned()
            .collect()
    }

    /// Countdown to auto-checkout for `seat`, as of now.
    pub fn time_left(&self, seat: &Seat) -> TimeLeft {
        expiry::time_left(seat.booking_time, self.clock.now(), self.settings.booking_duration)
    }

    /// The map: every planned seat with its state, selection and search hits.
    pub async fn floor_view(&self, query: &str) -> Vec<FloorSeat> {
        let state = self.state.lock().await;
        view::floor_view(&self.plan, &state.board, query)
    }

    /// Seats the service knows about that have no table on the plan.
    pub async fn unplaced(&self) -> Vec<SeatId> {
        let state = self.state.lock().await;
        view::unplaced(&self.plan, &state.board)
    }

    /// The notification on screen right now, if any.
    pub async fn notification(&self) -> Option<Notification> {
        let now = self.clock.now();
        self.state.lock().await.notices.current(now).cloned()
    }

    async fn notify(&self, kind: NotificationKind, message: String, ttl_ms: u64) {
        let now = self.clock.now();
        self.state
            .lock()
            .await
            .notices
            .raise(kind, message, now, millis(ttl_ms));
    }
}

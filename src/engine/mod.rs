//! Client-side reservation engine.
//!
//! Holds the authoritative seat table built from full snapshots, tracks the
//! user's selection across refreshes, and drives bookings and releases
//! against a [`ReservationApi`](crate::api::ReservationApi).

mod access;
mod assign;
mod clock;
mod error;
mod expiry;
mod notify;
mod poller;
mod reconcile;
mod search;
mod session;
mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use access::SeatAccess;
pub use clock::{Clock, SystemClock};
pub use error::{Mutation, SessionError};
pub use expiry::{TimeLeft, DEFAULT_BOOKING_MINUTES};
pub use notify::{Notification, NotificationDelays, NotificationKind};
pub use poller::{PollEvent, Poller, DEFAULT_POLL_INTERVAL};
pub use reconcile::{ReconcileReport, Selection, SelectionOutcome, StaleSelectionPolicy};
pub use search::matches;
pub use session::{Session, SessionSettings};
pub use view::FloorSeat;

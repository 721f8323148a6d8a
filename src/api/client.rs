//! Reservation service trait.

use std::future::Future;

use super::error::ApiError;
use crate::types::{BookingRequest, CurrentUser, SeatId, SeatRecord};

/// The reservation service as the engine sees it.
///
/// Implementations talk to the real backend ([`super::HttpReservationClient`])
/// or fake it in tests. The service is responsible for refusing double
/// bookings; callers never assume a mutation succeeded until the next
/// snapshot shows it.
pub trait ReservationApi: Send + Sync {
    /// Full snapshot of every seat.
    fn fetch_seats(&self) -> impl Future<Output = Result<Vec<SeatRecord>, ApiError>> + Send;

    /// Book a seat for a date and time slot.
    fn book(&self, request: &BookingRequest) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// Release a seat.
    fn release(&self, seat_id: SeatId) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// The signed-in user, or `None` when the session is anonymous.
    fn fetch_current_user(&self) -> impl Future<Output = Result<Option<CurrentUser>, ApiError>> + Send;
}

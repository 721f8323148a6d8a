//! In-memory reservation service for tests.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};

use crate::api::{ApiError, ReservationApi};
use crate::types::{BookingDetails, BookingRequest, CurrentUser, Seat, SeatId, SeatRecord, SeatStatus, UserDetails};

/// Booking time stamped on every seat the fake occupies.
pub fn booked_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
}

#[derive(Debug, Default)]
struct FakeState {
    seats: BTreeMap<SeatId, Seat>,
    me: Option<CurrentUser>,
    fail_fetch: bool,
    reject_mutations: bool,
    fetches: usize,
    bookings: Vec<BookingRequest>,
    releases: Vec<SeatId>,
}

/// Cloning shares the underlying state.
#[derive(Debug, Clone, Default)]
pub struct FakeApi {
    state: Arc<Mutex<FakeState>>,
}

impl FakeApi {
    pub fn with_available(ids: impl IntoIterator<Item = SeatId>) -> Self {
        let api = Self::default();
        {
            let mut state = api.state.lock().unwrap();
            for id in ids {
                state.seats.insert(
                    id,
                    Seat {
                        status: SeatStatus::Available,
                        price: Some(5.0),
                        ..Seat::placeholder(id)
                    },
                );
            }
        }
        api
    }

    pub fn signed_in_as(self, w3_id: &str) -> Self {
        self.state.lock().unwrap().me = Some(CurrentUser {
            w3_id: w3_id.to_string(),
            name: None,
        });
        self
    }

    /// Book `id` on behalf of someone, behind the session's back.
    pub fn occupy(&self, id: SeatId, by: &str) {
        let mut state = self.state.lock().unwrap();
        state.seats.insert(id, occupied(id, by, "Someone Else"));
    }

    pub fn remove(&self, id: SeatId) {
        self.state.lock().unwrap().seats.remove(&id);
    }

    pub fn set_fail_fetch(&self, fail: bool) {
        self.state.lock().unwrap().fail_fetch = fail;
    }

    pub fn set_reject_mutations(&self, reject: bool) {
        self.state.lock().unwrap().reject_mutations = reject;
    }

    pub fn fetches(&self) -> usize {
        self.state.lock().unwrap().fetches
    }

    pub fn bookings(&self) -> Vec<BookingRequest> {
        self.state.lock().unwrap().bookings.clone()
    }

    pub fn releases(&self) -> Vec<SeatId> {
        self.state.lock().unwrap().releases.clone()
    }
}

fn occupied(id: SeatId, by: &str, name: &str) -> Seat {
    Seat {
        id,
        status: SeatStatus::Occupied,
        booked_by: Some(by.to_string()),
        user_details: Some(UserDetails {
            full_name: Some(name.to_string()),
        }),
        booking_time: Some(booked_at()),
        booking_details: Some(BookingDetails {
            name: name.to_string(),
            date: "2026-10-16".to_string(),
            time_slot: "12:00 PM".to_string(),
        }),
        price: Some(5.0),
    }
}

fn rejected(message: &str) -> ApiError {
    ApiError::Rejected {
        status: 400,
        message: message.to_string(),
    }
}

impl ReservationApi for FakeApi {
    async fn fetch_seats(&self) -> Result<Vec<SeatRecord>, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.fetches += 1;
        if state.fail_fetch {
            return Err(ApiError::Rejected {
                status: 503,
                message: "Service Unavailable".to_string(),
            });
        }
        Ok(state.seats.values().cloned().map(SeatRecord::from).collect())
    }

    async fn book(&self, request: &BookingRequest) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        if state.reject_mutations {
            return Err(rejected("Booking is closed"));
        }
        let seat = state
            .seats
            .get(&request.seat_id)
            .ok_or(ApiError::SeatNotFound(request.seat_id))?;
        if seat.is_occupied() {
            return Err(rejected("Seat already booked"));
        }

        let by = request.w3_id.clone().unwrap_or_else(|| request.name.clone());
        let mut seat = occupied(request.seat_id, &by, &request.name);
        seat.booking_details = Some(BookingDetails {
            name: request.name.clone(),
            date: request.date.clone(),
            time_slot: request.time_slot.clone(),
        });
        state.seats.insert(request.seat_id, seat);
        state.bookings.push(request.clone());
        Ok(())
    }

    async fn release(&self, seat_id: SeatId) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        if state.reject_mutations {
            return Err(rejected("Checkout is closed"));
        }
        if !state.seats.contains_key(&seat_id) {
            return Err(ApiError::SeatNotFound(seat_id));
        }

        state.seats.insert(
            seat_id,
            Seat {
                status: SeatStatus::Available,
                price: Some(5.0),
                ..Seat::placeholder(seat_id)
            },
        );
        state.releases.push(seat_id);
        Ok(())
    }

    async fn fetch_current_user(&self) -> Result<Option<CurrentUser>, ApiError> {
        Ok(self.state.lock().unwrap().me.clone())
    }
}

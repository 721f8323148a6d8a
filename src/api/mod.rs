//! Client side of the reservation service.
//!
//! The engine only ever talks to [`ReservationApi`]; the HTTP client is one
//! implementation of it.

mod client;
mod error;
mod http;

pub use client::ReservationApi;
pub use error::ApiError;
pub use http::{HttpReservationClient, DEFAULT_BASE_URL};

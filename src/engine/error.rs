//! Session errors.

use thiserror::Error;

use super::access::SeatAccess;
use crate::api::ApiError;
use crate::types::SeatId;

/// A booking-side mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Book,
    Release,
}

impl std::fmt::Display for Mutation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mutation::Book => f.write_str("booking"),
            Mutation::Release => f.write_str("release"),
        }
    }
}

/// Everything a session operation can report. None of these are fatal; the
/// session state is left as it was.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Snapshot fetch failed. The last good table is kept and the next poll
    /// retries.
    #[error("failed to fetch seats: {0}")]
    TransientFetch(#[source] ApiError),

    #[error("{mutation} of seat {seat_id} was rejected: {source}")]
    MutationRejected {
        mutation: Mutation,
        seat_id: SeatId,
        #[source]
        source: ApiError,
    },

    #[error("no seats available")]
    NoAvailableSeats,

    #[error("no seat selected")]
    NoSelection,

    #[error("seat {0} is not in the current snapshot")]
    UnknownSeat(SeatId),

    #[error("{mutation} not possible: seat {seat_id} is {access}")]
    ActionUnavailable {
        mutation: Mutation,
        seat_id: SeatId,
        access: SeatAccess,
    },
}

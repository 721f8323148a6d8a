//! Floor plan configuration errors.

use thiserror::Error;

use crate::types::SeatId;

/// A malformed floor plan. Always fatal: raised before the engine starts.
#[derive(Debug, Error, PartialEq)]
pub enum FloorPlanError {
    #[error("floor plan has no table clusters")]
    NoClusters,

    #[error("cluster {index} has no seats")]
    EmptyCluster { index: usize },

    #[error("cluster {index} starts at seat 0; seat numbers begin at 1")]
    ZeroSeatId { index: usize },

    #[error("cluster {index} has invalid geometry: {reason}")]
    InvalidGeometry { index: usize, reason: String },

    #[error("seat {seat_id} belongs to more than one cluster")]
    OverlappingClusters { seat_id: SeatId },

    #[error("zone bounds must be strictly increasing and positive, got {0:?}")]
    InvalidZoneBounds([SeatId; 3]),

    #[error("last zone starts after seat {bound} but the floor ends at seat {max_id}")]
    EmptyLastZone { bound: SeatId, max_id: SeatId },
}

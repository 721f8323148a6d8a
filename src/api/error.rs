//! Reservation service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid service URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("not authenticated")]
    Unauthorized,

    #[error("seat not found: {0}")]
    SeatNotFound(u32),

    #[error("request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
}

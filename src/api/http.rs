//! HTTP client for the reservation backend.

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::client::ReservationApi;
use super::error::ApiError;
use crate::types::{BookingRequest, CurrentUser, SeatId, SeatRecord};

/// Default backend address.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Reservation service over HTTP/JSON.
pub struct HttpReservationClient {
    client: Client,
    base_url: Url,
    token: Option<SecretString>,
}

impl HttpReservationClient {
    /// Create a client for `base_url`, optionally sending `token` as a bearer
    /// credential.
    pub fn new(base_url: &str, token: Option<SecretString>) -> Result<Self, ApiError> {
        Ok(Self {
            client: Client::new(),
            base_url: normalize_base_url(base_url)?,
            token,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path)?)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        }
    }
}

/// Parse and make sure the path ends in `/` so relative joins append.
fn normalize_base_url(raw: &str) -> Result<Url, ApiError> {
    let mut url = Url::parse(raw.trim())?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

// FastAPI-style error body
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: serde_json::Value::String(detail),
        }) => detail,
        Ok(ErrorBody { detail }) => detail.to_string(),
        Err(_) => body.trim().to_string(),
    }
}

async fn rejection(response: Response) -> ApiError {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return ApiError::Unauthorized;
    }

    let body = response.text().await.unwrap_or_default();
    ApiError::Rejected {
        status: status.as_u16(),
        message: error_message(&body),
    }
}

impl ReservationApi for HttpReservationClient {
    async fn fetch_seats(&self) -> Result<Vec<SeatRecord>, ApiError> {
        let url = self.endpoint("seats")?;
        debug!(url = %url, "fetching seats");

        let response = self.authorized(self.client.get(url)).send().await?;
        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        // decoded element by element so one malformed seat can't fail the snapshot
        let values: Vec<serde_json::Value> = response.json().await?;
        Ok(values.into_iter().map(SeatRecord::from_value).collect())
    }

    async fn book(&self, request: &BookingRequest) -> Result<(), ApiError> {
        let url = self.endpoint("book")?;
        debug!(seat_id = request.seat_id, url = %url, "booking seat");

        let response = self
            .authorized(self.client.post(url).json(request))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::SeatNotFound(request.seat_id));
        }
        if !response.status().is_success() {
            return Err(rejection(response).await);
        }
        Ok(())
    }

    async fn release(&self, seat_id: SeatId) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("release/{}", seat_id))?;
        debug!(seat_id, url = %url, "releasing seat");

        let response = self.authorized(self.client.post(url)).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::SeatNotFound(seat_id));
        }
        if !response.status().is_success() {
            return Err(rejection(response).await);
        }
        Ok(())
    }

    async fn fetch_current_user(&self) -> Result<Option<CurrentUser>, ApiError> {
        let url = self.endpoint("me")?;
        debug!(url = %url, "fetching current user");

        let response = self.authorized(self.client.get(url)).send().await?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(response.json().await?),
            _ => Err(rejection(response).await),
        }
    }
}

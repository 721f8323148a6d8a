use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// Seat number on the floor plan (1..=N).
pub type SeatId = u32;

/// Booking state of a seat as reported by the reservation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Available,
    Occupied,
    /// Placeholder before the first snapshot, or a status we don't recognise.
    #[default]
    #[serde(other)]
    Unknown,
}

impl SeatStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeatStatus::Available => "available",
            SeatStatus::Occupied => "occupied",
            SeatStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile of the colleague holding a booking.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// What was submitted with the booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time_slot: String,
}

/// A normalized seat.
///
/// Booking fields are only ever populated while `status` is `Occupied`;
/// [`SeatRecord::normalize`] is the only way the engine builds one from the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub id: SeatId,
    pub status: SeatStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booked_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_details: Option<UserDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_details: Option<BookingDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl Seat {
    /// Stand-in used before the first snapshot has arrived.
    pub fn placeholder(id: SeatId) -> Self {
        Self {
            id,
            status: SeatStatus::Unknown,
            booked_by: None,
            user_details: None,
            booking_time: None,
            booking_details: None,
            price: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == SeatStatus::Available
    }

    pub fn is_occupied(&self) -> bool {
        self.status == SeatStatus::Occupied
    }

    /// Display name of the booking holder, if the service sent one.
    pub fn holder_name(&self) -> Option<&str> {
        self.user_details
            .as_ref()
            .and_then(|d| d.full_name.as_deref())
    }
}

/// A seat exactly as the reservation service sends it.
///
/// Depending on the backend revision the seat number arrives as `id` or as
/// `_id` (number or numeric string). Fields of the wrong type or `null` are
/// read as absent rather than failing the record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeatRecord {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default, rename = "_id")]
    pub alt_id: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "deserialize_status")]
    pub status: SeatStatus,
    #[serde(default, deserialize_with = "lenient")]
    pub booked_by: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub user_details: Option<UserDetails>,
    #[serde(default, deserialize_with = "deserialize_booking_time")]
    pub booking_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient")]
    pub booking_details: Option<BookingDetails>,
    #[serde(default, deserialize_with = "lenient")]
    pub price: Option<f64>,
}

impl SeatRecord {
    /// Decode one element of a `/seats` array.
    ///
    /// An element that isn't a seat object at all becomes an id-less record,
    /// which [`SeatRecord::normalize`] then drops.
    pub fn from_value(value: serde_json::Value) -> Self {
        match serde_json::from_value(value) {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "undecodable seat record");
                Self::default()
            }
        }
    }

    /// Resolve the canonical seat id, preferring `id` over `_id`.
    pub fn seat_id(&self) -> Option<SeatId> {
        self.id
            .as_ref()
            .and_then(parse_seat_id)
            .or_else(|| self.alt_id.as_ref().and_then(parse_seat_id))
    }

    /// Turn a wire record into a [`Seat`].
    ///
    /// Returns `None` when no usable id is present. Booking fields are dropped
    /// unless the seat is occupied. Normalizing a record built from an already
    /// normalized seat yields that same seat.
    pub fn normalize(self) -> Option<Seat> {
        let id = self.seat_id()?;
        let occupied = self.status == SeatStatus::Occupied;

        Some(Seat {
            id,
            status: self.status,
            booked_by: self.booked_by.filter(|_| occupied),
            user_details: self.user_details.filter(|_| occupied),
            booking_time: self.booking_time.filter(|_| occupied),
            booking_details: self.booking_details.filter(|_| occupied),
            price: self.price,
        })
    }
}

impl From<Seat> for SeatRecord {
    fn from(seat: Seat) -> Self {
        Self {
            id: Some(serde_json::Value::from(seat.id)),
            alt_id: None,
            status: seat.status,
            booked_by: seat.booked_by,
            user_details: seat.user_details,
            booking_time: seat.booking_time,
            booking_details: seat.booking_details,
            price: seat.price,
        }
    }
}

fn parse_seat_id(value: &serde_json::Value) -> Option<SeatId> {
    let raw = match value {
        serde_json::Value::Number(n) => n.as_u64()?,
        serde_json::Value::String(s) => s.trim().parse::<u64>().ok()?,
        _ => return None,
    };

    // 0 is never a seat number
    SeatId::try_from(raw).ok().filter(|id| *id > 0)
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn deserialize_status<'de, D>(deserializer: D) -> Result<SeatStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

/// Accepts RFC 3339 as well as naive ISO timestamps, which are taken as UTC.
fn deserialize_booking_time<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = lenient(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}

pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

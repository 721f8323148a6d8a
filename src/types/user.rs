use serde::{Deserialize, Serialize};

use super::SeatId;

/// The authenticated user as returned by `GET /me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Directory identifier; matched against a seat's `booked_by`.
    #[serde(alias = "id")]
    pub w3_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CurrentUser {
    pub fn identifier(&self) -> &str {
        &self.w3_id
    }

    /// Whether this user holds the booking identified by `booked_by`.
    pub fn owns(&self, booked_by: Option<&str>) -> bool {
        booked_by.is_some_and(|b| b == self.w3_id)
    }
}

/// Body of `POST /book`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    pub seat_id: SeatId,
    pub name: String,
    pub date: String,
    pub time_slot: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w3_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_user_parsing() {
        let me: CurrentUser =
            serde_json::from_str(r#"{"w3_id": "ann@example.com", "name": "Ann Lee"}"#).unwrap();
        assert_eq!(me.identifier(), "ann@example.com");
        assert_eq!(me.name.as_deref(), Some("Ann Lee"));

        let me: CurrentUser = serde_json::from_str(r#"{"id": "bob@example.com"}"#).unwrap();
        assert_eq!(me.identifier(), "bob@example.com");
    }

    #[test]
    fn test_owns() {
        let me = CurrentUser {
            w3_id: "ann@example.com".to_string(),
            name: None,
        };
        assert!(me.owns(Some("ann@example.com")));
        assert!(!me.owns(Some("bob@example.com")));
        assert!(!me.owns(None));
    }

    #[test]
    fn test_booking_request_body() {
        let request = BookingRequest {
            seat_id: 4,
            name: "Employee".to_string(),
            date: "2026-10-16".to_string(),
            time_slot: "12:00 PM".to_string(),
            w3_id: None,
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["seat_id"], 4);
        assert_eq!(body["time_slot"], "12:00 PM");
        assert!(body.get("w3_id").is_none());
    }
}

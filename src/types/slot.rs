use chrono::{Days, NaiveDate};
use thiserror::Error;

/// Lunch slots the cafeteria takes bookings for.
pub const TIME_SLOTS: [&str; 4] = ["12:00 PM", "12:30 PM", "1:00 PM", "1:30 PM"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlotError {
    #[error("unknown time slot '{0}' (choose one of: 12:00 PM, 12:30 PM, 1:00 PM, 1:30 PM)")]
    UnknownTimeSlot(String),

    #[error("date out of range")]
    DateOutOfRange,
}

/// Which day a booking is for, relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum DateChoice {
    #[default]
    Today,
    Tomorrow,
    DayAfter,
}

impl DateChoice {
    pub fn offset_days(&self) -> u64 {
        match self {
            DateChoice::Today => 0,
            DateChoice::Tomorrow => 1,
            DateChoice::DayAfter => 2,
        }
    }

    pub fn resolve(&self, today: NaiveDate) -> Result<NaiveDate, SlotError> {
        today
            .checked_add_days(Days::new(self.offset_days()))
            .ok_or(SlotError::DateOutOfRange)
    }
}

/// Date and time slot of a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSlot {
    pub date: NaiveDate,
    pub time_slot: String,
}

impl BookingSlot {
    /// Validate `time_slot` against [`TIME_SLOTS`] (case and spacing are
    /// forgiven) and pin it to `date`.
    pub fn new(date: NaiveDate, time_slot: &str) -> Result<Self, SlotError> {
        let wanted = squash(time_slot);
        let canonical = TIME_SLOTS
            .iter()
            .find(|slot| squash(slot) == wanted)
            .ok_or_else(|| SlotError::UnknownTimeSlot(time_slot.to_string()))?;

        Ok(Self {
            date,
            time_slot: canonical.to_string(),
        })
    }

    /// ISO date as sent to the service.
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 12, 31).unwrap()
    }

    #[test]
    fn test_date_choices() {
        assert_eq!(DateChoice::Today.resolve(today()).unwrap(), today());
        assert_eq!(
            DateChoice::DayAfter.resolve(today()).unwrap(),
            NaiveDate::from_ymd_opt(2027, 1, 2).unwrap()
        );
    }

    #[test]
    fn test_slot_validation() {
        let slot = BookingSlot::new(today(), "12:30pm").unwrap();
        assert_eq!(slot.time_slot, "12:30 PM");
        assert_eq!(slot.date_string(), "2026-12-31");

        assert_eq!(
            BookingSlot::new(today(), "3:00 PM").unwrap_err(),
            SlotError::UnknownTimeSlot("3:00 PM".to_string())
        );
    }
}

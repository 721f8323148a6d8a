//! Zone bands: contiguous seat-number ranges sharing a colour on the map.

use serde::{Deserialize, Serialize};

use super::error::FloorPlanError;
use crate::types::SeatId;

/// Visual zone of a seat, named after the colour of the food stall it faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Blue,
    Orange,
    Red,
    Green,
}

impl Zone {
    pub const ALL: [Zone; 4] = [Zone::Blue, Zone::Orange, Zone::Red, Zone::Green];

    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::Blue => "blue",
            Zone::Orange => "orange",
            Zone::Red => "red",
            Zone::Green => "green",
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive upper bounds of the first three bands; the fourth runs to the
/// end of the floor.
pub const DEFAULT_ZONE_BOUNDS: [SeatId; 3] = [25, 50, 75];

/// Partition of the seat-number range into four ordered zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneBands {
    bounds: [SeatId; 3],
}

impl ZoneBands {
    pub fn new(bounds: [SeatId; 3]) -> Result<Self, FloorPlanError> {
        let [a, b, c] = bounds;
        if a == 0 || a >= b || b >= c {
            return Err(FloorPlanError::InvalidZoneBounds(bounds));
        }
        Ok(Self { bounds })
    }

    pub fn bounds(&self) -> [SeatId; 3] {
        self.bounds
    }

    /// Zone for a seat number. Callers only pass ids from the floor plan.
    pub fn classify(&self, id: SeatId) -> Zone {
        let [a, b, c] = self.bounds;
        if id <= a {
            Zone::Blue
        } else if id <= b {
            Zone::Orange
        } else if id <= c {
            Zone::Red
        } else {
            Zone::Green
        }
    }

    /// Seat numbers covered by `zone` on a floor ending at `max_id`.
    pub fn range(&self, zone: Zone, max_id: SeatId) -> std::ops::RangeInclusive<SeatId> {
        let [a, b, c] = self.bounds;
        match zone {
            Zone::Blue => 1..=a,
            Zone::Orange => a + 1..=b,
            Zone::Red => b + 1..=c,
            Zone::Green => c + 1..=max_id,
        }
    }
}

impl Default for ZoneBands {
    fn default() -> Self {
        Self {
            bounds: DEFAULT_ZONE_BOUNDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bands() {
        let bands = ZoneBands::default();
        assert_eq!(bands.classify(1), Zone::Blue);
        assert_eq!(bands.classify(25), Zone::Blue);
        assert_eq!(bands.classify(26), Zone::Orange);
        assert_eq!(bands.classify(50), Zone::Orange);
        assert_eq!(bands.classify(51), Zone::Red);
        assert_eq!(bands.classify(75), Zone::Red);
        assert_eq!(bands.classify(76), Zone::Green);
        assert_eq!(bands.classify(100), Zone::Green);
    }

    #[test]
    fn test_bands_partition_range() {
        let bands = ZoneBands::default();
        let max_id = 76;

        for id in 1..=max_id {
            let zone = bands.classify(id);
            // deterministic
            assert_eq!(zone, bands.classify(id));

            let owners: Vec<Zone> = Zone::ALL
                .into_iter()
                .filter(|z| bands.range(*z, max_id).contains(&id))
                .collect();
            assert_eq!(owners, vec![zone], "seat {} must sit in exactly one band", id);
        }

        // bands are ordered and contiguous
        let mut next = 1;
        for zone in Zone::ALL {
            let range = bands.range(zone, max_id);
            assert_eq!(*range.start(), next);
            next = range.end() + 1;
        }
        assert_eq!(next, max_id + 1);
    }

    #[test]
    fn test_invalid_bounds() {
        assert!(ZoneBands::new([0, 10, 20]).is_err());
        assert!(ZoneBands::new([10, 10, 20]).is_err());
        assert!(ZoneBands::new([30, 20, 40]).is_err());
        assert!(ZoneBands::new([10, 20, 30]).is_ok());
    }
}

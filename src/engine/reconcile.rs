//! Snapshot ingestion and selection tracking.
//!
//! The seat table is only ever replaced wholesale from a full snapshot. The
//! selection is a seat id plus the payload last resolved for it, and is
//! re-resolved on every ingest.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::types::{Seat, SeatId, SeatRecord};

/// What to do with a selection whose seat vanished from the latest snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StaleSelectionPolicy {
    /// Keep the last-known payload, flagged stale. No actions are offered.
    #[default]
    Keep,
    /// Drop the selection.
    Clear,
}

/// The seat the user is acting on.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    seat: Seat,
    stale: bool,
}

impl Selection {
    fn new(seat: Seat) -> Self {
        Self { seat, stale: false }
    }

    pub fn id(&self) -> SeatId {
        self.seat.id
    }

    /// Payload as of the last snapshot that contained this seat.
    pub fn seat(&self) -> &Seat {
        &self.seat
    }

    /// True when the latest snapshot no longer contains this seat.
    pub fn is_stale(&self) -> bool {
        self.stale
    }
}

/// What happened to the selection during an ingest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Nothing was selected.
    None,
    /// Payload replaced with the fresh record.
    Refreshed,
    /// Seat missing from the snapshot; last-known payload kept.
    Stale,
    /// Seat missing from the snapshot; selection dropped.
    Cleared,
}

/// Summary of one ingest.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconcileReport {
    /// Seats in the new table.
    pub seats: usize,
    /// Records dropped for lack of a usable id, or repeated ids.
    pub dropped: usize,
    /// Seats added, removed or modified compared to the previous table.
    pub changed: Vec<SeatId>,
    pub selection: SelectionOutcome,
}

/// Authoritative seat table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeatTable {
    seats: BTreeMap<SeatId, Seat>,
    loaded: bool,
}

impl SeatTable {
    /// Whether at least one snapshot has been ingested.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn get(&self, id: SeatId) -> Option<&Seat> {
        self.seats.get(&id)
    }

    /// Seats in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Seat> {
        self.seats.values()
    }

    /// Swap in a new set of seats, returning the ids that differ.
    fn replace(&mut self, seats: BTreeMap<SeatId, Seat>) -> Vec<SeatId> {
        let mut changed: Vec<SeatId> = seats
            .iter()
            .filter(|(id, seat)| self.seats.get(*id) != Some(*seat))
            .map(|(id, _)| *id)
            .collect();
        changed.extend(self.seats.keys().filter(|id| !seats.contains_key(*id)));
        changed.sort_unstable();

        self.seats = seats;
        self.loaded = true;
        changed
    }
}

/// Keeps the seat table and the selection consistent across snapshots.
#[derive(Debug, Clone, Default)]
pub struct SnapshotReconciler {
    table: SeatTable,
    selection: Option<Selection>,
    policy: StaleSelectionPolicy,
}

impl SnapshotReconciler {
    pub fn new(policy: StaleSelectionPolicy) -> Self {
        Self {
            table: SeatTable::default(),
            selection: None,
            policy,
        }
    }

    pub fn table(&self) -> &SeatTable {
        &self.table
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Replace the table with a full snapshot and re-resolve the selection.
    pub fn ingest(&mut self, records: Vec<SeatRecord>) -> ReconcileReport {
        let total = records.len();
        let mut seats = BTreeMap::new();

        for record in records {
            match record.normalize() {
                Some(seat) => {
                    if seats.insert(seat.id, seat).is_some() {
                        debug!("duplicate seat record in snapshot, keeping the last one");
                    }
                }
                None => warn!("dropping seat record without a usable id"),
            }
        }

        let dropped = total - seats.len();
        let changed = self.table.replace(seats);
        let selection = self.resolve_selection();

        debug!(
            seats = self.table.len(),
            dropped,
            changed = changed.len(),
            "ingested seat snapshot"
        );

        ReconcileReport {
            seats: self.table.len(),
            dropped,
            changed,
            selection,
        }
    }

    fn resolve_selection(&mut self) -> SelectionOutcome {
        let Some(current) = self.selection.as_mut() else {
            return SelectionOutcome::None;
        };

        if let Some(fresh) = self.table.get(current.id()) {
            current.seat = fresh.clone();
            current.stale = false;
            return SelectionOutcome::Refreshed;
        }

        let seat_id = current.id();
        match self.policy {
            StaleSelectionPolicy::Keep => {
                warn!(seat_id, "selected seat missing from snapshot, keeping last-known state");
                current.stale = true;
                SelectionOutcome::Stale
            }
            StaleSelectionPolicy::Clear => {
                warn!(seat_id, "selected seat missing from snapshot, clearing selection");
                self.selection = None;
                SelectionOutcome::Cleared
            }
        }
    }

    /// Select a seat by id.
    ///
    /// Before the first snapshot any id is accepted and resolves to a
    /// placeholder; afterwards the id must be in the table.
    pub fn select(&mut self, id: SeatId) -> Option<&Selection> {
        let seat = match self.table.get(id) {
            Some(seat) => seat.clone(),
            None if !self.table.is_loaded() => Seat::placeholder(id),
            None => return None,
        };
        self.selection = Some(Selection::new(seat));
        self.selection.as_ref()
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SeatStatus, UserDetails};

    fn available(id: SeatId) -> SeatRecord {
        SeatRecord::from(Seat {
            status: SeatStatus::Available,
            price: Some(5.0),
            ..Seat::placeholder(id)
        })
    }

    fn occupied(id: SeatId, by: &str) -> SeatRecord {
        SeatRecord::from(Seat {
            status: SeatStatus::Occupied,
            booked_by: Some(by.to_string()),
            user_details: Some(UserDetails {
                full_name: Some("Someone Else".to_string()),
            }),
            ..Seat::placeholder(id)
        })
    }

    fn snapshot(ids: std::ops::RangeInclusive<SeatId>) -> Vec<SeatRecord> {
        ids.map(available).collect()
    }

    #[test]
    fn test_first_ingest_loads_everything() {
        let mut reconciler = SnapshotReconciler::default();
        assert!(!reconciler.table().is_loaded());

        let report = reconciler.ingest(snapshot(1..=10));
        assert!(reconciler.table().is_loaded());
        assert_eq!(report.seats, 10);
        assert_eq!(report.changed, (1..=10).collect::<Vec<_>>());
        assert_eq!(report.selection, SelectionOutcome::None);
    }

    #[test]
    fn test_ingest_is_idempotent() {
        let mut reconciler = SnapshotReconciler::default();
        reconciler.ingest(snapshot(1..=10));
        reconciler.select(3).unwrap();

        let table = reconciler.table().clone();
        let selection = reconciler.selection().cloned();

        let report = reconciler.ingest(snapshot(1..=10));
        assert!(report.changed.is_empty());
        assert_eq!(report.selection, SelectionOutcome::Refreshed);
        assert_eq!(reconciler.table(), &table);
        assert_eq!(reconciler.selection().cloned(), selection);
    }

    #[test]
    fn test_selection_follows_concurrent_booking() {
        let mut reconciler = SnapshotReconciler::default();
        reconciler.ingest(snapshot(1..=10));
        reconciler.select(7).unwrap();
        assert_eq!(reconciler.selection().unwrap().seat().status, SeatStatus::Available);

        let mut next = snapshot(1..=10);
        next[6] = occupied(7, "bob@example.com");
        let report = reconciler.ingest(next);

        assert_eq!(report.changed, vec![7]);
        let selection = reconciler.selection().unwrap();
        assert_eq!(selection.id(), 7);
        assert_eq!(selection.seat().status, SeatStatus::Occupied);
        assert_eq!(selection.seat().booked_by.as_deref(), Some("bob@example.com"));
        assert!(!selection.is_stale());
    }

    #[test]
    fn test_full_replace_drops_missing_seats() {
        let mut reconciler = SnapshotReconciler::default();
        reconciler.ingest(snapshot(1..=10));

        let report = reconciler.ingest(snapshot(1..=8));
        assert_eq!(report.changed, vec![9, 10]);
        assert!(reconciler.table().get(9).is_none());
        assert_eq!(reconciler.table().len(), 8);
    }

    #[test]
    fn test_stale_selection_kept() {
        let mut reconciler = SnapshotReconciler::new(StaleSelectionPolicy::Keep);
        reconciler.ingest(snapshot(1..=10));
        reconciler.select(10).unwrap();

        let report = reconciler.ingest(snapshot(1..=9));
        assert_eq!(report.selection, SelectionOutcome::Stale);
        let selection = reconciler.selection().unwrap();
        assert!(selection.is_stale());
        assert_eq!(selection.seat().status, SeatStatus::Available);

        // seat comes back: the flag clears
        let report = reconciler.ingest(snapshot(1..=10));
        assert_eq!(report.selection, SelectionOutcome::Refreshed);
        assert!(!reconciler.selection().unwrap().is_stale());
    }

    #[test]
    fn test_stale_selection_cleared() {
        let mut reconciler = SnapshotReconciler::new(StaleSelectionPolicy::Clear);
        reconciler.ingest(snapshot(1..=10));
        reconciler.select(10).unwrap();

        let report = reconciler.ingest(snapshot(1..=9));
        assert_eq!(report.selection, SelectionOutcome::Cleared);
        assert!(reconciler.selection().is_none());
    }

    #[test]
    fn test_select_before_first_snapshot() {
        let mut reconciler = SnapshotReconciler::default();
        let selection = reconciler.select(5).unwrap();
        assert_eq!(selection.seat().status, SeatStatus::Unknown);

        reconciler.ingest(snapshot(1..=10));
        assert_eq!(
            reconciler.selection().unwrap().seat().status,
            SeatStatus::Available
        );
    }

    #[test]
    fn test_select_unknown_seat_after_load() {
        let mut reconciler = SnapshotReconciler::default();
        reconciler.ingest(snapshot(1..=10));
        reconciler.select(2).unwrap();

        assert!(reconciler.select(99).is_none());
        // previous selection untouched
        assert_eq!(reconciler.selection().unwrap().id(), 2);
    }

    #[test]
    fn test_records_without_id_are_dropped() {
        let mut reconciler = SnapshotReconciler::default();
        let mut records = snapshot(1..=3);
        records.push(SeatRecord::default());

        let report = reconciler.ingest(records);
        assert_eq!(report.seats, 3);
        assert_eq!(report.dropped, 1);
    }

    #[test]
    fn test_malformed_record_does_not_sink_snapshot() {
        let values: Vec<serde_json::Value> = serde_json::from_str(
            r#"[
                {"id": 1, "status": "available"},
                {"id": 2, "status": "occupied", "booked_by": "bob@example.com", "booking_time": 1769853600},
                {"id": 3, "status": null},
                "not a seat"
            ]"#,
        )
        .unwrap();

        let mut reconciler = SnapshotReconciler::default();
        let report = reconciler.ingest(values.into_iter().map(SeatRecord::from_value).collect());

        assert_eq!(report.seats, 3);
        assert_eq!(report.dropped, 1);
        let seat = reconciler.table().get(2).unwrap();
        assert_eq!(seat.status, SeatStatus::Occupied);
        assert!(seat.booking_time.is_none());
        assert_eq!(reconciler.table().get(3).unwrap().status, SeatStatus::Unknown);
    }
}

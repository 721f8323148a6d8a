//! Floor view: the floor plan joined with the current seat table.

use crate::floor::{FloorPlan, PlacedSeat};
use crate::types::{Seat, SeatId};

use super::reconcile::SnapshotReconciler;
use super::search;

/// One seat as it should appear on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct FloorSeat {
    pub placed: PlacedSeat,
    pub seat: Seat,
    pub selected: bool,
    /// Booked by someone matching the search query.
    pub highlighted: bool,
}

/// Lay out every seat of the plan with its current state.
///
/// Before the first snapshot every planned seat shows as a placeholder; once
/// a snapshot is loaded, seats it doesn't contain are left off the map.
pub fn floor_view(plan: &FloorPlan, board: &SnapshotReconciler, query: &str) -> Vec<FloorSeat> {
    let table = board.table();
    let selected = board.selection().map(|s| s.id());

    plan.placements()
        .filter_map(|placed| {
            let seat = match table.get(placed.id) {
                Some(seat) => seat.clone(),
                None if !table.is_loaded() => Seat::placeholder(placed.id),
                None => return None,
            };
            Some(FloorSeat {
                placed,
                highlighted: search::matches(&seat, query),
                selected: selected == Some(placed.id),
                seat,
            })
        })
        .collect()
}

/// Seats in the snapshot that have no table on the plan.
pub fn unplaced(plan: &FloorPlan, board: &SnapshotReconciler) -> Vec<SeatId> {
    board
        .table()
        .iter()
        .map(|s| s.id)
        .filter(|id| plan.locate(*id).is_none())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SeatRecord, SeatStatus, UserDetails};

    fn snapshot(ids: std::ops::RangeInclusive<SeatId>) -> Vec<SeatRecord> {
        ids.map(|id| {
            SeatRecord::from(Seat {
                status: SeatStatus::Available,
                ..Seat::placeholder(id)
            })
        })
        .collect()
    }

    #[test]
    fn test_placeholders_before_first_snapshot() {
        let plan = FloorPlan::builtin();
        let board = SnapshotReconciler::default();

        let view = floor_view(&plan, &board, "");
        assert_eq!(view.len(), plan.capacity());
        assert!(view.iter().all(|s| s.seat.status == SeatStatus::Unknown));
    }

    #[test]
    fn test_missing_seats_skipped_once_loaded() {
        let plan = FloorPlan::builtin();
        let mut board = SnapshotReconciler::default();
        board.ingest(snapshot(1..=40));

        let view = floor_view(&plan, &board, "");
        assert_eq!(view.len(), 40);
        assert_eq!(view.last().unwrap().seat.id, 40);
    }

    #[test]
    fn test_selected_and_highlighted() {
        let plan = FloorPlan::builtin();
        let mut board = SnapshotReconciler::default();
        let mut records = snapshot(1..=100);
        records[8] = SeatRecord::from(Seat {
            status: SeatStatus::Occupied,
            booked_by: Some("ann@example.com".to_string()),
            user_details: Some(UserDetails {
                full_name: Some("Ann Lee".to_string()),
            }),
            ..Seat::placeholder(9)
        });
        board.ingest(records);
        board.select(3).unwrap();

        let view = floor_view(&plan, &board, "ann");
        let selected: Vec<SeatId> = view.iter().filter(|s| s.selected).map(|s| s.seat.id).collect();
        let highlighted: Vec<SeatId> = view.iter().filter(|s| s.highlighted).map(|s| s.seat.id).collect();
        assert_eq!(selected, vec![3]);
        assert_eq!(highlighted, vec![9]);

        // layout doesn't depend on state
        let again = floor_view(&plan, &board, "");
        for (a, b) in view.iter().zip(&again) {
            assert_eq!(a.placed, b.placed);
        }
    }

    #[test]
    fn test_unplaced_seats() {
        let plan = FloorPlan::builtin();
        let mut board = SnapshotReconciler::default();
        board.ingest(snapshot(1..=100));

        let extra = unplaced(&plan, &board);
        assert_eq!(extra[0], 50);
        assert_eq!(extra.len(), 1 + 24);
    }
}

//! The floor plan: table clusters and zone bands.

use serde::{Deserialize, Serialize};

use super::error::FloorPlanError;
use super::layout::{self, ClusterGeometry, GeometryRule, Placement, Point};
use super::zone::{Zone, ZoneBands};
use crate::types::SeatId;

/// Furniture type of a cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterKind {
    /// Round cafe table.
    Cafe,
    /// Rectangular team table.
    Team,
    /// Large collaboration table.
    Collab,
}

impl ClusterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClusterKind::Cafe => "cafe",
            ClusterKind::Team => "team",
            ClusterKind::Collab => "collab",
        }
    }
}

impl std::fmt::Display for ClusterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A table and the contiguous run of seat numbers around it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCluster {
    pub kind: ClusterKind,
    pub first_id: SeatId,
    pub count: u32,
    #[serde(flatten)]
    pub geometry: ClusterGeometry,
}

impl TableCluster {
    pub fn new(kind: ClusterKind, first_id: SeatId, count: u32, anchor: Point, rule: GeometryRule) -> Self {
        Self {
            kind,
            first_id,
            count,
            geometry: ClusterGeometry { anchor, rule },
        }
    }

    pub fn last_id(&self) -> SeatId {
        self.first_id + self.count.saturating_sub(1)
    }

    pub fn ids(&self) -> std::ops::RangeInclusive<SeatId> {
        self.first_id..=self.last_id()
    }

    /// Position of `id` within this cluster.
    pub fn index_of(&self, id: SeatId) -> Option<usize> {
        self.ids()
            .contains(&id)
            .then(|| (id - self.first_id) as usize)
    }
}

/// A seat with its resolved position on the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedSeat {
    pub id: SeatId,
    /// Index of the owning cluster in [`FloorPlan::clusters`].
    pub cluster: usize,
    pub kind: ClusterKind,
    pub zone: Zone,
    pub placement: Placement,
}

/// Validated, immutable floor configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct FloorPlan {
    zones: ZoneBands,
    clusters: Vec<TableCluster>,
}

impl FloorPlan {
    /// Build a floor plan, rejecting anything the layout engine can't place.
    pub fn new(zones: ZoneBands, clusters: Vec<TableCluster>) -> Result<Self, FloorPlanError> {
        if clusters.is_empty() {
            return Err(FloorPlanError::NoClusters);
        }

        for (index, cluster) in clusters.iter().enumerate() {
            if cluster.count == 0 {
                return Err(FloorPlanError::EmptyCluster { index });
            }
            if cluster.first_id == 0 {
                return Err(FloorPlanError::ZeroSeatId { index });
            }
            if let Some(reason) = cluster.geometry.rule.invalid_reason() {
                return Err(FloorPlanError::InvalidGeometry { index, reason });
            }
        }

        let mut ranges: Vec<(SeatId, SeatId)> = clusters
            .iter()
            .map(|c| (c.first_id, c.last_id()))
            .collect();
        ranges.sort_unstable();
        for pair in ranges.windows(2) {
            if pair[1].0 <= pair[0].1 {
                return Err(FloorPlanError::OverlappingClusters { seat_id: pair[1].0 });
            }
        }

        let plan = Self { zones, clusters };
        let bound = zones.bounds()[2];
        if bound >= plan.max_id() {
            return Err(FloorPlanError::EmptyLastZone {
                bound,
                max_id: plan.max_id(),
            });
        }

        Ok(plan)
    }

    /// The North Wing, floor 3: eight round cafe tables up front, team tables
    /// in the middle, collaboration tables at the back.
    pub fn builtin() -> Self {
        let mut clusters = Vec::new();

        for (row, y) in [(0u32, 60.0), (1, 140.0)] {
            for (i, x) in [80.0, 200.0, 320.0, 440.0].into_iter().enumerate() {
                clusters.push(TableCluster::new(
                    ClusterKind::Cafe,
                    row * 16 + i as u32 * 4 + 1,
                    4,
                    Point::new(x, y),
                    GeometryRule::radial(32.0),
                ));
            }
        }

        // 45..=49 is a five-seater, so seat 50 has no table
        for (i, (x, count)) in [(80.0, 6), (230.0, 6), (380.0, 5)].into_iter().enumerate() {
            clusters.push(TableCluster::new(
                ClusterKind::Team,
                33 + i as u32 * 6,
                count,
                Point::new(x + 2.0, 215.0),
                GeometryRule::rows(),
            ));
        }

        for (i, x) in [80.0, 280.0].into_iter().enumerate() {
            clusters.push(TableCluster::new(
                ClusterKind::Team,
                51 + i as u32 * 6,
                6,
                Point::new(x + 2.0, 345.0),
                GeometryRule::rows(),
            ));
        }

        for (i, x) in [60.0, 300.0].into_iter().enumerate() {
            clusters.push(TableCluster::new(
                ClusterKind::Collab,
                63 + i as u32 * 7,
                7,
                Point::new(x, 468.0),
                GeometryRule::rows(),
            ));
        }

        Self {
            zones: ZoneBands::default(),
            clusters,
        }
    }

    pub fn zones(&self) -> &ZoneBands {
        &self.zones
    }

    pub fn clusters(&self) -> &[TableCluster] {
        &self.clusters
    }

    /// Highest seat number on the plan.
    pub fn max_id(&self) -> SeatId {
        self.clusters.iter().map(|c| c.last_id()).max().unwrap_or(0)
    }

    /// Number of seats that have a table.
    pub fn capacity(&self) -> usize {
        self.clusters.iter().map(|c| c.count as usize).sum()
    }

    pub fn zone_of(&self, id: SeatId) -> Zone {
        self.zones.classify(id)
    }

    /// Cluster index and in-cluster index for a seat.
    pub fn locate(&self, id: SeatId) -> Option<(usize, usize)> {
        self.clusters
            .iter()
            .enumerate()
            .find_map(|(ci, c)| c.index_of(id).map(|i| (ci, i)))
    }

    pub fn place_seat(&self, id: SeatId) -> Option<PlacedSeat> {
        let (cluster, index) = self.locate(id)?;
        Some(self.placed(cluster, index))
    }

    /// Every seat on the plan, cluster by cluster.
    pub fn placements(&self) -> impl Iterator<Item = PlacedSeat> + '_ {
        self.clusters.iter().enumerate().flat_map(move |(ci, c)| {
            (0..c.count as usize).map(move |i| self.placed(ci, i))
        })
    }

    fn placed(&self, cluster: usize, index: usize) -> PlacedSeat {
        let c = &self.clusters[cluster];
        let id = c.first_id + index as SeatId;
        PlacedSeat {
            id,
            cluster,
            kind: c.kind,
            zone: self.zones.classify(id),
            placement: layout::place(&c.geometry, index, c.count as usize),
        }
    }
}

impl Default for FloorPlan {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_plan_is_valid() {
        let builtin = FloorPlan::builtin();
        let rebuilt = FloorPlan::new(*builtin.zones(), builtin.clusters().to_vec()).unwrap();
        assert_eq!(rebuilt, builtin);
        assert_eq!(builtin.max_id(), 76);
        assert_eq!(builtin.capacity(), 75);
        assert_eq!(builtin.clusters().len(), 15);
    }

    #[test]
    fn test_builtin_clusters() {
        let plan = FloorPlan::builtin();

        let cafe: Vec<&TableCluster> = plan
            .clusters()
            .iter()
            .filter(|c| c.kind == ClusterKind::Cafe)
            .collect();
        assert_eq!(cafe.len(), 8);
        assert_eq!(cafe[4].first_id, 17);
        assert_eq!(cafe[7].ids(), 29..=32);

        assert_eq!(plan.locate(33), Some((8, 0)));
        assert_eq!(plan.locate(49), Some((10, 4)));
        assert_eq!(plan.locate(50), None);
        assert_eq!(plan.locate(76), Some((14, 6)));
        assert_eq!(plan.locate(77), None);
    }

    #[test]
    fn test_placements_cover_plan_in_order() {
        let plan = FloorPlan::builtin();
        let ids: Vec<SeatId> = plan.placements().map(|p| p.id).collect();
        assert_eq!(ids.len(), plan.capacity());
        assert!(ids.windows(2).all(|w| w[0] < w[1]));

        let seat = plan.place_seat(63).unwrap();
        assert_eq!(seat.kind, ClusterKind::Collab);
        assert_eq!(seat.zone, Zone::Red);
        assert_eq!(seat.placement.rotation, 0.0);
        assert_eq!(plan.place_seat(50), None);
    }

    #[test]
    fn test_rejects_overlapping_clusters() {
        let clusters = vec![
            TableCluster::new(ClusterKind::Cafe, 1, 4, Point::new(0.0, 0.0), GeometryRule::radial(30.0)),
            TableCluster::new(ClusterKind::Team, 4, 6, Point::new(0.0, 0.0), GeometryRule::rows()),
        ];
        let err = FloorPlan::new(ZoneBands::new([1, 2, 3]).unwrap(), clusters).unwrap_err();
        assert_eq!(err, FloorPlanError::OverlappingClusters { seat_id: 4 });
    }

    #[test]
    fn test_rejects_malformed_clusters() {
        let zones = ZoneBands::new([1, 2, 3]).unwrap();

        assert_eq!(FloorPlan::new(zones, vec![]).unwrap_err(), FloorPlanError::NoClusters);

        let empty = TableCluster::new(ClusterKind::Cafe, 1, 0, Point::new(0.0, 0.0), GeometryRule::radial(30.0));
        assert_eq!(
            FloorPlan::new(zones, vec![empty]).unwrap_err(),
            FloorPlanError::EmptyCluster { index: 0 }
        );

        let zero = TableCluster::new(ClusterKind::Cafe, 0, 4, Point::new(0.0, 0.0), GeometryRule::radial(30.0));
        assert_eq!(
            FloorPlan::new(zones, vec![zero]).unwrap_err(),
            FloorPlanError::ZeroSeatId { index: 0 }
        );

        let flat = TableCluster::new(ClusterKind::Cafe, 1, 4, Point::new(0.0, 0.0), GeometryRule::radial(0.0));
        assert!(matches!(
            FloorPlan::new(zones, vec![flat]).unwrap_err(),
            FloorPlanError::InvalidGeometry { index: 0, .. }
        ));
    }

    #[test]
    fn test_rejects_empty_last_zone() {
        let clusters = vec![TableCluster::new(
            ClusterKind::Team,
            1,
            6,
            Point::new(0.0, 0.0),
            GeometryRule::rows(),
        )];
        let err = FloorPlan::new(ZoneBands::default(), clusters).unwrap_err();
        assert_eq!(err, FloorPlanError::EmptyLastZone { bound: 75, max_id: 6 });
    }
}

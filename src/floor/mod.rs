//! Static floor configuration and the pure geometry built on it.
//!
//! Nothing here depends on seat state: a floor plan maps seat numbers to
//! tables, zones and map coordinates, and that mapping never changes while
//! the process runs.

mod error;
mod layout;
mod plan;
mod zone;

pub use error::FloorPlanError;
pub use layout::{place, ClusterGeometry, GeometryRule, Placement, Point};
pub use plan::{ClusterKind, FloorPlan, PlacedSeat, TableCluster};
pub use zone::{Zone, ZoneBands, DEFAULT_ZONE_BOUNDS};

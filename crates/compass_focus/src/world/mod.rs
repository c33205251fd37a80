//! Read-only world data supplied by the host each frame
//!
//! Nothing in here is owned by the compass: references are plain copyable
//! handles and the host fills the snapshots from its own engine queries.

pub mod faction;
pub mod player;
pub mod quest;

pub use faction::{Faction, FactionId, FactionMembership, FightReaction, GroupReaction};
pub use player::{MovementTier, PlayerSnapshot, PlayerState};
pub use quest::{
    ObjectiveInstance, ObjectiveInstanceId, ObjectiveState, Quest, QuestId, QuestTargetId, QuestType,
};

use crate::foundation::math::{Point3, Vec3};
use bitflags::bitflags;

/// Handle of a world object (marker reference, actor)
///
/// Stable for the lifetime of the object; used as the identity of a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RefId(pub u32);

/// Handle of the cell (interior or worldspace area) an object is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId(pub u32);

/// A world object that can show up on the compass
#[derive(Debug, Clone, PartialEq)]
pub struct WorldObject {
    /// Object identity
    pub id: RefId,
    /// World position (z-up)
    pub position: Point3,
    /// Cell the object is in, if loaded
    pub parent_cell: Option<CellId>,
}

impl WorldObject {
    /// Create a world object
    pub fn new(id: RefId, position: Point3) -> Self {
        Self { id, position, parent_cell: None }
    }

    /// Set the parent cell (builder pattern)
    pub fn in_cell(mut self, cell: CellId) -> Self {
        self.parent_cell = Some(cell);
        self
    }
}

/// Camera pose for the frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Camera position
    pub position: Point3,
    /// Forward direction (need not be normalized)
    pub forward: Vec3,
}

impl CameraPose {
    /// Create a camera pose
    pub fn new(position: Point3, forward: Vec3) -> Self {
        Self { position, forward }
    }

    /// Camera at `position` looking along a compass heading in degrees
    ///
    /// Heading 0 looks along +y, 90 along +x.
    pub fn looking_at_heading(position: Point3, heading_degrees: f32) -> Self {
        let radians = heading_degrees.to_radians();
        Self::new(position, Vec3::new(radians.sin(), radians.cos(), 0.0))
    }
}

bitflags! {
    /// Map marker state flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MapMarkerFlags: u8 {
        /// Marker is shown on the map (location discovered)
        const VISIBLE = 1 << 0;
        /// Player can fast travel to it
        const CAN_TRAVEL_TO = 1 << 1;
        /// Hidden until discovered
        const SHOW_ALL_HIDDEN = 1 << 2;
    }
}

/// Map marker data attached to a location marker reference
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarkerData {
    /// Location display name
    pub name: String,
    /// Marker flags
    pub flags: MapMarkerFlags,
}

impl MapMarkerData {
    /// Create map marker data
    pub fn new(name: impl Into<String>, flags: MapMarkerFlags) -> Self {
        Self { name: name.into(), flags }
    }

    /// A location counts as discovered once its map marker is visible
    pub fn is_discovered(&self) -> bool {
        self.flags.contains(MapMarkerFlags::VISIBLE)
    }
}

/// A hostile actor shown on the compass
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    /// The actor's reference
    pub object: WorldObject,
    /// Display name
    pub name: String,
}

impl Actor {
    /// Create an actor
    pub fn new(object: WorldObject, name: impl Into<String>) -> Self {
        Self { object, name: name.into() }
    }
}

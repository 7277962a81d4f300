use serde::{Serialize, Serializer};
use std::fmt;

/// Target IFC entity kinds a record can be mapped to.
///
/// `BuildingElement` is the generic fallback for unrecognized source types;
/// `Undefined` is the sentinel used at review time for records that somehow
/// lost their mapping entry. Only `Undefined` is excluded from the list the
/// mapping step offers for manual selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IfcEntity {
    Door,
    Window,
    Wall,
    Slab,
    Beam,
    Column,
    Stair,
    Roof,
    Railing,
    Covering,
    FurnishingElement,
    BuildingElement,
    Undefined,
}

impl IfcEntity {
    /// Entities selectable in the mapping step, in display order.
    pub const SELECTABLE: [IfcEntity; 12] = [
        IfcEntity::Door,
        IfcEntity::Window,
        IfcEntity::Wall,
        IfcEntity::Slab,
        IfcEntity::Beam,
        IfcEntity::Column,
        IfcEntity::Stair,
        IfcEntity::Roof,
        IfcEntity::Railing,
        IfcEntity::Covering,
        IfcEntity::FurnishingElement,
        IfcEntity::BuildingElement,
    ];

    /// The IFC label, e.g. `IFCDoor`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            IfcEntity::Door => "IFCDoor",
            IfcEntity::Window => "IFCWindow",
            IfcEntity::Wall => "IFCWall",
            IfcEntity::Slab => "IFCSlab",
            IfcEntity::Beam => "IFCBeam",
            IfcEntity::Column => "IFCColumn",
            IfcEntity::Stair => "IFCStair",
            IfcEntity::Roof => "IFCRoof",
            IfcEntity::Railing => "IFCRailing",
            IfcEntity::Covering => "IFCCovering",
            IfcEntity::FurnishingElement => "IFCFurnishingElement",
            IfcEntity::BuildingElement => "IFCBuildingElement",
            IfcEntity::Undefined => "IFCUndefined",
        }
    }

    /// The lower-case label with the `IFC` prefix stripped, used by the
    /// confidence heuristic for substring matching.
    #[must_use]
    pub const fn stripped(self) -> &'static str {
        match self {
            IfcEntity::Door => "door",
            IfcEntity::Window => "window",
            IfcEntity::Wall => "wall",
            IfcEntity::Slab => "slab",
            IfcEntity::Beam => "beam",
            IfcEntity::Column => "column",
            IfcEntity::Stair => "stair",
            IfcEntity::Roof => "roof",
            IfcEntity::Railing => "railing",
            IfcEntity::Covering => "covering",
            IfcEntity::FurnishingElement => "furnishingelement",
            IfcEntity::BuildingElement => "buildingelement",
            IfcEntity::Undefined => "undefined",
        }
    }
}

impl fmt::Display for IfcEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for IfcEntity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

//! UI System Module
//!
//! Interfaces to the host's display surfaces, kept separate from the focus
//! logic that drives them.
//!
//! Architecture:
//! - compass: the compass widget interface
//! - quest_list: the quest list widget interface
//! - compat: enemy health alpha bridge for overlay mods
//! - surfaces: readiness-aware handles to the installed surfaces
//! - recording: command-recording implementations

pub mod compass;
pub mod quest_list;
pub mod compat;
pub mod surfaces;
pub mod recording;

pub use compass::{CompassSurface, COMPASS_PATH, UNKNOWN_MARKER_TYPE};
pub use quest_list::{QuestListEntry, QuestListSurface, QUEST_LIST_PATH};
pub use compat::{HudMovie, mirror_enemy_health_alpha};
pub use surfaces::HudSurfaces;
pub use recording::{
    CommandLog, HudCommand, RecordingCompass, RecordingHudMovie, RecordingQuestList,
};

//! Compass marker focusing
//!
//! Each frame the host feeds its compass markers through a [`FramePass`];
//! the pass classifies them into typed payloads, picks the marker closest to
//! the camera's line of sight and drives the compass and quest list.

pub mod focused_marker;
pub mod manager;
mod processors;
mod selector;
pub mod side;

#[cfg(test)]
mod tests;

pub use focused_marker::{
    EnemyData, FacedMarkers, FocusedMarker, LocationData, MarkerData, PlayerSetData, QuestData,
    MISCELLANEOUS_QUEST_NAME, PLAYER_SET_MARKER_LABEL,
};
pub use manager::{FrameContext, FramePass, HudError, HudMarkerManager};
pub use side::{is_player_ally_of, is_player_opponent_of, QuestSide, SideFactions, VAMPIRE_KEYWORD};

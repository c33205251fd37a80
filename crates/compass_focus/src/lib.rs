//! # Compass Focus
//!
//! Picks the compass marker the player is looking at and drives the HUD
//! compass and quest list surfaces for it.
//!
//! ## Features
//!
//! - **Marker Processors**: quest, location, enemy and player-set markers
//! - **Hysteresis**: separate acquire and hold angles against focus flicker
//! - **Quest List**: de-duplicated objectives, faction sides, timed reveal
//! - **UI Handshake**: surfaces installed as the UI extension patches the HUD
//! - **Settings**: TOML or RON files with per-section defaults
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use compass_focus::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let log = CommandLog::new();
//!     let surfaces = HudSurfaces::new()
//!         .with_compass(RecordingCompass::new(log.clone()))
//!         .with_quest_list(RecordingQuestList::new(log.clone()));
//!     let factions = SideFactions {
//!         sons_of_skyrim: FactionId(1),
//!         stormcloaks: FactionId(2),
//!         imperial_legion: FactionId(3),
//!         vampire: FactionId(4),
//!         dawnguard: FactionId(5),
//!     };
//!     let mut manager = HudMarkerManager::new(CompassSettings::default(), factions, surfaces)?;
//!
//!     let player = PlayerSnapshot::standing_at(Point3::origin());
//!     let camera = CameraPose::looking_at_heading(Point3::origin(), 0.0);
//!     let sign = WorldObject::new(RefId(1), Point3::new(0.0, 50.0, 0.0));
//!
//!     let mut pass = manager.begin_frame(FrameContext::new(camera, &player, 0.016));
//!     pass.process_player_set_marker(&sign, 0, 1);
//!     pass.finish();
//!
//!     for command in log.drain() {
//!         println!("{command:?}");
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod core;

pub mod foundation;
pub mod config;
pub mod world;
pub mod ui;
pub mod events;
pub mod hud;

pub use hud::{FrameContext, FramePass, HudError, HudMarkerManager};

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        FrameContext, FramePass, HudError, HudMarkerManager,
        core::{CompassSettings, Config, UnitSystem},
        foundation::math::{Point3, Vec3},
        world::{
            Actor, CameraPose, CellId, FactionId, MapMarkerData, MapMarkerFlags, ObjectiveInstance,
            PlayerSnapshot, PlayerState, Quest, QuestTargetId, RefId, WorldObject,
        },
        ui::{CommandLog, HudCommand, HudSurfaces, RecordingCompass, RecordingQuestList},
        events::{HostMessage, UiExtensionMessage},
        hud::SideFactions,
    };
}

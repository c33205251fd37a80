//! HUD marker manager
//!
//! Owns the focus state that survives between frames and the per-frame
//! marker arena. A frame is driven through a [`FramePass`]:
//!
//! ```no_run
//! # use compass_focus::prelude::*;
//! # fn frame(manager: &mut HudMarkerManager, player: &PlayerSnapshot, camera: CameraPose, sign: &WorldObject) {
//! let mut pass = manager.begin_frame(FrameContext::new(camera, player, 0.016));
//! pass.process_player_set_marker(sign, 0, 1);
//! pass.finish();
//! # }
//! ```

use super::focused_marker::FacedMarkers;
use super::side::SideFactions;
use crate::core::config::{CompassSettings, ConfigError};
use crate::events::{HostMessage, SetupHandshake, UiExtensionMessage};
use crate::foundation::time::FocusClock;
use crate::ui::HudSurfaces;
use crate::world::{CameraPose, PlayerState, RefId};
use thiserror::Error;

/// Errors raised while setting up the manager
#[derive(Error, Debug)]
pub enum HudError {
    /// Settings failed validation
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// Settings could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Host inputs for one frame
#[derive(Clone, Copy)]
pub struct FrameContext<'p> {
    /// Camera pose
    pub camera: CameraPose,
    /// Player queries
    pub player: &'p dyn PlayerState,
    /// Real seconds since the previous frame
    pub real_time_delta: f32,
}

impl<'p> FrameContext<'p> {
    /// Create a frame context
    pub fn new(camera: CameraPose, player: &'p dyn PlayerState, real_time_delta: f32) -> Self {
        Self { camera, player, real_time_delta }
    }
}

/// Picks the focused compass marker every frame and drives the HUD surfaces
#[derive(Debug)]
pub struct HudMarkerManager {
    pub(super) settings: CompassSettings,
    pub(super) side_factions: SideFactions,
    pub(super) surfaces: HudSurfaces,
    pub(super) handshake: SetupHandshake,
    pub(super) faced_markers: FacedMarkers,
    pub(super) focused_marker: Option<RefId>,
    /// Focus last shown on the compass, `None` while it is missing
    pub(super) compass_focus: Option<RefId>,
    /// Focus the quest list was last filled for, `None` while it is missing
    pub(super) quest_list_focus: Option<RefId>,
    pub(super) focus_clock: FocusClock,
    pub(super) quest_list_revealed: bool,
}

impl HudMarkerManager {
    /// Create a manager
    ///
    /// `surfaces` may be empty; surfaces arriving later through the UI
    /// handshake are installed by [`Self::handle_ui_message`].
    pub fn new(settings: CompassSettings, side_factions: SideFactions, mut surfaces: HudSurfaces) -> Result<Self, HudError> {
        settings.validate().map_err(HudError::InvalidSettings)?;

        log::info!(
            "Marker focus: acquire {}°, hold {}°",
            settings.focus.acquire_angle,
            settings.focus.hold_angle
        );

        if let Some(compass) = surfaces.compass_mut() {
            compass.set_units(settings.display.units);
        }

        Ok(Self {
            settings,
            side_factions,
            surfaces,
            handshake: SetupHandshake::new(),
            faced_markers: FacedMarkers::new(),
            focused_marker: None,
            compass_focus: None,
            quest_list_focus: None,
            focus_clock: FocusClock::new(),
            quest_list_revealed: false,
        })
    }

    /// Active settings
    pub fn settings(&self) -> &CompassSettings {
        &self.settings
    }

    /// Marker focused at the end of the last frame
    pub fn focused_marker(&self) -> Option<RefId> {
        self.focused_marker
    }

    /// Seconds the current marker has been focused
    pub fn time_focusing_marker(&self) -> f32 {
        self.focus_clock.elapsed_secs()
    }

    /// Whether the quest list was revealed during the current focus
    pub fn is_quest_list_revealed(&self) -> bool {
        self.quest_list_revealed
    }

    /// Whether the UI extension is known to be missing
    pub fn is_degraded(&self) -> bool {
        self.handshake.is_degraded()
    }

    /// Installed surfaces
    pub fn surfaces(&self) -> &HudSurfaces {
        &self.surfaces
    }

    /// Installed surfaces, for hosts that create them without the handshake
    pub fn surfaces_mut(&mut self) -> &mut HudSurfaces {
        &mut self.surfaces
    }

    /// Handle a host lifecycle message
    pub fn handle_host_message(&mut self, message: HostMessage) {
        self.handshake.handle_host_message(message);
    }

    /// Handle a UI extension message
    pub fn handle_ui_message(&mut self, message: UiExtensionMessage) {
        self.handshake
            .handle_ui_message(message, &mut self.surfaces, self.settings.display.units);
    }

    /// Start a frame
    ///
    /// Markers are fed to the returned pass; [`FramePass::finish`] picks the
    /// focus and emits the frame's commands.
    pub fn begin_frame<'m, 'p>(&'m mut self, context: FrameContext<'p>) -> FramePass<'m, 'p> {
        self.faced_markers.clear();
        FramePass { manager: self, context }
    }
}

/// One frame of marker processing
pub struct FramePass<'m, 'p> {
    pub(super) manager: &'m mut HudMarkerManager,
    pub(super) context: FrameContext<'p>,
}

impl FramePass<'_, '_> {
    /// Markers that qualified so far this frame
    pub fn faced_markers(&self) -> &FacedMarkers {
        &self.manager.faced_markers
    }

    /// Pick the focused marker and update the surfaces
    pub fn finish(self) {
        self.manager.set_markers_extra_info(&self.context);
    }
}

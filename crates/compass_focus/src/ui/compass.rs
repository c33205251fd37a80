//! Compass display surface
//!
//! The compass widget lives in the host's UI. The manager drives it through
//! this fire-and-forget interface; nothing it returns is consumed.

use crate::core::config::UnitSystem;

/// Display path of the compass instance the UI extension patches
pub const COMPASS_PATH: &str = "_level0.HUDMovieBaseInstance.CompassShoutMeterHolder.Compass";

/// Marker type value the compass draws as a generic "unknown" marker
pub const UNKNOWN_MARKER_TYPE: u32 = 0;

/// Imperative interface to the compass widget
pub trait CompassSurface {
    /// Select the distance unit system
    fn set_units(&mut self, units: UnitSystem);

    /// Show the expanded info of the marker in slot `marker_index`
    fn set_focused_marker_info(&mut self, target: &str, distance: f32, height_difference: f32, marker_index: u32);

    /// Highlight the marker in slot `marker_index`
    fn focus_marker(&mut self, marker_index: u32);

    /// Remove the highlight from the focused marker
    fn unfocus_marker(&mut self);

    /// Refresh the still-focused marker in place
    fn update_focused_marker(&mut self);

    /// Re-scale every non-focused marker
    fn set_markers(&mut self);

    /// Override the icon type drawn for slot `marker_index`
    fn set_marker_type(&mut self, marker_index: u32, marker_type: u32);
}

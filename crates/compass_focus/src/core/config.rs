//! # Compass Settings
//!
//! All user-tunable options for marker focusing, grouped the way they appear
//! in the settings file:
//!
//! - **Focus**: angular thresholds for acquiring and holding focus
//! - **Display**: how undiscovered locations are shown, unit system
//! - **Quest list**: combat hiding and per-speed reveal delays
//!
//! Every section falls back to its defaults when missing from the file.

use serde::{Serialize, Deserialize};
use crate::world::MovementTier;

pub use crate::config::{Config, ConfigError, ConfigFormat};

/// # Focus Settings
///
/// Two thresholds implement hysteresis: a marker must be within
/// `acquire_angle` degrees to gain focus but keeps it until it leaves
/// `hold_angle`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusSettings {
    /// Angle in degrees under which a marker becomes focused
    pub acquire_angle: f32,
    /// Angle in degrees under which the focused marker stays focused
    pub hold_angle: f32,
}

impl FocusSettings {
    /// Create focus settings from both thresholds
    pub fn new(acquire_angle: f32, hold_angle: f32) -> Self {
        Self { acquire_angle, hold_angle }
    }

    /// Validate the thresholds
    pub fn validate(&self) -> Result<(), String> {
        if !(self.acquire_angle > 0.0 && self.acquire_angle <= 180.0) {
            return Err(format!("Acquire angle must be in (0, 180], got {}", self.acquire_angle));
        }
        if !(self.hold_angle > 0.0 && self.hold_angle <= 180.0) {
            return Err(format!("Hold angle must be in (0, 180], got {}", self.hold_angle));
        }
        if self.hold_angle < self.acquire_angle {
            return Err(format!(
                "Hold angle ({}) must not be smaller than acquire angle ({})",
                self.hold_angle, self.acquire_angle
            ));
        }
        Ok(())
    }
}

impl Default for FocusSettings {
    fn default() -> Self {
        Self::new(10.0, 20.0)
    }
}

/// Unit system used by the compass for distances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Meters
    Metric,
    /// Feet
    #[default]
    Imperial,
}

impl UnitSystem {
    /// Whether distances are shown in metric units
    pub fn is_metric(self) -> bool {
        self == Self::Metric
    }
}

/// # Display Settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Undiscovered locations never get their name shown when focused
    pub unknown_location_hides_name: bool,
    /// Undiscovered locations are drawn with the generic "unknown" marker
    pub unknown_location_hides_marker_type: bool,
    /// Unit system for the distance readout
    pub units: UnitSystem,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            unknown_location_hides_name: true,
            unknown_location_hides_marker_type: false,
            units: UnitSystem::Imperial,
        }
    }
}

/// # Quest List Settings
///
/// The quest list is revealed after the player keeps a marker focused for a
/// while. The delay depends on how fast the player is moving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestListSettings {
    /// Clear and keep hidden the quest list while the weapon is drawn
    pub hide_in_combat: bool,
    /// Seconds before reveal when moving slower than walk speed
    pub walking_delay_to_show: f32,
    /// Seconds before reveal when moving slower than jog speed
    pub jogging_delay_to_show: f32,
    /// Seconds before reveal otherwise
    pub sprinting_delay_to_show: f32,
}

impl QuestListSettings {
    /// Seconds a marker must stay focused before the list is revealed
    pub fn delay_to_show(&self, tier: MovementTier) -> f32 {
        match tier {
            MovementTier::Walking => self.walking_delay_to_show,
            MovementTier::Jogging => self.jogging_delay_to_show,
            MovementTier::Sprinting => self.sprinting_delay_to_show,
        }
    }

    /// Validate the reveal delays
    pub fn validate(&self) -> Result<(), String> {
        let delays = [
            ("walking", self.walking_delay_to_show),
            ("jogging", self.jogging_delay_to_show),
            ("sprinting", self.sprinting_delay_to_show),
        ];
        for (tier, delay) in delays {
            if !delay.is_finite() || delay < 0.0 {
                return Err(format!("The {tier} delay must be a non-negative number, got {delay}"));
            }
        }
        Ok(())
    }
}

impl Default for QuestListSettings {
    fn default() -> Self {
        Self {
            hide_in_combat: true,
            walking_delay_to_show: 0.3,
            jogging_delay_to_show: 1.0,
            sprinting_delay_to_show: 3.0,
        }
    }
}

/// # Complete Compass Settings
///
/// Top-level settings structure loaded by the host at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompassSettings {
    /// Default log level filter
    pub log_level: String,
    /// Focus thresholds
    pub focus: FocusSettings,
    /// Display options
    pub display: DisplaySettings,
    /// Quest list behaviour
    pub quest_list: QuestListSettings,
}

impl CompassSettings {
    /// Create settings with all defaults
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            focus: FocusSettings::default(),
            display: DisplaySettings::default(),
            quest_list: QuestListSettings::default(),
        }
    }

    /// Set both focus thresholds
    pub fn with_focus_angles(mut self, acquire_angle: f32, hold_angle: f32) -> Self {
        self.focus = FocusSettings::new(acquire_angle, hold_angle);
        self
    }

    /// Set how undiscovered locations are displayed
    pub fn with_unknown_locations(mut self, hides_name: bool, hides_marker_type: bool) -> Self {
        self.display.unknown_location_hides_name = hides_name;
        self.display.unknown_location_hides_marker_type = hides_marker_type;
        self
    }

    /// Set the distance unit system
    pub fn with_units(mut self, units: UnitSystem) -> Self {
        self.display.units = units;
        self
    }

    /// Enable or disable hiding the quest list in combat
    pub fn with_hide_in_combat(mut self, enabled: bool) -> Self {
        self.quest_list.hide_in_combat = enabled;
        self
    }

    /// Set the quest list reveal delays for walking, jogging and sprinting
    pub fn with_reveal_delays(mut self, walking: f32, jogging: f32, sprinting: f32) -> Self {
        self.quest_list.walking_delay_to_show = walking;
        self.quest_list.jogging_delay_to_show = jogging;
        self.quest_list.sprinting_delay_to_show = sprinting;
        self
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.log_level.parse::<log::LevelFilter>().is_err() {
            return Err(format!("Unknown log level: {}", self.log_level));
        }
        self.focus.validate()?;
        self.quest_list.validate()?;
        Ok(())
    }
}

impl Default for CompassSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for CompassSettings {}

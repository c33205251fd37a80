//! Command-recording surfaces
//!
//! Implementations of the display surfaces that append every call to a shared
//! [`CommandLog`]. Used by the demo to print the command stream and by tests
//! to assert on it.

use super::compass::CompassSurface;
use super::compat::HudMovie;
use super::quest_list::{QuestListEntry, QuestListSurface};
use crate::core::config::UnitSystem;
use crate::world::{CellId, QuestType};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A single call made on a display surface
#[derive(Debug, Clone, PartialEq)]
pub enum HudCommand {
    /// `CompassSurface::set_units`
    SetUnits(UnitSystem),
    /// `CompassSurface::set_focused_marker_info`
    SetFocusedMarkerInfo {
        /// Display text
        target: String,
        /// Distance to the player
        distance: f32,
        /// Height difference to the player
        height_difference: f32,
        /// Slot index
        marker_index: u32,
    },
    /// `CompassSurface::focus_marker`
    FocusMarker(u32),
    /// `CompassSurface::unfocus_marker`
    UnfocusMarker,
    /// `CompassSurface::update_focused_marker`
    UpdateFocusedMarker,
    /// `CompassSurface::set_markers`
    SetMarkers,
    /// `CompassSurface::set_marker_type`
    SetMarkerType {
        /// Slot index
        marker_index: u32,
        /// Icon type
        marker_type: u32,
    },
    /// `QuestListSurface::remove_all_quests`
    RemoveAllQuests,
    /// `QuestListSurface::add_quest`
    AddQuest {
        /// Journal category
        quest_type: QuestType,
        /// Quest name
        name: String,
        /// Same-location flag
        is_in_same_location: bool,
        /// Objectives, newest first
        objectives: Vec<String>,
        /// Ordering key
        age_index: Option<usize>,
    },
    /// `QuestListSurface::set_quest_side`
    SetQuestSide(String),
    /// `QuestListSurface::show_all_quests`
    ShowAllQuests,
    /// `QuestListSurface::update`
    UpdateQuestList,
    /// `QuestListSurface::add_to_hud_elements`
    AddToHudElements,
    /// `HudMovie::set_number`
    SetHudNumber {
        /// Variable path
        path: String,
        /// Value written
        value: f64,
    },
}

/// Shared, single-threaded command log
#[derive(Debug, Clone, Default)]
pub struct CommandLog {
    commands: Rc<RefCell<Vec<HudCommand>>>,
}

impl CommandLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command
    pub fn push(&self, command: HudCommand) {
        log::trace!("HUD command: {:?}", command);
        self.commands.borrow_mut().push(command);
    }

    /// Copy of every command recorded so far
    pub fn snapshot(&self) -> Vec<HudCommand> {
        self.commands.borrow().clone()
    }

    /// Take every recorded command, leaving the log empty
    pub fn drain(&self) -> Vec<HudCommand> {
        std::mem::take(&mut *self.commands.borrow_mut())
    }

    /// Number of recorded commands matching `predicate`
    pub fn count(&self, predicate: impl Fn(&HudCommand) -> bool) -> usize {
        self.commands.borrow().iter().filter(|c| predicate(c)).count()
    }

    /// Number of recorded commands
    pub fn len(&self) -> usize {
        self.commands.borrow().len()
    }

    /// Whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.commands.borrow().is_empty()
    }
}

/// Compass that records its calls
#[derive(Debug, Clone)]
pub struct RecordingCompass {
    log: CommandLog,
}

impl RecordingCompass {
    /// Create a compass writing into `log`
    pub fn new(log: CommandLog) -> Self {
        Self { log }
    }
}

impl CompassSurface for RecordingCompass {
    fn set_units(&mut self, units: UnitSystem) {
        self.log.push(HudCommand::SetUnits(units));
    }

    fn set_focused_marker_info(&mut self, target: &str, distance: f32, height_difference: f32, marker_index: u32) {
        self.log.push(HudCommand::SetFocusedMarkerInfo {
            target: target.to_string(),
            distance,
            height_difference,
            marker_index,
        });
    }

    fn focus_marker(&mut self, marker_index: u32) {
        self.log.push(HudCommand::FocusMarker(marker_index));
    }

    fn unfocus_marker(&mut self) {
        self.log.push(HudCommand::UnfocusMarker);
    }

    fn update_focused_marker(&mut self) {
        self.log.push(HudCommand::UpdateFocusedMarker);
    }

    fn set_markers(&mut self) {
        self.log.push(HudCommand::SetMarkers);
    }

    fn set_marker_type(&mut self, marker_index: u32, marker_type: u32) {
        self.log.push(HudCommand::SetMarkerType { marker_index, marker_type });
    }
}

/// Quest list that records its calls
#[derive(Debug, Clone)]
pub struct RecordingQuestList {
    log: CommandLog,
    hidden_in: Vec<CellId>,
}

impl RecordingQuestList {
    /// Create a quest list writing into `log`, displayable everywhere
    pub fn new(log: CommandLog) -> Self {
        Self { log, hidden_in: Vec::new() }
    }

    /// Refuse display while the player is in `cell` (builder pattern)
    pub fn hidden_in(mut self, cell: CellId) -> Self {
        self.hidden_in.push(cell);
        self
    }
}

impl QuestListSurface for RecordingQuestList {
    fn remove_all_quests(&mut self) {
        self.log.push(HudCommand::RemoveAllQuests);
    }

    fn add_quest(&mut self, entry: &QuestListEntry<'_>) {
        self.log.push(HudCommand::AddQuest {
            quest_type: entry.quest_type,
            name: entry.name.to_string(),
            is_in_same_location: entry.is_in_same_location,
            objectives: entry.objectives.to_vec(),
            age_index: entry.age_index,
        });
    }

    fn set_quest_side(&mut self, side: &str) {
        self.log.push(HudCommand::SetQuestSide(side.to_string()));
    }

    fn can_be_displayed_in(&self, cell: Option<CellId>) -> bool {
        cell.map_or(true, |cell| !self.hidden_in.contains(&cell))
    }

    fn show_all_quests(&mut self) {
        self.log.push(HudCommand::ShowAllQuests);
    }

    fn update(&mut self) {
        self.log.push(HudCommand::UpdateQuestList);
    }

    fn add_to_hud_elements(&mut self) {
        self.log.push(HudCommand::AddToHudElements);
    }
}

/// HUD movie backed by a variable map, recording writes
#[derive(Debug, Clone)]
pub struct RecordingHudMovie {
    log: CommandLog,
    variables: HashMap<String, f64>,
}

impl RecordingHudMovie {
    /// Create an empty movie writing into `log`
    pub fn new(log: CommandLog) -> Self {
        Self { log, variables: HashMap::new() }
    }

    /// Preset a variable without recording it (builder pattern)
    pub fn with_number(mut self, path: impl Into<String>, value: f64) -> Self {
        self.variables.insert(path.into(), value);
        self
    }
}

impl HudMovie for RecordingHudMovie {
    fn get_number(&self, path: &str) -> Option<f64> {
        self.variables.get(path).copied()
    }

    fn set_number(&mut self, path: &str, value: f64) {
        self.variables.insert(path.to_string(), value);
        self.log.push(HudCommand::SetHudNumber { path: path.to_string(), value });
    }
}

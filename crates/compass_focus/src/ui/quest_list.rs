//! Quest list display surface
//!
//! The quest list shows, next to the compass, the quests attached to the
//! focused marker with their objectives.

use crate::world::{CellId, QuestType};

/// Display path of the quest list instance the UI extension creates
pub const QUEST_LIST_PATH: &str = "_level0.HUDMovieBaseInstance.QuestItemList";

/// One quest entry pushed into the quest list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuestListEntry<'a> {
    /// Journal category
    pub quest_type: QuestType,
    /// Quest name
    pub name: &'a str,
    /// Whether the marker is in the player's cell
    pub is_in_same_location: bool,
    /// Objective texts, newest first
    pub objectives: &'a [String],
    /// Ordering key; lower is newer
    pub age_index: Option<usize>,
}

/// Imperative interface to the quest list widget
pub trait QuestListSurface {
    /// Remove every entry
    fn remove_all_quests(&mut self);

    /// Append a quest entry
    fn add_quest(&mut self, entry: &QuestListEntry<'_>);

    /// Set the faction side label of the last added entry
    fn set_quest_side(&mut self, side: &str);

    /// Whether the list may be shown while the player is in `cell`
    fn can_be_displayed_in(&self, cell: Option<CellId>) -> bool;

    /// Reveal every entry
    fn show_all_quests(&mut self);

    /// Per-frame refresh
    fn update(&mut self);

    /// Register the widget with the HUD's element list
    fn add_to_hud_elements(&mut self);
}

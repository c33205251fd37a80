//! Per-frame marker aggregates
//!
//! Every marker that qualifies for attention during a frame gets one
//! [`FocusedMarker`] holding the payloads the processors attached to it. The
//! whole set lives in [`FacedMarkers`] and is thrown away once the frame's
//! focus has been picked.

use crate::ui::QuestListEntry;
use crate::world::{ObjectiveInstance, ObjectiveInstanceId, Quest, QuestId, QuestType, RefId};
use std::collections::{HashMap, HashSet};

/// Journal name of the shared miscellaneous entry
pub const MISCELLANEOUS_QUEST_NAME: &str = "Miscellaneous";

/// Label shown for a marker placed by the player on the map
pub const PLAYER_SET_MARKER_LABEL: &str = "Custom Destination";

/// Quest payload
///
/// Miscellaneous quests share one `QuestData` per marker, whichever quest
/// raised them.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestData {
    /// Compass slot of the marker
    pub gfx_index: u32,
    /// Animation frame token for the slot
    pub goto_frame: u32,
    /// Quest that created this entry
    pub quest: QuestId,
    /// Journal category
    pub quest_type: QuestType,
    /// Quest name, or the miscellaneous entry name
    pub name: String,
    /// Objective texts, newest first, without repeats
    pub objectives: Vec<String>,
    /// Ordering key: how many objectives are newer than the newest merged one
    pub age_index: Option<usize>,
    /// Whether the marker is in the player's cell
    pub is_in_same_location: bool,
    added_objectives: HashSet<ObjectiveInstanceId>,
}

impl QuestData {
    /// Create an empty entry for `quest`
    pub fn new(gfx_index: u32, goto_frame: u32, quest: &Quest, is_in_same_location: bool) -> Self {
        let name = if quest.is_miscellaneous() {
            MISCELLANEOUS_QUEST_NAME.to_string()
        } else {
            quest.name.clone()
        };

        Self {
            gfx_index,
            goto_frame,
            quest: quest.id,
            quest_type: quest.quest_type,
            name,
            objectives: Vec::new(),
            age_index: None,
            is_in_same_location,
            added_objectives: HashSet::new(),
        }
    }

    /// Whether payloads raised by `quest` belong in this entry
    pub fn matches(&self, quest: &Quest) -> bool {
        if self.quest_type == QuestType::Miscellaneous {
            quest.is_miscellaneous()
        } else {
            self.quest == quest.id
        }
    }

    /// Append an objective instance's text unless that instance was merged before
    ///
    /// `age` is the number of player objectives newer than `instance`.
    /// Returns whether the text was added.
    pub fn merge_objective(&mut self, instance: &ObjectiveInstance, age: usize) -> bool {
        if !self.added_objectives.insert(instance.id) {
            return false;
        }

        self.age_index.get_or_insert(age);
        self.objectives.push(instance.display_text.clone());
        true
    }

    /// Number of objective instances merged so far
    pub fn merged_objective_count(&self) -> usize {
        self.added_objectives.len()
    }

    /// Text shown on the compass when this marker is focused
    ///
    /// Miscellaneous entries have no meaningful name of their own, so they
    /// show their newest objective instead.
    pub fn target_text(&self) -> &str {
        match (self.quest_type, self.objectives.first()) {
            (QuestType::Miscellaneous, Some(objective)) => objective,
            _ => &self.name,
        }
    }

    /// Borrow this entry as a quest list entry
    pub fn list_entry(&self) -> QuestListEntry<'_> {
        QuestListEntry {
            quest_type: self.quest_type,
            name: &self.name,
            is_in_same_location: self.is_in_same_location,
            objectives: &self.objectives,
            age_index: self.age_index,
        }
    }
}

/// Location payload
#[derive(Debug, Clone, PartialEq)]
pub struct LocationData {
    /// Compass slot of the marker
    pub gfx_index: u32,
    /// Animation frame token for the slot
    pub goto_frame: u32,
    /// Location display name
    pub location_name: String,
}

/// Enemy payload
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyData {
    /// Compass slot of the marker
    pub gfx_index: u32,
    /// Animation frame token for the slot
    pub goto_frame: u32,
    /// Enemy display name
    pub enemy_name: String,
}

/// Player-set marker payload
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSetData {
    /// Compass slot of the marker
    pub gfx_index: u32,
    /// Animation frame token for the slot
    pub goto_frame: u32,
    /// Generic label
    pub location_name: String,
}

impl PlayerSetData {
    /// Create a payload with the generic label
    pub fn new(gfx_index: u32, goto_frame: u32) -> Self {
        Self {
            gfx_index,
            goto_frame,
            location_name: PLAYER_SET_MARKER_LABEL.to_string(),
        }
    }
}

/// Typed payload attached to a marker for this frame
#[derive(Debug, Clone, PartialEq)]
pub enum MarkerData {
    /// Quest objective target
    Quest(QuestData),
    /// Map location
    Location(LocationData),
    /// Hostile actor
    Enemy(EnemyData),
    /// Player-set waypoint
    PlayerSet(PlayerSetData),
}

impl MarkerData {
    /// Compass slot the payload corresponds to
    pub fn gfx_index(&self) -> u32 {
        match self {
            Self::Quest(data) => data.gfx_index,
            Self::Location(data) => data.gfx_index,
            Self::Enemy(data) => data.gfx_index,
            Self::PlayerSet(data) => data.gfx_index,
        }
    }
}

/// A marker in view this frame with its payloads
#[derive(Debug, Clone, PartialEq)]
pub struct FocusedMarker {
    /// Marker identity
    pub marker: RefId,
    /// Angle to the camera forward direction, degrees in `[0, 180]`
    pub angle_to_player_camera: f32,
    /// Straight-line distance to the player
    pub distance_to_player: f32,
    /// Marker height minus player height
    pub height_difference: f32,
    /// Payloads in processing order
    pub data: Vec<MarkerData>,
}

impl FocusedMarker {
    /// Create an aggregate with no payload yet
    pub fn new(marker: RefId, angle_to_player_camera: f32, distance_to_player: f32, height_difference: f32) -> Self {
        Self {
            marker,
            angle_to_player_camera,
            distance_to_player,
            height_difference,
            data: Vec::new(),
        }
    }

    /// Position in `data` of the quest entry `quest` belongs to
    pub fn quest_data_index(&self, quest: &Quest) -> Option<usize> {
        self.data
            .iter()
            .position(|data| matches!(data, MarkerData::Quest(quest_data) if quest_data.matches(quest)))
    }

    /// Quest entries attached to this marker
    pub fn quest_data(&self) -> impl Iterator<Item = &QuestData> {
        self.data.iter().filter_map(|data| match data {
            MarkerData::Quest(quest_data) => Some(quest_data),
            _ => None,
        })
    }
}

/// Arena of this frame's marker aggregates, keyed by marker identity
#[derive(Debug, Default)]
pub struct FacedMarkers {
    markers: HashMap<RefId, FocusedMarker>,
}

impl FacedMarkers {
    /// Create an empty arena
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the aggregate for `marker`, creating it if needed
    ///
    /// Angle, distance and height are refreshed on every touch.
    pub fn get_or_insert(
        &mut self,
        marker: RefId,
        angle_to_player_camera: f32,
        distance_to_player: f32,
        height_difference: f32,
    ) -> &mut FocusedMarker {
        let faced = self
            .markers
            .entry(marker)
            .or_insert_with(|| FocusedMarker::new(marker, angle_to_player_camera, distance_to_player, height_difference));

        faced.angle_to_player_camera = angle_to_player_camera;
        faced.distance_to_player = distance_to_player;
        faced.height_difference = height_difference;
        faced
    }

    /// Aggregate for `marker`, if it qualified this frame
    pub fn get(&self, marker: RefId) -> Option<&FocusedMarker> {
        self.markers.get(&marker)
    }

    /// Identity of the marker with the smallest camera angle
    ///
    /// Exact angle ties go to the smallest `RefId`.
    pub fn most_centered(&self) -> Option<RefId> {
        self.markers
            .values()
            .min_by(|a, b| {
                a.angle_to_player_camera
                    .total_cmp(&b.angle_to_player_camera)
                    .then(a.marker.cmp(&b.marker))
            })
            .map(|faced| faced.marker)
    }

    /// Remove and return the most centered aggregate, discarding the rest
    pub fn take_most_centered(&mut self) -> Option<FocusedMarker> {
        let winner = self.most_centered().and_then(|marker| self.markers.remove(&marker));
        self.markers.clear();
        winner
    }

    /// Discard every aggregate
    pub fn clear(&mut self) {
        self.markers.clear();
    }

    /// Number of aggregates
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Whether no marker qualified
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::QuestTargetId;

    fn objective(id: u32, quest: QuestId, text: &str) -> ObjectiveInstance {
        ObjectiveInstance::displayed(ObjectiveInstanceId(id), quest, vec![QuestTargetId(1)], text)
    }

    #[test]
    fn test_merge_rejects_same_instance() {
        let quest = Quest::new(QuestId(7), QuestType::SideQuest, "The Lost Sword");
        let mut data = QuestData::new(3, 1, &quest, false);

        assert!(data.merge_objective(&objective(1, quest.id, "Find the sword"), 0));
        assert!(!data.merge_objective(&objective(1, quest.id, "Find the sword"), 0));
        assert!(data.merge_objective(&objective(2, quest.id, "Return it"), 1));

        assert_eq!(data.objectives, vec!["Find the sword", "Return it"]);
        assert_eq!(data.merged_objective_count(), 2);
        assert_eq!(data.age_index, Some(0));
    }

    #[test]
    fn test_miscellaneous_quests_share_an_entry() {
        let fetch = Quest::new(QuestId(1), QuestType::Miscellaneous, "Fetch firewood");
        let deliver = Quest::new(QuestId(2), QuestType::Miscellaneous, "Deliver letter");
        let main = Quest::new(QuestId(3), QuestType::MainQuest, "Dragon Rising");

        let data = QuestData::new(0, 0, &fetch, true);
        assert!(data.matches(&deliver));
        assert!(!data.matches(&main));
        assert_eq!(data.name, MISCELLANEOUS_QUEST_NAME);

        let main_data = QuestData::new(0, 0, &main, true);
        assert!(main_data.matches(&main));
        assert!(!main_data.matches(&fetch));
    }

    #[test]
    fn test_target_text() {
        let misc = Quest::new(QuestId(1), QuestType::Miscellaneous, "Fetch firewood");
        let mut data = QuestData::new(0, 0, &misc, false);
        assert_eq!(data.target_text(), MISCELLANEOUS_QUEST_NAME);

        data.merge_objective(&objective(5, misc.id, "Bring firewood to Hod"), 0);
        assert_eq!(data.target_text(), "Bring firewood to Hod");

        let main = Quest::new(QuestId(3), QuestType::MainQuest, "Dragon Rising");
        let mut main_data = QuestData::new(0, 0, &main, false);
        main_data.merge_objective(&objective(6, main.id, "Meet Irileth"), 0);
        assert_eq!(main_data.target_text(), "Dragon Rising");
    }

    #[test]
    fn test_most_centered_prefers_smallest_angle() {
        let mut faced = FacedMarkers::new();
        faced.get_or_insert(RefId(1), 40.0, 10.0, 0.0);
        faced.get_or_insert(RefId(2), 5.0, 10.0, 0.0);
        faced.get_or_insert(RefId(3), 12.0, 10.0, 0.0);

        assert_eq!(faced.most_centered(), Some(RefId(2)));
    }

    #[test]
    fn test_exact_tie_goes_to_smallest_ref() {
        let mut faced = FacedMarkers::new();
        faced.get_or_insert(RefId(9), 5.0, 10.0, 0.0);
        faced.get_or_insert(RefId(4), 5.0, 10.0, 0.0);
        faced.get_or_insert(RefId(6), 5.0, 10.0, 0.0);

        assert_eq!(faced.most_centered(), Some(RefId(4)));
    }

    #[test]
    fn test_take_most_centered_empties_arena() {
        let mut faced = FacedMarkers::new();
        assert!(faced.take_most_centered().is_none());

        faced.get_or_insert(RefId(1), 3.0, 10.0, 0.0);
        faced.get_or_insert(RefId(2), 8.0, 10.0, 0.0);

        let winner = faced.take_most_centered().unwrap();
        assert_eq!(winner.marker, RefId(1));
        assert!(faced.is_empty());
    }

    #[test]
    fn test_touch_refreshes_geometry_and_keeps_data() {
        let mut faced = FacedMarkers::new();
        faced
            .get_or_insert(RefId(1), 3.0, 10.0, 0.0)
            .data
            .push(MarkerData::PlayerSet(PlayerSetData::new(2, 0)));

        let again = faced.get_or_insert(RefId(1), 4.0, 12.0, 1.5);
        assert_eq!(again.angle_to_player_camera, 4.0);
        assert_eq!(again.distance_to_player, 12.0);
        assert_eq!(again.data.len(), 1);
        assert_eq!(faced.len(), 1);
    }
}

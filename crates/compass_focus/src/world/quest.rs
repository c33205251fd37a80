//! Quest and objective data

/// Quest identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuestId(pub u32);

/// Identity of one quest target (an objective can point at several)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuestTargetId(pub u32);

/// Identity of one player-specific objective instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectiveInstanceId(pub u32);

/// Journal category of a quest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestType {
    /// Untyped
    None,
    /// Main quest line
    MainQuest,
    /// Mages guild
    MagesGuild,
    /// Thieves guild
    ThievesGuild,
    /// Dark brotherhood
    DarkBrotherhood,
    /// Companions
    CompanionsQuest,
    /// Miscellaneous tasks, grouped as one entry in the journal
    Miscellaneous,
    /// Daedric quests
    Daedric,
    /// Side quests
    SideQuest,
    /// Civil war (two-sided)
    CivilWar,
    /// Vampire DLC (two-sided)
    Dlc01Vampire,
    /// Dragonborn DLC
    Dlc02Dragonborn,
}

/// A quest as far as the compass cares
#[derive(Debug, Clone, PartialEq)]
pub struct Quest {
    /// Quest identity
    pub id: QuestId,
    /// Journal category
    pub quest_type: QuestType,
    /// Display name
    pub name: String,
}

impl Quest {
    /// Create a quest
    pub fn new(id: QuestId, quest_type: QuestType, name: impl Into<String>) -> Self {
        Self { id, quest_type, name: name.into() }
    }

    /// Whether this quest is folded into the shared miscellaneous entry
    pub fn is_miscellaneous(&self) -> bool {
        self.quest_type == QuestType::Miscellaneous
    }
}

/// Display state of an objective instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectiveState {
    /// Not shown yet
    Dormant,
    /// Shown in the journal and on the compass
    Displayed,
    /// Done
    Completed,
    /// Done and displayed as such
    CompletedDisplayed,
    /// Failed
    Failed,
    /// Failed and displayed as such
    FailedDisplayed,
}

/// One active, player-specific instantiation of a quest objective
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectiveInstance {
    /// Instance identity
    pub id: ObjectiveInstanceId,
    /// Quest owning the objective
    pub owner_quest: QuestId,
    /// Display state
    pub state: ObjectiveState,
    /// Targets the objective points at
    pub targets: Vec<QuestTargetId>,
    /// Display text with aliases already substituted
    pub display_text: String,
}

impl ObjectiveInstance {
    /// Create a displayed objective instance
    pub fn displayed(
        id: ObjectiveInstanceId,
        owner_quest: QuestId,
        targets: Vec<QuestTargetId>,
        display_text: impl Into<String>,
    ) -> Self {
        Self {
            id,
            owner_quest,
            state: ObjectiveState::Displayed,
            targets,
            display_text: display_text.into(),
        }
    }

    /// Set the display state (builder pattern)
    pub fn with_state(mut self, state: ObjectiveState) -> Self {
        self.state = state;
        self
    }

    /// Whether this instance should be merged into the quest entry for `target`
    pub fn contributes_to(&self, quest: QuestId, target: QuestTargetId) -> bool {
        self.owner_quest == quest
            && self.state == ObjectiveState::Displayed
            && self.targets.contains(&target)
    }
}

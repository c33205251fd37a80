//! Faction side of two-sided quests
//!
//! Civil war and vampire quests are shown with the side the player fights
//! for. The side is derived from faction standing; nothing here mutates.

use crate::world::{FactionId, FightReaction, PlayerState, QuestType};

/// Keyword carried by vampire players
pub const VAMPIRE_KEYWORD: &str = "Vampire";

/// Side of a two-sided quest line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestSide {
    /// Civil war, rebel side
    Stormcloaks,
    /// Civil war, imperial side
    ImperialLegion,
    /// Vampire DLC, vampire side
    Vampires,
    /// Vampire DLC, hunter side
    Dawnguard,
}

impl QuestSide {
    /// Label understood by the quest list
    pub fn label(self) -> &'static str {
        match self {
            Self::Stormcloaks => "StormCloaks",
            Self::ImperialLegion => "ImperialLegion",
            Self::Vampires => "Vampires",
            Self::Dawnguard => "Dawnguard",
        }
    }
}

/// Factions the side resolution looks at, resolved by the host at load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideFactions {
    /// Sons of Skyrim
    pub sons_of_skyrim: FactionId,
    /// Stormcloaks
    pub stormcloaks: FactionId,
    /// Imperial Legion
    pub imperial_legion: FactionId,
    /// Vampires
    pub vampire: FactionId,
    /// Dawnguard
    pub dawnguard: FactionId,
}

impl SideFactions {
    /// Side the player is on in quests of `quest_type`
    ///
    /// `None` for categories without sides.
    pub fn side_in_quest(&self, player: &dyn PlayerState, quest_type: QuestType) -> Option<QuestSide> {
        match quest_type {
            QuestType::CivilWar => {
                if is_player_ally_of(player, self.sons_of_skyrim)
                    || is_player_ally_of(player, self.stormcloaks)
                    || is_player_opponent_of(player, self.imperial_legion)
                {
                    Some(QuestSide::Stormcloaks)
                } else {
                    Some(QuestSide::ImperialLegion)
                }
            }
            QuestType::Dlc01Vampire => {
                if player.has_keyword(VAMPIRE_KEYWORD)
                    || is_player_ally_of(player, self.vampire)
                    || is_player_opponent_of(player, self.dawnguard)
                {
                    Some(QuestSide::Vampires)
                } else {
                    Some(QuestSide::Dawnguard)
                }
            }
            _ => None,
        }
    }
}

/// Whether the player is a member of `faction`, ranks positively in it, or
/// is in a faction allied with it
pub fn is_player_ally_of(player: &dyn PlayerState, faction: FactionId) -> bool {
    if player.is_in_faction(faction) {
        return true;
    }

    player.faction_memberships().iter().any(|membership| {
        (membership.faction.id == faction && membership.rank > 0)
            || membership
                .faction
                .reactions_to(faction)
                .any(|reaction| reaction >= FightReaction::Ally)
    })
}

/// Whether the player ranks negatively in `faction` or is in a faction that
/// treats it as an enemy
pub fn is_player_opponent_of(player: &dyn PlayerState, faction: FactionId) -> bool {
    player.faction_memberships().iter().any(|membership| {
        (membership.faction.id == faction && membership.rank < 0)
            || membership
                .faction
                .reactions_to(faction)
                .any(|reaction| reaction == FightReaction::Enemy)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Point3;
    use crate::world::{Faction, FactionMembership, PlayerSnapshot};

    const SONS: FactionId = FactionId(1);
    const STORMCLOAKS: FactionId = FactionId(2);
    const LEGION: FactionId = FactionId(3);
    const VAMPIRE: FactionId = FactionId(4);
    const DAWNGUARD: FactionId = FactionId(5);
    const BANDITS: FactionId = FactionId(6);

    fn factions() -> SideFactions {
        SideFactions {
            sons_of_skyrim: SONS,
            stormcloaks: STORMCLOAKS,
            imperial_legion: LEGION,
            vampire: VAMPIRE,
            dawnguard: DAWNGUARD,
        }
    }

    fn new_player() -> PlayerSnapshot {
        PlayerSnapshot::standing_at(Point3::origin())
    }

    #[test]
    fn test_no_side_for_regular_quests() {
        let player = new_player();
        assert_eq!(factions().side_in_quest(&player, QuestType::MainQuest), None);
        assert_eq!(factions().side_in_quest(&player, QuestType::Miscellaneous), None);
    }

    #[test]
    fn test_civil_war_defaults_to_legion() {
        let player = new_player();
        assert_eq!(
            factions().side_in_quest(&player, QuestType::CivilWar),
            Some(QuestSide::ImperialLegion)
        );
    }

    #[test]
    fn test_stormcloak_member() {
        let player = new_player().with_faction(FactionMembership::new(Faction::new(STORMCLOAKS), 0));
        assert!(is_player_ally_of(&player, STORMCLOAKS));
        assert_eq!(
            factions().side_in_quest(&player, QuestType::CivilWar),
            Some(QuestSide::Stormcloaks)
        );
    }

    #[test]
    fn test_expelled_from_legion_is_opponent() {
        let player = new_player().with_faction(FactionMembership::new(Faction::new(LEGION), -1));
        assert!(!is_player_ally_of(&player, LEGION));
        assert!(is_player_opponent_of(&player, LEGION));
        assert_eq!(
            factions().side_in_quest(&player, QuestType::CivilWar),
            Some(QuestSide::Stormcloaks)
        );
    }

    #[test]
    fn test_reaction_through_other_faction() {
        let allied = Faction::new(BANDITS).with_reaction(SONS, FightReaction::Friend);
        let player = new_player().with_faction(FactionMembership::new(allied, 0));
        assert!(is_player_ally_of(&player, SONS));

        let hostile = Faction::new(BANDITS).with_reaction(DAWNGUARD, FightReaction::Enemy);
        let player = new_player().with_faction(FactionMembership::new(hostile, 0));
        assert!(is_player_opponent_of(&player, DAWNGUARD));
        assert_eq!(
            factions().side_in_quest(&player, QuestType::Dlc01Vampire),
            Some(QuestSide::Vampires)
        );
    }

    #[test]
    fn test_neutral_reaction_is_neither() {
        let neutral = Faction::new(BANDITS).with_reaction(LEGION, FightReaction::Neutral);
        let player = new_player().with_faction(FactionMembership::new(neutral, 0));
        assert!(!is_player_ally_of(&player, LEGION));
        assert!(!is_player_opponent_of(&player, LEGION));
    }

    #[test]
    fn test_vampire_keyword() {
        let player = new_player().with_keyword(VAMPIRE_KEYWORD);
        assert_eq!(
            factions().side_in_quest(&player, QuestType::Dlc01Vampire),
            Some(QuestSide::Vampires)
        );
        assert_eq!(
            factions().side_in_quest(&new_player(), QuestType::Dlc01Vampire),
            Some(QuestSide::Dawnguard)
        );
        assert_eq!(QuestSide::Dawnguard.label(), "Dawnguard");
    }
}

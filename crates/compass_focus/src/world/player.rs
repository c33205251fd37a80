//! Player state queries

use super::faction::{FactionId, FactionMembership};
use super::quest::ObjectiveInstance;
use super::CellId;
use crate::foundation::math::Point3;

/// Movement speed tier, used to pick the quest list reveal delay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementTier {
    /// Slower than walk speed
    Walking,
    /// Slower than jog speed
    Jogging,
    /// Anything faster
    Sprinting,
}

/// Player state the compass reads each frame
///
/// Implemented by the host on top of its own player object. All queries are
/// read-only.
pub trait PlayerState {
    /// Player position (z-up)
    fn position(&self) -> Point3;

    /// Cell the player is currently in
    fn parent_cell(&self) -> Option<CellId>;

    /// Whether the player has a weapon or spell drawn
    fn is_weapon_drawn(&self) -> bool;

    /// Current movement speed
    fn movement_speed(&self) -> f32;

    /// Speed below which the player counts as walking
    fn walk_speed(&self) -> f32;

    /// Speed below which the player counts as jogging
    fn jog_speed(&self) -> f32;

    /// Active objective instances, oldest first
    fn objectives(&self) -> &[ObjectiveInstance];

    /// Factions the player is flagged in, including negative ranks
    fn faction_memberships(&self) -> &[FactionMembership];

    /// Whether the player is a member of `faction`
    fn is_in_faction(&self, faction: FactionId) -> bool {
        self.faction_memberships()
            .iter()
            .any(|membership| membership.faction.id == faction && membership.rank >= 0)
    }

    /// Whether the player has a keyword with this editor name
    fn has_keyword(&self, keyword: &str) -> bool;

    /// Speed tier of the current movement speed
    fn movement_tier(&self) -> MovementTier {
        let speed = self.movement_speed();
        if speed < self.walk_speed() {
            MovementTier::Walking
        } else if speed < self.jog_speed() {
            MovementTier::Jogging
        } else {
            MovementTier::Sprinting
        }
    }
}

/// Plain snapshot of the player, filled by hosts that copy state per frame
#[derive(Debug, Clone)]
pub struct PlayerSnapshot {
    /// Player position
    pub position: Point3,
    /// Current cell
    pub parent_cell: Option<CellId>,
    /// Weapon drawn
    pub weapon_drawn: bool,
    /// Current movement speed
    pub movement_speed: f32,
    /// Walk speed tier threshold
    pub walk_speed: f32,
    /// Jog speed tier threshold
    pub jog_speed: f32,
    /// Objective instances, oldest first
    pub objectives: Vec<ObjectiveInstance>,
    /// Faction memberships
    pub factions: Vec<FactionMembership>,
    /// Keywords on the player
    pub keywords: Vec<String>,
}

impl Default for PlayerSnapshot {
    fn default() -> Self {
        Self {
            position: Point3::origin(),
            parent_cell: None,
            weapon_drawn: false,
            movement_speed: 0.0,
            walk_speed: 0.0,
            jog_speed: 0.0,
            objectives: Vec::new(),
            factions: Vec::new(),
            keywords: Vec::new(),
        }
    }
}

impl PlayerSnapshot {
    /// Standing player at `position` with typical speed thresholds
    pub fn standing_at(position: Point3) -> Self {
        Self {
            position,
            walk_speed: 80.0,
            jog_speed: 300.0,
            ..Self::default()
        }
    }

    /// Set the parent cell (builder pattern)
    pub fn in_cell(mut self, cell: CellId) -> Self {
        self.parent_cell = Some(cell);
        self
    }

    /// Add an objective instance as the newest one (builder pattern)
    pub fn with_objective(mut self, objective: ObjectiveInstance) -> Self {
        self.objectives.push(objective);
        self
    }

    /// Add a faction membership (builder pattern)
    pub fn with_faction(mut self, membership: FactionMembership) -> Self {
        self.factions.push(membership);
        self
    }

    /// Add a keyword (builder pattern)
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }
}

impl PlayerState for PlayerSnapshot {
    fn position(&self) -> Point3 {
        self.position
    }

    fn parent_cell(&self) -> Option<CellId> {
        self.parent_cell
    }

    fn is_weapon_drawn(&self) -> bool {
        self.weapon_drawn
    }

    fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    fn walk_speed(&self) -> f32 {
        self.walk_speed
    }

    fn jog_speed(&self) -> f32 {
        self.jog_speed
    }

    fn objectives(&self) -> &[ObjectiveInstance] {
        &self.objectives
    }

    fn faction_memberships(&self) -> &[FactionMembership] {
        &self.factions
    }

    fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Faction, FactionId};

    #[test]
    fn test_movement_tiers() {
        let mut player = PlayerSnapshot::standing_at(Point3::origin());
        assert_eq!(player.movement_tier(), MovementTier::Walking);

        player.movement_speed = 80.0;
        assert_eq!(player.movement_tier(), MovementTier::Jogging);

        player.movement_speed = 299.0;
        assert_eq!(player.movement_tier(), MovementTier::Jogging);

        player.movement_speed = 450.0;
        assert_eq!(player.movement_tier(), MovementTier::Sprinting);
    }

    #[test]
    fn test_negative_rank_is_not_membership() {
        let player = PlayerSnapshot::standing_at(Point3::origin())
            .with_faction(FactionMembership::new(Faction::new(FactionId(1)), 0))
            .with_faction(FactionMembership::new(Faction::new(FactionId(2)), -1));

        assert!(player.is_in_faction(FactionId(1)));
        assert!(!player.is_in_faction(FactionId(2)));
        assert!(!player.is_in_faction(FactionId(3)));
    }
}

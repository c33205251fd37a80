//! Faction membership and faction-to-faction reactions

/// Faction identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FactionId(pub u32);

/// How one faction reacts to another, ordered from hostile to friendly
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FightReaction {
    /// Will attack on sight
    Enemy,
    /// Indifferent
    Neutral,
    /// Will help in fights
    Ally,
    /// Will help and never report crimes
    Friend,
}

/// Reaction of a faction towards another faction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupReaction {
    /// The faction reacted to
    pub target: FactionId,
    /// The reaction
    pub reaction: FightReaction,
}

/// A faction and its reactions to other factions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faction {
    /// Faction identity
    pub id: FactionId,
    /// Reactions towards other factions
    pub reactions: Vec<GroupReaction>,
}

impl Faction {
    /// Create a faction with no reactions
    pub fn new(id: FactionId) -> Self {
        Self { id, reactions: Vec::new() }
    }

    /// Add a reaction (builder pattern)
    pub fn with_reaction(mut self, target: FactionId, reaction: FightReaction) -> Self {
        self.reactions.push(GroupReaction { target, reaction });
        self
    }

    /// Reactions this faction has towards `target`
    pub fn reactions_to(&self, target: FactionId) -> impl Iterator<Item = FightReaction> + '_ {
        self.reactions
            .iter()
            .filter(move |group| group.target == target)
            .map(|group| group.reaction)
    }
}

/// A faction the player is flagged in, with rank
///
/// Negative ranks mark a faction the player was expelled from or is hostile to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactionMembership {
    /// The faction
    pub faction: Faction,
    /// Player rank in it
    pub rank: i8,
}

impl FactionMembership {
    /// Create a membership
    pub fn new(faction: Faction, rank: i8) -> Self {
        Self { faction, rank }
    }
}

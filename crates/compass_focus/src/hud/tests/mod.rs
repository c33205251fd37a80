//! Frame-level tests of marker focusing
//!
//! Every test drives a manager wired to recording surfaces and asserts on the
//! command stream a frame produces.


use super::{FrameContext, FramePass, HudMarkerManager, SideFactions};
use crate::core::config::CompassSettings;
use crate::foundation::math::Point3;
use crate::ui::{
    compat::ENEMY_HEALTH_ALPHA, CommandLog, HudCommand, HudSurfaces, RecordingCompass, RecordingHudMovie,
    RecordingQuestList,
};
use crate::world::{
    Actor, CameraPose, CellId, FactionId, MapMarkerData, MapMarkerFlags, ObjectiveInstance, ObjectiveInstanceId,
    PlayerSnapshot, Quest, QuestId, QuestTargetId, QuestType, RefId, WorldObject,
};

pub(super) const HOME_CELL: CellId = CellId(100);

pub(super) fn side_factions() -> SideFactions {
    SideFactions {
        sons_of_skyrim: FactionId(1),
        stormcloaks: FactionId(2),
        imperial_legion: FactionId(3),
        vampire: FactionId(4),
        dawnguard: FactionId(5),
    }
}

/// Acquire 15°, hold 30°, reveal after 0.5 / 1.0 / 2.0 seconds
pub(super) fn test_settings() -> CompassSettings {
    CompassSettings::new()
        .with_focus_angles(15.0, 30.0)
        .with_reveal_delays(0.5, 1.0, 2.0)
}

/// Object `distance` units away from the origin at compass heading `heading`
pub(super) fn object_at(id: u32, heading: f32, distance: f32) -> WorldObject {
    let radians = heading.to_radians();
    WorldObject::new(
        RefId(id),
        Point3::new(distance * radians.sin(), distance * radians.cos(), 0.0),
    )
}

pub(super) fn enemy_at(id: u32, heading: f32, name: &str) -> Actor {
    Actor::new(object_at(id, heading, 100.0), name)
}

pub(super) fn discovered(name: &str) -> MapMarkerData {
    MapMarkerData::new(name, MapMarkerFlags::VISIBLE | MapMarkerFlags::CAN_TRAVEL_TO)
}

pub(super) fn undiscovered(name: &str) -> MapMarkerData {
    MapMarkerData::new(name, MapMarkerFlags::empty())
}

pub(super) fn quest(id: u32, quest_type: QuestType, name: &str) -> Quest {
    Quest::new(QuestId(id), quest_type, name)
}

pub(super) fn objective(id: u32, quest: &Quest, target: u32, text: &str) -> ObjectiveInstance {
    ObjectiveInstance::displayed(ObjectiveInstanceId(id), quest.id, vec![QuestTargetId(target)], text)
}

/// Manager wired to recording surfaces, camera at the origin looking at heading 0
pub(super) struct Harness {
    pub manager: HudMarkerManager,
    pub log: CommandLog,
    pub player: PlayerSnapshot,
    pub camera: CameraPose,
}

impl Harness {
    pub fn new(settings: CompassSettings) -> Self {
        let log = CommandLog::new();
        let surfaces = HudSurfaces::new()
            .with_compass(RecordingCompass::new(log.clone()))
            .with_quest_list(RecordingQuestList::new(log.clone()))
            .with_hud_movie(RecordingHudMovie::new(log.clone()).with_number(ENEMY_HEALTH_ALPHA, 0.0));
        Self::with_surfaces(settings, surfaces, log)
    }

    pub fn with_surfaces(settings: CompassSettings, surfaces: HudSurfaces, log: CommandLog) -> Self {
        let manager = HudMarkerManager::new(settings, side_factions(), surfaces).unwrap();
        log.drain();

        Self {
            manager,
            log,
            player: PlayerSnapshot::standing_at(Point3::origin()).in_cell(HOME_CELL),
            camera: CameraPose::looking_at_heading(Point3::origin(), 0.0),
        }
    }

    /// Run one frame and return the commands it produced
    pub fn frame(&mut self, real_time_delta: f32, feed: impl FnOnce(&mut FramePass<'_, '_>)) -> Vec<HudCommand> {
        let mut pass = self
            .manager
            .begin_frame(FrameContext::new(self.camera, &self.player, real_time_delta));
        feed(&mut pass);
        pass.finish();
        self.log.drain()
    }
}

pub(super) fn count(commands: &[HudCommand], predicate: impl Fn(&HudCommand) -> bool) -> usize {
    commands.iter().filter(|c| predicate(c)).count()
}

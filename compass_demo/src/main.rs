//! Compass demo sweeping the camera across a small scripted scene
//!
//! Usage: `compass_demo [settings.toml|settings.ron]`
//!
//! The compass and quest list are recording surfaces; every command the
//! manager sends them is logged at info level.

use compass_focus::core::{CompassSettings, Config, ConfigError};
use compass_focus::events::{HostMessage, PatchedInstance, UiExtensionEvent, UiExtensionMessage};
use compass_focus::foundation::logging;
use compass_focus::foundation::math::Point3;
use compass_focus::hud::{HudError, HudMarkerManager, SideFactions};
use compass_focus::ui::{
    CommandLog, HudCommand, HudSurfaces, RecordingCompass, RecordingQuestList, COMPASS_PATH, QUEST_LIST_PATH,
};
use compass_focus::world::{
    Actor, CameraPose, CellId, Faction, FactionId, FactionMembership, MapMarkerData, MapMarkerFlags,
    ObjectiveInstance, ObjectiveInstanceId, PlayerSnapshot, Quest, QuestId, QuestTargetId, QuestType, RefId,
    WorldObject,
};
use compass_focus::FrameContext;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

// Scene configuration
const FRAME_TIME: f32 = 1.0 / 30.0;
const SWEEP_DEGREES_PER_SECOND: f32 = 45.0;
const SWEEP_SECONDS: f32 = 8.0;
const ENEMY_COUNT: u32 = 4;
const RNG_SEED: u64 = 0x5eed;
const TOWN_CELL: CellId = CellId(1);

#[derive(Error, Debug)]
enum DemoError {
    #[error("Settings error: {0}")]
    Settings(#[from] ConfigError),

    #[error("Manager setup failed: {0}")]
    Manager(#[from] HudError),
}

struct QuestMarker {
    quest: Quest,
    objective: ObjectiveInstance,
    target: QuestTargetId,
    object: WorldObject,
}

struct LocationMarker {
    map_marker: MapMarkerData,
    object: WorldObject,
}

struct Scene {
    quests: Vec<QuestMarker>,
    locations: Vec<LocationMarker>,
    enemies: Vec<Actor>,
    waypoint: WorldObject,
}

fn point_at_heading(heading: f32, distance: f32, height: f32) -> Point3 {
    let radians = heading.to_radians();
    Point3::new(distance * radians.sin(), distance * radians.cos(), height)
}

impl Scene {
    fn build(rng: &mut StdRng) -> Self {
        let dragon = Quest::new(QuestId(1), QuestType::MainQuest, "Dragon Rising");
        let firewood = Quest::new(QuestId(2), QuestType::Miscellaneous, "Chop firewood");
        let battle = Quest::new(QuestId(3), QuestType::CivilWar, "Battle for Whiterun");

        let quest_marker = |quest: &Quest, instance: u32, target: u32, text: &str, object: WorldObject| QuestMarker {
            quest: quest.clone(),
            objective: ObjectiveInstance::displayed(
                ObjectiveInstanceId(instance),
                quest.id,
                vec![QuestTargetId(target)],
                text,
            ),
            target: QuestTargetId(target),
            object,
        };

        let quests = vec![
            quest_marker(
                &dragon,
                1,
                10,
                "Kill the dragon",
                WorldObject::new(RefId(100), point_at_heading(30.0, 2500.0, 300.0)),
            ),
            quest_marker(
                &firewood,
                2,
                20,
                "Bring firewood to Hod",
                WorldObject::new(RefId(101), point_at_heading(95.0, 400.0, 0.0)).in_cell(TOWN_CELL),
            ),
            quest_marker(
                &battle,
                3,
                30,
                "Attack Whiterun",
                WorldObject::new(RefId(102), point_at_heading(160.0, 6000.0, 50.0)),
            ),
        ];

        let locations = vec![
            LocationMarker {
                map_marker: MapMarkerData::new("Whiterun", MapMarkerFlags::VISIBLE | MapMarkerFlags::CAN_TRAVEL_TO),
                object: WorldObject::new(RefId(200), point_at_heading(-60.0, 8000.0, 200.0)),
            },
            LocationMarker {
                map_marker: MapMarkerData::new("Bleak Falls Barrow", MapMarkerFlags::empty()),
                object: WorldObject::new(RefId(201), point_at_heading(120.0, 9000.0, 1200.0)),
            },
        ];

        let enemies = (0..ENEMY_COUNT)
            .map(|i| {
                let heading = rng.gen_range(0.0..SWEEP_DEGREES_PER_SECOND * SWEEP_SECONDS);
                let distance = rng.gen_range(300.0..1500.0);
                Actor::new(
                    WorldObject::new(RefId(300 + i), point_at_heading(heading, distance, 0.0)),
                    format!("Bandit {}", i + 1),
                )
            })
            .collect();

        Self {
            quests,
            locations,
            enemies,
            waypoint: WorldObject::new(RefId(400), point_at_heading(200.0, 3000.0, 0.0)),
        }
    }

    fn player(&self) -> PlayerSnapshot {
        let stormcloaks = Faction::new(FactionId(2));
        self.quests
            .iter()
            .fold(PlayerSnapshot::standing_at(Point3::origin()).in_cell(TOWN_CELL), |player, marker| {
                player.with_objective(marker.objective.clone())
            })
            .with_faction(FactionMembership::new(stormcloaks, 1))
    }
}

struct CompassDemoApp {
    manager: HudMarkerManager,
    log: CommandLog,
    scene: Scene,
    player: PlayerSnapshot,
    heading: f32,
}

impl CompassDemoApp {
    fn new(settings: CompassSettings) -> Result<Self, DemoError> {
        let side_factions = SideFactions {
            sons_of_skyrim: FactionId(1),
            stormcloaks: FactionId(2),
            imperial_legion: FactionId(3),
            vampire: FactionId(4),
            dawnguard: FactionId(5),
        };
        let manager = HudMarkerManager::new(settings, side_factions, HudSurfaces::new())?;

        let mut rng = StdRng::seed_from_u64(RNG_SEED);
        let scene = Scene::build(&mut rng);
        let player = scene.player();

        Ok(Self {
            manager,
            log: CommandLog::new(),
            scene,
            player,
            heading: 0.0,
        })
    }

    /// Replay the messages the UI extension sends while patching the HUD
    fn load_hud(&mut self) {
        self.manager
            .handle_host_message(HostMessage::PostLoad { ui_extension_registered: true });

        let events = vec![
            UiExtensionEvent::StartLoadInstances,
            UiExtensionEvent::PreReplaceInstance { path: COMPASS_PATH.to_string() },
            UiExtensionEvent::PostPatchInstance {
                path: COMPASS_PATH.to_string(),
                instance: PatchedInstance::Compass(Box::new(RecordingCompass::new(self.log.clone()))),
            },
            UiExtensionEvent::PostPatchInstance {
                path: QUEST_LIST_PATH.to_string(),
                instance: PatchedInstance::QuestList(Box::new(RecordingQuestList::new(self.log.clone()))),
            },
            UiExtensionEvent::FinishLoadInstances,
            UiExtensionEvent::PostInitExtensions,
        ];

        for event in events {
            self.manager.handle_ui_message(UiExtensionMessage::hud(event));
        }
        self.report("load");
    }

    fn frame(&mut self, index: usize) {
        let camera = CameraPose::looking_at_heading(Point3::origin(), self.heading);
        let mut pass = self.manager.begin_frame(FrameContext::new(camera, &self.player, FRAME_TIME));

        // Slots follow the order the compass lists its markers in
        let mut slot = 0;
        for marker in &self.scene.quests {
            pass.process_quest_marker(&marker.quest, &marker.objective, marker.target, &marker.object, slot, 1);
            slot += 1;
        }
        for marker in &self.scene.locations {
            pass.process_location_marker(&marker.map_marker, &marker.object, slot, 1);
            slot += 1;
        }
        for enemy in &self.scene.enemies {
            pass.process_enemy_marker(enemy, slot, 1);
            slot += 1;
        }
        pass.process_player_set_marker(&self.scene.waypoint, slot, 1);
        pass.finish();

        self.report(&format!("frame {index} @ {:.1}°", self.heading));
    }

    fn report(&self, label: &str) {
        for command in self.log.drain() {
            match command {
                HudCommand::SetMarkers | HudCommand::UpdateFocusedMarker | HudCommand::UpdateQuestList => {
                    log::trace!("[{}] {:?}", label, command);
                }
                _ => log::info!("[{}] {:?}", label, command),
            }
        }
    }

    fn run(&mut self) {
        self.load_hud();

        let frames = (SWEEP_SECONDS / FRAME_TIME) as usize;
        for index in 0..frames {
            self.frame(index);
            self.heading = (self.heading + SWEEP_DEGREES_PER_SECOND * FRAME_TIME) % 360.0;
        }

        log::info!(
            "Sweep finished, focused marker: {:?}, focused for {:.2}s",
            self.manager.focused_marker(),
            self.manager.time_focusing_marker()
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = match std::env::args().nth(1) {
        Some(path) => CompassSettings::load_or_default(path).map_err(DemoError::from)?,
        None => CompassSettings::default(),
    };
    logging::init_with_level(&settings.log_level);

    log::info!("Starting compass demo");

    let mut app = CompassDemoApp::new(settings)?;
    app.run();

    log::info!("Compass demo completed successfully");
    Ok(())
}

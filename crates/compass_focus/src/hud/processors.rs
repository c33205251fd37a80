//! Marker processors
//!
//! The host calls one processor per compass marker per frame, with the slot
//! index it assigned to the marker. A processor measures the marker against
//! the camera and, if it qualifies, attaches a typed payload to the marker's
//! aggregate.

use super::focused_marker::{EnemyData, FocusedMarker, LocationData, MarkerData, PlayerSetData, QuestData};
use super::manager::FramePass;
use crate::foundation::math::angle_between;
use crate::ui::UNKNOWN_MARKER_TYPE;
use crate::world::{Actor, MapMarkerData, ObjectiveInstance, Quest, QuestTargetId, RefId, WorldObject};

impl FramePass<'_, '_> {
    /// Angle between the camera forward direction and `marker`, in degrees
    fn angle_to(&self, marker: &WorldObject) -> f32 {
        let camera = &self.context.camera;
        angle_between(&camera.position, &camera.forward, &marker.position)
    }

    /// Whether a marker at `angle` gets attention this frame
    ///
    /// The marker focused last frame keeps qualifying up to the wider hold
    /// angle; everything else needs the acquire angle.
    fn qualifies(&self, marker: RefId, angle: f32) -> bool {
        let focus = &self.manager.settings.focus;
        (self.manager.focused_marker == Some(marker) && angle < focus.hold_angle) || angle < focus.acquire_angle
    }

    fn faced_marker(&mut self, marker: &WorldObject, angle: f32) -> &mut FocusedMarker {
        let player_position = self.context.player.position();
        let distance = nalgebra::distance(&player_position, &marker.position);
        let height_difference = marker.position.z - player_position.z;

        self.manager
            .faced_markers
            .get_or_insert(marker.id, angle, distance, height_difference)
    }

    /// Process a quest objective marker
    ///
    /// `objective` is the instance that put the marker on the compass; every
    /// displayed instance of `quest` aimed at `target` is merged, newest first.
    pub fn process_quest_marker(
        &mut self,
        quest: &Quest,
        objective: &ObjectiveInstance,
        target: QuestTargetId,
        marker: &WorldObject,
        gfx_index: u32,
        goto_frame: u32,
    ) {
        let angle = self.angle_to(marker);
        if !self.qualifies(marker.id, angle) {
            return;
        }

        let player = self.context.player;
        let is_in_same_location = marker.parent_cell.is_some() && marker.parent_cell == player.parent_cell();

        let faced = self.faced_marker(marker, angle);
        let index = match faced.quest_data_index(quest) {
            Some(index) => index,
            None => {
                faced
                    .data
                    .push(MarkerData::Quest(QuestData::new(gfx_index, goto_frame, quest, is_in_same_location)));
                faced.data.len() - 1
            }
        };
        let MarkerData::Quest(quest_data) = &mut faced.data[index] else {
            return;
        };
        quest_data.gfx_index = gfx_index;

        let objectives = player.objectives();
        for (position, instance) in objectives.iter().enumerate().rev() {
            if instance.contributes_to(quest.id, target) {
                let age = objectives.len() - 1 - position;
                quest_data.merge_objective(instance, age);
            }
        }

        if quest_data.merged_objective_count() == 0 {
            log::error!(
                "No displayed objective of quest '{}' targets marker {:?} (raised by objective {:?})",
                quest.name,
                marker.id,
                objective.id
            );
        }
    }

    /// Process a map location marker
    pub fn process_location_marker(
        &mut self,
        map_marker: &MapMarkerData,
        marker: &WorldObject,
        gfx_index: u32,
        goto_frame: u32,
    ) {
        let angle = self.angle_to(marker);
        let is_discovered = map_marker.is_discovered();
        let display = &self.manager.settings.display;
        let hides_name = display.unknown_location_hides_name;
        let hides_marker_type = display.unknown_location_hides_marker_type;

        if (is_discovered || !hides_name) && self.qualifies(marker.id, angle) {
            let faced = self.faced_marker(marker, angle);
            faced.data.push(MarkerData::Location(LocationData {
                gfx_index,
                goto_frame,
                location_name: map_marker.name.clone(),
            }));
        }

        if !is_discovered && hides_marker_type {
            match self.manager.surfaces.compass_mut() {
                Some(compass) => compass.set_marker_type(gfx_index, UNKNOWN_MARKER_TYPE),
                None => log::debug!("Compass not ready, cannot mark slot {} as unknown", gfx_index),
            }
        }
    }

    /// Process a hostile actor marker
    pub fn process_enemy_marker(&mut self, enemy: &Actor, gfx_index: u32, goto_frame: u32) {
        let angle = self.angle_to(&enemy.object);
        if !self.qualifies(enemy.object.id, angle) {
            return;
        }

        let faced = self.faced_marker(&enemy.object, angle);
        faced.data.push(MarkerData::Enemy(EnemyData {
            gfx_index,
            goto_frame,
            enemy_name: enemy.name.clone(),
        }));
    }

    /// Process a marker the player placed on the map
    pub fn process_player_set_marker(&mut self, marker: &WorldObject, gfx_index: u32, goto_frame: u32) {
        let angle = self.angle_to(marker);
        if !self.qualifies(marker.id, angle) {
            return;
        }

        let faced = self.faced_marker(marker, angle);
        faced.data.push(MarkerData::PlayerSet(PlayerSetData::new(gfx_index, goto_frame)));
    }
}

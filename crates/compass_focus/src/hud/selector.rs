//! Focus selection and the quest list reveal timer
//!
//! Runs once per frame after every marker went through its processor.

use super::focused_marker::MarkerData;
use super::manager::{FrameContext, HudMarkerManager};
use super::side::QuestSide;
use crate::ui::mirror_enemy_health_alpha;

impl HudMarkerManager {
    /// Pick this frame's focused marker and push its info to the surfaces
    pub(super) fn set_markers_extra_info(&mut self, context: &FrameContext<'_>) {
        let next_focused = self.faced_markers.take_most_centered();
        let next_id = next_focused.as_ref().map(|faced| faced.marker);

        let focus_changed = next_id != self.focused_marker;
        if focus_changed {
            log::debug!("Focus changed from {:?} to {:?}", self.focused_marker, next_id);
        }
        self.focused_marker = next_id;

        let player = context.player;
        let cell = player.parent_cell();
        let combat_hidden = self.settings.quest_list.hide_in_combat && player.is_weapon_drawn();
        let delay_to_show = self.settings.quest_list.delay_to_show(player.movement_tier());

        let (mut compass, mut quest_list, mut hud_movie) = if self.handshake.is_degraded() {
            (None, None, None)
        } else {
            self.surfaces.split_mut()
        };
        if compass.is_none() {
            log::debug!("Compass not ready, skipping focus output");
        }
        let quest_list_displayable = quest_list
            .as_deref()
            .is_some_and(|list| list.can_be_displayed_in(cell));

        // A surface installed mid-focus has never seen the current focus
        let compass_changed = compass.is_some() && next_id != self.compass_focus;
        let quest_list_changed = quest_list.is_some() && next_id != self.quest_list_focus;
        self.compass_focus = if compass.is_some() { next_id } else { None };
        self.quest_list_focus = if quest_list.is_some() { next_id } else { None };

        if focus_changed {
            self.focus_clock.reset();
        }

        if compass_changed {
            if let Some(compass) = compass.as_deref_mut() {
                compass.unfocus_marker();
            }
        }

        if focus_changed || quest_list_changed || combat_hidden {
            if let Some(list) = quest_list.as_deref_mut() {
                list.remove_all_quests();
            }
            self.quest_list_revealed = false;
        }

        if let Some(focused) = &next_focused {
            if focused.data.is_empty() {
                log::warn!("Focused marker {:?} has no data attached", focused.marker);
            }

            let mut can_focus_player_set_marker = true;
            let mut gfx_index = 0;

            for data in &focused.data {
                let marker_index = data.gfx_index();
                let target = match data {
                    MarkerData::Quest(quest_data) => {
                        can_focus_player_set_marker = false;

                        if quest_list_changed && quest_list_displayable {
                            if let Some(list) = quest_list.as_deref_mut() {
                                let side = self.side_factions.side_in_quest(player, quest_data.quest_type);
                                list.add_quest(&quest_data.list_entry());
                                list.set_quest_side(side.map_or("", QuestSide::label));
                            }
                        }
                        Some(quest_data.target_text())
                    }
                    MarkerData::Location(location_data) => Some(location_data.location_name.as_str()),
                    MarkerData::Enemy(enemy_data) => Some(enemy_data.enemy_name.as_str()),
                    MarkerData::PlayerSet(player_set_data) => {
                        can_focus_player_set_marker.then_some(player_set_data.location_name.as_str())
                    }
                };

                if let (Some(target), Some(compass)) = (target, compass.as_deref_mut()) {
                    compass.set_focused_marker_info(
                        target,
                        focused.distance_to_player,
                        focused.height_difference,
                        marker_index,
                    );
                }

                gfx_index = marker_index;
            }

            if let Some(compass) = compass.as_deref_mut() {
                if compass_changed {
                    compass.focus_marker(gfx_index);
                } else {
                    // HACK: overlay mods hide the enemy health bar through a
                    // field the compass movie does not read
                    if let Some(movie) = hud_movie.as_deref_mut() {
                        mirror_enemy_health_alpha(movie);
                    }
                    compass.update_focused_marker();
                }
            }
        }

        if let Some(compass) = compass.as_deref_mut() {
            compass.set_markers();
        }

        if self.focused_marker.is_some() && !combat_hidden {
            self.focus_clock.advance(context.real_time_delta);

            if quest_list_displayable && !self.quest_list_revealed && self.focus_clock.has_reached(delay_to_show) {
                if let Some(list) = quest_list.as_deref_mut() {
                    list.show_all_quests();
                    self.quest_list_revealed = true;
                }
            }
        }

        if quest_list_displayable {
            if let Some(list) = quest_list.as_deref_mut() {
                list.update();
            }
        }
    }
}

//! Setup handshake with the UI extension
//!
//! The compass and quest list surfaces are created by a UI extension that
//! patches the HUD movie at load. It announces each step with a message:
//! - the original compass is about to be replaced (`PreReplaceInstance`)
//! - a patched instance is ready (`PostPatchInstance`)
//! - a replacement was aborted (`AbortPatchInstance`)
//! - extensions finished initialising (`PostInitExtensions`)
//!
//! Only messages from the expected sender about the HUD movie are handled.

use crate::core::config::UnitSystem;
use crate::ui::{CompassSurface, HudSurfaces, QuestListSurface, COMPASS_PATH, QUEST_LIST_PATH};

/// Sender name of the UI extension
pub const UI_EXTENSION_SENDER: &str = "InfinityUI";

/// Fragment of the HUD movie URL
pub const HUD_MOVIE_NAME: &str = "HUDMenu";

/// Lifecycle message from the host, sent once all plugins are loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostMessage {
    /// All plugins loaded
    PostLoad {
        /// Whether registering for UI extension messages succeeded
        ui_extension_registered: bool,
    },
}

/// Display object produced by a patch
pub enum PatchedInstance {
    /// A compass the manager can drive
    Compass(Box<dyn CompassSurface>),
    /// A quest list the manager can drive
    QuestList(Box<dyn QuestListSurface>),
    /// Something this crate does not use
    Other,
}

impl std::fmt::Debug for PatchedInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compass(_) => f.write_str("Compass"),
            Self::QuestList(_) => f.write_str("QuestList"),
            Self::Other => f.write_str("Other"),
        }
    }
}

/// Message kinds sent by the UI extension
#[derive(Debug)]
pub enum UiExtensionEvent {
    /// Patching of a movie started
    StartLoadInstances,
    /// The instance at `path` is about to be replaced
    PreReplaceInstance {
        /// Display path of the original instance
        path: String,
    },
    /// The instance at `path` was patched
    PostPatchInstance {
        /// Display path of the new instance
        path: String,
        /// The new instance
        instance: PatchedInstance,
    },
    /// Replacing the instance at `path` failed
    AbortPatchInstance {
        /// Display path of the original instance
        path: String,
    },
    /// Patching of a movie finished
    FinishLoadInstances,
    /// Every extension finished initialising
    PostInitExtensions,
}

/// A message from the UI extension
#[derive(Debug)]
pub struct UiExtensionMessage {
    /// Sender name
    pub sender: String,
    /// URL of the movie being patched
    pub movie_url: String,
    /// Message payload
    pub event: UiExtensionEvent,
}

impl UiExtensionMessage {
    /// Message from the UI extension about the HUD movie
    pub fn hud(event: UiExtensionEvent) -> Self {
        Self {
            sender: UI_EXTENSION_SENDER.to_string(),
            movie_url: format!("Interface/{}.swf", HUD_MOVIE_NAME),
            event,
        }
    }
}

/// State of the setup handshake
#[derive(Debug, Default)]
pub struct SetupHandshake {
    compass_pending: bool,
    degraded: bool,
}

impl SetupHandshake {
    /// Handshake waiting for the UI extension
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the UI extension is known to be missing
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Handle a host lifecycle message
    pub fn handle_host_message(&mut self, message: HostMessage) {
        match message {
            HostMessage::PostLoad { ui_extension_registered: true } => {
                log::info!("Successfully registered for {} messages", UI_EXTENSION_SENDER);
            }
            HostMessage::PostLoad { ui_extension_registered: false } => {
                if !self.degraded {
                    log::error!(
                        "{} installation not detected, marker focus output is disabled",
                        UI_EXTENSION_SENDER
                    );
                }
                self.degraded = true;
            }
        }
    }

    /// Handle a UI extension message, installing surfaces when ready
    pub fn handle_ui_message(&mut self, message: UiExtensionMessage, surfaces: &mut HudSurfaces, units: UnitSystem) {
        if message.sender != UI_EXTENSION_SENDER || !message.movie_url.contains(HUD_MOVIE_NAME) {
            return;
        }

        match message.event {
            UiExtensionEvent::StartLoadInstances => {
                log::info!("Started loading patches");
            }
            UiExtensionEvent::PreReplaceInstance { path } => {
                if path == COMPASS_PATH {
                    self.compass_pending = true;
                    log::debug!("Compass at {} is about to be replaced", path);
                }
            }
            UiExtensionEvent::PostPatchInstance { path, instance } => {
                self.install(&path, instance, surfaces, units);
            }
            UiExtensionEvent::AbortPatchInstance { path } => {
                if path == COMPASS_PATH {
                    self.compass_pending = false;
                    log::error!("Aborted replacement of {}", COMPASS_PATH);
                }
            }
            UiExtensionEvent::FinishLoadInstances => {
                log::info!("Finished loading patches");
            }
            UiExtensionEvent::PostInitExtensions => {
                if let Some(quest_list) = surfaces.quest_list_mut() {
                    quest_list.add_to_hud_elements();
                    log::debug!("Quest list added to HUD elements");
                }
                log::debug!("Extensions initialization finished");
            }
        }
    }

    fn install(&mut self, path: &str, instance: PatchedInstance, surfaces: &mut HudSurfaces, units: UnitSystem) {
        match (path, instance) {
            (COMPASS_PATH, PatchedInstance::Compass(mut compass)) => {
                if !self.compass_pending {
                    log::error!("Compass instance counterpart not ready for {}", COMPASS_PATH);
                    return;
                }
                self.compass_pending = false;
                compass.set_units(units);
                surfaces.install_compass(compass);
                log::debug!("Compass patched at {}", COMPASS_PATH);
            }
            (QUEST_LIST_PATH, PatchedInstance::QuestList(quest_list)) => {
                surfaces.install_quest_list(quest_list);
                log::debug!("Quest list created at {}", QUEST_LIST_PATH);
            }
            (COMPASS_PATH | QUEST_LIST_PATH, instance) => {
                log::warn!("Unexpected {:?} instance patched at {}", instance, path);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{CommandLog, HudCommand, RecordingCompass, RecordingQuestList};

    fn patched_compass(log: &CommandLog) -> UiExtensionEvent {
        UiExtensionEvent::PostPatchInstance {
            path: COMPASS_PATH.to_string(),
            instance: PatchedInstance::Compass(Box::new(RecordingCompass::new(log.clone()))),
        }
    }

    #[test]
    fn test_compass_installed_after_pre_replace() {
        let log = CommandLog::new();
        let mut surfaces = HudSurfaces::new();
        let mut handshake = SetupHandshake::new();

        handshake.handle_ui_message(
            UiExtensionMessage::hud(UiExtensionEvent::PreReplaceInstance { path: COMPASS_PATH.to_string() }),
            &mut surfaces,
            UnitSystem::Metric,
        );
        handshake.handle_ui_message(UiExtensionMessage::hud(patched_compass(&log)), &mut surfaces, UnitSystem::Metric);

        assert!(surfaces.is_compass_ready());
        assert_eq!(log.snapshot(), vec![HudCommand::SetUnits(UnitSystem::Metric)]);
    }

    #[test]
    fn test_compass_without_pre_replace_is_not_installed() {
        let log = CommandLog::new();
        let mut surfaces = HudSurfaces::new();
        let mut handshake = SetupHandshake::new();

        handshake.handle_ui_message(UiExtensionMessage::hud(patched_compass(&log)), &mut surfaces, UnitSystem::Imperial);

        assert!(!surfaces.is_compass_ready());
        assert!(log.is_empty());
    }

    #[test]
    fn test_abort_cancels_pending_compass() {
        let log = CommandLog::new();
        let mut surfaces = HudSurfaces::new();
        let mut handshake = SetupHandshake::new();

        handshake.handle_ui_message(
            UiExtensionMessage::hud(UiExtensionEvent::PreReplaceInstance { path: COMPASS_PATH.to_string() }),
            &mut surfaces,
            UnitSystem::Imperial,
        );
        handshake.handle_ui_message(
            UiExtensionMessage::hud(UiExtensionEvent::AbortPatchInstance { path: COMPASS_PATH.to_string() }),
            &mut surfaces,
            UnitSystem::Imperial,
        );
        handshake.handle_ui_message(UiExtensionMessage::hud(patched_compass(&log)), &mut surfaces, UnitSystem::Imperial);

        assert!(!surfaces.is_compass_ready());
    }

    #[test]
    fn test_quest_list_added_to_hud_on_post_init() {
        let log = CommandLog::new();
        let mut surfaces = HudSurfaces::new();
        let mut handshake = SetupHandshake::new();

        handshake.handle_ui_message(
            UiExtensionMessage::hud(UiExtensionEvent::PostPatchInstance {
                path: QUEST_LIST_PATH.to_string(),
                instance: PatchedInstance::QuestList(Box::new(RecordingQuestList::new(log.clone()))),
            }),
            &mut surfaces,
            UnitSystem::Imperial,
        );
        handshake.handle_ui_message(
            UiExtensionMessage::hud(UiExtensionEvent::PostInitExtensions),
            &mut surfaces,
            UnitSystem::Imperial,
        );

        assert!(surfaces.is_quest_list_ready());
        assert_eq!(log.snapshot(), vec![HudCommand::AddToHudElements]);
    }

    #[test]
    fn test_foreign_messages_are_ignored() {
        let log = CommandLog::new();
        let mut surfaces = HudSurfaces::new();
        let mut handshake = SetupHandshake::new();

        let mut message = UiExtensionMessage::hud(UiExtensionEvent::PreReplaceInstance {
            path: COMPASS_PATH.to_string(),
        });
        message.sender = "SomeOtherMod".to_string();
        handshake.handle_ui_message(message, &mut surfaces, UnitSystem::Imperial);

        let mut message = UiExtensionMessage::hud(UiExtensionEvent::PreReplaceInstance {
            path: COMPASS_PATH.to_string(),
        });
        message.movie_url = "Interface/MapMenu.swf".to_string();
        handshake.handle_ui_message(message, &mut surfaces, UnitSystem::Imperial);

        handshake.handle_ui_message(UiExtensionMessage::hud(patched_compass(&log)), &mut surfaces, UnitSystem::Imperial);
        assert!(!surfaces.is_compass_ready());
    }

    #[test]
    fn test_missing_ui_extension_degrades() {
        let mut handshake = SetupHandshake::new();
        handshake.handle_host_message(HostMessage::PostLoad { ui_extension_registered: true });
        assert!(!handshake.is_degraded());

        handshake.handle_host_message(HostMessage::PostLoad { ui_extension_registered: false });
        assert!(handshake.is_degraded());
    }
}

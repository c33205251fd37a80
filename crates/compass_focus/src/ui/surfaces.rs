//! Display surface handles
//!
//! The surfaces are installed once the host's UI reports them constructed
//! (see [`crate::events`]). Until then every accessor returns `None` and the
//! manager treats the surface as not ready.

use super::compass::CompassSurface;
use super::compat::HudMovie;
use super::quest_list::QuestListSurface;

/// Surfaces the manager writes to
#[derive(Default)]
pub struct HudSurfaces {
    compass: Option<Box<dyn CompassSurface>>,
    quest_list: Option<Box<dyn QuestListSurface>>,
    hud_movie: Option<Box<dyn HudMovie>>,
}

impl HudSurfaces {
    /// No surface ready yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the compass up front (builder pattern)
    pub fn with_compass(mut self, compass: impl CompassSurface + 'static) -> Self {
        self.compass = Some(Box::new(compass));
        self
    }

    /// Install the quest list up front (builder pattern)
    pub fn with_quest_list(mut self, quest_list: impl QuestListSurface + 'static) -> Self {
        self.quest_list = Some(Box::new(quest_list));
        self
    }

    /// Install the HUD movie up front (builder pattern)
    pub fn with_hud_movie(mut self, movie: impl HudMovie + 'static) -> Self {
        self.hud_movie = Some(Box::new(movie));
        self
    }

    /// Install or replace the compass
    pub fn install_compass(&mut self, compass: Box<dyn CompassSurface>) {
        self.compass = Some(compass);
    }

    /// Install or replace the quest list
    pub fn install_quest_list(&mut self, quest_list: Box<dyn QuestListSurface>) {
        self.quest_list = Some(quest_list);
    }

    /// Install or replace the HUD movie
    pub fn install_hud_movie(&mut self, movie: Box<dyn HudMovie>) {
        self.hud_movie = Some(movie);
    }

    /// Whether the compass has been installed
    pub fn is_compass_ready(&self) -> bool {
        self.compass.is_some()
    }

    /// Whether the quest list has been installed
    pub fn is_quest_list_ready(&self) -> bool {
        self.quest_list.is_some()
    }

    /// Compass, if ready
    pub fn compass_mut(&mut self) -> Option<&mut (dyn CompassSurface + 'static)> {
        self.compass.as_deref_mut()
    }

    /// Quest list, if ready
    pub fn quest_list_mut(&mut self) -> Option<&mut (dyn QuestListSurface + 'static)> {
        self.quest_list.as_deref_mut()
    }

    /// All three surfaces borrowed at once
    pub(crate) fn split_mut(
        &mut self,
    ) -> (
        Option<&mut (dyn CompassSurface + 'static)>,
        Option<&mut (dyn QuestListSurface + 'static)>,
        Option<&mut (dyn HudMovie + 'static)>,
    ) {
        (
            self.compass.as_deref_mut(),
            self.quest_list.as_deref_mut(),
            self.hud_movie.as_deref_mut(),
        )
    }
}

impl std::fmt::Debug for HudSurfaces {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HudSurfaces")
            .field("compass", &self.compass.is_some())
            .field("quest_list", &self.quest_list.is_some())
            .field("hud_movie", &self.hud_movie.is_some())
            .finish()
    }
}

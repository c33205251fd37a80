//! Compatibility shim for third-party HUD overlays
//!
//! Overlay mods hide the vanilla enemy health bar by zeroing
//! `EnemyHealth_mc._alpha`, but the compass movie reads the alpha of the
//! brackets instance instead, so the alpha is mirrored across every frame the
//! focus is held. This is a bridge for external tools, not part of marker
//! focusing.

/// HUD variable overlay mods write to hide the enemy health bar
pub const ENEMY_HEALTH_ALPHA: &str = "HUDMovieBaseInstance.EnemyHealth_mc._alpha";

/// HUD variable the compass movie reads
pub const ENEMY_HEALTH_BRACKETS_ALPHA: &str = "HUDMovieBaseInstance.EnemyHealth_mc.BracketsInstance._alpha";

/// Numeric variable access to the HUD movie
pub trait HudMovie {
    /// Read a numeric variable, `None` when it does not exist
    fn get_number(&self, path: &str) -> Option<f64>;

    /// Write a numeric variable
    fn set_number(&mut self, path: &str, value: f64);
}

/// Copy the enemy health alpha onto the brackets instance
pub fn mirror_enemy_health_alpha(movie: &mut dyn HudMovie) {
    match movie.get_number(ENEMY_HEALTH_ALPHA) {
        Some(alpha) => movie.set_number(ENEMY_HEALTH_BRACKETS_ALPHA, alpha),
        None => log::trace!("{} not available, skipping alpha mirror", ENEMY_HEALTH_ALPHA),
    }
}

//! # Core Module
//!
//! Settings shared by every subsystem of the crate.
//!
//! ## Organization
//!
//! - **Config**: compass settings and their file format support

pub mod config;

// Re-export commonly used config types
pub use config::{
    CompassSettings,
    FocusSettings,
    DisplaySettings,
    QuestListSettings,
    UnitSystem,
    Config,
    ConfigError,
    ConfigFormat,
};

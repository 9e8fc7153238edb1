//! EquipSkill Data - loads host game tables from JSON
//!
//! Reads the skill, system, weapon and armor tables the host keeps as JSON
//! files and turns skill notes into metadata maps.

pub mod error;
pub mod loader;
pub mod meta;

pub use error::DataError;
pub use loader::GameData;
pub use meta::extract_meta;

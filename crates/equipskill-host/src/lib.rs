//! EquipSkill Host - wires the unlock index into an engine's equip rules
//!
//! The engine notifies [`ExpandEquipTypePlugin`] as each data table loads; once
//! skills and system are both in, the unlock index is rebuilt. Equip checks go
//! through [`EquipRules`], where the plugin is registered as an extension.

pub mod actor;
pub mod config;
pub mod eligibility;
pub mod host;
pub mod plugin;
pub mod tracker;

pub use actor::{ActorProfile, EquipActor};
pub use config::EquipSkillConfig;
pub use eligibility::{EligibilityExtension, EquipRules};
pub use host::EquipSkillHost;
pub use plugin::{ExpandEquipTypePlugin, PLUGIN_NAME, PLUGIN_VERSION};
pub use tracker::DataLoadTracker;

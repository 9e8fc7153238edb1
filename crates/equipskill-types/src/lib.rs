//! EquipSkill Types - Core types shared by the equip-type unlock crates
//!
//! This module defines the host-facing data model: skill records, equipment
//! items, system taxonomy tables and the actor capability the unlock query reads.

mod actor;
mod equipment;
mod events;
mod ids;
mod skill;

pub use actor::{CapabilityError, LearnedSkills};
pub use equipment::{EquipDomain, EquipItem, SystemData};
pub use events::DataTable;
pub use ids::{EquipTypeId, SkillId};
pub use skill::SkillRecord;

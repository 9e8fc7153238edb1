//! Actor view consumed by the equip rules

use equipskill_types::{CapabilityError, EquipDomain, EquipTypeId, LearnedSkills, SkillId};
use std::collections::HashSet;

/// What the equip rules need to know about an actor
pub trait EquipActor: LearnedSkills {
    /// The host's own type permission (class and trait based)
    fn is_equip_type_ok(&self, domain: EquipDomain, type_id: EquipTypeId) -> bool;

    /// True when the slot has been sealed by a state or trait
    fn is_equip_slot_sealed(&self, slot_id: u32) -> bool;
}

/// Plain actor state, for hosts that flatten traits into sets
#[derive(Debug, Clone, Default)]
pub struct ActorProfile {
    pub name: String,
    pub learned_skills: HashSet<SkillId>,
    pub weapon_types: HashSet<EquipTypeId>,
    pub armor_types: HashSet<EquipTypeId>,
    pub sealed_slots: HashSet<u32>,
}

impl ActorProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn learn(mut self, skill: u32) -> Self {
        self.learned_skills.insert(SkillId(skill));
        self
    }

    pub fn allow(mut self, domain: EquipDomain, type_id: u32) -> Self {
        match domain {
            EquipDomain::Weapon => self.weapon_types.insert(EquipTypeId(type_id)),
            EquipDomain::Armor => self.armor_types.insert(EquipTypeId(type_id)),
        };
        self
    }

    pub fn seal(mut self, slot_id: u32) -> Self {
        self.sealed_slots.insert(slot_id);
        self
    }
}

impl LearnedSkills for ActorProfile {
    fn is_learned_skill(&self, id: SkillId) -> Result<bool, CapabilityError> {
        Ok(self.learned_skills.contains(&id))
    }
}

impl EquipActor for ActorProfile {
    fn is_equip_type_ok(&self, domain: EquipDomain, type_id: EquipTypeId) -> bool {
        match domain {
            EquipDomain::Weapon => self.weapon_types.contains(&type_id),
            EquipDomain::Armor => self.armor_types.contains(&type_id),
        }
    }

    fn is_equip_slot_sealed(&self, slot_id: u32) -> bool {
        self.sealed_slots.contains(&slot_id)
    }
}

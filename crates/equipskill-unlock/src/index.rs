//! Reverse index from equip-type id to the skills that unlock it
//!
//! Built once per data load from every skill record; immutable afterwards.

use crate::notation::{parse_id_list, ParseContext};
use equipskill_types::{EquipDomain, EquipTypeId, LearnedSkills, SkillId, SkillRecord};
use tracing::{debug, warn};

/// Metadata keys holding the unlock lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlockFields {
    /// Key for weapon-type ids
    pub weapon: String,
    /// Key for armor-type ids
    pub armor: String,
}

impl UnlockFields {
    /// Create a field set from explicit key names
    pub fn new(weapon: impl Into<String>, armor: impl Into<String>) -> Self {
        Self {
            weapon: weapon.into(),
            armor: armor.into(),
        }
    }

    /// Key used for a domain
    pub fn field(&self, domain: EquipDomain) -> &str {
        match domain {
            EquipDomain::Weapon => &self.weapon,
            EquipDomain::Armor => &self.armor,
        }
    }
}

impl Default for UnlockFields {
    fn default() -> Self {
        Self::new(
            EquipDomain::Weapon.meta_key_hint(),
            EquipDomain::Armor.meta_key_hint(),
        )
    }
}

/// Per-domain table of `type id -> skills unlocking it`
///
/// Each table has exactly as many slots as the domain had declared categories
/// at build time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquipUnlockIndex {
    weapon: Vec<Vec<SkillId>>,
    armor: Vec<Vec<SkillId>>,
}

impl EquipUnlockIndex {
    /// Build the index from the host's sparse skill table
    ///
    /// Ids outside `0..count` name categories that do not exist in the current
    /// data and are dropped without a diagnostic. Ranges are clamped to the
    /// table before they are expanded.
    pub fn build(
        skills: &[Option<SkillRecord>],
        weapon_count: usize,
        armor_count: usize,
        fields: &UnlockFields,
    ) -> Self {
        let mut index = Self {
            weapon: vec![Vec::new(); weapon_count],
            armor: vec![Vec::new(); armor_count],
        };

        for skill in skills.iter().flatten() {
            for domain in EquipDomain::ALL {
                index.add_skill(skill, domain, fields.field(domain));
            }
        }

        debug!(
            weapon_types = weapon_count,
            armor_types = armor_count,
            weapon_entries = index.entry_count(EquipDomain::Weapon),
            armor_entries = index.entry_count(EquipDomain::Armor),
            "Built equip unlock index"
        );

        index
    }

    fn add_skill(&mut self, skill: &SkillRecord, domain: EquipDomain, field: &str) {
        let Some(raw) = skill.meta_value(field) else {
            return;
        };

        let ids = parse_id_list(raw, &ParseContext::new(skill.id, field));
        let table = self.table_mut(domain);
        for id in ids.ids_below(table.len()) {
            let Some(slot) = table.get_mut(id as usize) else {
                continue;
            };
            if !slot.contains(&skill.id) {
                slot.push(skill.id);
            }
        }
    }

    fn table(&self, domain: EquipDomain) -> &[Vec<SkillId>] {
        match domain {
            EquipDomain::Weapon => &self.weapon,
            EquipDomain::Armor => &self.armor,
        }
    }

    fn table_mut(&mut self, domain: EquipDomain) -> &mut Vec<Vec<SkillId>> {
        match domain {
            EquipDomain::Weapon => &mut self.weapon,
            EquipDomain::Armor => &mut self.armor,
        }
    }

    /// Number of category slots for a domain
    pub fn category_count(&self, domain: EquipDomain) -> usize {
        self.table(domain).len()
    }

    /// Total number of (category, skill) pairs in a domain
    pub fn entry_count(&self, domain: EquipDomain) -> usize {
        self.table(domain).iter().map(Vec::len).sum()
    }

    /// Skills unlocking a category; empty when the id is out of bounds
    pub fn skills_for(&self, domain: EquipDomain, category: EquipTypeId) -> &[SkillId] {
        self.table(domain)
            .get(category.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// True when any skill unlocking `category` satisfies `has_learned`
    ///
    /// Total: out-of-bounds ids answer `false`.
    pub fn is_unlocked_by_learned_skill<F>(
        &self,
        domain: EquipDomain,
        category: EquipTypeId,
        mut has_learned: F,
    ) -> bool
    where
        F: FnMut(SkillId) -> bool,
    {
        self.skills_for(domain, category)
            .iter()
            .any(|&skill| has_learned(skill))
    }

    /// Same as [`Self::is_unlocked_by_learned_skill`] but asks an actor
    ///
    /// A failing capability lookup is logged and answers `false`.
    pub fn is_unlocked_for<A>(&self, domain: EquipDomain, category: EquipTypeId, actor: &A) -> bool
    where
        A: LearnedSkills + ?Sized,
    {
        for &skill in self.skills_for(domain, category) {
            match actor.is_learned_skill(skill) {
                Ok(true) => return true,
                Ok(false) => {}
                Err(e) => {
                    warn!(%domain, %category, "Failed to check learned skill: {}", e);
                    return false;
                }
            }
        }
        false
    }
}

use crate::EquipTypeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two equipment namespaces a skill can unlock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipDomain {
    Weapon,
    Armor,
}

impl EquipDomain {
    pub const ALL: [EquipDomain; 2] = [EquipDomain::Weapon, EquipDomain::Armor];

    /// Default note-tag key carrying the unlock list for this domain
    pub fn meta_key_hint(self) -> &'static str {
        match self {
            EquipDomain::Weapon => "UTA_ExpandEquipTypeWId",
            EquipDomain::Armor => "UTA_ExpandEquipTypeAId",
        }
    }
}

impl fmt::Display for EquipDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EquipDomain::Weapon => write!(f, "weapon"),
            EquipDomain::Armor => write!(f, "armor"),
        }
    }
}

/// A weapon or armor item the host asks about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipItem {
    pub id: u32,
    pub name: String,
    pub domain: EquipDomain,
    /// Weapon-type id for weapons, armor-type id for armors
    pub type_id: EquipTypeId,
    /// Equip slot (etype); checked against the actor's sealed slots
    pub slot_id: u32,
}

impl EquipItem {
    pub fn weapon(id: u32, type_id: u32, slot_id: u32) -> Self {
        Self {
            id,
            name: String::new(),
            domain: EquipDomain::Weapon,
            type_id: EquipTypeId(type_id),
            slot_id,
        }
    }

    pub fn armor(id: u32, type_id: u32, slot_id: u32) -> Self {
        Self {
            id,
            name: String::new(),
            domain: EquipDomain::Armor,
            type_id: EquipTypeId(type_id),
            slot_id,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// Category taxonomy from the host's system table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemData {
    pub weapon_types: Vec<String>,
    pub armor_types: Vec<String>,
    pub equip_types: Vec<String>,
}

impl SystemData {
    /// Number of declared categories in a domain, index 0 included
    pub fn category_count(&self, domain: EquipDomain) -> usize {
        match domain {
            EquipDomain::Weapon => self.weapon_types.len(),
            EquipDomain::Armor => self.armor_types.len(),
        }
    }
}

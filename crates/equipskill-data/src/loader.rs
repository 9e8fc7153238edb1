//! Game data tables loaded from a host data directory

use crate::error::{DataError, Result};
use crate::meta::extract_meta;
use equipskill_types::{
    DataTable, EquipDomain, EquipItem, EquipTypeId, SkillId, SkillRecord, SystemData,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const SKILLS_FILE: &str = "Skills.json";
const SYSTEM_FILE: &str = "System.json";
const WEAPONS_FILE: &str = "Weapons.json";
const ARMORS_FILE: &str = "Armors.json";
const WEAPONS_TABLE: &str = "Weapons";
const ARMORS_TABLE: &str = "Armors";

#[derive(Debug, Deserialize)]
struct RawSkill {
    id: u32,
    #[serde(default)]
    name: String,
    #[serde(default)]
    note: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSystem {
    #[serde(default)]
    weapon_types: Vec<String>,
    #[serde(default)]
    armor_types: Vec<String>,
    #[serde(default)]
    equip_types: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEquip {
    id: u32,
    #[serde(default)]
    name: String,
    #[serde(default, rename = "wtypeId", alias = "atypeId")]
    type_id: u32,
    #[serde(default)]
    etype_id: u32,
}

/// Tables loaded so far in the current load cycle
#[derive(Debug, Clone, Default)]
pub struct GameData {
    /// Sparse skill table; slot 0 and deleted entries are `None`
    pub skills: Option<Vec<Option<SkillRecord>>>,
    /// Category taxonomy
    pub system: Option<SystemData>,
    pub weapons: Vec<Option<EquipItem>>,
    pub armors: Vec<Option<EquipItem>>,
}

impl GameData {
    /// Load every table from `dir`; skills and system are required
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut data = Self::default();
        for table in [DataTable::Skills, DataTable::System] {
            data.load_table(dir, &table)?;
        }

        for file in [WEAPONS_FILE, ARMORS_FILE] {
            if dir.join(file).is_file() {
                data.load_table(dir, &DataTable::from_file_name(file))?;
            } else {
                debug!("Optional data file absent: {}", file);
            }
        }

        info!(
            "Loaded game data from {:?}: {} skills, {} weapons, {} armors",
            dir,
            data.skill_count(),
            data.weapons.iter().flatten().count(),
            data.armors.iter().flatten().count()
        );
        Ok(data)
    }

    /// Load a single table from `dir` into this set
    pub fn load_table(&mut self, dir: &Path, table: &DataTable) -> Result<()> {
        let Some(path) = table_path(dir, table) else {
            debug!("Ignoring unrelated data table: {:?}", table);
            return Ok(());
        };
        let content = read_file(&path)?;

        match table {
            DataTable::Skills => self.skills = Some(parse_skills(&content, &path)?),
            DataTable::System => self.system = Some(parse_system(&content, &path)?),
            DataTable::Other(name) if name == WEAPONS_TABLE => {
                self.weapons = parse_items(&content, &path, EquipDomain::Weapon)?;
            }
            DataTable::Other(name) if name == ARMORS_TABLE => {
                self.armors = parse_items(&content, &path, EquipDomain::Armor)?;
            }
            DataTable::Other(name) => {
                debug!("No loader for data table: {}", name);
            }
        }
        Ok(())
    }

    /// True once both tables the unlock index needs are present
    pub fn is_ready(&self) -> bool {
        self.skills.is_some() && self.system.is_some()
    }

    pub fn skill_count(&self) -> usize {
        self.skills
            .as_ref()
            .map_or(0, |skills| skills.iter().flatten().count())
    }

    /// Look up an item by id in a domain's table
    pub fn item(&self, domain: EquipDomain, id: u32) -> Option<&EquipItem> {
        let table = match domain {
            EquipDomain::Weapon => &self.weapons,
            EquipDomain::Armor => &self.armors,
        };
        table.get(id as usize).and_then(Option::as_ref)
    }
}

fn read_file(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(DataError::Missing(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_json<T: DeserializeOwned>(content: &str, path: &Path) -> Result<T> {
    serde_json::from_str(content).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a skill table; metadata comes from each note
pub fn parse_skills(content: &str, path: &Path) -> Result<Vec<Option<SkillRecord>>> {
    let raw: Vec<Option<RawSkill>> = parse_json(content, path)?;
    raw.into_iter()
        .map(|slot| {
            slot.map(|skill| {
                Ok::<_, DataError>(SkillRecord {
                    id: SkillId(skill.id),
                    meta: extract_meta(&skill.note)?,
                    name: skill.name,
                    note: skill.note,
                })
            })
            .transpose()
        })
        .collect()
}

/// Parse the system table's taxonomy lists
pub fn parse_system(content: &str, path: &Path) -> Result<SystemData> {
    let raw: RawSystem = parse_json(content, path)?;
    Ok(SystemData {
        weapon_types: raw.weapon_types,
        armor_types: raw.armor_types,
        equip_types: raw.equip_types,
    })
}

/// Parse a weapon or armor table
pub fn parse_items(
    content: &str,
    path: &Path,
    domain: EquipDomain,
) -> Result<Vec<Option<EquipItem>>> {
    let raw: Vec<Option<RawEquip>> = parse_json(content, path)?;
    Ok(raw
        .into_iter()
        .map(|slot| {
            slot.map(|item| EquipItem {
                id: item.id,
                name: item.name,
                domain,
                type_id: EquipTypeId(item.type_id),
                slot_id: item.etype_id,
            })
        })
        .collect())
}

/// Path of a table file inside a data directory
pub fn table_path(dir: &Path, table: &DataTable) -> Option<PathBuf> {
    let file = match table {
        DataTable::Skills => SKILLS_FILE,
        DataTable::System => SYSTEM_FILE,
        DataTable::Other(name) if name == WEAPONS_TABLE => WEAPONS_FILE,
        DataTable::Other(name) if name == ARMORS_TABLE => ARMORS_FILE,
        DataTable::Other(_) => return None,
    };
    Some(dir.join(file))
}

use anyhow::{Context, Result};
use equipskill_types::EquipDomain;
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

const CONFIG_NAME: &str = "equipskill";

/// Note-tag keys carrying the unlock lists
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct MetaKeysConfig {
    pub weapon: String,
    pub armor: String,
}

impl Default for MetaKeysConfig {
    fn default() -> Self {
        Self {
            weapon: EquipDomain::Weapon.meta_key_hint().to_string(),
            armor: EquipDomain::Armor.meta_key_hint().to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding Skills.json, System.json, ...
    pub directory: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("data"),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `text` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct EquipSkillConfig {
    pub meta_keys: MetaKeysConfig,
    pub data: DataConfig,
    pub logging: LoggingConfig,
}

impl EquipSkillConfig {
    /// Global config path: ~/.equipskill/equipskill.toml
    fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".equipskill").join("equipskill.toml"))
    }

    /// Load configuration with layered approach:
    /// 1. Built-in defaults
    /// 2. Global config: ~/.equipskill/equipskill.toml (optional)
    /// 3. Local override: ./equipskill.toml (optional)
    /// 4. Environment variables with EQUIPSKILL__ prefix
    /// 5. `EQUIPSKILL_DATA_DIR` (highest priority)
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(global) = Self::global_config_path() {
            builder = builder.add_source(config::File::from(global).required(false));
        }

        builder = builder
            .add_source(config::File::with_name(CONFIG_NAME).required(false))
            .add_source(config::Environment::with_prefix("EQUIPSKILL").separator("__"));

        if let Ok(dir) = env::var("EQUIPSKILL_DATA_DIR") {
            builder = builder.set_override("data.directory", dir)?;
        }

        builder
            .build()
            .context("Failed to assemble configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Load a single explicit file over the built-in defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        config::Config::builder()
            .add_source(config::File::from(path))
            .build()
            .with_context(|| format!("Failed to read config {:?}", path))?
            .try_deserialize()
            .with_context(|| format!("Invalid config {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EquipSkillConfig::default();
        assert_eq!(config.meta_keys.weapon, "UTA_ExpandEquipTypeWId");
        assert_eq!(config.meta_keys.armor, "UTA_ExpandEquipTypeAId");
        assert_eq!(config.data.directory, PathBuf::from("data"));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_toml_partial_sections_keep_defaults() {
        let toml_str = r#"
            [meta_keys]
            weapon = "UnlockWeapon"

            [logging]
            format = "json"
        "#;

        let config: EquipSkillConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
        assert_eq!(config.meta_keys.weapon, "UnlockWeapon");
        assert_eq!(config.meta_keys.armor, "UTA_ExpandEquipTypeAId");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("equipskill.toml");
        std::fs::write(
            &path,
            "[data]\ndirectory = \"/srv/game/data\"\n\n[logging]\nlevel = \"debug\"\n",
        )
        .expect("write config");

        let config = EquipSkillConfig::load_from(&path).expect("load config");
        assert_eq!(config.data.directory, PathBuf::from("/srv/game/data"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.meta_keys, MetaKeysConfig::default());
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(EquipSkillConfig::load_from(&dir.path().join("nope.toml")).is_err());
    }
}

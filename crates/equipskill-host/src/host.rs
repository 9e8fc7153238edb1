use crate::actor::EquipActor;
use crate::config::EquipSkillConfig;
use crate::eligibility::EquipRules;
use crate::plugin::ExpandEquipTypePlugin;
use anyhow::{Context, Result};
use equipskill_data::{loader::table_path, GameData};
use equipskill_types::{DataTable, EquipDomain, EquipItem};
use tracing::{debug, info};

/// Host engine side: owns game data, equip rules and the plugin
pub struct EquipSkillHost {
    config: EquipSkillConfig,
    plugin: ExpandEquipTypePlugin,
    rules: EquipRules,
    data: GameData,
}

impl EquipSkillHost {
    pub fn new(config: EquipSkillConfig) -> Self {
        let plugin = ExpandEquipTypePlugin::from_config(&config.meta_keys);
        let mut rules = EquipRules::new();
        plugin.register(&mut rules);

        Self {
            config,
            plugin,
            rules,
            data: GameData::default(),
        }
    }

    /// Initialise logging, then load game data
    pub fn start(config: EquipSkillConfig) -> Result<Self> {
        let format = equipskill_logging::format_from_name(&config.logging.format);
        if let Err(e) = equipskill_logging::init_logging(&config.logging.level, format) {
            // The embedding engine may own the subscriber already.
            debug!("Keeping existing log subscriber: {}", e);
        }

        let mut host = Self::new(config);
        host.load_data()?;
        Ok(host)
    }

    /// Reload every table from the configured directory, notifying the plugin
    /// after each one the way the engine's data manager does
    ///
    /// Nothing changes unless every table loads; on error the previous data
    /// and index stay in place.
    pub fn load_data(&mut self) -> Result<()> {
        let dir = self.config.data.directory.clone();
        info!("Loading game data from {:?}", dir);

        let tables = [
            DataTable::Skills,
            DataTable::Other("Weapons".to_string()),
            DataTable::Other("Armors".to_string()),
            DataTable::System,
        ];

        let mut data = GameData::default();
        let mut loaded = Vec::with_capacity(tables.len());
        for table in tables {
            let required = matches!(table, DataTable::Skills | DataTable::System);
            let present = table_path(&dir, &table).is_some_and(|path| path.is_file());
            if !required && !present {
                continue;
            }

            data
                .load_table(&dir, &table)
                .with_context(|| format!("Failed to load {:?} table", table))?;
            loaded.push(table);
        }

        self.data = data;
        self.plugin.begin_reload();
        for table in &loaded {
            self.plugin.on_data_loaded(table, &self.data);
        }

        Ok(())
    }

    pub fn can_equip(&self, actor: &dyn EquipActor, item: &EquipItem) -> bool {
        self.rules.can_equip(actor, item)
    }

    /// Weapon check by item id; unknown ids cannot be equipped
    pub fn can_equip_weapon(&self, actor: &dyn EquipActor, weapon_id: u32) -> bool {
        self.data
            .item(EquipDomain::Weapon, weapon_id)
            .is_some_and(|item| self.can_equip(actor, item))
    }

    /// Armor check by item id; unknown ids cannot be equipped
    pub fn can_equip_armor(&self, actor: &dyn EquipActor, armor_id: u32) -> bool {
        self.data
            .item(EquipDomain::Armor, armor_id)
            .is_some_and(|item| self.can_equip(actor, item))
    }

    pub fn config(&self) -> &EquipSkillConfig {
        &self.config
    }

    pub fn plugin(&self) -> &ExpandEquipTypePlugin {
        &self.plugin
    }

    pub fn rules(&self) -> &EquipRules {
        &self.rules
    }

    pub fn data(&self) -> &GameData {
        &self.data
    }
}

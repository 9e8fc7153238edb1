//! Skill-granted equip types, wired into the host's lifecycle

use crate::actor::EquipActor;
use crate::config::MetaKeysConfig;
use crate::eligibility::{EligibilityExtension, EquipRules};
use crate::tracker::DataLoadTracker;
use equipskill_data::GameData;
use equipskill_types::{DataTable, EquipDomain, EquipItem, LearnedSkills};
use equipskill_unlock::{UnlockFields, UnlockService};
use std::sync::Arc;
use tracing::{info, warn};

pub const PLUGIN_NAME: &str = "UTA_ExpandEquipTypeSkill";
pub const PLUGIN_VERSION: &str = "1.0.0";

/// Lets learned skills unlock extra weapon and armor types
pub struct ExpandEquipTypePlugin {
    service: Arc<UnlockService>,
    tracker: DataLoadTracker,
}

impl ExpandEquipTypePlugin {
    pub fn new(fields: UnlockFields) -> Self {
        Self {
            service: Arc::new(UnlockService::new(fields)),
            tracker: DataLoadTracker::new(),
        }
    }

    pub fn from_config(meta_keys: &MetaKeysConfig) -> Self {
        Self::new(UnlockFields::new(&meta_keys.weapon, &meta_keys.armor))
    }

    pub fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    pub fn version(&self) -> &'static str {
        PLUGIN_VERSION
    }

    pub fn service(&self) -> &Arc<UnlockService> {
        &self.service
    }

    /// Start a new load cycle; the next skills + system pair rebuilds again
    pub fn begin_reload(&mut self) {
        self.tracker.begin_cycle();
    }

    /// Host notification that `table` finished loading into `data`
    ///
    /// Returns `true` when this notification rebuilt the index.
    pub fn on_data_loaded(&mut self, table: &DataTable, data: &GameData) -> bool {
        if !self.tracker.observe(table) {
            return false;
        }

        match (&data.skills, &data.system) {
            (Some(skills), Some(system)) => {
                self.service.rebuild(skills, system);
                true
            }
            _ => {
                warn!(
                    ?table,
                    "Load notifications complete but skill or system table is absent"
                );
                // Let the next notification for this table complete the pair.
                self.tracker.retract(table);
                false
            }
        }
    }

    /// Install the unlock query as an eligibility extension
    pub fn register(&self, rules: &mut EquipRules) {
        rules.register(Arc::new(SkillUnlockExtension {
            service: Arc::clone(&self.service),
        }));
        info!("{} v{} registered", PLUGIN_NAME, PLUGIN_VERSION);
    }

    /// Does the actor know a skill unlocking this weapon's type
    pub fn has_unlock_for_weapon<A>(&self, actor: &A, item: &EquipItem) -> bool
    where
        A: LearnedSkills + ?Sized,
    {
        self.has_unlock(EquipDomain::Weapon, actor, item)
    }

    /// Does the actor know a skill unlocking this armor's type
    pub fn has_unlock_for_armor<A>(&self, actor: &A, item: &EquipItem) -> bool
    where
        A: LearnedSkills + ?Sized,
    {
        self.has_unlock(EquipDomain::Armor, actor, item)
    }

    fn has_unlock<A>(&self, domain: EquipDomain, actor: &A, item: &EquipItem) -> bool
    where
        A: LearnedSkills + ?Sized,
    {
        if item.domain != domain {
            warn!(
                item = item.id,
                "Failed to check skill: expected a {} item, got a {} item",
                domain,
                item.domain
            );
            return false;
        }
        self.service.is_unlocked_for(domain, item.type_id, actor)
    }
}

impl Default for ExpandEquipTypePlugin {
    fn default() -> Self {
        Self::new(UnlockFields::default())
    }
}

struct SkillUnlockExtension {
    service: Arc<UnlockService>,
}

impl EligibilityExtension for SkillUnlockExtension {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn allows(&self, actor: &dyn EquipActor, item: &EquipItem) -> bool {
        self.service.is_unlocked_for(item.domain, item.type_id, actor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::ActorProfile;
    use equipskill_types::{CapabilityError, SkillId, SkillRecord, SystemData};

    struct Statue;

    impl LearnedSkills for Statue {
        fn is_learned_skill(&self, id: SkillId) -> Result<bool, CapabilityError> {
            Err(CapabilityError::Lookup {
                skill: id,
                reason: "no skill list".into(),
            })
        }
    }

    fn game_data() -> GameData {
        GameData {
            skills: Some(vec![
                None,
                Some(SkillRecord::new(7).with_meta("UTA_ExpandEquipTypeWId", "2,4-5")),
                Some(SkillRecord::new(8).with_meta("UTA_ExpandEquipTypeAId", "1")),
            ]),
            system: Some(SystemData {
                weapon_types: vec![String::new(); 6],
                armor_types: vec![String::new(); 3],
                equip_types: vec![String::new(); 6],
            }),
            ..GameData::default()
        }
    }

    fn loaded_plugin() -> ExpandEquipTypePlugin {
        let mut plugin = ExpandEquipTypePlugin::default();
        let data = game_data();
        plugin.on_data_loaded(&DataTable::Skills, &data);
        plugin.on_data_loaded(&DataTable::System, &data);
        plugin
    }

    #[test]
    fn test_name_and_version() {
        let plugin = ExpandEquipTypePlugin::default();
        assert_eq!(plugin.name(), "UTA_ExpandEquipTypeSkill");
        assert_eq!(plugin.version(), "1.0.0");
    }

    #[test]
    fn test_rebuilds_once_per_cycle() {
        let mut plugin = ExpandEquipTypePlugin::default();
        let data = game_data();
        assert!(!plugin.on_data_loaded(&DataTable::Skills, &data));
        assert!(plugin.on_data_loaded(&DataTable::System, &data));
        assert!(!plugin.on_data_loaded(&DataTable::Skills, &data));
        assert_eq!(plugin.service().generation(), 1);

        plugin.begin_reload();
        assert!(!plugin.on_data_loaded(&DataTable::System, &data));
        assert!(plugin.on_data_loaded(&DataTable::Skills, &data));
        assert_eq!(plugin.service().generation(), 2);
    }

    #[test]
    fn test_missing_tables_do_not_rebuild() {
        let mut plugin = ExpandEquipTypePlugin::default();
        let data = GameData::default();
        plugin.on_data_loaded(&DataTable::Skills, &data);
        assert!(!plugin.on_data_loaded(&DataTable::System, &data));
        assert_eq!(plugin.service().generation(), 0);
    }

    #[test]
    fn test_table_arriving_after_its_notification_still_rebuilds() {
        let mut plugin = ExpandEquipTypePlugin::default();
        let mut data = game_data();
        data.system = None;

        assert!(!plugin.on_data_loaded(&DataTable::Skills, &data));
        assert!(!plugin.on_data_loaded(&DataTable::System, &data));
        assert_eq!(plugin.service().generation(), 0);

        data.system = game_data().system;
        assert!(plugin.on_data_loaded(&DataTable::System, &data));
        assert_eq!(plugin.service().generation(), 1);
    }

    #[test]
    fn test_weapon_and_armor_queries() {
        let plugin = loaded_plugin();
        let actor = ActorProfile::new("Priscilla").learn(7);

        assert!(plugin.has_unlock_for_weapon(&actor, &EquipItem::weapon(1, 4, 1)));
        assert!(!plugin.has_unlock_for_weapon(&actor, &EquipItem::weapon(2, 3, 1)));
        assert!(!plugin.has_unlock_for_weapon(&actor, &EquipItem::weapon(3, 99, 1)));
        assert!(!plugin.has_unlock_for_armor(&actor, &EquipItem::armor(1, 1, 2)));
        assert!(plugin.has_unlock_for_armor(&actor.clone().learn(8), &EquipItem::armor(1, 1, 2)));
    }

    #[test]
    fn test_wrong_item_kind_answers_false() {
        let plugin = loaded_plugin();
        let actor = ActorProfile::new("Priscilla").learn(7).learn(8);
        assert!(!plugin.has_unlock_for_weapon(&actor, &EquipItem::armor(1, 1, 2)));
        assert!(!plugin.has_unlock_for_armor(&actor, &EquipItem::weapon(1, 4, 1)));
    }

    #[test]
    fn test_capability_failure_answers_false() {
        let plugin = loaded_plugin();
        assert!(!plugin.has_unlock_for_weapon(&Statue, &EquipItem::weapon(1, 4, 1)));
    }

    #[test]
    fn test_registered_extension_composes_with_seal() {
        let plugin = loaded_plugin();
        let mut rules = EquipRules::new();
        plugin.register(&mut rules);

        let axe = EquipItem::weapon(1, 4, 1);
        let learner = ActorProfile::new("Harold").learn(7);
        assert!(rules.can_equip(&learner, &axe));
        assert!(!rules.can_equip(&learner.clone().seal(1), &axe));
        assert!(!rules.can_equip(&ActorProfile::new("Therese"), &axe));
    }
}

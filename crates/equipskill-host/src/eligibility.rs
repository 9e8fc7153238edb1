//! Equip eligibility with registered extensions
//!
//! `can_equip = (base type check || any extension) && !slot sealed`.
//! Extensions only widen the base rule; the seal always has the last word.

use crate::actor::EquipActor;
use equipskill_types::EquipItem;
use std::sync::Arc;
use tracing::debug;

/// Extra permission consulted when the actor's own type check fails
pub trait EligibilityExtension: Send + Sync {
    fn name(&self) -> &str;

    fn allows(&self, actor: &dyn EquipActor, item: &EquipItem) -> bool;
}

/// The host's equip predicate plus its registered extensions
#[derive(Default, Clone)]
pub struct EquipRules {
    extensions: Vec<Arc<dyn EligibilityExtension>>,
}

impl EquipRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an extension; registering the same name twice is a no-op
    pub fn register(&mut self, extension: Arc<dyn EligibilityExtension>) {
        if self.extensions.iter().any(|e| e.name() == extension.name()) {
            debug!("Eligibility extension already registered: {}", extension.name());
            return;
        }
        debug!("Registered eligibility extension: {}", extension.name());
        self.extensions.push(extension);
    }

    pub fn extension_names(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(|e| e.name())
    }

    pub fn can_equip(&self, actor: &dyn EquipActor, item: &EquipItem) -> bool {
        let permitted = actor.is_equip_type_ok(item.domain, item.type_id)
            || self.extensions.iter().any(|e| e.allows(actor, item));
        permitted && !actor.is_equip_slot_sealed(item.slot_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::ActorProfile;
    use equipskill_types::EquipDomain;

    struct AllowAll;

    impl EligibilityExtension for AllowAll {
        fn name(&self) -> &str {
            "allow-all"
        }

        fn allows(&self, _actor: &dyn EquipActor, _item: &EquipItem) -> bool {
            true
        }
    }

    #[test]
    fn test_base_rule_without_extensions() {
        let rules = EquipRules::new();
        let actor = ActorProfile::new("Reid").allow(EquipDomain::Weapon, 2);
        assert!(rules.can_equip(&actor, &EquipItem::weapon(1, 2, 1)));
        assert!(!rules.can_equip(&actor, &EquipItem::weapon(2, 4, 1)));
    }

    #[test]
    fn test_extension_widens_base_rule() {
        let mut rules = EquipRules::new();
        rules.register(Arc::new(AllowAll));
        let actor = ActorProfile::new("Reid");
        assert!(rules.can_equip(&actor, &EquipItem::armor(1, 3, 2)));
    }

    #[test]
    fn test_seal_overrides_everything() {
        let mut rules = EquipRules::new();
        rules.register(Arc::new(AllowAll));
        let actor = ActorProfile::new("Reid")
            .allow(EquipDomain::Weapon, 2)
            .seal(1);
        assert!(!rules.can_equip(&actor, &EquipItem::weapon(1, 2, 1)));
        assert!(rules.can_equip(&actor, &EquipItem::armor(1, 1, 2)));
    }

    #[test]
    fn test_duplicate_registration_ignored() {
        let mut rules = EquipRules::new();
        rules.register(Arc::new(AllowAll));
        rules.register(Arc::new(AllowAll));
        assert_eq!(rules.extension_names().count(), 1);
    }
}

//! Owned, swappable holder for the current unlock index

use crate::index::{EquipUnlockIndex, UnlockFields};
use equipskill_types::{EquipDomain, EquipTypeId, LearnedSkills, SkillId, SkillRecord, SystemData};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::info;

/// Unlock service holding the index for the currently loaded game data
///
/// Rebuilds construct a fresh index and swap it in whole, so a reader holding
/// a [`UnlockService::snapshot`] never sees a partially built table.
#[derive(Debug)]
pub struct UnlockService {
    fields: UnlockFields,
    index: RwLock<Arc<EquipUnlockIndex>>,
    generation: AtomicU64,
}

impl UnlockService {
    /// Create a service with an empty index
    pub fn new(fields: UnlockFields) -> Self {
        Self {
            fields,
            index: RwLock::new(Arc::new(EquipUnlockIndex::default())),
            generation: AtomicU64::new(0),
        }
    }

    /// Metadata keys this service reads
    pub fn fields(&self) -> &UnlockFields {
        &self.fields
    }

    /// Replace the index with one built from `skills` and the taxonomy in `system`
    pub fn rebuild(&self, skills: &[Option<SkillRecord>], system: &SystemData) {
        self.rebuild_with_counts(
            skills,
            system.category_count(EquipDomain::Weapon),
            system.category_count(EquipDomain::Armor),
        );
    }

    /// Replace the index using explicit category counts
    pub fn rebuild_with_counts(
        &self,
        skills: &[Option<SkillRecord>],
        weapon_count: usize,
        armor_count: usize,
    ) {
        let index = Arc::new(EquipUnlockIndex::build(
            skills,
            weapon_count,
            armor_count,
            &self.fields,
        ));

        *self.index.write().unwrap_or_else(PoisonError::into_inner) = index;
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;

        info!(
            generation,
            skills = skills.iter().flatten().count(),
            "Rebuilt equip unlock index"
        );
    }

    /// Current index
    pub fn snapshot(&self) -> Arc<EquipUnlockIndex> {
        Arc::clone(&self.index.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Number of rebuilds so far
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Query with a plain predicate over skill ids
    pub fn is_unlocked_by_learned_skill<F>(
        &self,
        domain: EquipDomain,
        category: EquipTypeId,
        has_learned: F,
    ) -> bool
    where
        F: FnMut(SkillId) -> bool,
    {
        self.snapshot()
            .is_unlocked_by_learned_skill(domain, category, has_learned)
    }

    /// Query against an actor's learned skills; never fails
    pub fn is_unlocked_for<A>(&self, domain: EquipDomain, category: EquipTypeId, actor: &A) -> bool
    where
        A: LearnedSkills + ?Sized,
    {
        self.snapshot().is_unlocked_for(domain, category, actor)
    }
}

impl Default for UnlockService {
    fn default() -> Self {
        Self::new(UnlockFields::default())
    }
}

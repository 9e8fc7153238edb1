use crate::SkillId;
use thiserror::Error;

/// Failure while asking an actor-like object about its skills
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    /// The object does not track learned skills at all
    #[error("actor '{actor}' does not track learned skills")]
    Unsupported {
        actor: String,
    },

    /// The lookup itself failed
    #[error("skill lookup failed for skill {skill}: {reason}")]
    Lookup {
        skill: SkillId,
        reason: String,
    },
}

/// Read access to the set of skills an actor has learned
pub trait LearnedSkills {
    fn is_learned_skill(&self, id: SkillId) -> Result<bool, CapabilityError>;
}

impl<T: LearnedSkills + ?Sized> LearnedSkills for &T {
    fn is_learned_skill(&self, id: SkillId) -> Result<bool, CapabilityError> {
        (**self).is_learned_skill(id)
    }
}

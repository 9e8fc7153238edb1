//! `EquipSkill` Unlock
//!
//! Lets learned skills widen the weapon and armor types an actor may equip.
//!
//! ## Pieces
//!
//! - [`notation`]: parses id lists such as `1,5,10-12` written into skill notes
//! - [`index`]: reverse index from equip-type id to the skills unlocking it
//! - [`service`]: owned holder that swaps in a fresh index on every data load
//!
//! Queries are total. A bad token, a stale category id or a failing actor
//! lookup all degrade to "this skill grants nothing".

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod error;
pub mod index;
pub mod notation;
pub mod service;

#[cfg(test)]
mod test_support;

pub use error::NotationError;
pub use index::{EquipUnlockIndex, UnlockFields};
pub use notation::{
    parse_id_list, parse_id_list_detailed, IdList, IdToken, ParseContext, ParsedIdList,
};
pub use service::UnlockService;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{EquipUnlockIndex, UnlockFields, UnlockService};
}

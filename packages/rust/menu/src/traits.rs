//! Host integration traits.
//!
//! The menu builder never talks to an engine directly. The host implements
//! these three traits and passes them in through [`ResolveContext`]; the
//! `battlemenu-data` crate provides implementations backed by the game's
//! JSON data files.

use battlemenu_shared::{ItemData, ItemId, SkillData, SkillId, SkillTypeId, Term};

/// Battler-side state the resolver consults.
pub trait Combatant {
    /// Whether the battler currently knows the skill (learned or granted).
    fn knows_skill(&self, id: SkillId) -> bool;

    /// Skill types available to the battler, in presentation order.
    fn skill_types(&self) -> Vec<SkillTypeId>;

    /// Whether the basic attack is currently usable.
    fn can_attack(&self) -> bool {
        true
    }

    /// Whether guarding is currently usable.
    fn can_guard(&self) -> bool {
        true
    }

    /// Whether a known skill is currently usable (costs, seals).
    fn can_use_skill(&self, id: SkillId) -> bool;

    /// Whether an owned item is currently usable by this battler.
    fn can_use_item(&self, id: ItemId) -> bool;
}

/// Party-side inventory state.
pub trait Inventory {
    /// Whether the party owns at least one of the item.
    fn has_item(&self, id: ItemId) -> bool;
}

/// Display data for skills, items, and command terms.
pub trait Catalog {
    /// Look up a skill record. `None` for ids outside the database.
    fn skill(&self, id: SkillId) -> Option<&SkillData>;

    /// Look up an item record. `None` for ids outside the database.
    fn item(&self, id: ItemId) -> Option<&ItemData>;

    /// Display name for a basic command (Attack/Guard/Items).
    fn term(&self, term: Term) -> String;

    /// Display name for a skill type. `None` for ids outside the list.
    fn skill_type_name(&self, id: SkillTypeId) -> Option<String>;
}

/// Borrowed bundle of the three host traits, passed through resolution.
#[derive(Clone, Copy)]
pub struct ResolveContext<'a> {
    pub combatant: &'a dyn Combatant,
    pub inventory: &'a dyn Inventory,
    pub catalog: &'a dyn Catalog,
}

//! Runtime battler and party views over the loaded database.
//!
//! These are the preview-side implementations of the menu traits. Usability
//! is preview semantics: a known skill counts as usable, since resource
//! costs and seals only exist in a live battle.

use std::collections::BTreeSet;

use battlemenu_menu::{Catalog, Combatant, Inventory};
use battlemenu_shared::{
    ActorId, BattleMenuError, ClassId, ItemId, Result, SkillId, SkillTypeId,
};

use crate::Database;

/// An actor resolved against its class, at a concrete level.
#[derive(Debug)]
pub struct GameActor<'a> {
    db: &'a Database,
    id: ActorId,
    class_id: ClassId,
    level: u32,
    /// Known skill ids, in class learning order, deduplicated.
    known: Vec<SkillId>,
}

impl<'a> GameActor<'a> {
    /// Resolve an actor at its initial level.
    pub fn new(db: &'a Database, id: ActorId) -> Result<Self> {
        let actor = db.actor(id).ok_or(BattleMenuError::UnknownActor { id })?;
        Self::at_level(db, id, actor.data.initial_level)
    }

    /// Resolve an actor at an explicit level.
    pub fn at_level(db: &'a Database, id: ActorId, level: u32) -> Result<Self> {
        let actor = db.actor(id).ok_or(BattleMenuError::UnknownActor { id })?;
        let class_id = actor.data.class_id;
        let class = db
            .class(class_id)
            .ok_or(BattleMenuError::UnknownClass { id: class_id })?;

        let mut known = Vec::new();
        for learning in &class.data.learnings {
            if learning.level <= level && !known.contains(&learning.skill_id) {
                known.push(learning.skill_id);
            }
        }

        Ok(Self {
            db,
            id,
            class_id,
            level,
            known,
        })
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn class_id(&self) -> ClassId {
        self.class_id
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn name(&self) -> &str {
        // Constructors guarantee the record exists.
        self.db
            .actor(self.id)
            .map(|a| a.data.name.as_str())
            .unwrap_or("")
    }

    /// Known skill ids in learning order.
    pub fn known_skills(&self) -> &[SkillId] {
        &self.known
    }
}

impl Combatant for GameActor<'_> {
    fn knows_skill(&self, id: SkillId) -> bool {
        self.known.contains(&id)
    }

    fn skill_types(&self) -> Vec<SkillTypeId> {
        // Distinct types of known skills, first-seen order, skipping the
        // typeless slot 0.
        let mut types = Vec::new();
        for id in &self.known {
            if let Some(skill) = self.db.skill(*id) {
                if skill.stype_id != 0 && !types.contains(&skill.stype_id) {
                    types.push(skill.stype_id);
                }
            }
        }
        types
    }

    fn can_use_skill(&self, id: SkillId) -> bool {
        self.knows_skill(id)
    }

    fn can_use_item(&self, _id: ItemId) -> bool {
        true
    }
}

/// The party inventory as an item-id set.
pub struct GameParty {
    items: BTreeSet<ItemId>,
}

impl GameParty {
    /// A party owning exactly the given items.
    pub fn with_items(items: impl IntoIterator<Item = ItemId>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// A party owning every item in the database. Designer-preview default.
    pub fn with_all_items(db: &Database) -> Self {
        Self {
            items: db.item_ids().collect(),
        }
    }
}

impl Inventory for GameParty {
    fn has_item(&self, id: ItemId) -> bool {
        self.items.contains(&id)
    }
}

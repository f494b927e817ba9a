//! In-memory trait implementations shared by this crate's tests.

use battlemenu_shared::{ItemData, ItemId, SkillData, SkillId, SkillTypeId, Term};

use crate::traits::{Catalog, Combatant, Inventory};

/// A battler with a fixed known-skill set.
pub(crate) struct FakeBattler {
    pub known: Vec<SkillId>,
    pub types: Vec<SkillTypeId>,
    /// Known skills that are currently unusable (e.g. sealed).
    pub sealed: Vec<SkillId>,
}

impl FakeBattler {
    pub fn new(known: &[SkillId], types: &[SkillTypeId]) -> Self {
        Self {
            known: known.to_vec(),
            types: types.to_vec(),
            sealed: Vec::new(),
        }
    }
}

impl Combatant for FakeBattler {
    fn knows_skill(&self, id: SkillId) -> bool {
        self.known.contains(&id)
    }

    fn skill_types(&self) -> Vec<SkillTypeId> {
        self.types.clone()
    }

    fn can_use_skill(&self, id: SkillId) -> bool {
        self.knows_skill(id) && !self.sealed.contains(&id)
    }

    fn can_use_item(&self, _id: ItemId) -> bool {
        true
    }
}

/// A party owning a fixed item set.
pub(crate) struct FakeParty {
    pub items: Vec<ItemId>,
}

impl Inventory for FakeParty {
    fn has_item(&self, id: ItemId) -> bool {
        self.items.contains(&id)
    }
}

/// A catalog with numbered skills/items and two skill types.
pub(crate) struct FakeCatalog;

impl Catalog for FakeCatalog {
    fn skill(&self, id: SkillId) -> Option<&SkillData> {
        FAKE_SKILLS.iter().find(|s| s.id == id)
    }

    fn item(&self, id: ItemId) -> Option<&ItemData> {
        FAKE_ITEMS.iter().find(|i| i.id == id)
    }

    fn term(&self, term: Term) -> String {
        match term {
            Term::Attack => "Attack".into(),
            Term::Guard => "Guard".into(),
            Term::Items => "Items".into(),
        }
    }

    fn skill_type_name(&self, id: SkillTypeId) -> Option<String> {
        match id {
            1 => Some("Magic".into()),
            2 => Some("Special".into()),
            _ => None,
        }
    }
}

static FAKE_SKILLS: std::sync::LazyLock<Vec<SkillData>> = std::sync::LazyLock::new(|| {
    [(3, "Fire", 1), (7, "Ice", 1), (9, "Thunder", 2), (12, "Cleave", 2)]
        .into_iter()
        .map(|(id, name, stype_id)| SkillData {
            id,
            name: name.into(),
            description: format!("{name} description"),
            stype_id,
        })
        .collect()
});

static FAKE_ITEMS: std::sync::LazyLock<Vec<ItemData>> = std::sync::LazyLock::new(|| {
    [(1, "Potion"), (2, "Ether"), (5, "Elixir")]
        .into_iter()
        .map(|(id, name)| ItemData {
            id,
            name: name.into(),
            description: format!("{name} description"),
        })
        .collect()
});

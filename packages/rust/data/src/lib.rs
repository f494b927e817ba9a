//! Game database loading and runtime battler/party views.
//!
//! Reads RPG Maker MV-style JSON data files (`Actors.json`, `Classes.json`,
//! `Skills.json`, `Items.json`, `System.json`). Record arrays carry a
//! leading `null` element; notes are scanned for their command block once at
//! load time. [`views`] provides [`GameActor`] and [`GameParty`], the
//! concrete implementations of the menu traits.

pub mod records;
pub mod views;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use battlemenu_menu::Catalog;
use battlemenu_notetags::extract_commands;
use battlemenu_shared::{
    ActorId, BattleMenuError, ClassId, ItemData, ItemId, Result, SkillData, SkillId, SkillTypeId,
    Term,
};

pub use records::{ActorData, ClassData, Learning, SystemData};
pub use views::{GameActor, GameParty};

/// An actor or class record paired with its extracted command lines.
#[derive(Debug, Clone)]
pub struct Noted<T> {
    pub data: T,
    /// Raw command lines from the record's `<Battle Commands>` block.
    pub command_lines: Vec<String>,
}

/// The loaded game database.
#[derive(Debug, Clone)]
pub struct Database {
    actors: BTreeMap<ActorId, Noted<ActorData>>,
    classes: BTreeMap<ClassId, Noted<ClassData>>,
    skills: BTreeMap<SkillId, SkillData>,
    items: BTreeMap<ItemId, ItemData>,
    system: SystemData,
}

impl Database {
    /// Load all five data files from a directory.
    #[instrument]
    pub fn load(dir: &Path) -> Result<Self> {
        let actors = load_table::<ActorData>(&dir.join("Actors.json"))?
            .into_iter()
            .map(|a| {
                let command_lines = extract_commands(&a.note);
                (a.id, Noted { data: a, command_lines })
            })
            .collect();

        let classes = load_table::<ClassData>(&dir.join("Classes.json"))?
            .into_iter()
            .map(|c| {
                let command_lines = extract_commands(&c.note);
                (c.id, Noted { data: c, command_lines })
            })
            .collect();

        let skills = load_table::<SkillData>(&dir.join("Skills.json"))?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        let items = load_table::<ItemData>(&dir.join("Items.json"))?
            .into_iter()
            .map(|i| (i.id, i))
            .collect();

        let system = load_object::<SystemData>(&dir.join("System.json"))?;

        let db = Self {
            actors,
            classes,
            skills,
            items,
            system,
        };
        debug!(
            actors = db.actors.len(),
            classes = db.classes.len(),
            skills = db.skills.len(),
            items = db.items.len(),
            "database loaded"
        );
        Ok(db)
    }

    pub fn actor(&self, id: ActorId) -> Option<&Noted<ActorData>> {
        self.actors.get(&id)
    }

    pub fn class(&self, id: ClassId) -> Option<&Noted<ClassData>> {
        self.classes.get(&id)
    }

    /// All actors in id order.
    pub fn actors(&self) -> impl Iterator<Item = &Noted<ActorData>> {
        self.actors.values()
    }

    /// All classes in id order.
    pub fn classes(&self) -> impl Iterator<Item = &Noted<ClassData>> {
        self.classes.values()
    }

    /// All item ids in id order.
    pub fn item_ids(&self) -> impl Iterator<Item = ItemId> {
        self.items.keys().copied()
    }

    pub fn system(&self) -> &SystemData {
        &self.system
    }

    /// Command lines of an actor's own block. Empty if none.
    pub fn actor_command_lines(&self, id: ActorId) -> &[String] {
        self.actors
            .get(&id)
            .map(|a| a.command_lines.as_slice())
            .unwrap_or(&[])
    }

    /// Command lines of a class's block. Empty if none.
    pub fn class_command_lines(&self, id: ClassId) -> &[String] {
        self.classes
            .get(&id)
            .map(|c| c.command_lines.as_slice())
            .unwrap_or(&[])
    }
}

impl Catalog for Database {
    fn skill(&self, id: SkillId) -> Option<&SkillData> {
        self.skills.get(&id)
    }

    fn item(&self, id: ItemId) -> Option<&ItemData> {
        self.items.get(&id)
    }

    fn term(&self, term: Term) -> String {
        self.system.term(term)
    }

    fn skill_type_name(&self, id: SkillTypeId) -> Option<String> {
        self.system.skill_type_name(id)
    }
}

// ---------------------------------------------------------------------------
// File loading
// ---------------------------------------------------------------------------

/// Load an MV record array, tolerating the leading `null` element.
fn load_table<T: DeserializeOwned>(path: &PathBuf) -> Result<Vec<T>> {
    let content = std::fs::read_to_string(path).map_err(|e| BattleMenuError::io(path, e))?;
    let records: Vec<Option<T>> = serde_json::from_str(&content).map_err(|e| {
        BattleMenuError::data(format!("failed to parse {}: {e}", path.display()))
    })?;
    Ok(records.into_iter().flatten().collect())
}

/// Load a single JSON object file.
fn load_object<T: DeserializeOwned>(path: &PathBuf) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|e| BattleMenuError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| {
        BattleMenuError::data(format!("failed to parse {}: {e}", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_db() -> Database {
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../../fixtures/data");
        Database::load(&dir).expect("load fixture database")
    }

    #[test]
    fn loads_all_tables() {
        let db = fixture_db();
        assert_eq!(db.actors().count(), 3);
        assert_eq!(db.classes().count(), 3);
        assert!(db.skill(3).is_some());
        assert!(db.item(1).is_some());
    }

    #[test]
    fn command_lines_extracted_at_load_time() {
        let db = fixture_db();
        // Class 1 carries a block with the actor placeholder.
        assert_eq!(
            db.class_command_lines(1),
            ["Attack", "ActorCmd", "Guard", "Items"]
        );
        // Actor 2 has no block.
        assert!(db.actor_command_lines(2).is_empty());
    }

    #[test]
    fn catalog_terms_come_from_system_data() {
        let db = fixture_db();
        assert_eq!(db.term(Term::Attack), "Attack");
        assert_eq!(db.term(Term::Guard), "Defend");
        assert_eq!(db.term(Term::Items), "Item");
    }

    #[test]
    fn skill_type_names_skip_the_empty_slot() {
        let db = fixture_db();
        assert_eq!(db.skill_type_name(1).as_deref(), Some("Magic"));
        assert_eq!(db.skill_type_name(2).as_deref(), Some("Special"));
        assert_eq!(db.skill_type_name(0), None);
        assert_eq!(db.skill_type_name(9), None);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("no-such-dir");
        let err = Database::load(&dir).unwrap_err();
        assert!(matches!(err, BattleMenuError::Io { .. }));
    }
}

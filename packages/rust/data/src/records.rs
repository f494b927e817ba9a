//! Serde models for the MV-style data files.
//!
//! Only the fields the menu layer needs are modelled; everything else in the
//! files is ignored. Field names follow the data-file spelling via
//! `serde(rename)`.

use serde::{Deserialize, Serialize};

use battlemenu_shared::{ActorId, ClassId, SkillId, SkillTypeId, Term};

/// An actor record from `Actors.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActorData {
    pub id: ActorId,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "classId")]
    pub class_id: ClassId,
    #[serde(default = "default_level", rename = "initialLevel")]
    pub initial_level: u32,
    #[serde(default)]
    pub note: String,
}

fn default_level() -> u32 {
    1
}

/// A class record from `Classes.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassData {
    pub id: ClassId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub learnings: Vec<Learning>,
}

/// One skill-learning entry of a class.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Learning {
    #[serde(default)]
    pub level: u32,
    #[serde(default, rename = "skillId")]
    pub skill_id: SkillId,
}

/// The parts of `System.json` the menu layer consumes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemData {
    /// Skill type names; index 0 is the unused empty slot.
    #[serde(default, rename = "skillTypes")]
    pub skill_types: Vec<String>,

    #[serde(default)]
    pub terms: Terms,
}

/// The `terms` object of `System.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Terms {
    /// Command names; the array carries `null` slots in real data files.
    /// Attack is index 2, guard index 3, item index 4.
    #[serde(default)]
    pub commands: Vec<Option<String>>,
}

impl SystemData {
    /// Display name for a basic command, with engine defaults when the
    /// terms table is missing or has a `null` slot.
    pub fn term(&self, term: Term) -> String {
        let (index, fallback) = match term {
            Term::Attack => (2, "Attack"),
            Term::Guard => (3, "Guard"),
            Term::Items => (4, "Items"),
        };
        self.terms
            .commands
            .get(index)
            .and_then(|slot| slot.clone())
            .unwrap_or_else(|| fallback.to_string())
    }

    /// Display name for a skill type. The empty slot at index 0 and blank
    /// names resolve to `None`.
    pub fn skill_type_name(&self, id: SkillTypeId) -> Option<String> {
        if id == 0 {
            return None;
        }
        self.skill_types
            .get(id as usize)
            .filter(|name| !name.is_empty())
            .cloned()
    }
}

//! Core domain types for battle command menus.

use serde::{Deserialize, Serialize};

/// Actor record identifier within `Actors.json`.
pub type ActorId = u32;
/// Class record identifier within `Classes.json`.
pub type ClassId = u32;
/// Skill record identifier within `Skills.json`.
pub type SkillId = u32;
/// Item record identifier within `Items.json`.
pub type ItemId = u32;
/// Skill-type index into the `skillTypes` list of `System.json`.
pub type SkillTypeId = u32;

// ---------------------------------------------------------------------------
// Menu entries
// ---------------------------------------------------------------------------

/// Action symbol dispatched when a menu entry is confirmed by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuAction {
    /// Queue a basic attack.
    Attack,
    /// Open a skill list window for the payload's skill types.
    SkillMenu,
    /// Queue a guard action.
    Guard,
    /// Open the party inventory window.
    ItemMenu,
    /// Queue the payload's skill directly, bypassing the skill window.
    UseSkill,
    /// Queue the payload's item directly, bypassing the inventory window.
    UseItem,
    /// Handler-defined action symbol for extension commands.
    Extension(String),
}

/// Opaque payload attached to a menu entry, consumed on confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuPayload {
    None,
    /// Skill types to show in the skill window.
    SkillTypes(Vec<SkillTypeId>),
    Skill(SkillId),
    Item(ItemId),
}

/// One row of the in-battle action menu.
///
/// A built menu is an ordered list of these; ordering is stable and
/// deterministic for a fixed command-line list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Display label.
    pub label: String,
    /// Action symbol the host dispatches on.
    pub action: MenuAction,
    /// Whether the entry is selectable.
    pub enabled: bool,
    /// Payload consumed when the entry is confirmed.
    pub payload: MenuPayload,
}

impl MenuEntry {
    /// Construct an entry with no payload.
    pub fn new(label: impl Into<String>, action: MenuAction, enabled: bool) -> Self {
        Self {
            label: label.into(),
            action,
            enabled,
            payload: MenuPayload::None,
        }
    }

    /// Attach a payload.
    pub fn with_payload(mut self, payload: MenuPayload) -> Self {
        self.payload = payload;
        self
    }
}

// ---------------------------------------------------------------------------
// Catalog records
// ---------------------------------------------------------------------------

/// A skill record from `Skills.json` (fields the menu layer needs).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillData {
    pub id: SkillId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Owning skill type (`stypeId` in the data file).
    #[serde(default, rename = "stypeId")]
    pub stype_id: SkillTypeId,
}

/// An item record from `Items.json` (fields the menu layer needs).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemData {
    pub id: ItemId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Display terms for the basic commands, sourced from `System.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    Attack,
    Guard,
    Items,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_entry_serialization() {
        let entry = MenuEntry::new("Fire", MenuAction::UseSkill, true)
            .with_payload(MenuPayload::Skill(7));

        let json = serde_json::to_string(&entry).expect("serialize");
        let parsed: MenuEntry = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, entry);
        assert_eq!(parsed.payload, MenuPayload::Skill(7));
    }

    #[test]
    fn skill_data_uses_mv_field_names() {
        let json = r#"{"id": 9, "name": "Heal", "description": "Restores HP.", "stypeId": 1}"#;
        let skill: SkillData = serde_json::from_str(json).expect("deserialize");
        assert_eq!(skill.stype_id, 1);
        assert_eq!(skill.name, "Heal");
    }

    #[test]
    fn skill_data_tolerates_missing_fields() {
        let skill: SkillData = serde_json::from_str(r#"{"id": 3}"#).expect("deserialize");
        assert_eq!(skill.name, "");
        assert_eq!(skill.stype_id, 0);
    }
}

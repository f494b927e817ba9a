//! The command-token grammar.
//!
//! One trimmed line of a command block maps to exactly one [`Command`].
//! Resolution priority is fixed: exact keyword, then templated keyword, then
//! the extension fallback. Parsing never fails — anything unrecognized
//! becomes [`Command::Extension`] and is offered to registered handlers at
//! menu-build time.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use battlemenu_shared::{ItemId, SkillId, SkillTypeId};

/// One parsed command token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Default attack command.
    Attack,
    /// One skill-menu command per skill type the battler has.
    Skills,
    /// Default guard command.
    Guard,
    /// Default inventory command.
    Items,
    /// Class-only placeholder: splice the actor's command list here.
    ActorList,
    /// A single skill entry, shown only if the battler knows the skill.
    Skill(SkillId),
    /// A single item entry, shown only if the party owns the item.
    Item(ItemId),
    /// First id in file order the battler knows.
    FirstSkill(Vec<SkillId>),
    /// Last id in file order the battler knows.
    LastSkill(Vec<SkillId>),
    /// First id in file order the party owns.
    FirstItem(Vec<ItemId>),
    /// Last id in file order the party owns.
    LastItem(Vec<ItemId>),
    /// A named skill-menu command restricted to the given skill types.
    SkillTypes {
        label: String,
        types: Vec<SkillTypeId>,
    },
    /// Unrecognized line, kept verbatim for extension handlers.
    Extension(String),
}

// ---------------------------------------------------------------------------
// Regex patterns (compiled once)
// ---------------------------------------------------------------------------

/// Matches `Skill:<id>`.
static SKILL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^skill:\s*(\d+)").expect("skill regex"));

/// Matches `Item:<id>`.
static ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^item:\s*(\d+)").expect("item regex"));

/// Matches `STypes(<label>):<ids>`.
static STYPES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^stypes\(([^)]+)\)\s*:\s*(.*)$").expect("stypes regex"));

/// Matches `FirstSkill:<ids>`. Existing note data uses both word orders,
/// so `skillfirst:` is accepted as an alias.
static FIRST_SKILL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:firstskill|skillfirst):\s*(.+)$").expect("firstskill regex")
});

/// Matches `LastSkill:<ids>` (and the `skilllast:` spelling).
static LAST_SKILL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:lastskill|skilllast):\s*(.+)$").expect("lastskill regex")
});

/// Matches `FirstItem:<ids>` (and the `itemfirst:` spelling).
static FIRST_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:firstitem|itemfirst):\s*(.+)$").expect("firstitem regex")
});

/// Matches `LastItem:<ids>` (and the `itemlast:` spelling).
static LAST_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:lastitem|itemlast):\s*(.+)$").expect("lastitem regex")
});

/// Decimal runs inside an id list. Separators are anything non-numeric.
static ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("id regex"));

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

impl Command {
    /// Parse one trimmed command line.
    pub fn parse(line: &str) -> Self {
        // Exact keywords first.
        if line.eq_ignore_ascii_case("attack") {
            return Self::Attack;
        }
        if line.eq_ignore_ascii_case("skills") {
            return Self::Skills;
        }
        if line.eq_ignore_ascii_case("guard") {
            return Self::Guard;
        }
        if line.eq_ignore_ascii_case("items") {
            return Self::Items;
        }
        if line.eq_ignore_ascii_case("actorcmd") {
            return Self::ActorList;
        }

        // Templated keywords.
        if let Some(caps) = SKILL_RE.captures(line) {
            if let Ok(id) = caps[1].parse() {
                return Self::Skill(id);
            }
        }
        if let Some(caps) = ITEM_RE.captures(line) {
            if let Ok(id) = caps[1].parse() {
                return Self::Item(id);
            }
        }
        if let Some(caps) = STYPES_RE.captures(line) {
            return Self::SkillTypes {
                label: caps[1].trim().to_string(),
                types: parse_id_list(&caps[2]),
            };
        }
        if let Some(caps) = FIRST_SKILL_RE.captures(line) {
            return Self::FirstSkill(parse_id_list(&caps[1]));
        }
        if let Some(caps) = LAST_SKILL_RE.captures(line) {
            return Self::LastSkill(parse_id_list(&caps[1]));
        }
        if let Some(caps) = FIRST_ITEM_RE.captures(line) {
            return Self::FirstItem(parse_id_list(&caps[1]));
        }
        if let Some(caps) = LAST_ITEM_RE.captures(line) {
            return Self::LastItem(parse_id_list(&caps[1]));
        }

        // Extension fallback: keep the raw line for handler dispatch.
        Self::Extension(line.to_string())
    }

    /// Whether this token is the class-only actor-list placeholder.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::ActorList)
    }
}

/// Collect every decimal run in an id-list tail, in file order.
fn parse_id_list(input: &str) -> Vec<u32> {
    ID_RE
        .find_iter(input)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

//! Built-in command resolution.
//!
//! Maps one parsed [`Command`] to zero or more menu entries against the
//! current battler/party state. Commands whose conditions fail (unknown
//! skill, item not owned, no surviving skill type) resolve to nothing —
//! never to an error.

use tracing::warn;

use battlemenu_notetags::Command;
use battlemenu_shared::{ItemId, MenuAction, MenuEntry, MenuPayload, SkillId, Term};

use crate::traits::ResolveContext;

/// Resolve one built-in command into menu entries.
///
/// [`Command::Extension`] lines are not handled here — the builder routes
/// them through its handler chain. A stray [`Command::ActorList`] (only
/// valid inside a class block) resolves to nothing.
pub fn resolve_builtin(cmd: &Command, ctx: &ResolveContext<'_>) -> Vec<MenuEntry> {
    match cmd {
        Command::Attack => vec![attack_entry(ctx)],
        Command::Guard => vec![guard_entry(ctx)],
        Command::Items => vec![items_entry(ctx)],
        Command::Skills => skill_type_entries(ctx),

        Command::Skill(id) => known_skill_entry(*id, ctx).into_iter().collect(),
        Command::Item(id) => owned_item_entry(*id, ctx).into_iter().collect(),

        Command::FirstSkill(ids) => ids
            .iter()
            .find(|id| ctx.combatant.knows_skill(**id))
            .and_then(|id| known_skill_entry(*id, ctx))
            .into_iter()
            .collect(),

        Command::LastSkill(ids) => ids
            .iter()
            .rev()
            .find(|id| ctx.combatant.knows_skill(**id))
            .and_then(|id| known_skill_entry(*id, ctx))
            .into_iter()
            .collect(),

        Command::FirstItem(ids) => ids
            .iter()
            .find(|id| ctx.inventory.has_item(**id))
            .and_then(|id| owned_item_entry(*id, ctx))
            .into_iter()
            .collect(),

        Command::LastItem(ids) => ids
            .iter()
            .rev()
            .find(|id| ctx.inventory.has_item(**id))
            .and_then(|id| owned_item_entry(*id, ctx))
            .into_iter()
            .collect(),

        Command::SkillTypes { label, types } => {
            let available = ctx.combatant.skill_types();
            let valid: Vec<_> = types
                .iter()
                .copied()
                .filter(|t| available.contains(t))
                .collect();
            if valid.is_empty() {
                return Vec::new();
            }
            vec![
                MenuEntry::new(label.clone(), MenuAction::SkillMenu, true)
                    .with_payload(MenuPayload::SkillTypes(valid)),
            ]
        }

        Command::ActorList | Command::Extension(_) => Vec::new(),
    }
}

/// The engine's built-in command list: attack, one command per skill type,
/// guard, items. Used when merge produces an empty list.
pub fn default_command_list(ctx: &ResolveContext<'_>) -> Vec<MenuEntry> {
    let mut entries = vec![attack_entry(ctx)];
    entries.extend(skill_type_entries(ctx));
    entries.push(guard_entry(ctx));
    entries.push(items_entry(ctx));
    entries
}

// ---------------------------------------------------------------------------
// Entry constructors
// ---------------------------------------------------------------------------

fn attack_entry(ctx: &ResolveContext<'_>) -> MenuEntry {
    MenuEntry::new(
        ctx.catalog.term(Term::Attack),
        MenuAction::Attack,
        ctx.combatant.can_attack(),
    )
}

fn guard_entry(ctx: &ResolveContext<'_>) -> MenuEntry {
    MenuEntry::new(
        ctx.catalog.term(Term::Guard),
        MenuAction::Guard,
        ctx.combatant.can_guard(),
    )
}

fn items_entry(ctx: &ResolveContext<'_>) -> MenuEntry {
    MenuEntry::new(ctx.catalog.term(Term::Items), MenuAction::ItemMenu, true)
}

/// One skill-menu entry per skill type the battler has, in battler order.
fn skill_type_entries(ctx: &ResolveContext<'_>) -> Vec<MenuEntry> {
    ctx.combatant
        .skill_types()
        .into_iter()
        .filter_map(|stype| {
            let Some(name) = ctx.catalog.skill_type_name(stype) else {
                warn!(stype, "skill type missing from system data, skipping");
                return None;
            };
            Some(
                MenuEntry::new(name, MenuAction::SkillMenu, true)
                    .with_payload(MenuPayload::SkillTypes(vec![stype])),
            )
        })
        .collect()
}

/// Entry for a specific skill, only if the battler knows it.
fn known_skill_entry(id: SkillId, ctx: &ResolveContext<'_>) -> Option<MenuEntry> {
    if !ctx.combatant.knows_skill(id) {
        return None;
    }
    let Some(skill) = ctx.catalog.skill(id) else {
        warn!(skill_id = id, "skill missing from database, skipping entry");
        return None;
    };
    Some(
        MenuEntry::new(
            skill.name.clone(),
            MenuAction::UseSkill,
            ctx.combatant.can_use_skill(id),
        )
        .with_payload(MenuPayload::Skill(id)),
    )
}

/// Entry for a specific item, only if the party owns it.
fn owned_item_entry(id: ItemId, ctx: &ResolveContext<'_>) -> Option<MenuEntry> {
    if !ctx.inventory.has_item(id) {
        return None;
    }
    let Some(item) = ctx.catalog.item(id) else {
        warn!(item_id = id, "item missing from database, skipping entry");
        return None;
    };
    Some(
        MenuEntry::new(
            item.name.clone(),
            MenuAction::UseItem,
            ctx.combatant.can_use_item(id),
        )
        .with_payload(MenuPayload::Item(id)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeBattler, FakeCatalog, FakeParty};

    fn ctx<'a>(
        battler: &'a FakeBattler,
        party: &'a FakeParty,
        catalog: &'a FakeCatalog,
    ) -> ResolveContext<'a> {
        ResolveContext {
            combatant: battler,
            inventory: party,
            catalog,
        }
    }

    #[test]
    fn first_skill_selects_first_known_in_file_order() {
        // Knows 7 and 9 but not 3: must pick 7, never 9.
        let battler = FakeBattler::new(&[7, 9], &[1]);
        let party = FakeParty { items: vec![] };
        let ctx = ctx(&battler, &party, &FakeCatalog);

        let entries = resolve_builtin(&Command::FirstSkill(vec![3, 7, 9]), &ctx);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "Ice");
        assert_eq!(entries[0].payload, MenuPayload::Skill(7));
    }

    #[test]
    fn last_skill_selects_last_known_in_file_order() {
        let battler = FakeBattler::new(&[3, 7], &[1]);
        let party = FakeParty { items: vec![] };
        let ctx = ctx(&battler, &party, &FakeCatalog);

        let entries = resolve_builtin(&Command::LastSkill(vec![3, 7, 9]), &ctx);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].payload, MenuPayload::Skill(7));
    }

    #[test]
    fn first_skill_with_no_known_id_yields_nothing() {
        let battler = FakeBattler::new(&[12], &[2]);
        let party = FakeParty { items: vec![] };
        let ctx = ctx(&battler, &party, &FakeCatalog);

        assert!(resolve_builtin(&Command::FirstSkill(vec![3, 7, 9]), &ctx).is_empty());
        assert!(resolve_builtin(&Command::LastSkill(vec![3, 7]), &ctx).is_empty());
    }

    #[test]
    fn first_and_last_item_scan_inventory() {
        let battler = FakeBattler::new(&[], &[]);
        let party = FakeParty { items: vec![2, 5] };
        let ctx = ctx(&battler, &party, &FakeCatalog);

        let first = resolve_builtin(&Command::FirstItem(vec![1, 2, 5]), &ctx);
        assert_eq!(first[0].label, "Ether");

        let last = resolve_builtin(&Command::LastItem(vec![1, 2, 5]), &ctx);
        assert_eq!(last[0].label, "Elixir");
        assert_eq!(last[0].action, MenuAction::UseItem);
    }

    #[test]
    fn specific_skill_requires_knowledge() {
        let battler = FakeBattler::new(&[3], &[1]);
        let party = FakeParty { items: vec![] };
        let ctx = ctx(&battler, &party, &FakeCatalog);

        let known = resolve_builtin(&Command::Skill(3), &ctx);
        assert_eq!(known[0].label, "Fire");
        assert!(known[0].enabled);

        assert!(resolve_builtin(&Command::Skill(9), &ctx).is_empty());
    }

    #[test]
    fn sealed_skill_is_listed_but_disabled() {
        let mut battler = FakeBattler::new(&[3], &[1]);
        battler.sealed.push(3);
        let party = FakeParty { items: vec![] };
        let ctx = ctx(&battler, &party, &FakeCatalog);

        let entries = resolve_builtin(&Command::Skill(3), &ctx);
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].enabled);
    }

    #[test]
    fn specific_item_requires_ownership() {
        let battler = FakeBattler::new(&[], &[]);
        let party = FakeParty { items: vec![1] };
        let ctx = ctx(&battler, &party, &FakeCatalog);

        assert_eq!(resolve_builtin(&Command::Item(1), &ctx).len(), 1);
        assert!(resolve_builtin(&Command::Item(2), &ctx).is_empty());
    }

    #[test]
    fn skills_expands_to_one_entry_per_type() {
        let battler = FakeBattler::new(&[3, 12], &[1, 2]);
        let party = FakeParty { items: vec![] };
        let ctx = ctx(&battler, &party, &FakeCatalog);

        let entries = resolve_builtin(&Command::Skills, &ctx);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, "Magic");
        assert_eq!(entries[0].payload, MenuPayload::SkillTypes(vec![1]));
        assert_eq!(entries[1].label, "Special");
    }

    #[test]
    fn stypes_filters_to_battler_types() {
        let battler = FakeBattler::new(&[3], &[1]);
        let party = FakeParty { items: vec![] };
        let ctx = ctx(&battler, &party, &FakeCatalog);

        let cmd = Command::SkillTypes {
            label: "Arts".into(),
            types: vec![1, 2],
        };
        let entries = resolve_builtin(&cmd, &ctx);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "Arts");
        assert_eq!(entries[0].payload, MenuPayload::SkillTypes(vec![1]));
    }

    #[test]
    fn stypes_with_no_valid_type_yields_nothing() {
        let battler = FakeBattler::new(&[], &[]);
        let party = FakeParty { items: vec![] };
        let ctx = ctx(&battler, &party, &FakeCatalog);

        let cmd = Command::SkillTypes {
            label: "Arts".into(),
            types: vec![1, 2],
        };
        assert!(resolve_builtin(&cmd, &ctx).is_empty());
    }

    #[test]
    fn missing_database_record_is_skipped_silently() {
        let battler = FakeBattler::new(&[99], &[1]);
        let party = FakeParty { items: vec![] };
        let ctx = ctx(&battler, &party, &FakeCatalog);

        // Battler "knows" skill 99 but the catalog has no such record.
        assert!(resolve_builtin(&Command::Skill(99), &ctx).is_empty());
    }

    #[test]
    fn default_list_shape() {
        let battler = FakeBattler::new(&[3], &[1]);
        let party = FakeParty { items: vec![] };
        let ctx = ctx(&battler, &party, &FakeCatalog);

        let entries = default_command_list(&ctx);
        let actions: Vec<_> = entries.iter().map(|e| &e.action).collect();
        assert_eq!(
            actions,
            vec![
                &MenuAction::Attack,
                &MenuAction::SkillMenu,
                &MenuAction::Guard,
                &MenuAction::ItemMenu,
            ]
        );
    }
}

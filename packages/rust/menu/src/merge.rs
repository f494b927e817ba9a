//! The class/actor command-list merge rule.
//!
//! A class block may contain the `ActorCmd` placeholder; the actor's own
//! command list is spliced into that position, keeping the actor's order.

use battlemenu_notetags::Command;

/// Merge a class's command list with an actor's command list.
///
/// - Placeholder present: actor commands replace the first placeholder in
///   their original order; any further placeholders are dropped.
/// - No placeholder, class list non-empty: actor list is ignored entirely.
/// - Class list empty: the actor list is used unless `force_default` is set,
///   in which case the result is empty (the builder then emits the engine
///   default list).
///
/// An empty merged list always means "use the engine default".
pub fn merge_commands(class: &[Command], actor: &[Command], force_default: bool) -> Vec<Command> {
    if class.is_empty() {
        return if force_default {
            Vec::new()
        } else {
            actor.to_vec()
        };
    }

    if !class.iter().any(Command::is_placeholder) {
        return class.to_vec();
    }

    let mut merged = Vec::with_capacity(class.len() + actor.len());
    let mut spliced = false;
    for cmd in class {
        if cmd.is_placeholder() {
            if !spliced {
                merged.extend_from_slice(actor);
                spliced = true;
            }
            continue;
        }
        merged.push(cmd.clone());
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmds(lines: &[&str]) -> Vec<Command> {
        lines.iter().map(|l| Command::parse(l)).collect()
    }

    #[test]
    fn splice_preserves_actor_order() {
        let class = cmds(&["Attack", "ActorCmd", "Guard"]);
        let actor = cmds(&["Skill:3", "Skill:7", "Items"]);

        let merged = merge_commands(&class, &actor, true);
        assert_eq!(
            merged,
            cmds(&["Attack", "Skill:3", "Skill:7", "Items", "Guard"])
        );
    }

    #[test]
    fn splice_with_empty_actor_list_just_removes_placeholder() {
        let class = cmds(&["Attack", "ActorCmd", "Guard"]);
        let merged = merge_commands(&class, &[], true);
        assert_eq!(merged, cmds(&["Attack", "Guard"]));
    }

    #[test]
    fn extra_placeholders_are_dropped() {
        let class = cmds(&["ActorCmd", "Attack", "ActorCmd"]);
        let actor = cmds(&["Guard"]);
        let merged = merge_commands(&class, &actor, true);
        assert_eq!(merged, cmds(&["Guard", "Attack"]));
    }

    #[test]
    fn class_without_placeholder_ignores_actor() {
        let class = cmds(&["Attack", "Guard"]);
        let actor = cmds(&["Skill:3"]);
        assert_eq!(merge_commands(&class, &actor, false), class);
    }

    #[test]
    fn empty_class_falls_back_to_actor_when_not_forced() {
        let actor = cmds(&["Attack", "Skill:3"]);
        assert_eq!(merge_commands(&[], &actor, false), actor);
    }

    #[test]
    fn empty_class_forced_default_is_empty() {
        let actor = cmds(&["Attack", "Skill:3"]);
        assert!(merge_commands(&[], &actor, true).is_empty());
    }

    #[test]
    fn both_empty_is_empty() {
        assert!(merge_commands(&[], &[], false).is_empty());
        assert!(merge_commands(&[], &[], true).is_empty());
    }
}

//! The menu builder.
//!
//! Ties the stages together: parse raw command lines, merge class and actor
//! lists, resolve each command against the battler/party state, and route
//! unrecognized lines through the extension handler chain.

use tracing::debug;

use battlemenu_notetags::Command;
use battlemenu_shared::MenuEntry;

use crate::handlers::{self, CommandHandler};
use crate::merge::merge_commands;
use crate::resolve::{default_command_list, resolve_builtin};
use crate::traits::ResolveContext;

/// Builds battle command menus from class/actor command-line lists.
///
/// Menus are rebuilt on every call; the builder holds only configuration
/// and the handler chain, never per-battle state.
pub struct MenuBuilder {
    force_default: bool,
    handlers: Vec<Box<dyn CommandHandler>>,
}

impl MenuBuilder {
    /// Create a builder. `force_default` mirrors the Force Default Commands
    /// parameter: when a class has no command block, `true` uses the engine
    /// default list and `false` falls back to the actor's block.
    pub fn new(force_default: bool) -> Self {
        Self {
            force_default,
            handlers: Vec::new(),
        }
    }

    /// Append an extension handler. Handlers are consulted in registration
    /// order; the first to claim a line wins.
    pub fn with_handler(mut self, handler: Box<dyn CommandHandler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Registered handler names, in order.
    pub fn handler_names(&self) -> Vec<&str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    /// Build the menu for one battler from raw command lines.
    ///
    /// The result is deterministic for a fixed pair of line lists and a
    /// fixed battler/party state.
    pub fn build(
        &self,
        class_lines: &[String],
        actor_lines: &[String],
        ctx: &ResolveContext<'_>,
    ) -> Vec<MenuEntry> {
        let class: Vec<Command> = class_lines.iter().map(|l| Command::parse(l)).collect();
        let actor: Vec<Command> = actor_lines.iter().map(|l| Command::parse(l)).collect();

        let merged = merge_commands(&class, &actor, self.force_default);
        if merged.is_empty() {
            debug!("no configured commands, using engine default list");
            return default_command_list(ctx);
        }

        let mut entries = Vec::new();
        for cmd in &merged {
            match cmd {
                Command::Extension(raw) => {
                    match handlers::dispatch(&self.handlers, raw, ctx) {
                        Some(mut claimed) => entries.append(&mut claimed),
                        // Unclaimed lines produce no entry and no error.
                        None => debug!(line = raw.as_str(), "unrecognized command, skipping"),
                    }
                }
                _ => entries.extend(resolve_builtin(cmd, ctx)),
            }
        }
        entries
    }
}

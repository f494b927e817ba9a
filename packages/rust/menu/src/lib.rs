//! Battle command menu construction.
//!
//! This crate provides:
//! - [`traits`] — the host integration surface ([`Combatant`], [`Inventory`],
//!   [`Catalog`])
//! - [`resolve`] — built-in command resolution rules
//! - [`merge`] — the class/actor command-list merge rule
//! - [`handlers`] — the extension handler trait and chain dispatch
//! - [`MenuBuilder`] — parse, merge, and resolve in one pass

pub mod builder;
pub mod handlers;
pub mod merge;
pub mod resolve;
pub mod traits;

#[cfg(test)]
mod testing;

pub use builder::MenuBuilder;
pub use handlers::CommandHandler;
pub use merge::merge_commands;
pub use resolve::{default_command_list, resolve_builtin};
pub use traits::{Catalog, Combatant, Inventory, ResolveContext};

//! Pipeline glue for battlemenu.
//!
//! Ties the database, the menu builder, and the config together into
//! end-to-end operations: building an actor's menu ([`pipeline`]), help
//! panel support ([`help`]), and notetag linting ([`lint`]).

pub mod help;
pub mod lint;
pub mod pipeline;

pub use help::{WindowRect, help_text, place_help_window};
pub use lint::{LintFinding, LintIssue, RecordRef, check_database};
pub use pipeline::{ActorMenu, build_actor_menu, build_actor_menu_at, build_all_menus};

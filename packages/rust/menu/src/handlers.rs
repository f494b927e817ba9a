//! Extension command handlers.
//!
//! Lines the grammar does not recognize are offered to registered handlers
//! in registration order; the first handler to claim a line wins. Handlers
//! are plain trait objects injected into the builder — there is no global
//! registry.

use battlemenu_shared::MenuEntry;

use crate::traits::ResolveContext;

/// A third-party command resolver for unrecognized command lines.
pub trait CommandHandler: Send + Sync {
    /// Handler name, used for tracing and by the lint pass to match
    /// command lines of the form `<name>:...` or `<name>`.
    fn name(&self) -> &str;

    /// Try to resolve a raw command line.
    ///
    /// Return `None` to pass the line to the next handler; `Some` claims
    /// the line, even with an empty entry list.
    fn resolve(&self, raw: &str, ctx: &ResolveContext<'_>) -> Option<Vec<MenuEntry>>;
}

/// Run a line through a handler chain. `None` if no handler claims it.
pub(crate) fn dispatch(
    handlers: &[Box<dyn CommandHandler>],
    raw: &str,
    ctx: &ResolveContext<'_>,
) -> Option<Vec<MenuEntry>> {
    for handler in handlers {
        if let Some(entries) = handler.resolve(raw, ctx) {
            tracing::debug!(handler = handler.name(), line = raw, "handler claimed command");
            return Some(entries);
        }
    }
    None
}

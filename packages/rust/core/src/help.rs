//! Help panel support.
//!
//! The battle UI shows a description panel while a direct skill/item entry
//! is highlighted. [`help_text`] picks the description; [`place_help_window`]
//! computes the panel geometry from the `[help]` config.

use battlemenu_menu::Catalog;
use battlemenu_shared::{HelpConfig, HelpPosition, MenuEntry, MenuPayload};

/// A window rectangle in host pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Description text for the highlighted entry.
///
/// Only direct skill/item entries carry help text; for every other entry
/// the panel should be hidden.
pub fn help_text(entry: &MenuEntry, catalog: &dyn Catalog) -> Option<String> {
    match &entry.payload {
        MenuPayload::Skill(id) => catalog.skill(*id).map(|s| s.description.clone()),
        MenuPayload::Item(id) => catalog.item(*id).map(|i| i.description.clone()),
        MenuPayload::None | MenuPayload::SkillTypes(_) => None,
    }
}

/// Compute where the help panel goes.
///
/// - `above-status`: pinned to x = 0, directly above the status window.
/// - `custom`: each nonzero `[help]` coordinate overrides the current one.
/// - `global-default`: `None` — the host keeps its own placement.
pub fn place_help_window(
    config: &HelpConfig,
    help: WindowRect,
    status: WindowRect,
) -> Option<WindowRect> {
    match config.position {
        HelpPosition::AboveStatus => Some(WindowRect {
            x: 0,
            y: status.y - help.height as i32,
            width: help.width,
            height: help.height,
        }),
        HelpPosition::Custom => Some(WindowRect {
            x: if config.x != 0 { config.x as i32 } else { help.x },
            y: if config.y != 0 { config.y as i32 } else { help.y },
            width: if config.width != 0 {
                config.width
            } else {
                help.width
            },
            height: if config.height != 0 {
                config.height
            } else {
                help.height
            },
        }),
        HelpPosition::GlobalDefault => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battlemenu_data::{Database, GameParty};
    use battlemenu_menu::MenuBuilder;
    use battlemenu_shared::MenuAction;

    fn fixture_db() -> Database {
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../../fixtures/data");
        Database::load(&dir).expect("load fixture database")
    }

    #[test]
    fn direct_entries_surface_descriptions() {
        let db = fixture_db();
        let party = GameParty::with_all_items(&db);
        let menu = crate::pipeline::build_actor_menu(&db, &party, 1, &MenuBuilder::new(true))
            .expect("menu");

        // Entry 1 is the spliced Heal skill, entry 2 the Potion item.
        assert_eq!(
            help_text(&menu.entries[1], &db).as_deref(),
            Some("Restores HP to one ally.")
        );
        assert_eq!(
            help_text(&menu.entries[2], &db).as_deref(),
            Some("Restores 500 HP to one ally.")
        );
        // Basic commands hide the panel.
        assert_eq!(menu.entries[0].action, MenuAction::Attack);
        assert!(help_text(&menu.entries[0], &db).is_none());
    }

    #[test]
    fn above_status_pins_panel_over_status_window() {
        let config = HelpConfig::default();
        let help = WindowRect {
            x: 10,
            y: 0,
            width: 816,
            height: 108,
        };
        let status = WindowRect {
            x: 0,
            y: 444,
            width: 816,
            height: 180,
        };

        let placed = place_help_window(&config, help, status).expect("placement");
        assert_eq!(placed.x, 0);
        assert_eq!(placed.y, 336);
        assert_eq!(placed.width, 816);
        assert_eq!(placed.height, 108);
    }

    #[test]
    fn custom_overrides_only_nonzero_fields() {
        let config = HelpConfig {
            position: HelpPosition::Custom,
            x: 24,
            height: 96,
            ..HelpConfig::default()
        };
        let help = WindowRect {
            x: 0,
            y: 50,
            width: 816,
            height: 108,
        };
        let status = WindowRect {
            x: 0,
            y: 444,
            width: 816,
            height: 180,
        };

        let placed = place_help_window(&config, help, status).expect("placement");
        assert_eq!(placed.x, 24);
        assert_eq!(placed.y, 50);
        assert_eq!(placed.width, 816);
        assert_eq!(placed.height, 96);
    }

    #[test]
    fn global_default_leaves_placement_alone() {
        let config = HelpConfig {
            position: HelpPosition::GlobalDefault,
            ..HelpConfig::default()
        };
        let rect = WindowRect {
            x: 0,
            y: 0,
            width: 816,
            height: 108,
        };
        assert!(place_help_window(&config, rect, rect).is_none());
    }
}

//! Menu-building pipeline: database + config → resolved actor menus.

use tracing::{debug, instrument};

use battlemenu_data::{Database, GameActor, GameParty};
use battlemenu_menu::{MenuBuilder, ResolveContext};
use battlemenu_shared::{ActorId, MenuEntry, Result};

/// A fully resolved battle command menu for one actor.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ActorMenu {
    pub actor_id: ActorId,
    pub actor_name: String,
    pub entries: Vec<MenuEntry>,
}

/// Build the battle command menu for one actor at its initial level.
pub fn build_actor_menu(
    db: &Database,
    party: &GameParty,
    actor_id: ActorId,
    builder: &MenuBuilder,
) -> Result<ActorMenu> {
    build_actor_menu_at(db, party, actor_id, None, builder)
}

/// Build the menu for one actor, optionally overriding its level.
#[instrument(skip(db, party, builder))]
pub fn build_actor_menu_at(
    db: &Database,
    party: &GameParty,
    actor_id: ActorId,
    level: Option<u32>,
    builder: &MenuBuilder,
) -> Result<ActorMenu> {
    let actor = match level {
        Some(level) => GameActor::at_level(db, actor_id, level)?,
        None => GameActor::new(db, actor_id)?,
    };

    let class_lines = db.class_command_lines(actor.class_id());
    let actor_lines = db.actor_command_lines(actor_id);

    let ctx = ResolveContext {
        combatant: &actor,
        inventory: party,
        catalog: db,
    };
    let entries = builder.build(class_lines, actor_lines, &ctx);

    debug!(
        actor_id,
        actor = actor.name(),
        entry_count = entries.len(),
        "menu built"
    );

    Ok(ActorMenu {
        actor_id,
        actor_name: actor.name().to_string(),
        entries,
    })
}

/// Build menus for every actor in the database, in id order.
#[instrument(skip_all)]
pub fn build_all_menus(
    db: &Database,
    party: &GameParty,
    builder: &MenuBuilder,
) -> Result<Vec<ActorMenu>> {
    db.actors()
        .map(|a| build_actor_menu(db, party, a.data.id, builder))
        .collect()
}
